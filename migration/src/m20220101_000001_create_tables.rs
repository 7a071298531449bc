use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        // 2. Followers edge table, composite PK = at most one edge per pair
        manager
            .create_table(
                Table::create()
                    .table(Followers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Followers::FollowerId).integer().not_null())
                    .col(ColumnDef::new(Followers::FollowedId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(Followers::FollowerId)
                            .col(Followers::FollowedId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_followers_follower_id")
                            .from(Followers::Table, Followers::FollowerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_followers_followed_id")
                            .from(Followers::Table, Followers::FollowedId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. Tweets. The media id array is a denormalized reference, no FK.
        manager
            .create_table(
                Table::create()
                    .table(Tweets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tweets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tweets::AuthorName).string().not_null())
                    .col(ColumnDef::new(Tweets::TweetData).text().not_null())
                    .col(
                        ColumnDef::new(Tweets::TweetMediaIds)
                            .array(ColumnType::Integer)
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tweets_author_name")
                            .from(Tweets::Table, Tweets::AuthorName)
                            .to(Users::Table, Users::Name)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 4. Tweet likes
        manager
            .create_table(
                Table::create()
                    .table(TweetsLikes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TweetsLikes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TweetsLikes::TweetId).integer().not_null())
                    .col(ColumnDef::new(TweetsLikes::UserName).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tweets_likes_tweet_id")
                            .from(TweetsLikes::Table, TweetsLikes::TweetId)
                            .to(Tweets::Table, Tweets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tweets_likes_user_name")
                            .from(TweetsLikes::Table, TweetsLikes::UserName)
                            .to(Users::Table, Users::Name)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("unique_tweet_like")
                    .table(TweetsLikes::Table)
                    .col(TweetsLikes::TweetId)
                    .col(TweetsLikes::UserName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 5. Media files
        manager
            .create_table(
                Table::create()
                    .table(MediaFiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MediaFiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MediaFiles::FileName).string().not_null())
                    .col(ColumnDef::new(MediaFiles::UserName).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_files_user_name")
                            .from(MediaFiles::Table, MediaFiles::UserName)
                            .to(Users::Table, Users::Name)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaFiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TweetsLikes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tweets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Followers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Followers {
    Table,
    FollowerId,
    FollowedId,
}

#[derive(Iden)]
enum Tweets {
    Table,
    Id,
    AuthorName,
    TweetData,
    TweetMediaIds,
}

#[derive(Iden)]
enum TweetsLikes {
    Table,
    Id,
    TweetId,
    UserName,
}

#[derive(Iden)]
enum MediaFiles {
    Table,
    Id,
    FileName,
    UserName,
}
