use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use crate::entities::{tweet_like, tweet_like::Entity as TweetLike};

pub struct LikeRepository;

impl LikeRepository {
    /// Insert-or-ignore against the unique `(tweet_id, user_name)` pair.
    /// `None` means the user already liked the tweet. Races between
    /// concurrent likes are settled by the unique constraint, not by us.
    pub async fn like(
        db: &DatabaseConnection,
        user_name: &str,
        tweet_id: i32,
    ) -> Result<Option<i32>, DbErr> {
        tracing::debug!(user_name, tweet_id, "inserting like");
        let like = tweet_like::ActiveModel {
            id: NotSet,
            tweet_id: Set(tweet_id),
            user_name: Set(user_name.to_owned()),
        };
        let inserted = TweetLike::insert(like)
            .on_conflict(
                OnConflict::columns([tweet_like::Column::TweetId, tweet_like::Column::UserName])
                    .do_nothing()
                    .to_owned(),
            )
            .exec(db)
            .await;
        match inserted {
            Ok(res) => Ok(Some(res.last_insert_id)),
            Err(DbErr::RecordNotInserted) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// `None` means the user had not liked the tweet.
    pub async fn unlike(
        db: &DatabaseConnection,
        user_name: &str,
        tweet_id: i32,
    ) -> Result<Option<i32>, DbErr> {
        tracing::debug!(user_name, tweet_id, "deleting like");
        let existing = TweetLike::find()
            .filter(tweet_like::Column::TweetId.eq(tweet_id))
            .filter(tweet_like::Column::UserName.eq(user_name))
            .one(db)
            .await?;
        let Some(existing) = existing else {
            return Ok(None);
        };
        TweetLike::delete_by_id(existing.id).exec(db).await?;
        Ok(Some(existing.id))
    }

    pub async fn total(db: &DatabaseConnection) -> Result<u64, DbErr> {
        TweetLike::find().count(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn like_reports_absent_on_duplicate_pair() {
        // Conflicting insert returns no row, which sea-orm surfaces as
        // RecordNotInserted; the repository maps it to "already liked".
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<tweet_like::Model>::new()])
            .into_connection();

        assert_eq!(LikeRepository::like(&db, "Alex", 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn unlike_reports_absent_when_like_is_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<tweet_like::Model>::new()])
            .into_connection();

        assert_eq!(LikeRepository::unlike(&db, "Alex", 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn unlike_removes_the_existing_like() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![tweet_like::Model {
                id: 9,
                tweet_id: 1,
                user_name: "Alex".to_owned(),
            }]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        assert_eq!(LikeRepository::unlike(&db, "Alex", 1).await.unwrap(), Some(9));
    }

    #[tokio::test]
    async fn total_counts_like_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([(
                "num_items",
                sea_orm::Value::from(8i64),
            )])]])
            .into_connection();

        assert_eq!(LikeRepository::total(&db).await.unwrap(), 8);
    }
}
