use sea_orm::*;
use std::collections::HashMap;

use crate::entities::{tweet, tweet::Entity as Tweet, tweet_like, user};

/// Who liked a tweet, flattened for the feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeDetails {
    pub user_id: i32,
    pub user_name: String,
}

/// A tweet with its author and like details eagerly attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TweetWithDetails {
    pub tweet: tweet::Model,
    pub author: user::Model,
    pub likes: Vec<LikeDetails>,
}

pub struct TweetRepository;

impl TweetRepository {
    /// Unconditional insert. Media ids are stored as given, without checking
    /// that they exist or belong to the author.
    pub async fn add(
        db: &DatabaseConnection,
        author_name: &str,
        tweet_data: String,
        tweet_media_ids: Option<Vec<i32>>,
    ) -> Result<i32, DbErr> {
        tracing::debug!(author_name, "inserting tweet");
        let saved = tweet::ActiveModel {
            id: NotSet,
            author_name: Set(author_name.to_owned()),
            tweet_data: Set(tweet_data),
            tweet_media_ids: Set(tweet_media_ids),
        }
        .insert(db)
        .await?;
        Ok(saved.id)
    }

    /// Delete scoped by `id AND author_name`; that conjunction is the entire
    /// ownership check. `None` covers both "not found" and "not yours" and
    /// callers cannot tell the two apart.
    pub async fn delete(
        db: &DatabaseConnection,
        author_name: &str,
        tweet_id: i32,
    ) -> Result<Option<(String, Vec<i32>)>, DbErr> {
        tracing::debug!(author_name, tweet_id, "deleting tweet");
        let found = Tweet::find()
            .filter(tweet::Column::Id.eq(tweet_id))
            .filter(tweet::Column::AuthorName.eq(author_name))
            .one(db)
            .await?;
        let Some(found) = found else {
            return Ok(None);
        };

        let deleted = Tweet::delete_many()
            .filter(tweet::Column::Id.eq(tweet_id))
            .filter(tweet::Column::AuthorName.eq(author_name))
            .exec(db)
            .await?;
        if deleted.rows_affected == 0 {
            return Ok(None);
        }
        Ok(Some((
            found.tweet_data,
            found.tweet_media_ids.unwrap_or_default(),
        )))
    }

    pub async fn total(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Tweet::find().count(db).await
    }

    /// All tweets ranked by like count descending. Ties break on tweet id
    /// ascending so the ordering is deterministic.
    pub async fn all_sorted_by_likes(
        db: &DatabaseConnection,
    ) -> Result<Vec<TweetWithDetails>, DbErr> {
        tracing::debug!("fetching all tweets sorted by likes");
        let tweets = Tweet::find()
            .left_join(tweet_like::Entity)
            .group_by(tweet::Column::Id)
            .order_by(tweet_like::Column::Id.count(), Order::Desc)
            .order_by_asc(tweet::Column::Id)
            .all(db)
            .await?;
        if tweets.is_empty() {
            return Ok(Vec::new());
        }

        let tweet_ids: Vec<i32> = tweets.iter().map(|t| t.id).collect();
        let like_rows = tweet_like::Entity::find()
            .filter(tweet_like::Column::TweetId.is_in(tweet_ids))
            .find_also_related(user::Entity)
            .all(db)
            .await?;

        let mut author_names: Vec<String> =
            tweets.iter().map(|t| t.author_name.clone()).collect();
        author_names.sort_unstable();
        author_names.dedup();
        let authors = user::Entity::find()
            .filter(user::Column::Name.is_in(author_names))
            .all(db)
            .await?;

        assemble_details(tweets, like_rows, authors)
    }
}

/// Stitch the three result sets together, preserving the ranked tweet order.
fn assemble_details(
    tweets: Vec<tweet::Model>,
    like_rows: Vec<(tweet_like::Model, Option<user::Model>)>,
    authors: Vec<user::Model>,
) -> Result<Vec<TweetWithDetails>, DbErr> {
    let authors_by_name: HashMap<String, user::Model> =
        authors.into_iter().map(|u| (u.name.clone(), u)).collect();

    let mut likes_by_tweet: HashMap<i32, Vec<LikeDetails>> = HashMap::new();
    for (like, liker) in like_rows {
        // The user FK guarantees a liker row; a missing one is corrupt data.
        let liker = liker.ok_or_else(|| {
            DbErr::RecordNotFound(format!("user row for like {} is missing", like.id))
        })?;
        likes_by_tweet
            .entry(like.tweet_id)
            .or_default()
            .push(LikeDetails {
                user_id: liker.id,
                user_name: liker.name,
            });
    }

    tweets
        .into_iter()
        .map(|tweet| {
            let author = authors_by_name
                .get(&tweet.author_name)
                .cloned()
                .ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "author row for tweet {} is missing",
                        tweet.id
                    ))
                })?;
            let likes = likes_by_tweet.remove(&tweet.id).unwrap_or_default();
            Ok(TweetWithDetails {
                tweet,
                author,
                likes,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn tweet_row(id: i32, author: &str, text: &str) -> tweet::Model {
        tweet::Model {
            id,
            author_name: author.to_owned(),
            tweet_data: text.to_owned(),
            tweet_media_ids: None,
        }
    }

    fn user_row(id: i32, name: &str) -> user::Model {
        user::Model {
            id,
            name: name.to_owned(),
        }
    }

    fn like_row(id: i32, tweet_id: i32, user: &user::Model) -> (tweet_like::Model, Option<user::Model>) {
        (
            tweet_like::Model {
                id,
                tweet_id,
                user_name: user.name.clone(),
            },
            Some(user.clone()),
        )
    }

    #[test]
    fn assemble_preserves_ranked_order_and_groups_likes() {
        let alex = user_row(1, "Alex");
        let petr = user_row(2, "Petr");
        let tweets = vec![
            tweet_row(3, "Alex", "popular"),
            tweet_row(1, "Petr", "quiet"),
        ];
        let likes = vec![like_row(10, 3, &petr), like_row(11, 3, &alex)];

        let details =
            assemble_details(tweets, likes, vec![alex.clone(), petr.clone()]).unwrap();

        assert_eq!(details.len(), 2);
        assert_eq!(details[0].tweet.id, 3);
        assert_eq!(details[0].author, alex);
        assert_eq!(
            details[0].likes,
            vec![
                LikeDetails {
                    user_id: 2,
                    user_name: "Petr".to_owned()
                },
                LikeDetails {
                    user_id: 1,
                    user_name: "Alex".to_owned()
                },
            ]
        );
        assert_eq!(details[1].tweet.id, 1);
        assert!(details[1].likes.is_empty());
    }

    #[test]
    fn assemble_fails_on_missing_author_row() {
        let tweets = vec![tweet_row(1, "ghost", "orphaned")];
        let result = assemble_details(tweets, Vec::new(), Vec::new());
        assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    }

    #[tokio::test]
    async fn delete_reports_absent_when_predicate_matches_nothing() {
        // Same outcome whether the tweet is missing or owned by someone else.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<tweet::Model>::new()])
            .into_connection();

        assert_eq!(
            TweetRepository::delete(&db, "Alex", 42).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn delete_returns_text_and_media_ids() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![tweet::Model {
                id: 7,
                author_name: "Alex".to_owned(),
                tweet_data: "bye".to_owned(),
                tweet_media_ids: Some(vec![3, 4]),
            }]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        assert_eq!(
            TweetRepository::delete(&db, "Alex", 7).await.unwrap(),
            Some(("bye".to_owned(), vec![3, 4]))
        );
    }

    #[tokio::test]
    async fn ranked_query_orders_by_like_count_then_tweet_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<tweet::Model>::new()])
            .into_connection();

        assert!(TweetRepository::all_sorted_by_likes(&db)
            .await
            .unwrap()
            .is_empty());

        // Ties on like count must break on tweet id ascending.
        let sql = format!("{:?}", db.into_transaction_log()).replace('\\', "");
        assert!(sql.contains(r#"GROUP BY "tweets"."id""#));
        assert!(sql.contains(r#"ORDER BY COUNT("tweets_likes"."id") DESC, "tweets"."id" ASC"#));
    }

    #[tokio::test]
    async fn total_counts_tweet_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([(
                "num_items",
                sea_orm::Value::from(5i64),
            )])]])
            .into_connection();

        assert_eq!(TweetRepository::total(&db).await.unwrap(), 5);
    }
}
