use sea_orm::DatabaseConnection;

use crate::models::tweet_model::FeedTweet;
use crate::models::user_model::{LikeSummary, UserSummary};
use crate::repositories::media_repository::MediaRepository;
use crate::repositories::tweet_repository::{TweetRepository, TweetWithDetails};
use crate::services::{db_err, ServiceError};

pub struct FeedService;

impl FeedService {
    /// The full feed always succeeds; an empty list is a valid response.
    pub async fn full_feed(db: &DatabaseConnection) -> Result<Vec<FeedTweet>, ServiceError> {
        let tweets = TweetRepository::all_sorted_by_likes(db)
            .await
            .map_err(db_err)?;
        Self::create_feed(db, tweets).await
    }

    /// One media registry batch call per tweet that carries attachments.
    /// N queries for N tweets; known scaling limit, fine at this size.
    async fn create_feed(
        db: &DatabaseConnection,
        tweets: Vec<TweetWithDetails>,
    ) -> Result<Vec<FeedTweet>, ServiceError> {
        let mut feed = Vec::with_capacity(tweets.len());
        for details in tweets {
            let attachments = match &details.tweet.tweet_media_ids {
                Some(ids) if !ids.is_empty() => MediaRepository::file_names_by_ids(db, ids)
                    .await
                    .map_err(db_err)?,
                _ => Vec::new(),
            };
            feed.push(feed_entry(details, attachments));
        }
        Ok(feed)
    }
}

fn feed_entry(details: TweetWithDetails, attachments: Vec<String>) -> FeedTweet {
    let likes = details
        .likes
        .into_iter()
        .map(|like| LikeSummary {
            user_id: like.user_id,
            name: like.user_name,
        })
        .collect();
    FeedTweet {
        id: details.tweet.id,
        content: details.tweet.tweet_data,
        attachments,
        author: UserSummary {
            id: details.author.id,
            name: details.author.name,
        },
        likes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{tweet, user};
    use crate::repositories::tweet_repository::LikeDetails;

    #[test]
    fn feed_entry_flattens_author_and_likes() {
        let details = TweetWithDetails {
            tweet: tweet::Model {
                id: 1,
                author_name: "u1".to_owned(),
                tweet_data: "hello".to_owned(),
                tweet_media_ids: None,
            },
            author: user::Model {
                id: 1,
                name: "u1".to_owned(),
            },
            likes: vec![
                LikeDetails {
                    user_id: 2,
                    user_name: "u2".to_owned(),
                },
                LikeDetails {
                    user_id: 3,
                    user_name: "u3".to_owned(),
                },
            ],
        };

        let entry = feed_entry(details, Vec::new());
        assert_eq!(entry.id, 1);
        assert_eq!(entry.content, "hello");
        assert!(entry.attachments.is_empty());
        assert_eq!(
            entry.author,
            UserSummary {
                id: 1,
                name: "u1".to_owned()
            }
        );
        assert_eq!(entry.likes.len(), 2);
        assert_eq!(
            entry.likes[0],
            LikeSummary {
                user_id: 2,
                name: "u2".to_owned()
            }
        );
    }

    #[test]
    fn feed_entry_carries_resolved_attachments() {
        let details = TweetWithDetails {
            tweet: tweet::Model {
                id: 4,
                author_name: "u1".to_owned(),
                tweet_data: "with media".to_owned(),
                tweet_media_ids: Some(vec![7, 8]),
            },
            author: user::Model {
                id: 1,
                name: "u1".to_owned(),
            },
            likes: Vec::new(),
        };

        let entry = feed_entry(details, vec!["a.png".to_owned(), "b.jpg".to_owned()]);
        assert_eq!(entry.attachments, vec!["a.png", "b.jpg"]);
    }
}
