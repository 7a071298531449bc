use crate::config::AppState;
use crate::models::auth_model::AuthUser;
use crate::models::tweet_model::AddTweetRequest;
use crate::repositories::like_repository::LikeRepository;
use crate::repositories::tweet_repository::TweetRepository;
use crate::services::media_service::MediaService;
use crate::services::{bad_request, db_err, forbidden, ServiceError};

pub struct TweetService;

impl TweetService {
    pub async fn add_tweet(
        state: &AppState,
        user: &AuthUser,
        payload: AddTweetRequest,
    ) -> Result<i32, ServiceError> {
        tracing::info!(author = %user.name, "adding tweet");
        TweetRepository::add(
            &state.db,
            &user.name,
            payload.tweet_data,
            payload.tweet_media_ids,
        )
        .await
        .map_err(db_err)
    }

    /// Deleting somebody else's tweet and deleting a missing tweet are the
    /// same observable outcome: the scoped delete matches nothing and the
    /// caller gets a forbidden response.
    pub async fn delete_tweet(
        state: &AppState,
        user: &AuthUser,
        tweet_id: i32,
    ) -> Result<(), ServiceError> {
        tracing::info!(author = %user.name, tweet_id, "deleting tweet");
        let deleted = TweetRepository::delete(&state.db, &user.name, tweet_id)
            .await
            .map_err(db_err)?;
        let Some((_, media_ids)) = deleted else {
            return Err(forbidden("You can delete only yours tweet which is posted!"));
        };
        if !media_ids.is_empty() {
            MediaService::delete_media_files(state, &user.name, &media_ids).await?;
        }
        Ok(())
    }

    pub async fn like_tweet(
        state: &AppState,
        user: &AuthUser,
        tweet_id: i32,
    ) -> Result<(), ServiceError> {
        tracing::info!(user = %user.name, tweet_id, "liking tweet");
        match LikeRepository::like(&state.db, &user.name, tweet_id)
            .await
            .map_err(db_err)?
        {
            Some(_) => Ok(()),
            None => Err(bad_request("You have already liked the tweet!")),
        }
    }

    pub async fn unlike_tweet(
        state: &AppState,
        user: &AuthUser,
        tweet_id: i32,
    ) -> Result<(), ServiceError> {
        tracing::info!(user = %user.name, tweet_id, "unliking tweet");
        match LikeRepository::unlike(&state.db, &user.name, tweet_id)
            .await
            .map_err(db_err)?
        {
            Some(_) => Ok(()),
            None => Err(bad_request("You did not like the tweet!")),
        }
    }
}
