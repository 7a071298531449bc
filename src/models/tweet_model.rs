use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user_model::{LikeSummary, UserSummary};

#[derive(Debug, Deserialize, Validate)]
pub struct AddTweetRequest {
    pub tweet_data: String,
    pub tweet_media_ids: Option<Vec<i32>>,
}

#[derive(Serialize)]
pub struct AddTweetResponse {
    pub result: bool,
    pub tweet_id: i32,
}

impl AddTweetResponse {
    pub fn new(tweet_id: i32) -> Self {
        Self {
            result: true,
            tweet_id,
        }
    }
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub result: bool,
}

impl SuccessResponse {
    pub fn new() -> Self {
        Self { result: true }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FeedTweet {
    pub id: i32,
    pub content: String,
    pub attachments: Vec<String>,
    pub author: UserSummary,
    pub likes: Vec<LikeSummary>,
}

#[derive(Serialize)]
pub struct FeedResponse {
    pub result: bool,
    pub tweets: Vec<FeedTweet>,
}

impl FeedResponse {
    pub fn new(tweets: Vec<FeedTweet>) -> Self {
        Self {
            result: true,
            tweets,
        }
    }
}
