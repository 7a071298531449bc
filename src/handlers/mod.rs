pub mod media_handler;
pub mod tweet_handler;
pub mod user_handler;
