pub mod auth_model;
pub mod media_model;
pub mod tweet_model;
pub mod user_model;
