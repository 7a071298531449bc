pub mod follower;
pub mod media_file;
pub mod tweet;
pub mod tweet_like;
pub mod user;
