use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    // The name doubles as the bearer identity token carried in the
    // `api-key` header.
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tweet::Entity")]
    Tweet,
    #[sea_orm(has_many = "super::tweet_like::Entity")]
    TweetLike,
    #[sea_orm(has_many = "super::media_file::Entity")]
    MediaFile,
}

impl Related<super::tweet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tweet.def()
    }
}

impl Related<super::tweet_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TweetLike.def()
    }
}

impl Related<super::media_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaFile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
