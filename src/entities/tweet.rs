use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tweets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub author_name: String,
    #[sea_orm(column_type = "Text")]
    pub tweet_data: String,
    // Denormalized media registry references, not foreign-keyed.
    pub tweet_media_ids: Option<Vec<i32>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorName",
        to = "super::user::Column::Name",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::tweet_like::Entity")]
    TweetLike,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::tweet_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TweetLike.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
