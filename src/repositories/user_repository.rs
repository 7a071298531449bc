use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use std::collections::HashMap;

use crate::entities::{follower, user, user::Entity as User};

/// A user row with both sides of the follow graph fully resolved.
///
/// Every fetch pays the full O(followers + followed) cost up front. Fine at
/// this scale, do not reuse for anything paginated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserWithGraph {
    pub user: user::Model,
    pub followers: Vec<user::Model>,
    pub followed: Vec<user::Model>,
}

pub struct UserRepository;

impl UserRepository {
    pub async fn exists(db: &DatabaseConnection, user_name: &str) -> Result<bool, DbErr> {
        tracing::debug!(user_name, "checking if user exists");
        Ok(Self::id_by_name(db, user_name).await?.is_some())
    }

    pub async fn id_by_name(
        db: &DatabaseConnection,
        user_name: &str,
    ) -> Result<Option<i32>, DbErr> {
        let user = User::find()
            .filter(user::Column::Name.eq(user_name))
            .one(db)
            .await?;
        Ok(user.map(|u| u.id))
    }

    /// Insert a new user. A taken name surfaces as a unique-violation `DbErr`
    /// from the store, deliberately not caught here.
    pub async fn register(db: &DatabaseConnection, user_name: &str) -> Result<user::Model, DbErr> {
        tracing::debug!(user_name, "registering user");
        user::ActiveModel {
            id: NotSet,
            name: Set(user_name.to_owned()),
        }
        .insert(db)
        .await
    }

    pub async fn find_by_name(
        db: &DatabaseConnection,
        user_name: &str,
    ) -> Result<Option<UserWithGraph>, DbErr> {
        let user = User::find()
            .filter(user::Column::Name.eq(user_name))
            .one(db)
            .await?;
        match user {
            Some(user) => Self::load_graph(db, user).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Option<UserWithGraph>, DbErr> {
        let user = User::find_by_id(user_id).one(db).await?;
        match user {
            Some(user) => Self::load_graph(db, user).await.map(Some),
            None => Ok(None),
        }
    }

    /// Insert-or-ignore on the composite edge key. Returns the pair only when
    /// a new edge was created, `None` when it already existed. Whether
    /// `followed_id` refers to an existing user is not checked here.
    pub async fn follow(
        db: &DatabaseConnection,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<Option<(i32, i32)>, DbErr> {
        tracing::debug!(follower_id, followed_id, "inserting follow edge");
        let edge = follower::ActiveModel {
            follower_id: Set(follower_id),
            followed_id: Set(followed_id),
        };
        let inserted = follower::Entity::insert(edge)
            .on_conflict(
                OnConflict::columns([follower::Column::FollowerId, follower::Column::FollowedId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
        Ok((inserted > 0).then_some((follower_id, followed_id)))
    }

    /// Delete the edge; `None` when there was nothing to remove.
    pub async fn unfollow(
        db: &DatabaseConnection,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<Option<(i32, i32)>, DbErr> {
        tracing::debug!(follower_id, followed_id, "deleting follow edge");
        let deleted = follower::Entity::delete_many()
            .filter(follower::Column::FollowerId.eq(follower_id))
            .filter(follower::Column::FollowedId.eq(followed_id))
            .exec(db)
            .await?;
        Ok((deleted.rows_affected > 0).then_some((follower_id, followed_id)))
    }

    pub async fn total_followed_by_name(
        db: &DatabaseConnection,
        user_name: &str,
    ) -> Result<Option<u64>, DbErr> {
        let Some(user_id) = Self::id_by_name(db, user_name).await? else {
            return Ok(None);
        };
        let total = follower::Entity::find()
            .filter(follower::Column::FollowerId.eq(user_id))
            .count(db)
            .await?;
        Ok(Some(total))
    }

    /// Resolve both follow directions with explicit queries: one pass over
    /// the edge table, one batched fetch of the referenced user rows.
    async fn load_graph(
        db: &DatabaseConnection,
        user: user::Model,
    ) -> Result<UserWithGraph, DbErr> {
        let edges = follower::Entity::find()
            .filter(
                Condition::any()
                    .add(follower::Column::FollowerId.eq(user.id))
                    .add(follower::Column::FollowedId.eq(user.id)),
            )
            .all(db)
            .await?;

        let mut follower_ids = Vec::new();
        let mut followed_ids = Vec::new();
        for edge in &edges {
            if edge.followed_id == user.id {
                follower_ids.push(edge.follower_id);
            }
            if edge.follower_id == user.id {
                followed_ids.push(edge.followed_id);
            }
        }

        let mut referenced: Vec<i32> = follower_ids.clone();
        referenced.extend(&followed_ids);
        referenced.sort_unstable();
        referenced.dedup();

        let users_by_id: HashMap<i32, user::Model> = if referenced.is_empty() {
            HashMap::new()
        } else {
            User::find()
                .filter(user::Column::Id.is_in(referenced))
                .all(db)
                .await?
                .into_iter()
                .map(|u| (u.id, u))
                .collect()
        };

        let followers = follower_ids
            .iter()
            .filter_map(|id| users_by_id.get(id).cloned())
            .collect();
        let followed = followed_ids
            .iter()
            .filter_map(|id| users_by_id.get(id).cloned())
            .collect();

        Ok(UserWithGraph {
            user,
            followers,
            followed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_row(id: i32, name: &str) -> user::Model {
        user::Model {
            id,
            name: name.to_owned(),
        }
    }

    #[tokio::test]
    async fn exists_maps_row_presence() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_row(1, "Alex")], vec![]])
            .into_connection();

        assert!(UserRepository::exists(&db, "Alex").await.unwrap());
        assert!(!UserRepository::exists(&db, "nobody").await.unwrap());
    }

    #[tokio::test]
    async fn id_by_name_returns_absent_for_unknown_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        assert_eq!(UserRepository::id_by_name(&db, "ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn follow_reports_absent_when_edge_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        assert_eq!(
            UserRepository::follow(&db, 1, 2).await.unwrap(),
            Some((1, 2))
        );
        assert_eq!(UserRepository::follow(&db, 1, 2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn unfollow_reports_absent_when_nothing_removed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        assert_eq!(UserRepository::unfollow(&db, 1, 2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn total_followed_is_absent_for_unknown_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        assert_eq!(
            UserRepository::total_followed_by_name(&db, "ghost")
                .await
                .unwrap(),
            None
        );
    }
}
