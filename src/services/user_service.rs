use sea_orm::DatabaseConnection;

use crate::models::auth_model::AuthUser;
use crate::models::user_model::{UserProfile, UserSummary};
use crate::repositories::user_repository::{UserRepository, UserWithGraph};
use crate::services::{bad_request, db_err, ServiceError};

pub struct UserService;

impl UserService {
    /// The followed user must exist; the edge layer itself does not check.
    pub async fn follow(
        db: &DatabaseConnection,
        user: &AuthUser,
        followed_id: i32,
    ) -> Result<(), ServiceError> {
        tracing::info!(follower = %user.name, followed_id, "following user");
        if UserRepository::find_by_id(db, followed_id)
            .await
            .map_err(db_err)?
            .is_none()
        {
            return Err(bad_request("Followed user is not exist!"));
        }
        match UserRepository::follow(db, user.id, followed_id)
            .await
            .map_err(db_err)?
        {
            Some(_) => Ok(()),
            None => Err(bad_request("You have already followed this user!")),
        }
    }

    pub async fn unfollow(
        db: &DatabaseConnection,
        user: &AuthUser,
        followed_id: i32,
    ) -> Result<(), ServiceError> {
        tracing::info!(follower = %user.name, followed_id, "unfollowing user");
        if UserRepository::find_by_id(db, followed_id)
            .await
            .map_err(db_err)?
            .is_none()
        {
            return Err(bad_request("Followed user is not exist!"));
        }
        match UserRepository::unfollow(db, user.id, followed_id)
            .await
            .map_err(db_err)?
        {
            Some(_) => Ok(()),
            None => Err(bad_request("You are not following this user!")),
        }
    }

    pub async fn own_profile(
        db: &DatabaseConnection,
        user: &AuthUser,
    ) -> Result<UserProfile, ServiceError> {
        let details = UserRepository::find_by_name(db, &user.name)
            .await
            .map_err(db_err)?
            .ok_or_else(|| bad_request("You are not register in system!"))?;
        Ok(build_profile(details))
    }

    pub async fn user_profile(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<UserProfile, ServiceError> {
        let details = UserRepository::find_by_id(db, user_id)
            .await
            .map_err(db_err)?
            .ok_or_else(|| bad_request(format!("There is no user with id: {} in db.", user_id)))?;
        Ok(build_profile(details))
    }
}

fn build_profile(details: UserWithGraph) -> UserProfile {
    let followers = details
        .followers
        .into_iter()
        .map(|u| UserSummary {
            id: u.id,
            name: u.name,
        })
        .collect();
    let following = details
        .followed
        .into_iter()
        .map(|u| UserSummary {
            id: u.id,
            name: u.name,
        })
        .collect();
    UserProfile {
        id: details.user.id,
        name: details.user.name,
        followers,
        following,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::user;

    fn user_row(id: i32, name: &str) -> user::Model {
        user::Model {
            id,
            name: name.to_owned(),
        }
    }

    #[test]
    fn profile_flattens_both_graph_directions() {
        let details = UserWithGraph {
            user: user_row(1, "u1"),
            followers: vec![user_row(3, "u3")],
            followed: vec![user_row(2, "u2")],
        };

        let profile = build_profile(details);
        assert_eq!(profile.id, 1);
        assert_eq!(profile.name, "u1");
        assert_eq!(
            profile.followers,
            vec![UserSummary {
                id: 3,
                name: "u3".to_owned()
            }]
        );
        assert_eq!(
            profile.following,
            vec![UserSummary {
                id: 2,
                name: "u2".to_owned()
            }]
        );
    }

    #[test]
    fn profile_of_an_isolated_user_has_empty_lists() {
        let details = UserWithGraph {
            user: user_row(5, "loner"),
            followers: Vec::new(),
            followed: Vec::new(),
        };

        let profile = build_profile(details);
        assert!(profile.followers.is_empty());
        assert!(profile.following.is_empty());
    }
}
