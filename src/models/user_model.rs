use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct LikeSummary {
    pub user_id: i32,
    pub name: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: i32,
    pub name: String,
    pub followers: Vec<UserSummary>,
    pub following: Vec<UserSummary>,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub result: bool,
    pub user: UserProfile,
}

impl ProfileResponse {
    pub fn new(user: UserProfile) -> Self {
        Self { result: true, user }
    }
}
