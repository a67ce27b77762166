use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::{Role, User};

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            username: user.username,
            email: user.email,
        }
    }
}

/// 그룹 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupResponse {
    pub name: String,
}

/// 본인 정보 응답 DTO (`GET /users/me`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfUserResponse {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
    pub groups: Vec<GroupResponse>,
}

impl From<User> for SelfUserResponse {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let groups = user
            .groups
            .into_iter()
            .map(|name| GroupResponse { name })
            .collect();

        Self {
            id,
            username: user.username,
            email: user.email,
            role: user.role,
            groups,
        }
    }
}
