use serde::Serialize;

use crate::domain::entities::users::{Role, User};
use crate::domain::models::pagination::Pagination;

/// 사용자 응답 DTO
///
/// 시간은 RFC 3339 문자열로 직렬화됩니다.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
            active,
            created_at,
            updated_at,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            role,
            active,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// `data: { user }`
#[derive(Debug, Clone, Serialize)]
pub struct UserData {
    pub user: UserResponse,
}

/// `data: { users }`
#[derive(Debug, Clone, Serialize)]
pub struct UsersData {
    pub users: Vec<UserResponse>,
}

/// `data: { users, pagination }`
#[derive(Debug, Clone, Serialize)]
pub struct UserListing {
    pub users: Vec<UserResponse>,
    pub pagination: Pagination,
}
