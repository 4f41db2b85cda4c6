//! User Entity Implementation
//!
//! 사용자 엔티티와 저장 직전에 다시 적용되는 필드 규칙을 정의합니다.
//! 삭제는 `active` 플래그를 내리는 소프트 삭제로만 이루어집니다.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 이름 최대 길이 (문자 수)
pub const NAME_MAX_LENGTH: usize = 100;

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 엔티티
///
/// MongoDB `users` 컬렉션의 문서 하나에 대응합니다.
/// `email`은 유니크 인덱스로 중복이 금지됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름 (1~100자, 앞뒤 공백 제거)
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    /// 이메일 (소문자로 정규화, unique)
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// 사용자 역할
    pub role: Role,
    /// 활성 여부. `false`면 소프트 삭제된 사용자
    pub active: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 활성 사용자를 생성합니다.
    ///
    /// 이름은 앞뒤 공백을 제거하고, 이메일은 공백 제거 후 소문자로 저장합니다.
    pub fn new(name: &str, email: &str, role: Role) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name: normalize_name(name),
            email: normalize_email(email),
            role,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

/// 부분 수정 내용
///
/// `None`인 필드는 변경하지 않습니다. 저장 전에 엔티티와 같은 규칙으로 재검증됩니다.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UserPatch {
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
}

impl UserPatch {
    /// 변경 내용을 엔티티에 적용합니다.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(active) = self.active {
            user.active = active;
        }
        user.updated_at = DateTime::now();
    }
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_string()
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 이름 길이 규칙 (1~100자)
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();

    if length == 0 {
        return Err(ValidationError::new("length").with_message(Cow::Borrowed("Name is required")));
    }
    if length > NAME_MAX_LENGTH {
        return Err(ValidationError::new("length")
            .with_message(Cow::Borrowed("Name cannot exceed 100 characters")));
    }
    Ok(())
}

/// 역할 문자열 규칙 (`user` | `admin`)
pub fn validate_role(role: &str) -> Result<(), ValidationError> {
    role.parse::<Role>().map(|_| ()).map_err(|_| {
        ValidationError::new("enum").with_message(Cow::Borrowed("Role must be either user or admin"))
    })
}
