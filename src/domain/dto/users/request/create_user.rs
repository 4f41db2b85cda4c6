//! # 사용자 생성 요청 DTO
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | `name` | 공백 제거 후 1~100자 | `Name is required` / `Name cannot exceed 100 characters` |
//! | `email` | 이메일 형식 | `Invalid email address` |
//! | `role` | 생략 가능, `user` \| `admin` | `Role must be either user or admin` |
//!
//! `name`, `email`이 빠진 본문은 빈 문자열로 역직렬화되어 같은 규칙으로 걸러집니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::users::{normalize_name, validate_role, Role, User};
use crate::domain::entities::users::user::validate_name;

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// ```json
/// { "name": "Jane Doe", "email": "jane@example.com", "role": "admin" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_trimmed_name"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
}

impl CreateUserRequest {
    /// 검증을 통과한 요청을 새 엔티티로 변환합니다.
    ///
    /// 역할을 해석할 수 없으면 기본 역할(`user`)을 사용합니다.
    pub fn into_user(self) -> User {
        let role = self
            .role
            .as_deref()
            .and_then(|role| role.parse::<Role>().ok())
            .unwrap_or_default();

        User::new(&self.name, &self.email, role)
    }
}

fn validate_trimmed_name(name: &str) -> Result<(), ValidationError> {
    validate_name(&normalize_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::collect_messages;

    #[test]
    fn test_valid_request_passes() {
        let request = CreateUserRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            role: Some("admin".to_string()),
        };

        assert!(request.validate().is_ok());
        let user = request.into_user();
        assert_eq!(user.role, Role::Admin);
        assert!(user.active);
    }

    #[test]
    fn test_missing_fields_report_every_violation() {
        let request: CreateUserRequest = serde_json::from_str("{}").unwrap();
        let errors = request.validate().unwrap_err();

        assert_eq!(
            collect_messages(&errors),
            vec!["Invalid email address".to_string(), "Name is required".to_string()]
        );
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let request = CreateUserRequest {
            name: "   ".to_string(),
            email: "jane@example.com".to_string(),
            role: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let request = CreateUserRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            role: Some("root".to_string()),
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(
            collect_messages(&errors),
            vec!["Role must be either user or admin".to_string()]
        );
    }

    #[test]
    fn test_role_defaults_to_user() {
        let request = CreateUserRequest {
            name: "Jane".to_string(),
            email: "JANE@example.com".to_string(),
            role: None,
        };

        let user = request.into_user();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.email, "jane@example.com");
    }
}
