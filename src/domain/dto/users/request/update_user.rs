//! # 사용자 수정 요청 DTO
//!
//! 모든 필드는 선택이며 제공된 필드만 변경됩니다.
//! `active: true`를 보내면 소프트 삭제된 사용자를 다시 활성화할 수 있습니다.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::users::{
    normalize_email, normalize_name, validate_role, Role, UserPatch,
};
use crate::domain::entities::users::user::validate_name;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(custom(function = "validate_trimmed_name"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,

    pub active: Option<bool>,
}

impl TryFrom<UpdateUserRequest> for UserPatch {
    type Error = ValidationError;

    fn try_from(request: UpdateUserRequest) -> Result<Self, Self::Error> {
        let role = request
            .role
            .as_deref()
            .map(|role| {
                role.parse::<Role>().map_err(|_| {
                    ValidationError::new("enum")
                        .with_message(Cow::Borrowed("Role must be either user or admin"))
                })
            })
            .transpose()?;

        Ok(UserPatch {
            name: request.name.as_deref().map(normalize_name),
            email: request.email.as_deref().map(normalize_email),
            role,
            active: request.active,
        })
    }
}

fn validate_trimmed_name(name: &str) -> Result<(), ValidationError> {
    validate_name(&normalize_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_valid() {
        let request: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_ok());

        let patch = UserPatch::try_from(request).unwrap();
        assert_eq!(patch, UserPatch::default());
    }

    #[test]
    fn test_patch_fields_are_normalized() {
        let request = UpdateUserRequest {
            name: Some("  Janet ".to_string()),
            email: Some("Janet@Example.com".to_string()),
            role: Some("admin".to_string()),
            active: Some(true),
        };

        let patch = UserPatch::try_from(request).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Janet"));
        assert_eq!(patch.email.as_deref(), Some("janet@example.com"));
        assert_eq!(patch.role, Some(Role::Admin));
        assert_eq!(patch.active, Some(true));
    }

    #[test]
    fn test_invalid_fields_are_rejected() {
        let request = UpdateUserRequest {
            name: Some("".to_string()),
            email: Some("nope".to_string()),
            ..UpdateUserRequest::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bad_role_fails_conversion() {
        let request = UpdateUserRequest {
            role: Some("owner".to_string()),
            ..UpdateUserRequest::default()
        };
        assert!(UserPatch::try_from(request).is_err());
    }
}
