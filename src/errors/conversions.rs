//! 외부 에러 형태별 변환 함수
//!
//! 드라이버, 검증기, 토큰 라이브러리, 프레임워크 추출기가 만드는 에러를
//! 각각 명시적인 `From` 구현으로 [`AppError`]의 변형에 대응시킵니다.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use mongodb::error::{ErrorKind, WriteFailure};
use validator::ValidationErrors;

use crate::errors::AppError;
use crate::validation::collect_messages;

/// MongoDB 유니크 인덱스 위반 에러 코드
pub const DUPLICATE_KEY_CODE: i32 = 11000;

impl From<mongodb::error::Error> for AppError {
    /// 중복 키(11000)는 `DuplicateKey`, 그 외는 `DatabaseError`로 변환합니다.
    fn from(error: mongodb::error::Error) -> Self {
        match duplicate_key_message(&error) {
            Some(message) => AppError::DuplicateKey(duplicate_value(message)),
            None => AppError::DatabaseError(error.to_string()),
        }
    }
}

/// 중복 키 에러라면 서버가 보낸 원본 메시지를 돌려줍니다.
///
/// `insert_one`은 Write 에러로, `find_one_and_update`는 Command 에러로
/// 같은 코드를 보고합니다.
fn duplicate_key_message(error: &mongodb::error::Error) -> Option<&str> {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            Some(write_error.message.as_str())
        }
        ErrorKind::Command(command_error) if command_error.code == DUPLICATE_KEY_CODE => {
            Some(command_error.message.as_str())
        }
        _ => None,
    }
}

/// 중복 키 메시지에서 문제가 된 값을 꺼냅니다.
///
/// `E11000 duplicate key error collection: db.users index: email_unique dup key: { email: "a@b.com" }`
/// 에서 첫 번째 큰따옴표 구간(`a@b.com`)을 반환하고,
/// 따옴표가 없으면 `dup key:` 뒤의 내용을 그대로 사용합니다.
pub(crate) fn duplicate_value(message: &str) -> String {
    if let Some(start) = message.find('"') {
        let rest = &message[start + 1..];
        if let Some(end) = rest.find('"') {
            return rest[..end].to_string();
        }
    }

    message
        .split_once("dup key:")
        .map(|(_, key)| key.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

impl From<ValidationErrors> for AppError {
    /// 엔티티 재검증 실패를 `InvalidData`로 변환합니다.
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidData(collect_messages(&errors))
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    /// 만료된 토큰과 그 외 잘못된 토큰을 구분합니다.
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        match error.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        }
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        match error {
            JsonPayloadError::Deserialize(e) => AppError::CastError {
                path: "body".to_string(),
                value: e.to_string(),
            },
            JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
                AppError::Http {
                    status: StatusCode::PAYLOAD_TOO_LARGE,
                    message: format!("Request body exceeds the {} byte limit", limit),
                }
            }
            JsonPayloadError::ContentType => AppError::Http {
                status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                message: "Content-Type must be application/json".to_string(),
            },
            JsonPayloadError::Serialize(e) => AppError::InternalError(e.to_string()),
            other => AppError::Http {
                status: StatusCode::BAD_REQUEST,
                message: other.to_string(),
            },
        }
    }
}

impl From<QueryPayloadError> for AppError {
    fn from(error: QueryPayloadError) -> Self {
        match error {
            QueryPayloadError::Deserialize(e) => AppError::CastError {
                path: "query".to_string(),
                value: e.to_string(),
            },
            other => AppError::Http {
                status: StatusCode::BAD_REQUEST,
                message: other.to_string(),
            },
        }
    }
}

impl From<PathError> for AppError {
    fn from(error: PathError) -> Self {
        match error {
            PathError::Deserialize(e) => AppError::CastError {
                path: "params".to_string(),
                value: e.to_string(),
            },
            other => AppError::Http {
                status: StatusCode::BAD_REQUEST,
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use jsonwebtoken::errors::ErrorKind as JwtErrorKind;

    #[test]
    fn test_duplicate_value_is_extracted_from_driver_message() {
        let message = "E11000 duplicate key error collection: user_service.users index: email_unique dup key: { email: \"jane@example.com\" }";
        assert_eq!(duplicate_value(message), "jane@example.com");
    }

    #[test]
    fn test_duplicate_value_without_quotes_falls_back_to_key() {
        let message = "E11000 duplicate key error dup key: { email: null }";
        assert_eq!(duplicate_value(message), "{ email: null }");
        assert_eq!(duplicate_value("E11000"), "unknown");
    }

    #[test]
    fn test_jwt_expired_signature_maps_to_token_expired() {
        let error: AppError = jsonwebtoken::errors::Error::from(JwtErrorKind::ExpiredSignature).into();
        assert_eq!(error, AppError::TokenExpired);
    }

    #[test]
    fn test_jwt_other_errors_map_to_invalid_token() {
        let error: AppError = jsonwebtoken::errors::Error::from(JwtErrorKind::InvalidSignature).into();
        assert_eq!(error, AppError::InvalidToken);
        assert_eq!(error.to_string(), "Invalid token. Please log in again.");
    }

    #[test]
    fn test_json_deserialize_error_becomes_cast_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: AppError = JsonPayloadError::Deserialize(serde_error).into();

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(error.to_string().starts_with("Invalid body: "));
    }

    #[test]
    fn test_json_overflow_is_payload_too_large() {
        let error: AppError = JsonPayloadError::Overflow { limit: 10240 }.into();

        assert_eq!(error.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(error.is_operational());
    }
}
