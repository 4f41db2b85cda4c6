//! 애플리케이션 전역에서 사용하는 에러 타입
//!
//! 모든 실패는 [`AppError`]의 한 변형으로 표현됩니다.
//! 각 변형은 HTTP 상태 코드, 상태 분류(`fail`/`error`), 운영(operational) 여부와
//! 클라이언트에게 보여줄 메시지를 스스로 결정합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_user(&self, id: &str) -> Result<User, AppError> {
//!     self.repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("No user found with that ID".to_string()))
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | Operational |
//! |----------|-------------|-------------|
//! | `ValidationError` | 400 | ✅ |
//! | `CastError` | 400 | ✅ |
//! | `DuplicateKey` | 400 | ✅ |
//! | `InvalidData` | 400 | ✅ |
//! | `InvalidToken` / `TokenExpired` | 401 | ✅ |
//! | `NotFound` | 404 | ✅ |
//! | `Http` | 원래 상태 코드 | 4xx일 때만 |
//! | `DatabaseError` / `InternalError` | 500 | ❌ |

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// 운영 에러가 아닌 경우 프로덕션에서 노출되는 메시지
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

/// 애플리케이션 전역 에러 타입
///
/// `Display` 구현(`#[error(...)]`)이 곧 클라이언트에게 전달되는 메시지입니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 요청 스키마 검증 실패 (400)
    ///
    /// 위반된 필드 메시지들이 `", "`로 연결되어 들어옵니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청 값을 기대한 타입으로 변환하지 못함 (400)
    #[error("Invalid {path}: {value}")]
    CastError { path: String, value: String },

    /// 유니크 인덱스 위반 (400)
    ///
    /// 중복된 값 자체를 담습니다. 메시지에서는 따옴표로 감싸 표시됩니다.
    #[error("Duplicate field value: \"{0}\". Please use another value.")]
    DuplicateKey(String),

    /// 엔티티 저장 직전 재검증 실패 (400)
    #[error("Invalid input data. {}", .0.join(". "))]
    InvalidData(Vec<String>),

    /// 잘못된 인증 토큰 (401)
    #[error("Invalid token. Please log in again.")]
    InvalidToken,

    /// 만료된 인증 토큰 (401)
    #[error("Your token has expired. Please log in again.")]
    TokenExpired,

    /// 리소스 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 프레임워크가 만든 에러 (상태 코드 유지)
    ///
    /// Rate Limiting 거부(429), 본문 크기 초과(413) 등 분류되지 않은 에러가
    /// 원래 상태 코드와 메시지를 유지한 채 들어옵니다.
    #[error("{message}")]
    Http { status: StatusCode, message: String },

    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 예상하지 못한 내부 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// `"No user found with that ID"` 404 에러
    pub fn user_not_found() -> Self {
        AppError::NotFound("No user found with that ID".to_string())
    }

    /// 매칭되는 라우트가 없을 때의 404 에러
    pub fn route_not_found(path: &str) -> Self {
        AppError::NotFound(format!("Cannot find {} on this server", path))
    }

    /// 예상된 도메인 에러인지 여부
    ///
    /// 운영 에러의 메시지는 어떤 환경에서도 클라이언트에게 그대로 전달됩니다.
    pub fn is_operational(&self) -> bool {
        match self {
            AppError::Http { status, .. } => status.is_client_error(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => false,
            AppError::ValidationError(_)
            | AppError::CastError { .. }
            | AppError::DuplicateKey(_)
            | AppError::InvalidData(_)
            | AppError::InvalidToken
            | AppError::TokenExpired
            | AppError::NotFound(_) => true,
        }
    }

    /// 상태 분류: 4xx는 `"fail"`, 그 외는 `"error"`
    pub fn status(&self) -> &'static str {
        if self.status_code().is_client_error() {
            "fail"
        } else {
            "error"
        }
    }

    /// 에러 종류 이름 (개발 환경 응답의 `error.kind`)
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "ValidationError",
            AppError::CastError { .. } => "CastError",
            AppError::DuplicateKey(_) => "DuplicateKey",
            AppError::InvalidData(_) => "InvalidData",
            AppError::InvalidToken => "InvalidToken",
            AppError::TokenExpired => "TokenExpired",
            AppError::NotFound(_) => "NotFound",
            AppError::Http { .. } => "Http",
            AppError::DatabaseError(_) => "DatabaseError",
            AppError::InternalError(_) => "InternalError",
        }
    }

    /// 클라이언트에게 노출해도 되는 메시지
    pub fn public_message(&self) -> String {
        if self.is_operational() {
            self.to_string()
        } else {
            GENERIC_ERROR_MESSAGE.to_string()
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::CastError { .. }
            | AppError::DuplicateKey(_)
            | AppError::InvalidData(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidToken | AppError::TokenExpired => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Http { status, .. } => *status,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 최소 형태의 에러 응답을 생성합니다.
    ///
    /// 실제 응답 본문은 `ErrorNormalizer` 미들웨어가 상관관계 ID와
    /// 환경 정책을 반영해 다시 만듭니다. 이 응답은 미들웨어 밖에서
    /// 에러가 직렬화되는 경우를 위한 것입니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            status: self.status(),
            message: self.public_message(),
            correlation_id: None,
            error: None,
            stack: None,
        })
    }
}

/// 통일된 에러 응답 본문
///
/// ```json
/// { "status": "fail", "message": "No user found with that ID", "correlationId": "..." }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    /// 개발 환경 전용: 에러 원본 정보
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
    /// 개발 환경 전용: 에러 디버그 표현
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// 개발 환경 응답에 포함되는 에러 원본 정보
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub kind: &'static str,
    pub status_code: u16,
    pub status: &'static str,
    pub is_operational: bool,
}

impl From<&AppError> for ErrorDetail {
    fn from(error: &AppError) -> Self {
        Self {
            kind: error.kind(),
            status_code: error.status_code().as_u16(),
            status: error.status(),
            is_operational: error.is_operational(),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Name is required, Invalid email address".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.status(), "fail");
        assert_eq!(
            error.to_string(),
            "Validation error: Name is required, Invalid email address"
        );
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::user_not_found();

        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "No user found with that ID");
        assert!(error.is_operational());
    }

    #[test]
    fn test_route_not_found_message() {
        let error = AppError::route_not_found("/api/v1/nope");
        assert_eq!(error.to_string(), "Cannot find /api/v1/nope on this server");
    }

    #[test]
    fn test_shape_messages() {
        let cast = AppError::CastError {
            path: "query".to_string(),
            value: "page must be a number".to_string(),
        };
        assert_eq!(cast.to_string(), "Invalid query: page must be a number");

        let duplicate = AppError::DuplicateKey("jane@example.com".to_string());
        assert_eq!(
            duplicate.to_string(),
            "Duplicate field value: \"jane@example.com\". Please use another value."
        );

        let invalid = AppError::InvalidData(vec![
            "Name cannot exceed 100 characters".to_string(),
            "Invalid email address".to_string(),
        ]);
        assert_eq!(
            invalid.to_string(),
            "Invalid input data. Name cannot exceed 100 characters. Invalid email address"
        );
    }

    #[test]
    fn test_token_errors_are_unauthorized() {
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::TokenExpired.to_string(),
            "Your token has expired. Please log in again."
        );
    }

    #[test]
    fn test_internal_error_is_not_operational() {
        let error = AppError::InternalError("connection reset".to_string());

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.status(), "error");
        assert!(!error.is_operational());
        assert_eq!(error.public_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_http_error_keeps_status() {
        let error = AppError::Http {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: "Too many requests, please try again later.".to_string(),
        };

        assert_eq!(error.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert!(error.is_operational());

        let server_side = AppError::Http {
            status: StatusCode::BAD_GATEWAY,
            message: "upstream".to_string(),
        };
        assert!(!server_side.is_operational());
        assert_eq!(server_side.status(), "error");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
