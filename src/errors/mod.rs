//! # Error Handling Module
//!
//! 사용자 서비스의 통합 에러 처리 시스템입니다.
//! Spring Framework의 `@ControllerAdvice` + `@ExceptionHandler` 조합을
//! 태그된 열거형과 명시적 변환 함수로 대체합니다.
//!
//! ## 구성
//!
//! - [`app_error`] - [`AppError`] 정의, 상태 코드/운영 여부 매핑, 응답 본문 타입
//! - [`conversions`] - MongoDB, validator, jsonwebtoken, actix 추출기 에러 → `AppError`
//!
//! 실제 HTTP 응답 생성은 `middlewares::ErrorNormalizer`가 담당합니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@ControllerAdvice` | `ErrorNormalizer` 미들웨어 |
//! | `@ExceptionHandler(DuplicateKeyException.class)` | `From<mongodb::error::Error>` |
//! | `MethodArgumentNotValidException` | `AppError::ValidationError` |
//! | `ResponseStatusException` | `AppError::Http` |

pub mod app_error;
pub mod conversions;

pub use app_error::{AppError, AppResult, ErrorBody, ErrorContext, ErrorDetail, GENERIC_ERROR_MESSAGE};
