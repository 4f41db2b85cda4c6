//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. Spring MVC의 Controller 계층에 해당합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 에러 응답을 직접 만들지 않습니다. `AppError`를 반환하면
//! `ErrorNormalizer` 미들웨어가 환경에 맞는 JSON 봉투로 바꿉니다.
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `@RestController` | `#[get]`, `#[post]` 등 속성 매크로가 붙은 함수 |
//! | `@Valid @RequestBody` | `Valid<web::Json<T>>` |
//! | `@PathVariable` | `web::Path<String>` |
//! | `@ResponseStatus(CREATED)` | `ApiResponse::created` |

pub mod users;

use actix_web::http::StatusCode;
use actix_web::{get, HttpRequest, HttpResponse};
use chrono::Utc;
use serde::Serialize;

use crate::errors::AppError;
use crate::utils::api_response::SUCCESS_STATUS;

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    message: &'static str,
    timestamp: String,
}

/// 서비스 상태 확인
///
/// 로드밸런서나 모니터링 시스템에서 사용합니다. 데이터베이스 상태는 확인하지 않습니다.
///
/// ```json
/// { "status": "success", "message": "Server is running", "timestamp": "2025-01-01T00:00:00+00:00" }
/// ```
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::build(StatusCode::OK).json(HealthStatus {
        status: SUCCESS_STATUS,
        message: "Server is running",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// 매칭되는 라우트가 없을 때 (`default_service`)
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::route_not_found(req.path()))
}
