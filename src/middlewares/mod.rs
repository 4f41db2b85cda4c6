//! # Middlewares Module
//!
//! 요청 파이프라인을 구성하는 미들웨어들입니다. 바깥쪽부터 순서대로:
//!
//! ```text
//! Logger                 - 접근 로그 (상관관계 ID 포함)
//!  └ CorrelationId       - RequestContext 생성, x-correlation-id 응답 헤더
//!     └ security_headers - 보안 응답 헤더
//!        └ ErrorNormalizer - 모든 실패를 JSON 에러 봉투로 변환
//!           └ Cors
//!              └ NormalizePath
//!                 └ 라우트 / default_service(404)
//!                    └ /api/v1 스코프: Governor (Rate Limiting)
//! ```
//!
//! actix-web의 `.wrap()`은 나중에 등록한 것이 바깥쪽이 되므로
//! `create_app`에서는 위 목록의 역순으로 등록합니다.
//! Rate Limiting은 `/api/v1` 스코프에만 걸리므로 루트 `/health`는 제한되지 않습니다.
//!
//! ## 스코프에만 적용
//! ```rust,ignore
//! App::new()
//!     .service(
//!         web::scope("/api/v1")
//!             .wrap(CorrelationId)
//!             .configure(configure_user_routes)
//!     )
//! ```

pub mod correlation_middleware;
mod correlation_inner;
pub mod cors;
pub mod error_middleware;
mod error_inner;
pub mod rate_limit;
pub mod security_headers;

pub use correlation_middleware::CorrelationId;
pub use cors::configure_cors;
pub use error_middleware::ErrorNormalizer;
pub use rate_limit::{build_rate_limiter, RateLimiter};
pub use security_headers::security_headers;
