//! 라우트 구성
//!
//! ```text
//! GET    /health
//! GET    /api/v1/health
//! GET    /api/v1/users
//! POST   /api/v1/users
//! GET    /api/v1/users/{user_id}
//! PATCH  /api/v1/users/{user_id}
//! DELETE /api/v1/users/{user_id}
//! ```
//!
//! `/api` 아래 라우트에만 Rate Limiting이 적용됩니다.

use actix_governor::Governor;
use actix_web::web;

use crate::handlers;
use crate::middlewares::RateLimiter;

/// 모든 라우트를 설정합니다
///
/// ```rust,ignore
/// let app = App::new().configure(|cfg| configure_all_routes(cfg, &rate_limiter));
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, rate_limiter: &RateLimiter) {
    cfg.service(handlers::health_check);

    cfg.service(
        web::scope("/api/v1")
            .wrap(Governor::new(rate_limiter))
            .service(handlers::health_check)
            .configure(configure_user_routes),
    );
}

/// 사용자 CRUD 라우트
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}
