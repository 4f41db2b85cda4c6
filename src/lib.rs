//! 사용자 서비스 백엔드
//!
//! MongoDB에 저장되는 사용자 리소스를 CRUD하는 REST API입니다.
//! 모든 요청은 상관관계 ID로 추적되고, 모든 실패는 하나의 JSON 에러 봉투로 정규화됩니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 조회, 부분 수정, 소프트 삭제
//! - **상관관계 ID**: `x-correlation-id` / `x-request-id` 전파, 없으면 UUIDv7 발급
//! - **스키마 검증**: 요청 본문/쿼리/경로를 `validator` 규칙으로 검사
//! - **에러 정규화**: 환경별 정책(development/production)에 따른 에러 응답
//! - **보안**: 보안 헤더, CORS, IP 기준 Rate Limiting, 본문 크기 제한
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Middlewares   │ ← 상관관계 ID, 보안 헤더, 에러 정규화, CORS, Rate Limiting
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리 (Valid<T> 추출기로 검증)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository trait (MongoDB 구현)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_service_backend::{create_app, middlewares::build_rate_limiter};
//!
//! let rate_limiter = build_rate_limiter(&config.rate_limit)?;
//! HttpServer::new(move || create_app(user_service.clone(), &config, &rate_limiter))
//!     .bind(config.bind_address())?
//!     .run()
//!     .await
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::middlewares::{
    configure_cors, security_headers, CorrelationId, ErrorNormalizer, RateLimiter,
};
use crate::services::UserService;

/// 접근 로그 형식 (마지막 필드가 상관관계 ID)
pub const ACCESS_LOG_FORMAT: &str =
    r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %Dms %{x-correlation-id}o"#;

/// 요청 파이프라인 전체가 구성된 애플리케이션을 만듭니다.
///
/// `HttpServer::new`의 팩토리 클로저와 테스트(`test::init_service`)가 같은 구성을 사용합니다.
/// `rate_limiter`는 워커 간에 공유되도록 호출자가 한 번만 만들어 전달합니다.
pub fn create_app(
    user_service: web::Data<UserService>,
    config: &AppConfig,
    rate_limiter: &RateLimiter,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody + use<>>,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    let environment = config.environment;

    App::new()
        .app_data(user_service)
        .app_data(
            web::JsonConfig::default()
                .limit(config.server.body_limit_bytes)
                .error_handler(|err, _req| AppError::from(err).into()),
        )
        .app_data(web::QueryConfig::default().error_handler(|err, _req| AppError::from(err).into()))
        .app_data(web::PathConfig::default().error_handler(|err, _req| AppError::from(err).into()))
        .configure(|cfg| routes::configure_all_routes(cfg, rate_limiter))
        .default_service(web::to(handlers::not_found))
        .wrap(NormalizePath::trim())
        .wrap(configure_cors(environment))
        .wrap(ErrorNormalizer::new(environment))
        .wrap(security_headers(environment))
        .wrap(CorrelationId)
        .wrap(Logger::new(ACCESS_LOG_FORMAT))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use actix_web::web;

    use crate::config::AppConfig;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::services::UserService;

    /// 환경 변수 대신 주어진 값만으로 설정을 만듭니다.
    pub fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        AppConfig::from_lookup(move |key| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
        .unwrap()
    }

    pub fn memory_service() -> web::Data<UserService> {
        web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())))
    }
}
