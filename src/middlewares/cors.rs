//! CORS 설정
//!
//! 프로덕션에서는 교차 출처 요청을 허용하지 않고,
//! 그 외 환경에서는 로컬 프론트엔드 개발을 위해 모든 출처를 허용합니다.

use actix_cors::Cors;
use actix_web::http::header;

use crate::config::Environment;
use crate::domain::models::request_context::CORRELATION_ID_HEADER;

pub fn configure_cors(environment: Environment) -> Cors {
    let cors = if environment.is_production() {
        Cors::default()
    } else {
        Cors::default().allow_any_origin()
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allowed_header(CORRELATION_ID_HEADER)
        .expose_headers(vec![CORRELATION_ID_HEADER])
        .max_age(3600)
}
