//! 보안 응답 헤더
//!
//! 모든 응답(에러 응답 포함)에 브라우저 보안 헤더를 추가합니다.
//! 핸들러가 같은 헤더를 직접 설정했다면 그 값이 유지됩니다.

use actix_web::http::header::{
    REFERRER_POLICY, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
    X_XSS_PROTECTION,
};
use actix_web::middleware::DefaultHeaders;

use crate::config::Environment;

pub fn security_headers(environment: Environment) -> DefaultHeaders {
    let headers = DefaultHeaders::new()
        .add((X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((X_FRAME_OPTIONS, "SAMEORIGIN"))
        .add((X_XSS_PROTECTION, "0"))
        .add((REFERRER_POLICY, "no-referrer"))
        .add(("Cross-Origin-Resource-Policy", "same-origin"));

    // HTTPS 종단 뒤에서만 의미가 있음
    if environment.is_production() {
        headers.add((STRICT_TRANSPORT_SECURITY, "max-age=15552000; includeSubDomains"))
    } else {
        headers
    }
}
