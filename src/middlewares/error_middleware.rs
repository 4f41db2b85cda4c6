//! 에러 정규화 미들웨어
//!
//! 파이프라인 안쪽에서 발생한 모든 실패(핸들러 에러, 추출기 에러, 라우팅 실패,
//! Rate Limiting 거부, CORS 거부)를 하나의 JSON 봉투로 다시 씁니다.
//!
//! | 환경 | 본문 |
//! |------|------|
//! | development | `status`, 전체 `message`, `error`(종류/상태/운영 여부), `stack`, `correlationId` |
//! | 그 외, 운영 에러 | `status`, `message`, `correlationId` |
//! | 그 외, 비운영 에러 | 500, `"Something went wrong!"`, `correlationId` |
//!
//! 에러는 여기서 한 번만 로그로 남습니다 (4xx는 warn, 5xx는 error).

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::http::header::{HeaderMap, CONTENT_LENGTH, CONTENT_TYPE};
use actix_web::http::StatusCode;
use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpResponse, ResponseError, Result,
};

use crate::config::Environment;
use crate::errors::{AppError, ErrorBody, ErrorDetail, GENERIC_ERROR_MESSAGE};
use crate::middlewares::error_inner::ErrorNormalizerService;

pub const TOO_MANY_REQUESTS_MESSAGE: &str = "Too many requests, please try again later.";

pub struct ErrorNormalizer {
    environment: Environment,
}

impl ErrorNormalizer {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorNormalizer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ErrorNormalizerService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorNormalizerService {
            service: Rc::new(service),
            environment: self.environment,
        }))
    }
}

/// 프레임워크 에러를 [`AppError`]로 분류합니다.
///
/// 이미 `AppError`라면 그대로 사용하고, 그 외에는 원래 상태 코드를 기준으로 나눕니다.
pub fn classify(error: &Error, status: StatusCode) -> AppError {
    if let Some(app_error) = error.as_error::<AppError>() {
        return app_error.clone();
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        AppError::Http {
            status,
            message: TOO_MANY_REQUESTS_MESSAGE.to_string(),
        }
    } else if status.is_client_error() {
        AppError::Http {
            status,
            message: error.to_string(),
        }
    } else {
        AppError::InternalError(error.to_string())
    }
}

/// 환경 정책에 따라 에러 응답을 만듭니다.
///
/// `headers`는 원래 응답의 헤더로, 본문 관련 헤더를 제외하고 그대로 옮겨집니다
/// (예: `Retry-After`, `x-ratelimit-*`).
pub fn render_error(
    error: &AppError,
    correlation_id: &str,
    environment: Environment,
    headers: &HeaderMap,
) -> HttpResponse {
    let (status, body) = if environment.is_development() {
        (
            error.status_code(),
            ErrorBody {
                status: error.status(),
                message: error.to_string(),
                correlation_id: Some(correlation_id.to_string()),
                error: Some(ErrorDetail::from(error)),
                stack: Some(format!("{:?}", error)),
            },
        )
    } else if error.is_operational() {
        (
            error.status_code(),
            ErrorBody {
                status: error.status(),
                message: error.to_string(),
                correlation_id: Some(correlation_id.to_string()),
                error: None,
                stack: None,
            },
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody {
                status: "error",
                message: GENERIC_ERROR_MESSAGE.to_string(),
                correlation_id: Some(correlation_id.to_string()),
                error: None,
                stack: None,
            },
        )
    };

    let mut builder = HttpResponse::build(status);
    for (name, value) in headers {
        if name != CONTENT_TYPE && name != CONTENT_LENGTH {
            builder.append_header((name.clone(), value.clone()));
        }
    }
    builder.json(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::error::ErrorTooManyRequests;
    use actix_web::http::header::{HeaderName, HeaderValue};
    use serde_json::Value;

    fn body_json(response: HttpResponse) -> Value {
        let bytes = response.into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_app_error_is_kept_as_is() {
        let error: Error = AppError::user_not_found().into();
        assert_eq!(classify(&error, StatusCode::NOT_FOUND), AppError::user_not_found());
    }

    #[test]
    fn test_rate_limit_rejection_gets_fixed_message() {
        let error = ErrorTooManyRequests("quota exceeded");
        let classified = classify(&error, StatusCode::TOO_MANY_REQUESTS);

        assert_eq!(classified.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(classified.to_string(), TOO_MANY_REQUESTS_MESSAGE);
    }

    #[test]
    fn test_unknown_server_error_is_internal() {
        let error = actix_web::error::ErrorInternalServerError("pool exhausted");
        let classified = classify(&error, StatusCode::INTERNAL_SERVER_ERROR);

        assert!(!classified.is_operational());
    }

    #[test]
    fn test_production_hides_internal_details() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = render_error(&error, "cid-1", Environment::Production, &HeaderMap::new());

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], GENERIC_ERROR_MESSAGE);
        assert_eq!(body["correlationId"], "cid-1");
        assert!(body.get("stack").is_none());
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_production_keeps_operational_message() {
        let response = render_error(
            &AppError::user_not_found(),
            "cid-2",
            Environment::Production,
            &HeaderMap::new(),
        );

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "No user found with that ID");
    }

    #[test]
    fn test_development_includes_detail_and_stack() {
        let error = AppError::InternalError("boom".to_string());
        let response = render_error(&error, "cid-3", Environment::Development, &HeaderMap::new());

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response);
        assert_eq!(body["message"], "Internal server error: boom");
        assert_eq!(body["error"]["kind"], "InternalError");
        assert_eq!(body["error"]["isOperational"], false);
        assert!(body["stack"].as_str().unwrap().contains("InternalError"));
    }

    #[test]
    fn test_original_headers_are_carried_over() {
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("retry-after"), HeaderValue::from_static("60"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let error = AppError::Http {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: TOO_MANY_REQUESTS_MESSAGE.to_string(),
        };
        let response = render_error(&error, "cid-4", Environment::Test, &headers);

        assert_eq!(response.headers().get("retry-after").unwrap(), "60");
        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    }
}
