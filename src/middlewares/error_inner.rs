//! ErrorNormalizer 미들웨어의 요청 처리 로직
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::error::InternalError;
use actix_web::http::header::HeaderMap;
use actix_web::http::{Method, StatusCode};
use actix_web::{Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::config::Environment;
use crate::domain::models::RequestContext;
use crate::middlewares::error_middleware::{classify, render_error};

pub struct ErrorNormalizerService<S> {
    pub service: Rc<S>,
    pub environment: Environment,
}

/// 에러 로그와 응답에 필요한 요청 정보
///
/// 안쪽 서비스가 요청 헤드를 수정할 수 있도록 `HttpRequest` 대신 필요한 값만 복사해 둡니다.
struct RequestSummary {
    context: RequestContext,
    method: Method,
    path: String,
}

impl<S, B> Service<ServiceRequest> for ErrorNormalizerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let environment = self.environment;

        let summary = RequestSummary {
            context: req
                .extensions()
                .get::<RequestContext>()
                .cloned()
                .unwrap_or_else(|| RequestContext::from_headers(req.headers())),
            method: req.method().clone(),
            path: req.path().to_string(),
        };

        Box::pin(async move {
            match service.call(req).await {
                Ok(res) => {
                    let normalized = res.response().error().map(|error| {
                        normalize(
                            error,
                            res.response().status(),
                            res.response().headers(),
                            &summary,
                            environment,
                        )
                    });

                    match normalized {
                        Some(response) => Ok(res.into_response(response).map_into_right_body()),
                        None => Ok(res.map_into_left_body()),
                    }
                }
                // 요청이 안쪽 서비스로 넘어갔으므로 Err 그대로 두되 본문만 정규화합니다.
                Err(error) => {
                    let original = error.error_response();
                    let response = normalize(
                        &error,
                        original.status(),
                        original.headers(),
                        &summary,
                        environment,
                    );
                    Err(InternalError::from_response(error.to_string(), response).into())
                }
            }
        })
    }
}

fn normalize(
    error: &Error,
    status: StatusCode,
    headers: &HeaderMap,
    summary: &RequestSummary,
    environment: Environment,
) -> HttpResponse {
    let context = &summary.context;
    let app_error = classify(error, status);

    if app_error.status_code().is_server_error() {
        context.error(format_args!(
            "💥 {} {} failed: {:?}",
            summary.method, summary.path, app_error
        ));
    } else {
        context.warn(format_args!(
            "⚠️ {} {} -> {}: {}",
            summary.method,
            summary.path,
            app_error.status_code().as_u16(),
            app_error
        ));
    }

    render_error(&app_error, context.correlation_id(), environment, headers)
}
