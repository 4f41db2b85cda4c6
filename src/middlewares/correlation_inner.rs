//! CorrelationId 미들웨어의 요청 처리 로직
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::error::InternalError;
use actix_web::http::header::{HeaderMap, HeaderName};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::request_context::{RequestContext, CORRELATION_ID_HEADER};

pub struct CorrelationIdService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for CorrelationIdService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let context = RequestContext::from_headers(req.headers());

            // 핸들러와 에러 미들웨어가 같은 ID를 쓰도록 확장에 저장
            req.extensions_mut().insert(context.clone());

            match service.call(req).await {
                Ok(mut res) => {
                    tag_response(res.headers_mut(), &context);
                    Ok(res)
                }
                // 미들웨어가 Err로 끝낸 요청(Rate Limiting 등)도 같은 헤더를 받습니다.
                Err(error) => {
                    let mut response = error.error_response();
                    tag_response(response.headers_mut(), &context);
                    Err(InternalError::from_response(error.to_string(), response).into())
                }
            }
        })
    }
}

fn tag_response(headers: &mut HeaderMap, context: &RequestContext) {
    match context.header_value() {
        Ok(value) => {
            headers.insert(HeaderName::from_static(CORRELATION_ID_HEADER), value);
        }
        Err(err) => {
            context.warn(format_args!("상관관계 ID 헤더 설정 실패: {}", err));
        }
    }
}
