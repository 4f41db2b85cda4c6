//! 상관관계 ID 미들웨어
//!
//! 모든 요청에 [`RequestContext`](crate::domain::models::RequestContext)를 붙이고
//! 같은 ID를 `x-correlation-id` 응답 헤더로 돌려줍니다.
//! 파이프라인의 가장 바깥쪽(로거 바로 안쪽)에 위치해야 에러 응답에도 헤더가 붙습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::correlation_inner::CorrelationIdService;

#[derive(Debug, Clone, Copy, Default)]
pub struct CorrelationId;

impl<S, B> Transform<S, ServiceRequest> for CorrelationId
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = CorrelationIdService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorrelationIdService {
            service: Rc::new(service),
        }))
    }
}
