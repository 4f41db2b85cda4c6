//! 요청 컨텍스트
//!
//! 요청마다 하나씩 만들어지며 상관관계 ID(correlation ID)를 담습니다.
//! `CorrelationId` 미들웨어가 요청 확장(extensions)에 저장하고,
//! 핸들러는 인자로 선언해서 꺼내 씁니다.
//!
//! ```rust,ignore
//! #[get("/{user_id}")]
//! pub async fn get_user(ctx: RequestContext, ...) -> Result<HttpResponse, AppError> {
//!     ctx.info("Fetching user");   // [0190f5a2-...] Fetching user
//! }
//! ```
//!
//! 요청 바깥(시작/종료 과정)에서 쓰는 로그는 컨텍스트 없이 `log` 매크로를 직접 사용합니다.

use std::fmt::Display;

use actix_web::dev::Payload;
use actix_web::http::header::{HeaderMap, HeaderValue, InvalidHeaderValue};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use log::{debug, error, info, warn};
use uuid::Uuid;

/// 클라이언트가 상관관계 ID를 보낼 수 있는 헤더 (우선순위 순)
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    correlation_id: String,
    /// 클라이언트가 보낸 헤더 원본. 응답에는 이 바이트가 그대로 돌아갑니다.
    supplied: Option<HeaderValue>,
}

impl RequestContext {
    pub fn new(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: correlation_id.into(),
            supplied: None,
        }
    }

    fn from_supplied(value: &HeaderValue) -> Self {
        let lossy = String::from_utf8_lossy(value.as_bytes()).trim().to_string();

        Self {
            correlation_id: lossy,
            supplied: Some(value.clone()),
        }
    }

    /// 시간 순 정렬이 가능한 UUIDv7로 새 ID를 발급합니다.
    pub fn generate() -> Self {
        Self::new(Uuid::now_v7().to_string())
    }

    /// `x-correlation-id`, `x-request-id` 순서로 헤더를 확인하고
    /// 둘 다 없거나 공백뿐이면 새 ID를 발급합니다.
    ///
    /// UTF-8이 아닌 바이트(obs-text)가 섞인 값도 유효한 ID로 받아들입니다.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        [CORRELATION_ID_HEADER, REQUEST_ID_HEADER]
            .iter()
            .filter_map(|name| headers.get(*name))
            .find(|value| !value.as_bytes().iter().all(u8::is_ascii_whitespace))
            .map(Self::from_supplied)
            .unwrap_or_else(Self::generate)
    }

    /// 로그와 에러 본문에 쓰는 문자열 표현
    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    /// `x-correlation-id` 응답 헤더 값
    ///
    /// 클라이언트가 보낸 값이 있으면 바이트 그대로 돌려줍니다.
    pub fn header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        match &self.supplied {
            Some(value) => Ok(value.clone()),
            None => HeaderValue::from_str(&self.correlation_id),
        }
    }

    pub fn info(&self, message: impl Display) {
        info!("[{}] {}", self.correlation_id, message);
    }

    pub fn warn(&self, message: impl Display) {
        warn!("[{}] {}", self.correlation_id, message);
    }

    pub fn error(&self, message: impl Display) {
        error!("[{}] {}", self.correlation_id, message);
    }

    pub fn debug(&self, message: impl Display) {
        debug!("[{}] {}", self.correlation_id, message);
    }
}

impl FromRequest for RequestContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    /// 미들웨어를 거치지 않은 요청에서도 실패하지 않고 새 ID를 발급합니다.
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let context = req
            .extensions()
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_else(|| RequestContext::from_headers(req.headers()));

        ready(Ok(context))
    }
}
