//! 성공 응답 봉투
//!
//! 모든 성공 응답은 같은 모양을 가집니다.
//!
//! ```json
//! { "status": "success", "message": "...", "results": 2, "data": { ... } }
//! ```
//!
//! `results`는 목록 응답에서만, `data`는 값이 있을 때만 포함됩니다.
//! 에러 응답은 `middlewares::ErrorNormalizer`가 따로 만듭니다.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

pub const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: SUCCESS_STATUS,
            message: message.into(),
            results: None,
            data,
        }
    }

    pub fn with_results(mut self, results: usize) -> Self {
        self.results = Some(results);
        self
    }

    /// 지정한 상태 코드로 JSON 응답을 만듭니다.
    pub fn into_response(self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }

    pub fn success(status: StatusCode, message: impl Into<String>, data: Option<T>) -> HttpResponse {
        Self::new(message, data).into_response(status)
    }

    /// 200 + `results` 개수
    pub fn success_with_results(message: impl Into<String>, results: usize, data: T) -> HttpResponse {
        Self::new(message, Some(data))
            .with_results(results)
            .into_response(StatusCode::OK)
    }

    /// 201 Created
    pub fn created(message: impl Into<String>, data: T) -> HttpResponse {
        Self::new(message, Some(data)).into_response(StatusCode::CREATED)
    }
}

impl ApiResponse<()> {
    /// 204 No Content (본문 없음)
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }
}
