//! 공통 유틸리티 모듈
//!
//! # Modules
//!
//! - [`api_response`] - 성공 응답 봉투(`{ status, message, data }`) 생성 함수

pub mod api_response;

pub use api_response::ApiResponse;
