//! # Domain Models Module
//!
//! 영속되지 않는 요청 단위 값 객체들입니다.
//!
//! - [`request_context`] - 요청별 상관관계 ID와 이를 붙여 기록하는 로거
//! - [`pagination`] - 목록 조회 페이지 계산

pub mod pagination;
pub mod request_context;

pub use pagination::{PageRequest, Pagination};
pub use request_context::RequestContext;
