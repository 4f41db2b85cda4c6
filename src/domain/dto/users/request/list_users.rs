//! 사용자 목록 조회 쿼리
//!
//! `page`와 `limit`이 모두 없으면 전체 활성 사용자를 반환하고,
//! 하나라도 있으면 페이지네이션이 적용됩니다 (기본 page=1, limit=20).

use serde::Deserialize;
use validator::Validate;

use crate::domain::models::pagination::PageRequest;

pub const DEFAULT_PAGE_LIMIT: u64 = 20;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListUsersQuery {
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: Option<u64>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<u64>,
}

impl ListUsersQuery {
    pub fn page_request(&self) -> Option<PageRequest> {
        if self.page.is_none() && self.limit.is_none() {
            return None;
        }

        Some(PageRequest::new(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        ))
    }
}
