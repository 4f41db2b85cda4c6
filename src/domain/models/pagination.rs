use serde::Serialize;

/// 조회할 페이지 (1부터 시작)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// 건너뛸 문서 수
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// 목록 응답에 포함되는 페이지 정보
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: u64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total.div_ceil(request.limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_is_zero_on_first_page() {
        assert_eq!(PageRequest::new(1, 20).skip(), 0);
        assert_eq!(PageRequest::new(0, 20).skip(), 0);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let pagination = Pagination::new(PageRequest::new(2, 10), 21);
        assert_eq!(pagination.total_pages, 3);

        let empty = Pagination::new(PageRequest::new(1, 10), 0);
        assert_eq!(empty.total_pages, 0);
    }
}
