//! Pagination utilities for service layer
//!
//! Out-of-range inputs are clamped to defaults rather than rejected.

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_BOUND: u64 = i64::MAX as u64;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: i64,
    /// items per page
    pub page_size: i64,
}

impl Pagination {
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self { page: page.unwrap_or(DEFAULT_PAGE), page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE) }
    }

    /// `page < 1` becomes 1, `page_size < 1` becomes 10.
    pub fn clamped(self) -> Self {
        let page = if self.page < 1 { DEFAULT_PAGE } else { self.page };
        let page_size = if self.page_size < 1 { DEFAULT_PAGE_SIZE } else { self.page_size };
        Self { page, page_size }
    }

    /// Clamp and convert to `(offset, limit)`. Both stay within `i64::MAX`,
    /// the widest value the SQL drivers bind.
    pub fn offset_limit(self) -> (u64, u64) {
        let Self { page, page_size } = self.clamped();
        let offset = (page as u64 - 1).saturating_mul(page_size as u64).min(MAX_BOUND);
        (offset, page_size as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: DEFAULT_PAGE, page_size: DEFAULT_PAGE_SIZE } }
}

/// `ceil(total / page_size)`, with non-positive sizes treated as the default.
pub fn total_pages(total: u64, page_size: i64) -> u64 {
    let page_size = (if page_size <= 0 { DEFAULT_PAGE_SIZE } else { page_size }) as u64;
    total.div_ceil(page_size)
}
