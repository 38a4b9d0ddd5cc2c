pub const DEFAULT_PAGE_LIMIT: i64 = 50;
pub const MAX_PAGE_LIMIT: i64 = 200;

/// Limit/offset pair for list queries, clamped to sane bounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageWindow {
    limit: i64,
    offset: i64,
}

impl PageWindow {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT),
            offset: offset.unwrap_or(0).max(0),
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(None, None)
    }
}
