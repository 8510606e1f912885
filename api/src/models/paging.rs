use serde::Serialize;

pub const DEFAULT_LIMIT: u32 = 10;

/// Envelope of the admin list screens.
#[derive(Debug, Deserialize, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub count: u64,
    pub results: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(count: u64, results: Vec<T>) -> ListResponse<T> {
        ListResponse {
            success: true,
            count,
            results,
        }
    }

    /// Lists answer with an empty failure instead of an error status so the grid stays usable.
    pub fn failure() -> ListResponse<T> {
        ListResponse {
            success: false,
            count: 0,
            results: Vec::new(),
        }
    }
}

pub fn page_or_default(page: Option<u32>) -> u32 {
    page.filter(|p| *p > 0).unwrap_or(1)
}

pub fn limit_or_default(limit: Option<u32>) -> u32 {
    limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT)
}

/// The remote search does not report totals for these lists. A full page claims one more
/// record so the pager offers the next page.
pub fn paged_count(page: u32, limit: u32, len: usize) -> u64 {
    let (page, limit, len) = (page as u64, limit as u64, len as u64);
    if len == limit {
        page * limit + 1
    } else {
        (page.saturating_sub(1)) * limit + len
    }
}
