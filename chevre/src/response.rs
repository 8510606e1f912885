use serde::{Deserialize, Serialize};

/// One page of a search together with the total hit count when the API reports it.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<T> {
    pub total_count: Option<u64>,
    pub data: Vec<T>,
}

impl<T> SearchResult<T> {
    pub fn new(data: Vec<T>, total_count: Option<u64>) -> SearchResult<T> {
        SearchResult { total_count, data }
    }

    pub fn total_or_len(&self) -> u64 {
        self.total_count.unwrap_or(self.data.len() as u64)
    }
}

#[derive(Deserialize, Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorData,
}

#[derive(Deserialize, Debug, Serialize)]
pub struct ErrorData {
    pub code: Option<u16>,
    pub message: String,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}
