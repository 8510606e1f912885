use crate::error::{DeserializationError, InvalidResponse, ResponseError};
use crate::result::ChevreResult;
use crate::ErrorResponse;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Response;
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use std::fmt;

pub(crate) const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

pub(crate) async fn json_or_error<T: DeserializeOwned>(resp: Response) -> ChevreResult<T> {
    let status = resp.status();
    let body = resp.text().await.context(InvalidResponse { status })?;
    let result: T = serde_json::from_str(&body).context(DeserializationError { body })?;
    Ok(result)
}

/// Turns a non-success response into `ChevreError::ResponseError`, keeping the API's message
/// when the body carries one.
pub(crate) async fn error_for_status(url: &str, resp: Response) -> ChevreResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.context(InvalidResponse { status })?;
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(error_response) => error_response.error.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };
    ResponseError {
        url: url.to_string(),
        status,
        message,
    }
    .fail()
}

pub(crate) fn total_count(resp: &Response) -> Option<u64> {
    resp.headers()
        .get(TOTAL_COUNT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

/// Flattens nested search conditions into `a[b][c]=v` pairs the remote API parses.
#[derive(Debug, Default, PartialEq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> QueryParams {
        QueryParams(Vec::new())
    }

    pub fn push<V: ToString>(&mut self, key: &str, value: V) {
        self.0.push((key.to_string(), value.to_string()));
    }

    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    pub fn push_all<V: fmt::Display>(&mut self, key: &str, values: &[V]) {
        for (index, value) in values.iter().enumerate() {
            self.push(&format!("{}[{}]", key, index), value);
        }
    }

    pub fn push_date(&mut self, key: &str, value: Option<DateTime<Utc>>) {
        if let Some(value) = value {
            self.push(key, value.to_rfc3339_opts(SecondsFormat::Millis, true));
        }
    }

    pub fn into_inner(self) -> Vec<(String, String)> {
        self.0
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}
