use reqwest::StatusCode;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum ChevreError {
    #[snafu(display("Error occurred when calling {}: {}", url, source))]
    HttpError { url: String, source: reqwest::Error },
    #[snafu(display("Error reading HTTP response. Status: {}, Error:{}", status, source))]
    InvalidResponse { status: StatusCode, source: reqwest::Error },
    #[snafu(display("Could not deserialize response body:{}, Error:{}", body, source))]
    DeserializationError { body: String, source: serde_json::Error },
    #[snafu(display("Chevre returned {} for {}: {}", status, url, message))]
    ResponseError {
        url: String,
        status: StatusCode,
        message: String,
    },
    #[snafu(display("Could not obtain an access token: {}", message))]
    TokenError { message: String },
    #[snafu(display("{} {} not found", resource, id))]
    NotFound { resource: &'static str, id: String },
    #[snafu(display("Could not lock the client state because the mutex is poisoned"))]
    ConcurrencyError,
}

impl ChevreError {
    /// HTTP status of the remote answer, or 404 for a record that was looked up and not found.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ChevreError::InvalidResponse { status, .. } => Some(*status),
            ChevreError::ResponseError { status, .. } => Some(*status),
            ChevreError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            _ => None,
        }
    }

    pub fn not_found(resource: &'static str, id: &str) -> ChevreError {
        ChevreError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Message that can be shown to an administrator.
    pub fn user_message(&self) -> String {
        match self {
            ChevreError::ResponseError { message, .. } => message.clone(),
            ChevreError::NotFound { .. } => self.to_string(),
            _ => "The ticketing service could not process the request".to_string(),
        }
    }
}
