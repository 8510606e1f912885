use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

// Tokens are refreshed slightly before the authorization server would reject them.
const EXPIRY_MARGIN_SECONDS: i64 = 60;

#[derive(Clone, Debug, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.created_at + Duration::seconds(self.expires_in - EXPIRY_MARGIN_SECONDS) < now
    }
}
