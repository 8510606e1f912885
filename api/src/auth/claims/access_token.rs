use crate::jwt::errors::Error as JwtError;
use crate::jwt::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use chrono::{Duration, Utc};

/// Claims of the bearer token issued to an administrator by the sign-in service.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessToken {
    pub sub: String,
    pub iss: String,
    pub exp: u64,
}

impl AccessToken {
    pub fn new(username: &str, issuer: String, expiry_in_minutes: i64) -> Self {
        let exp = (Utc::now() + Duration::minutes(expiry_in_minutes)).timestamp().max(0) as u64;

        AccessToken {
            iss: issuer,
            sub: username.to_string(),
            exp,
        }
    }

    pub fn encode(&self, secret: &str) -> Result<String, JwtError> {
        encode(&Header::default(), self, &EncodingKey::from_secret(secret.as_bytes()))
    }

    pub fn decode(token: &str, secret: &str, issuer: &str) -> Result<AccessToken, JwtError> {
        let validation = Validation {
            iss: Some(issuer.to_string()),
            ..Validation::default()
        };
        decode::<AccessToken>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation).map(|t| t.claims)
    }
}
