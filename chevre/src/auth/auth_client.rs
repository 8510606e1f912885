use crate::auth::access_token::AccessToken;
use crate::auth::token::{ClientCredentials, TokenEndpoint};
use crate::error::ChevreError;

/// Caches the last access token and requests a new one once it expires.
pub struct AuthClient {
    token: TokenEndpoint,
    last_access_token: Option<AccessToken>,
}

impl AuthClient {
    pub fn new(credentials: ClientCredentials, http: reqwest::Client) -> AuthClient {
        AuthClient {
            token: TokenEndpoint::new(credentials, http),
            last_access_token: None,
        }
    }

    pub async fn get_token(&mut self) -> Result<String, ChevreError> {
        match self.last_access_token.as_ref() {
            Some(token) if !token.is_expired() => Ok(token.access_token.clone()),
            _ => {
                let token = self.token.create().await?;
                let access_token = token.access_token.clone();
                self.last_access_token = Some(token);
                Ok(access_token)
            }
        }
    }
}
