use crate::auth::claims::AccessToken;
use crate::config::Config;
use crate::errors::{ApiError, ApplicationError, AuthError};
use crate::server::GetAppState;
use actix_web::http::HeaderMap;
use actix_web::HttpRequest;

pub(crate) struct AccessTokenExtractor;
impl AccessTokenExtractor {
    pub fn from_request(req: &HttpRequest) -> Result<AccessToken, ApiError> {
        let state = req.state().ok();
        AccessTokenExtractor::from_headers(req.headers(), state.as_ref().map(|s| &s.config))
    }

    /// Decodes the bearer token; `config` is only needed once a token is present.
    pub fn from_headers(headers: &HeaderMap, config: Option<&Config>) -> Result<AccessToken, ApiError> {
        if let Some(auth_header) = headers.get("Authorization") {
            let mut parts = auth_header
                .to_str()
                .map_err(|_| ApplicationError::bad_request("Invalid auth header"))?
                .split_whitespace();
            if str::ne(parts.next().unwrap_or("None"), "Bearer") {
                return Err(AuthError::unauthorized("Authorization scheme not supported").into());
            }

            match parts.next() {
                Some(access_token) => {
                    let config = config
                        .ok_or_else(|| ApplicationError::new("AppState not configured for App".to_string()))?;
                    AccessToken::decode(access_token, &config.token_secret, &config.token_issuer)
                        .map_err(|_| AuthError::unauthorized("Invalid auth token").into())
                }
                None => Err(AuthError::unauthorized("No access token provided").into()),
            }
        } else {
            Err(AuthError::unauthorized("Missing auth token").into())
        }
    }
}
