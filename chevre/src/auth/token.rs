use crate::auth::access_token::AccessToken;
use crate::error::{ChevreError, HttpError};
use crate::util::{error_for_status, json_or_error};
use serde::Serialize;
use snafu::ResultExt;

/// OAuth2 client-credentials grant used for server-to-server calls.
#[derive(Clone, Debug)]
pub struct ClientCredentials {
    pub authorize_server_domain: String,
    pub client_id: String,
    pub client_secret: String,
    pub scopes: Vec<String>,
}

#[derive(Serialize)]
pub(crate) struct TokenRequest {
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(flatten)]
    pub grant_type: GrantType,
}

#[derive(Serialize)]
#[serde(tag = "grant_type", rename_all = "snake_case")]
pub(crate) enum GrantType {
    ClientCredentials,
}

impl From<&ClientCredentials> for TokenRequest {
    fn from(credentials: &ClientCredentials) -> Self {
        TokenRequest {
            client_id: credentials.client_id.clone(),
            scope: if credentials.scopes.is_empty() {
                None
            } else {
                Some(credentials.scopes.join(" "))
            },
            grant_type: GrantType::ClientCredentials,
        }
    }
}

pub(crate) struct TokenEndpoint {
    pub credentials: ClientCredentials,
    http: reqwest::Client,
}

impl TokenEndpoint {
    pub fn new(credentials: ClientCredentials, http: reqwest::Client) -> TokenEndpoint {
        TokenEndpoint { credentials, http }
    }

    pub fn url(&self) -> String {
        format!(
            "https://{}/oauth2/token",
            self.credentials
                .authorize_server_domain
                .trim_start_matches("https://")
                .trim_end_matches('/')
        )
    }

    pub async fn create(&self) -> Result<AccessToken, ChevreError> {
        let url = self.url();
        jlog!(log::Level::Debug, "chevre::auth", "Requesting access token", { "url": url });
        let request = TokenRequest::from(&self.credentials);
        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&request)
            .send()
            .await
            .context(HttpError { url: url.clone() })?;
        let resp = error_for_status(&url, resp)
            .await
            .map_err(|e| ChevreError::TokenError { message: e.to_string() })?;
        json_or_error(resp).await
    }
}
