mod access_token;
mod auth_client;
mod token;

pub use self::access_token::AccessToken;
pub use self::auth_client::AuthClient;
pub use self::token::ClientCredentials;
