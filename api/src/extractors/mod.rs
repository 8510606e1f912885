pub(crate) use self::access_token::*;
pub use self::json::*;

mod access_token;
mod admin_user;
mod json;
