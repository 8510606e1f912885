pub use self::access_token::*;

mod access_token;
