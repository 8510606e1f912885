#![cfg_attr(not(debug_assertions), deny(unused_variables))]
#![cfg_attr(not(debug_assertions), deny(unused_imports))]
#![cfg_attr(not(debug_assertions), deny(dead_code))]
// Unused results is more often than not an error
#![deny(unused_must_use)]
#[macro_use]
extern crate logging;

mod auth;
mod chevre_client;
mod chevre_test_client;
mod error;
pub mod factory;
mod response;
mod result;
pub mod search;
mod util;

pub use auth::{AccessToken, AuthClient, ClientCredentials};
pub use chevre_client::{ChevreClient, HttpChevreClient};
pub use chevre_test_client::ChevreTestClient;
pub use error::ChevreError;
pub use response::*;
pub use result::ChevreResult;
