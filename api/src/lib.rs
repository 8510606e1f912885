#![deny(unreachable_patterns)]
#![deny(unknown_lints)]
#![deny(unused_variables)]
#![deny(unused_imports)]
// Unused results is more often than not an error
#![deny(unused_must_use)]
extern crate actix_web;
extern crate chevre;
extern crate chrono;
extern crate dotenv;
extern crate jsonwebtoken as jwt;
#[macro_use]
extern crate log;
#[macro_use]
extern crate logging;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;
extern crate validator;
#[macro_use]
extern crate validator_derive;

pub mod auth;
pub mod config;
pub mod controllers;
pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod models;
mod routing;
pub mod server;
pub mod utils;
pub mod validators;
