extern crate api;
extern crate dotenv;
#[macro_use]
extern crate log;
#[macro_use]
extern crate logging;

use api::config::{Config, Environment};
use api::server::Server;
use dotenv::dotenv;
use log::Level::*;

#[actix_rt::main]
async fn main() {
    if let Err(e) = logging::setup_logger() {
        eprintln!("Logger could not be installed: {}", e);
    }
    info!("Loading environment");
    dotenv().ok();
    jlog!(Info, "Environment loaded");
    let config = Config::new(Environment::Development);
    jlog!(Info, "Starting server", {"app_name": config.app_name});
    Server::start(config).await;
    info!("Server stopped");
}
