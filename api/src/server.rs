use crate::config::Config;
use crate::errors::{ApiError, ApplicationError};
use crate::middleware::AdminRequestLog;
use crate::routing;
use actix_cors::Cors;
use actix_service::Service;
use actix_web::middleware::Logger;
use actix_web::{http, HttpRequest, HttpResponse};
use actix_web::{web, web::Data, App, HttpServer};
use log::Level::{Debug, Warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// Must be valid JSON
const LOGGER_FORMAT: &str = r#"{"level": "INFO", "target":"api::request", "remote_ip":"%a", "user_agent": "%{User-Agent}i", "request": "%r", "status_code": %s, "response_time": %D}"#;

/// Order numbers each administrator has returned during this process's lifetime, oldest first.
pub type ReturningOrders = Arc<Mutex<HashMap<String, Vec<String>>>>;

/// Only the most recent returns are kept per administrator.
pub const MAX_RETURNING_ORDERS_PER_USER: usize = 100;

pub struct AppState {
    pub config: Config,
    pub returning_orders: ReturningOrders,
}

impl AppState {
    pub fn new(config: Config) -> AppState {
        AppState::with_returning_orders(config, Arc::new(Mutex::new(HashMap::new())))
    }

    pub fn with_returning_orders(config: Config, returning_orders: ReturningOrders) -> AppState {
        AppState {
            config,
            returning_orders,
        }
    }

    pub fn add_returning_order(&self, username: &str, order_number: &str) -> Result<(), ApiError> {
        let mut returning_orders = self
            .returning_orders
            .lock()
            .map_err(|_| ApplicationError::new("Returning orders lock poisoned".to_string()))?;
        let order_numbers = returning_orders.entry(username.to_string()).or_insert_with(Vec::new);
        order_numbers.retain(|n| n != order_number);
        order_numbers.push(order_number.to_string());
        if order_numbers.len() > MAX_RETURNING_ORDERS_PER_USER {
            let excess = order_numbers.len() - MAX_RETURNING_ORDERS_PER_USER;
            order_numbers.drain(..excess);
        }
        Ok(())
    }

    pub fn returning_orders_of(&self, username: &str) -> Result<Vec<String>, ApiError> {
        let returning_orders = self
            .returning_orders
            .lock()
            .map_err(|_| ApplicationError::new("Returning orders lock poisoned".to_string()))?;
        Ok(returning_orders.get(username).cloned().unwrap_or_default())
    }
}

pub(crate) trait GetAppState {
    fn state(&self) -> Result<Data<AppState>, ApiError>;
}

impl GetAppState for HttpRequest {
    fn state(&self) -> Result<Data<AppState>, ApiError> {
        self.app_data::<Data<AppState>>()
            .cloned()
            .ok_or_else(|| ApplicationError::new("AppState not configured for App".to_string()).into())
    }
}

pub struct Server;

impl Server {
    pub async fn start(config: Config) {
        jlog!(Debug, "api::server", "Server start requested", {"app_name": config.app_name, "environment": format!("{:?}", config.environment)});
        let bind_addr = format!("{}:{}", config.api_host, config.api_port);
        info!("Listening on {}", bind_addr);

        let conf = config.clone();
        let returning_orders: ReturningOrders = Arc::new(Mutex::new(HashMap::new()));

        let server = HttpServer::new(move || {
            App::new()
                .data(AppState::with_returning_orders(conf.clone(), returning_orders.clone()))
                .wrap({
                    let mut cors_config = Cors::default();
                    cors_config = match conf.allowed_origins.as_ref() {
                        "*" => cors_config.send_wildcard().allow_any_origin(),
                        _ => cors_config.allowed_origin(&conf.allowed_origins),
                    };
                    cors_config
                        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
                        .allowed_headers(vec![http::header::AUTHORIZATION, http::header::ACCEPT])
                        .allowed_header(http::header::CONTENT_TYPE)
                        .max_age(3600usize)
                })
                .wrap(Logger::new(LOGGER_FORMAT))
                .wrap_fn(|req, srv| {
                    let request_log = AdminRequestLog::received(&req);
                    let response = srv.call(req);
                    async move {
                        let response = response.await;
                        if let Some(request_log) = request_log {
                            request_log.finished(&response);
                        }
                        response
                    }
                })
                .configure(routing::routes)
                .default_service(web::route().to(|| async {
                    HttpResponse::NotFound().json(json!({"validation": null, "error": "Not found"}))
                }))
        });

        let server = match server.bind(&bind_addr) {
            Ok(server) => server,
            Err(e) => {
                jlog!(Warn, "api::server", "Can not bind", {"address": bind_addr, "error": e.to_string()});
                return;
            }
        };
        let server = match config.actix.workers {
            Some(workers) => server.workers(workers),
            None => server,
        };

        if let Err(e) = server.run().await {
            jlog!(Warn, "api::server", "Server exit with error", {"error": e.to_string()});
        }
    }
}
