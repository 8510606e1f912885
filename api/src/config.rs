use chevre::{ChevreClient, ChevreTestClient, ClientCredentials, HttpChevreClient};
use dotenv::dotenv;
use std::env;

#[derive(Clone, Debug, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

#[derive(Clone)]
pub struct Actix {
    pub workers: Option<usize>,
}

#[derive(Clone)]
pub struct Config {
    pub actix: Actix,
    pub allowed_origins: String,
    pub api_host: String,
    pub api_port: String,
    pub app_name: String,
    pub environment: Environment,
    pub project_id: String,
    pub chevre_client: Box<dyn ChevreClient>,
    pub token_secret: String,
    pub token_issuer: String,
    pub pos_client_id: String,
    pub frontend_client_id: String,
    /// Minutes after the start of a screening at which online sales close. Negative closes before.
    pub default_offers_valid_after_start_in_minutes: i64,
    pub return_order_expires_in_minutes: i64,
}

const ACTIX_WORKERS: &str = "ACTIX_WORKERS";
const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
const API_HOST: &str = "API_HOST";
const API_PORT: &str = "API_PORT";
const APP_NAME: &str = "APP_NAME";
const PROJECT_ID: &str = "PROJECT_ID";
const TOKEN_SECRET: &str = "TOKEN_SECRET";
const TOKEN_ISSUER: &str = "TOKEN_ISSUER";
const POS_CLIENT_ID: &str = "POS_CLIENT_ID";
const FRONTEND_CLIENT_ID: &str = "FRONTEND_CLIENT_ID";
const DEFAULT_OFFERS_VALID_AFTER_START_IN_MINUTES: &str = "DEFAULT_OFFERS_VALID_AFTER_START_IN_MINUTES";
const RETURN_ORDER_EXPIRES_IN_MINUTES: &str = "RETURN_ORDER_EXPIRES_IN_MINUTES";

// Remote API settings
const CHEVRE_API_ENDPOINT: &str = "CHEVRE_API_ENDPOINT";
const CINERINO_API_ENDPOINT: &str = "CINERINO_API_ENDPOINT";
const CHEVRE_AUTHORIZE_SERVER_DOMAIN: &str = "CHEVRE_AUTHORIZE_SERVER_DOMAIN";
const CHEVRE_CLIENT_ID: &str = "CHEVRE_CLIENT_ID";
const CHEVRE_CLIENT_SECRET: &str = "CHEVRE_CLIENT_SECRET";
const CHEVRE_SCOPE: &str = "CHEVRE_SCOPE";

const TEST_ENDPOINT: &str = "TEST";

impl Config {
    pub fn new(environment: Environment) -> Self {
        dotenv().ok();

        if environment == Environment::Test {
            return Config::for_test();
        }

        let app_name = env::var(&APP_NAME).unwrap_or_else(|_| "Chevre Admin".to_string());
        let allowed_origins = env::var(&ALLOWED_ORIGINS).unwrap_or_else(|_| "*".to_string());
        let api_host = env::var(&API_HOST).unwrap_or_else(|_| "127.0.0.1".to_string());
        let api_port = env::var(&API_PORT).unwrap_or_else(|_| "8088".to_string());

        let project_id = env::var(&PROJECT_ID).unwrap_or_else(|_| panic!("{} must be defined.", PROJECT_ID));
        let token_secret = env::var(&TOKEN_SECRET).unwrap_or_else(|_| panic!("{} must be defined.", TOKEN_SECRET));
        let token_issuer = env::var(&TOKEN_ISSUER).unwrap_or_else(|_| panic!("{} must be defined.", TOKEN_ISSUER));

        let chevre_endpoint =
            env::var(&CHEVRE_API_ENDPOINT).unwrap_or_else(|_| panic!("{} must be defined.", CHEVRE_API_ENDPOINT));
        let cinerino_endpoint = env::var(&CINERINO_API_ENDPOINT).unwrap_or_else(|_| chevre_endpoint.clone());

        let chevre_client = if chevre_endpoint == TEST_ENDPOINT {
            Box::new(ChevreTestClient::new()) as Box<dyn ChevreClient>
        } else {
            let credentials = ClientCredentials {
                authorize_server_domain: env::var(&CHEVRE_AUTHORIZE_SERVER_DOMAIN)
                    .unwrap_or_else(|_| panic!("{} must be defined.", CHEVRE_AUTHORIZE_SERVER_DOMAIN)),
                client_id: env::var(&CHEVRE_CLIENT_ID)
                    .unwrap_or_else(|_| panic!("{} must be defined.", CHEVRE_CLIENT_ID)),
                client_secret: env::var(&CHEVRE_CLIENT_SECRET)
                    .unwrap_or_else(|_| panic!("{} must be defined.", CHEVRE_CLIENT_SECRET)),
                scopes: env::var(&CHEVRE_SCOPE)
                    .map(|s| s.split_whitespace().map(|s| s.to_string()).collect())
                    .unwrap_or_default(),
            };
            Box::new(HttpChevreClient::new(&chevre_endpoint, &cinerino_endpoint, credentials))
                as Box<dyn ChevreClient>
        };

        let pos_client_id = env::var(&POS_CLIENT_ID).unwrap_or_default();
        let frontend_client_id = env::var(&FRONTEND_CLIENT_ID).unwrap_or_default();

        let default_offers_valid_after_start_in_minutes = env::var(&DEFAULT_OFFERS_VALID_AFTER_START_IN_MINUTES)
            .map(|s| {
                s.parse()
                    .expect("Not a valid integer for default offers valid after start")
            })
            .unwrap_or(-20);
        let return_order_expires_in_minutes = env::var(&RETURN_ORDER_EXPIRES_IN_MINUTES)
            .map(|s| {
                s.parse()
                    .expect("Not a valid integer for return order expiry")
            })
            .unwrap_or(15);

        let workers = env::var(&ACTIX_WORKERS)
            .ok()
            .map(|s| s.parse().expect("Not a valid integer for workers"));

        Config {
            actix: Actix { workers },
            allowed_origins,
            api_host,
            api_port,
            app_name,
            environment,
            project_id,
            chevre_client,
            token_secret,
            token_issuer,
            pos_client_id,
            frontend_client_id,
            default_offers_valid_after_start_in_minutes,
            return_order_expires_in_minutes,
        }
    }

    fn for_test() -> Self {
        Config {
            actix: Actix { workers: Some(1) },
            allowed_origins: "*".to_string(),
            api_host: "127.0.0.1".to_string(),
            api_port: "8088".to_string(),
            app_name: "Chevre Admin".to_string(),
            environment: Environment::Test,
            project_id: "cinerino".to_string(),
            chevre_client: Box::new(ChevreTestClient::new()),
            token_secret: "test_secret".to_string(),
            token_issuer: "chevre-admin-test".to_string(),
            pos_client_id: "pos-client".to_string(),
            frontend_client_id: "frontend-client".to_string(),
            default_offers_valid_after_start_in_minutes: -20,
            return_order_expires_in_minutes: 15,
        }
    }
}
