use actix_web::HttpRequest;

/// The signed-in administrator performing a request.
#[derive(Clone, Debug)]
pub struct AdminUser {
    pub username: String,
    pub ip_address: Option<String>,
    pub uri: String,
    pub method: String,
}

impl AdminUser {
    pub fn new(username: &str, req: &HttpRequest) -> AdminUser {
        AdminUser {
            username: username.to_string(),
            ip_address: req.connection_info().realip_remote_addr().map(|i| i.to_string()),
            uri: req.uri().to_string(),
            method: req.method().to_string(),
        }
    }
}
