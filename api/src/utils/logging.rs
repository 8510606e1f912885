use crate::auth::user::AdminUser;
use crate::extractors::AccessTokenExtractor;
use crate::server::AppState;
use actix_web::{dev, http::header, web::Data};
use log::Level;
use serde_json::Value;

/// Logs `message` with the acting administrator and request attached to the JSON metadata.
pub fn log_request<IM, IV>(level: Level, module: &str, message: &str, req: IM, data: IV)
where
    IM: Into<LogMeta>,
    IV: Into<Value>,
{
    let meta: LogMeta = (req, data.into()).into();
    logging::transform_message(level, Some(module), message, Some(meta.into()));
}

pub struct LogMeta(Value);

impl From<&RequestLogData> for LogMeta {
    fn from(data: &RequestLogData) -> Self {
        LogMeta(json!({
            "user": data.user,
            "ip_address": data.ip_address,
            "uri": data.uri,
            "method": data.method,
            "api_version": env!("CARGO_PKG_VERSION"),
            "user_agent": data.user_agent
        }))
    }
}

impl From<&AdminUser> for LogMeta {
    fn from(user: &AdminUser) -> Self {
        LogMeta(json!({
            "user": user.username,
            "ip_address": user.ip_address,
            "uri": user.uri,
            "method": user.method,
            "api_version": env!("CARGO_PKG_VERSION")
        }))
    }
}

impl<IM> From<(IM, Value)> for LogMeta
where
    IM: Into<LogMeta>,
{
    fn from(data: (IM, Value)) -> Self {
        let (mut meta, value) = (data.0.into(), data.1);
        if let Some(fields) = meta.0.as_object_mut() {
            match value {
                Value::Object(map) => fields.extend(map),
                Value::Null => {}
                other => {
                    fields.insert("custom".to_string(), other);
                }
            }
        }
        meta
    }
}

impl From<LogMeta> for Value {
    fn from(meta: LogMeta) -> Value {
        meta.0
    }
}

pub struct RequestLogData {
    pub user: Option<String>,
    pub ip_address: Option<String>,
    pub method: String,
    pub user_agent: Option<String>,
    pub uri: String,
}

impl RequestLogData {
    pub fn meta(&self) -> Value {
        LogMeta::from(self).into()
    }
}

impl From<&dev::ServiceRequest> for RequestLogData {
    fn from(req: &dev::ServiceRequest) -> Self {
        let uri = req.uri().to_string();
        let config = req.app_data::<Data<AppState>>().map(|state| &state.config);
        let user = AccessTokenExtractor::from_headers(req.headers(), config)
            .ok()
            .map(|token| token.sub);
        let ip_address = req
            .connection_info()
            .realip_remote_addr()
            .map(|i| i.to_string());
        let method = req.method().to_string();
        let user_agent = req
            .headers()
            .get(header::USER_AGENT)
            .map(|ua| ua.to_str().unwrap_or("").to_string());
        Self {
            user,
            ip_address,
            method,
            user_agent,
            uri,
        }
    }
}
