use crate::errors::ApiError;
use crate::utils::logging::RequestLogData;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::Error;
use chrono::{DateTime, Utc};
use log::Level;

const TARGET: &str = "api::admin_logger";
// Load balancer health checks hit it continuously
const HEALTH_CHECK_PATH: &str = "/status";

/// Level a finished request is logged at, `None` when it succeeded.
pub fn failure_level(status: StatusCode) -> Option<Level> {
    if !status.is_client_error() && !status.is_server_error() {
        return None;
    }
    Some(match status {
        StatusCode::UNAUTHORIZED => Level::Info,
        s if s.is_client_error() => Level::Warn,
        _ => Level::Error,
    })
}

/// Which administrator called what, and why the call failed when it did.
///
/// Wired with `App::wrap_fn`:
/// `received` runs before the handler and `finished` after it.
pub struct AdminRequestLog {
    data: RequestLogData,
    received_at: DateTime<Utc>,
}

impl AdminRequestLog {
    /// `None` for health checks, which are not logged.
    pub fn received(req: &ServiceRequest) -> Option<AdminRequestLog> {
        let data = RequestLogData::from(req);
        if data.uri == HEALTH_CHECK_PATH {
            return None;
        }
        let message = format!(
            "{} {} by {}",
            data.method,
            data.uri,
            data.user.as_deref().unwrap_or("anonymous")
        );
        logging::transform_message(Level::Info, Some(TARGET), &message, Some(data.meta()));
        Some(AdminRequestLog {
            data,
            received_at: Utc::now(),
        })
    }

    pub fn finished<B>(&self, result: &Result<ServiceResponse<B>, Error>) {
        let (status, error) = match result {
            Ok(response) => (response.status(), response.response().error()),
            Err(error) => (error.as_response_error().status_code(), Some(error)),
        };
        let level = match failure_level(status) {
            Some(level) => level,
            None => return,
        };

        let mut meta = self.data.meta();
        if let Some(fields) = meta.as_object_mut() {
            fields.insert("status".to_string(), json!(status.as_u16()));
            fields.insert(
                "elapsed_ms".to_string(),
                json!((Utc::now() - self.received_at).num_milliseconds()),
            );
            let validation = error
                .and_then(|e| e.as_error::<ApiError>())
                .and_then(|e| e.into_inner().validation());
            if let Some(validation) = validation {
                fields.insert("validation".to_string(), validation);
            }
        }
        let message = match error {
            Some(error) => error.to_string(),
            None => format!("{} {} answered {}", self.data.method, self.data.uri, status),
        };
        logging::transform_message(level, Some(TARGET), &message, Some(meta));
    }
}
