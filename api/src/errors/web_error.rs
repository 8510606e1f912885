use crate::errors::*;
use crate::jwt::errors::{Error as JwtError, ErrorKind as JwtErrorKind};
use crate::validators::validation_errors_to_json;
use actix_web::{http::StatusCode, HttpResponse};
use chevre::ChevreError;
use serde_json::{Error as SerdeError, Value};
use std::error::Error;
use std::fmt::Debug;
use std::string::ToString;
use validator::ValidationErrors;

pub trait ConvertToWebError: Debug + Error + ToString {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    fn to_response(&self) -> HttpResponse;
    /// Field errors sent in the `validation` key of the body, if any.
    fn validation(&self) -> Option<Value> {
        None
    }
}

fn internal_error(message: &str) -> HttpResponse {
    status_code_and_message(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn unauthorized(message: &str) -> HttpResponse {
    status_code_and_message(StatusCode::UNAUTHORIZED, message)
}

/// Every error body carries both keys so AJAX callers can branch on either.
pub fn status_code_and_message(code: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(code).json(json!({"validation": null, "error": message.to_string()}))
}

impl ConvertToWebError for ApplicationError {
    fn status_code(&self) -> StatusCode {
        match self.error_type {
            ApplicationErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApplicationErrorType::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApplicationErrorType::BadRequest => StatusCode::BAD_REQUEST,
            ApplicationErrorType::NotFound => StatusCode::NOT_FOUND,
        }
    }
    fn to_response(&self) -> HttpResponse {
        warn!("Application error: {}", self);

        let message = match self.error_type {
            ApplicationErrorType::Internal => "Internal error",
            _ => &self.reason,
        };
        status_code_and_message(self.status_code(), message)
    }
}

impl ConvertToWebError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self.error_type {
            AuthErrorType::Forbidden => StatusCode::FORBIDDEN,
            AuthErrorType::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
    fn to_response(&self) -> HttpResponse {
        warn!("AuthError error: {}", self.reason);

        status_code_and_message(self.status_code(), &self.reason)
    }
}

impl ConvertToWebError for ChevreError {
    fn status_code(&self) -> StatusCode {
        match self.status() {
            Some(s) if s == StatusCode::BAD_REQUEST => StatusCode::BAD_REQUEST,
            Some(s) if s == StatusCode::NOT_FOUND => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn to_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Chevre error: {}", self);
            internal_error("The ticketing service could not process the request")
        } else {
            warn!("Chevre error: {}", self);
            status_code_and_message(status, &self.user_message())
        }
    }
}

impl ConvertToWebError for ValidationErrors {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }
    fn to_response(&self) -> HttpResponse {
        HttpResponse::UnprocessableEntity().json(json!({
            "validation": self.validation(),
            "error": null
        }))
    }
    fn validation(&self) -> Option<Value> {
        Some(validation_errors_to_json(self))
    }
}

impl ConvertToWebError for JwtError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
    fn to_response(&self) -> HttpResponse {
        match self.kind() {
            JwtErrorKind::ExpiredSignature => info!("JWT error: {}", self),
            _ => warn!("JWT error: {}", self),
        }
        unauthorized("Invalid token")
    }
}

impl ConvertToWebError for SerdeError {
    fn to_response(&self) -> HttpResponse {
        error!("Serde error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for chrono::ParseError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
    fn to_response(&self) -> HttpResponse {
        status_code_and_message(StatusCode::BAD_REQUEST, "Invalid input")
    }
}
