pub mod fixtures;

use actix_web::body::{Body, ResponseBody};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::Value;
use std::str;

pub fn unwrap_body_to_string(response: &HttpResponse) -> Result<&str, &'static str> {
    match response.body() {
        ResponseBody::Body(Body::Bytes(bytes)) => Ok(str::from_utf8(bytes.as_ref()).unwrap()),
        _ => Err("Unexpected response body"),
    }
}

pub fn unwrap_body_to_json(response: &HttpResponse) -> Value {
    serde_json::from_str(unwrap_body_to_string(response).unwrap()).unwrap()
}

pub fn expects_unprocessable(response: &HttpResponse, field: &str) {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = unwrap_body_to_json(response);
    assert!(
        body["validation"][field].is_object(),
        "expected a validation error for {} in {}",
        field,
        body
    );
}

pub fn expects_not_found(response: &HttpResponse) {
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = unwrap_body_to_json(response);
    assert_eq!(body["validation"], Value::Null);
    assert!(body["error"].is_string());
}
