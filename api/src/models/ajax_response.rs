use actix_web::HttpResponse;
use serde_json::Value;

/// Body the admin screens expect from form submissions: both keys present, null on success.
#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AjaxResponse {
    pub validation: Option<Value>,
    pub error: Option<String>,
}

impl AjaxResponse {
    pub fn ok() -> HttpResponse {
        HttpResponse::Ok().json(AjaxResponse::default())
    }

    pub fn created() -> HttpResponse {
        HttpResponse::Created().json(AjaxResponse::default())
    }
}
