use crate::errors::ApiError;
use actix_web::HttpResponse;

pub async fn check() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().finish())
}
