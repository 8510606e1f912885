use actix_web::http::StatusCode;
use api::controllers::status;

#[actix_rt::test]
async fn check() {
    let response = status::check().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
