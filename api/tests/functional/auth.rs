use crate::support::test_request::TestRequest;
use actix_web::{http::StatusCode, test, web::Data, FromRequest, HttpRequest, ResponseError};
use api::auth::claims::AccessToken;
use api::auth::user::AdminUser;
use api::server::AppState;
use jwt::{encode, EncodingKey, Header};

fn request_with_header(state: Data<AppState>, authorization: Option<&str>) -> HttpRequest {
    let mut request = test::TestRequest::with_uri("/orders").app_data(state);
    if let Some(authorization) = authorization {
        request = request.header("Authorization", authorization);
    }
    request.to_http_request()
}

async fn rejected_with(authorization: Option<&str>) -> StatusCode {
    let test_request = TestRequest::create();
    let request = request_with_header(test_request.state(), authorization);
    match AdminUser::extract(&request).await {
        Ok(user) => panic!("Unexpected admin user {}", user.username),
        Err(e) => e.status_code(),
    }
}

#[actix_rt::test]
async fn valid_bearer_token() {
    let test_request = TestRequest::create();
    let token = AccessToken::new("someone@example.com", test_request.config.token_issuer.clone(), 60)
        .encode(&test_request.config.token_secret)
        .unwrap();
    let request = request_with_header(test_request.state(), Some(&format!("Bearer {}", token)));

    let user = AdminUser::extract(&request).await.unwrap();
    assert_eq!(user.username, "someone@example.com");
    assert_eq!(user.uri, "/orders");
    assert_eq!(user.method, "GET");
}

#[actix_rt::test]
async fn missing_authorization_header() {
    assert_eq!(rejected_with(None).await, StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn unsupported_scheme() {
    assert_eq!(rejected_with(Some("Basic YWRtaW46c2VjcmV0")).await, StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn bearer_without_token() {
    assert_eq!(rejected_with(Some("Bearer")).await, StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn malformed_token() {
    assert_eq!(rejected_with(Some("Bearer not-a-token")).await, StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn token_from_another_issuer() {
    let token = AccessToken::new("someone@example.com", "somewhere-else".to_string(), 60)
        .encode("test_secret")
        .unwrap();
    assert_eq!(
        rejected_with(Some(&format!("Bearer {}", token))).await,
        StatusCode::UNAUTHORIZED
    );
}

#[actix_rt::test]
async fn token_signed_with_another_secret() {
    let claims = json!({"sub": "someone@example.com", "iss": "chevre-admin-test", "exp": 4_102_444_800u64});
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"other-secret")).unwrap();
    assert_eq!(
        rejected_with(Some(&format!("Bearer {}", token))).await,
        StatusCode::UNAUTHORIZED
    );
}
