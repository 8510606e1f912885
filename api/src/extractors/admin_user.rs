use super::AccessTokenExtractor;
use crate::auth::user::AdminUser;
use crate::errors::ApiError;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures::future::{err, ok, Ready};

impl FromRequest for AdminUser {
    type Config = ();
    type Error = ApiError;
    type Future = Ready<Result<AdminUser, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match AccessTokenExtractor::from_request(req) {
            Ok(token) => ok(AdminUser::new(&token.sub, req)),
            Err(e) => err(e),
        }
    }
}
