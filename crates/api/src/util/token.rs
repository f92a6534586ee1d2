use bloom_result::{create_error, Error};
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};

/// Raw credential token presented by the caller
///
/// Extracting the token performs no validation; the trust gate and the
/// credential decoder decide what it is worth.
pub struct AccessToken(String);

impl AccessToken {
    pub fn value(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AccessToken {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.headers().get("x-access-token").next() {
            Some(token) if !token.is_empty() => {
                Outcome::Success(AccessToken(token.to_string()))
            }
            _ => Outcome::Error((Status::Forbidden, create_error!(NotAuthorized))),
        }
    }
}
