use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};
use thiserror::Error;

pub const SESSION_KEY_HEADER: &str = "session-key";

/// Session key taken from the `session-key` request header.
pub struct SessionKeyHeader<'r>(pub &'r str);

#[derive(Error, Debug)]
pub enum SessionKeyError {
    #[error("the session key is missing")]
    Missing,
    #[error("the session key is invalid")]
    Invalid,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionKeyHeader<'r> {
    type Error = SessionKeyError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        fn is_valid(key: &str) -> bool {
            !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric())
        }

        match request.headers().get_one(SESSION_KEY_HEADER) {
            None => Outcome::Error((Status::BadRequest, SessionKeyError::Missing)),
            Some(key) if is_valid(key) => Outcome::Success(SessionKeyHeader(key)),
            _ => Outcome::Error((Status::BadRequest, SessionKeyError::Invalid)),
        }
    }
}
