use rocket::{http::Status, response::Responder, Request};
use thiserror::Error;

use crate::{game::GuessError, score_store::StoreError};

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("a player name is required")]
    MissingPlayerName,
    #[error("{field} is out of range: {value}")]
    ScoreOutOfRange { field: &'static str, value: u64 },
    #[error("no game session with the key {key} exists")]
    NoSuchSession { key: String },
    #[error(transparent)]
    InvalidGuess(#[from] GuessError),
    #[error("failed to access the score store: {0}")]
    Store(#[from] StoreError),
}

impl RequestError {
    pub fn status(&self) -> Status {
        match self {
            Self::MissingPlayerName => Status::BadRequest,
            Self::ScoreOutOfRange { .. } => Status::UnprocessableEntity,
            Self::NoSuchSession { .. } => Status::NotFound,
            Self::InvalidGuess(GuessError::InvalidFormat { .. }) => Status::UnprocessableEntity,
            Self::InvalidGuess(GuessError::GameOver) => Status::Conflict,
            Self::Store(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for RequestError {
    fn respond_to(self, request: &'r Request<'_>) -> rocket::response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, self.to_string()).respond_to(request)
    }
}

pub type RequestResult<T, E = RequestError> = std::result::Result<T, E>;
