use rocket::serde::json::Json;
use rocket::*;

use crate::{
    game::{GameSession, GuessOutcome},
    score::{Score, MAX_TIME},
    score_store::SharedScoreStore,
    session_keys::SessionKeyHeader,
    sessions::{SessionStatus, Sessions},
};

mod payloads;
mod request_error;
pub mod requests;

pub use payloads::*;
pub use request_error::*;

/// Everything served under `/api`.
pub fn routes() -> Vec<Route> {
    routes![
        requests::best_score,
        requests::save_score,
        requests::start_game,
        requests::game_status,
        requests::submit_guess,
        requests::abandon_game,
    ]
}
