use rocket::serde::{Deserialize, Serialize};

use crate::{score::Score, session_keys::SessionKey};

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct NewGame {
    pub player_name: String,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct GameStarted {
    pub session_key: SessionKey,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct GuessRequest {
    pub guess: String,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde", tag = "outcome", rename_all = "snake_case")]
pub enum GuessResponse {
    Miss {
        /// `plus` times `+` followed by `minus` times `-`.
        feedback: String,
        plus: u8,
        minus: u8,
        moves: u32,
    },
    Won {
        message: String,
        score: Score,
        best_score: Option<Score>,
    },
}
