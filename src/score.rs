use std::cmp::Ordering;

use rocket::serde::{Deserialize, Serialize};

/// Result of a won game.
/// Scores are ordered from best to worst: fewer moves first,
/// then less time, then by name.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct Score {
    pub name: String,
    pub moves: u32,
    /// Seconds it took to guess the secret.
    pub time: u64,
}

/// Largest number of seconds any score store can hold.
pub const MAX_TIME: u64 = i64::MAX as u64;

impl Score {
    pub fn new(name: String, moves: u32, time: u64) -> Self {
        Self { name, moves, time }
    }

    pub fn win_message(&self) -> String {
        format!(
            "Congratulations {}! You guessed the number in {} moves and {} seconds.",
            self.name, self.moves, self.time
        )
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.moves
            .cmp(&other.moves)
            .then(self.time.cmp(&other.time))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
