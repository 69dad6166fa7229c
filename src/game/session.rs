use std::time::{Duration, Instant};

use crate::score::Score;

use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was valid but not correct, the game goes on.
    Miss { feedback: Feedback, moves: u32 },
    /// The secret was guessed, the session is over.
    Won(Score),
}

/// A single game played by one player.
/// Created on "new game", mutated by every valid guess,
/// and deactivated once the secret is guessed.
#[derive(Clone, Debug)]
pub struct GameSession {
    player_name: String,
    secret: Secret,
    moves: u32,
    started: Instant,
    last_move: Instant,
    active: bool,
}

impl GameSession {
    /// Starts a new game with a random secret.
    /// Returns `None` if no player name is given.
    pub fn start(player_name: &str) -> Option<Self> {
        Self::with_secret(player_name, Secret::random(), Instant::now())
    }

    pub fn with_secret(player_name: &str, secret: Secret, started: Instant) -> Option<Self> {
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return None;
        }

        Some(Self {
            player_name: player_name.to_owned(),
            secret,
            moves: 0,
            started,
            last_move: started,
            active: true,
        })
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whole seconds since the game started.
    pub fn elapsed_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    /// Time since the last valid guess, or since the start if there was none.
    pub fn idle_for(&self) -> Duration {
        self.last_move.elapsed()
    }

    /// Validates and scores a guess.
    /// Invalid guesses leave the session untouched.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if !self.active {
            return Err(GuessError::GameOver);
        }
        let guess: Guess = input.parse()?;

        self.moves += 1;
        self.last_move = Instant::now();
        let feedback = guess.evaluate(&self.secret);
        if !feedback.is_win() {
            return Ok(GuessOutcome::Miss {
                feedback,
                moves: self.moves,
            });
        }

        self.active = false;
        Ok(GuessOutcome::Won(Score::new(
            self.player_name.clone(),
            self.moves,
            self.elapsed_secs(),
        )))
    }
}
