use std::{collections::HashMap, time::Duration};

use rocket::serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    api::{RequestError, RequestResult},
    game::{GameSession, GuessError, GuessOutcome},
    session_keys::SessionKey,
};

const MIN_KEY_LENGTH: usize = 8;

/// Games currently being played, keyed by their session key.
/// A session is dropped as soon as its secret is guessed,
/// or once nobody has made a move in it for `timeout`.
pub struct Sessions {
    games: Mutex<HashMap<SessionKey, GameSession>>,
    key_length: usize,
    timeout: Duration,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct SessionStatus {
    pub player_name: String,
    pub moves: u32,
    /// Seconds since the game started.
    pub elapsed: u64,
}

impl Sessions {
    pub fn new(key_length: usize, timeout: Duration) -> Self {
        Self {
            games: Mutex::new(HashMap::new()),
            key_length: key_length.max(MIN_KEY_LENGTH),
            timeout,
        }
    }

    /// Locks the registry, dropping idle sessions first.
    async fn live_games(&self) -> MutexGuard<'_, HashMap<SessionKey, GameSession>> {
        let mut games = self.games.lock().await;
        let before = games.len();
        games.retain(|_, session| session.idle_for() < self.timeout);
        let expired = before - games.len();
        if expired > 0 {
            tracing::info!(expired, "idle sessions dropped");
        }
        games
    }

    /// Registers the session under a freshly generated key.
    pub async fn insert(&self, session: GameSession) -> SessionKey {
        let mut games = self.live_games().await;
        let key = loop {
            let key = SessionKey::generate(self.key_length);
            if !games.contains_key(&key) {
                break key;
            }
        };
        tracing::debug!(session = %key, active = games.len() + 1, "session registered");
        games.insert(key.clone(), session);
        key
    }

    pub async fn status(&self, key: &str) -> RequestResult<SessionStatus> {
        let games = self.live_games().await;
        let session = games.get(key).ok_or_else(|| no_such_session(key))?;
        Ok(SessionStatus {
            player_name: session.player_name().to_owned(),
            moves: session.moves(),
            elapsed: session.elapsed_secs(),
        })
    }

    pub async fn submit_guess(&self, key: &str, guess: &str) -> RequestResult<GuessOutcome> {
        let mut games = self.live_games().await;
        let session = games.get_mut(key).ok_or_else(|| no_such_session(key))?;

        let outcome = session.submit_guess(guess).map_err(|error| {
            if let GuessError::InvalidFormat { input } = &error {
                tracing::debug!(input = %input, moves = session.moves(), "guess rejected");
            }
            error
        })?;
        if !session.is_active() {
            games.remove(key);
        }
        Ok(outcome)
    }

    /// Drops the session without recording a score.
    pub async fn abandon(&self, key: &str) -> RequestResult<()> {
        match self.live_games().await.remove(key) {
            Some(_) => Ok(()),
            None => Err(no_such_session(key)),
        }
    }
}

fn no_such_session(key: &str) -> RequestError {
    RequestError::NoSuchSession {
        key: key.to_owned(),
    }
}
