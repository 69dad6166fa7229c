use tokio::sync::Mutex;

use crate::{leaderboard::Leaderboard, score::MAX_TIME};

use super::*;

/// Keeps scores for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    leaderboard: Mutex<Leaderboard<Score>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[rocket::async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn fetch_best_score(&self) -> StoreResult<Option<Score>> {
        Ok(self.leaderboard.lock().await.best().cloned())
    }

    async fn save_score(&self, score: Score) -> StoreResult<()> {
        if score.time > MAX_TIME {
            return Err(StoreError::OutOfRange {
                column: "seconds",
                value: score.time.into(),
            });
        }

        let mut leaderboard = self.leaderboard.lock().await;
        leaderboard.add(score);
        tracing::debug!(scores = leaderboard.len(), "score saved in memory");
        Ok(())
    }
}
