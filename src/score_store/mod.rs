use thiserror::Error;

use crate::score::Score;

mod database;
mod memory;

pub use database::DatabaseScoreStore;
pub use memory::MemoryScoreStore;

/// Where won games end up.
/// What counts as the best score is decided by [`Score`]'s ordering.
#[rocket::async_trait]
pub trait ScoreStore: Send + Sync {
    async fn fetch_best_score(&self) -> StoreResult<Option<Score>>;
    async fn save_score(&self, score: Score) -> StoreResult<()>;
}

pub type SharedScoreStore = Box<dyn ScoreStore>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored score is out of range: {column} = {value}")]
    OutOfRange { column: &'static str, value: i128 },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
