use sqlx::{any::AnyPoolOptions, AnyPool, Row};

use crate::leaderboard::Leaderboard;

use super::*;

/// Persists scores in a SQL database (SQLite or Postgres, picked by the url scheme).
pub struct DatabaseScoreStore {
    pool: AnyPool,
}

impl DatabaseScoreStore {
    /// Connects to the database at `database_url`
    /// and creates the `scores` table if it is missing.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(max_connections)
            // An in-memory SQLite database lives only as long as its connection
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(database_url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS scores (name TEXT NOT NULL, moves BIGINT NOT NULL, seconds BIGINT NOT NULL)",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

#[rocket::async_trait]
impl ScoreStore for DatabaseScoreStore {
    async fn fetch_best_score(&self) -> StoreResult<Option<Score>> {
        let response = sqlx::query("SELECT moves, seconds FROM scores ORDER BY moves ASC, seconds ASC LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        let row = match response {
            Some(row) => row,
            None => return Ok(None),
        };
        let moves = row.try_get::<i64, usize>(0)?;
        let seconds = row.try_get::<i64, usize>(1)?;

        // Names are compared here rather than in SQL, where the order depends on the collation
        let response = sqlx::query("SELECT name FROM scores WHERE moves = $1 AND seconds = $2")
            .bind(moves)
            .bind(seconds)
            .fetch_all(&self.pool)
            .await?;

        let moves = u32::try_from(moves).map_err(|_| StoreError::OutOfRange {
            column: "moves",
            value: moves.into(),
        })?;
        let time = u64::try_from(seconds).map_err(|_| StoreError::OutOfRange {
            column: "seconds",
            value: seconds.into(),
        })?;

        let mut ties = Leaderboard::default();
        for row in response {
            ties.add(Score::new(row.try_get::<String, usize>(0)?, moves, time));
        }
        Ok(ties.best().cloned())
    }

    async fn save_score(&self, score: Score) -> StoreResult<()> {
        let seconds = i64::try_from(score.time).map_err(|_| StoreError::OutOfRange {
            column: "seconds",
            value: score.time.into(),
        })?;

        sqlx::query("INSERT INTO scores (name, moves, seconds) VALUES ($1, $2, $3)")
            .bind(score.name)
            .bind(i64::from(score.moves))
            .bind(seconds)
            .execute(&self.pool)
            .await?;

        tracing::debug!("score saved to the database");
        Ok(())
    }
}
