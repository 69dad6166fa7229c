use rocket::{get, launch, routes, Build, Rocket};
use tracing_subscriber::EnvFilter;

use config::Config;
use score_store::{DatabaseScoreStore, MemoryScoreStore, SharedScoreStore};
use sessions::Sessions;

mod api;
mod config;
mod game;
mod leaderboard;
mod score;
mod score_store;
mod session_keys;
mod sessions;
#[cfg(test)]
mod tests;

#[launch]
async fn rocket() -> _ {
    init_tracing();
    let config = Config::load();

    // Connect to a database
    let store: SharedScoreStore = match &config.database_url {
        Some(database_url) => Box::new(
            DatabaseScoreStore::connect(database_url, config.max_connections)
                .await
                .expect("failed to connect to a database"),
        ),
        None => {
            tracing::warn!("DATABASE_URL is not set, scores will be kept in memory");
            Box::new(MemoryScoreStore::new())
        }
    };

    assemble(
        store,
        Sessions::new(config.session_key_length, config.session_timeout),
    )
}

/// Builds the rocket around the given score store and session registry.
pub fn assemble(store: SharedScoreStore, sessions: Sessions) -> Rocket<Build> {
    rocket::build()
        .mount("/", routes![index])
        .mount("/api", api::routes())
        .manage::<SharedScoreStore>(store)
        .manage::<Sessions>(sessions)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Fails if a global subscriber is already set, in which case that one is used
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[get("/")]
fn index() -> &'static str {
    "Guess the 4-digit number! Start a game with POST /api/games."
}
