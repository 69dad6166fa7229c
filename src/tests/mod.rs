use std::time::{Duration, Instant};

use rocket::{
    http::{Header, Status},
    local::asynchronous::{Client, LocalResponse},
};

use crate::{
    api::{GameStarted, GuessRequest, GuessResponse, NewGame},
    game::GameSession,
    score::Score,
    score_store::{MemoryScoreStore, ScoreStore, SharedScoreStore, StoreError, StoreResult},
    session_keys::{SessionKey, SessionKeyError, SESSION_KEY_HEADER},
    sessions::{SessionStatus, Sessions},
};


const SESSION_TIMEOUT: Duration = Duration::from_secs(60);

/// A store that is always down
struct UnreachableScoreStore;

#[rocket::async_trait]
impl ScoreStore for UnreachableScoreStore {
    async fn fetch_best_score(&self) -> StoreResult<Option<Score>> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn save_score(&self, _score: Score) -> StoreResult<()> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}

async fn spawn_client_with(store: SharedScoreStore, sessions: Sessions) -> Client {
    let rocket = super::assemble(store, sessions);
    Client::tracked(rocket).await.expect("valid rocket instance")
}

async fn spawn_client() -> Client {
    spawn_client_with(
        Box::new(MemoryScoreStore::new()),
        Sessions::new(16, SESSION_TIMEOUT),
    )
    .await
}

/// Registers a game whose secret is known in advance
async fn insert_game(
    sessions: &Sessions,
    player_name: &str,
    secret: &str,
    started: Instant,
) -> SessionKey {
    let session = GameSession::with_secret(player_name, secret.parse().unwrap(), started).unwrap();
    sessions.insert(session).await
}

/// Starts a client with a single game whose secret is known in advance
async fn spawn_client_with_game(player_name: &str, secret: &str) -> (Client, SessionKey) {
    let sessions = Sessions::new(16, SESSION_TIMEOUT);
    let session_key = insert_game(&sessions, player_name, secret, Instant::now()).await;
    let client = spawn_client_with(Box::new(MemoryScoreStore::new()), sessions).await;
    (client, session_key)
}

async fn deserialize_response<'a, T: rocket::serde::DeserializeOwned>(
    response: LocalResponse<'a>,
) -> rocket::serde::json::serde_json::Result<T> {
    let string = response.into_string().await.unwrap();
    rocket::serde::json::serde_json::from_str(&string)
}

fn session_header(session_key: &str) -> Header<'static> {
    Header::new(SESSION_KEY_HEADER, session_key.to_owned())
}

fn guess_request(guess: &str) -> GuessRequest {
    GuessRequest {
        guess: guess.to_owned(),
    }
}

async fn fetch_best_score(client: &Client) -> Option<Score> {
    let response = client.get("/api/best-score").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    deserialize_response(response).await.unwrap()
}

async fn save_score<'a>(client: &'a Client, score: &Score) -> LocalResponse<'a> {
    client.post("/api/save-score").json(score).dispatch().await
}

async fn start_game<'a>(
    client: &'a Client,
    player_name: &str,
) -> Result<SessionKey, LocalResponse<'a>> {
    let response = client
        .post("/api/games")
        .json(&NewGame {
            player_name: player_name.to_owned(),
        })
        .dispatch()
        .await;
    if response.status() != Status::Ok {
        return Err(response);
    }

    let started = deserialize_response::<GameStarted>(response).await.unwrap();
    Ok(started.session_key)
}

async fn submit_guess<'a>(
    client: &'a Client,
    session_key: &str,
    guess: &str,
) -> Result<GuessResponse, LocalResponse<'a>> {
    let response = client
        .post("/api/games/current/guesses")
        .header(session_header(session_key))
        .json(&guess_request(guess))
        .dispatch()
        .await;
    if response.status() != Status::Ok {
        return Err(response);
    }

    Ok(deserialize_response(response).await.unwrap())
}

async fn game_status<'a>(
    client: &'a Client,
    session_key: &str,
) -> Result<SessionStatus, LocalResponse<'a>> {
    let response = client
        .get("/api/games/current")
        .header(session_header(session_key))
        .dispatch()
        .await;
    if response.status() != Status::Ok {
        return Err(response);
    }

    Ok(deserialize_response(response).await.unwrap())
}

#[rocket::async_test]
async fn index() {
    let client = spawn_client().await;
    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
}

/// Saves a few scores and fetches the best one back
#[rocket::async_test]
async fn save_fetch_best_score() {
    let client = spawn_client().await;
    assert_eq!(fetch_best_score(&client).await, None);

    let scores = vec![
        Score::new("alice".to_owned(), 8, 51),
        Score::new("bob".to_owned(), 5, 90),
    ];
    for score in &scores {
        assert_eq!(save_score(&client, score).await.status(), Status::Ok);
    }

    assert_eq!(fetch_best_score(&client).await, Some(scores[1].clone()));
    assert_eq!(fetch_best_score(&client).await, Some(scores[1].clone()));

    // Fail to save a nameless score
    let nameless = Score::new(String::new(), 1, 1);
    assert_eq!(save_score(&client, &nameless).await.status(), Status::BadRequest);
    assert_eq!(fetch_best_score(&client).await, Some(scores[1].clone()));
}

#[rocket::async_test]
async fn start_game_requires_a_name() {
    let client = spawn_client().await;

    let response = start_game(&client, "  ").await.unwrap_err();
    assert_eq!(response.status(), Status::BadRequest);

    let session_key = start_game(&client, "alice").await.unwrap();
    let status = game_status(&client, session_key.inner()).await.unwrap();
    assert_eq!(status.player_name, "alice");
    assert_eq!(status.moves, 0);
}

#[rocket::async_test]
async fn guess_requires_a_known_session() {
    let client = spawn_client().await;

    // No key at all
    let response = client
        .post("/api/games/current/guesses")
        .json(&guess_request("1234"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    // A key nobody was given
    let response = submit_guess(&client, "nosuchsession", "1234")
        .await
        .unwrap_err();
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn invalid_guess_is_not_a_move() {
    let (client, session_key) = spawn_client_with_game("alice", "1234").await;

    for guess in ["123", "1223", "abcd"] {
        let response = submit_guess(&client, session_key.inner(), guess).await.unwrap_err();
        assert_eq!(response.status(), Status::UnprocessableEntity);
    }

    let status = game_status(&client, session_key.inner()).await.unwrap();
    assert_eq!(status.moves, 0);
}

/// Plays a whole game: three misses, then the right guess
#[rocket::async_test]
async fn play_until_won() {
    let (client, session_key) = spawn_client_with_game("alice", "1234").await;

    let misses = [("1243", "++--"), ("5678", ""), ("2143", "----")];
    for (expected_moves, (guess, expected_feedback)) in (1..).zip(misses) {
        match submit_guess(&client, session_key.inner(), guess).await.unwrap() {
            GuessResponse::Miss {
                feedback, moves, ..
            } => {
                assert_eq!(feedback, expected_feedback);
                assert_eq!(moves, expected_moves);
            }
            response => panic!("unexpected response: {:?}", response),
        }
    }

    match submit_guess(&client, session_key.inner(), "1234").await.unwrap() {
        GuessResponse::Won {
            message,
            score,
            best_score,
        } => {
            assert_eq!(score.name, "alice");
            assert_eq!(score.moves, 4);
            assert_eq!(message, score.win_message());
            assert_eq!(best_score, Some(score));
        }
        response => panic!("unexpected response: {:?}", response),
    }

    // The session is gone once won
    let response = game_status(&client, session_key.inner()).await.unwrap_err();
    assert_eq!(response.status(), Status::NotFound);
    assert!(fetch_best_score(&client).await.is_some());
}

#[rocket::async_test]
async fn abandon_game() {
    let client = spawn_client().await;
    let session_key = start_game(&client, "bob").await.unwrap();

    let response = client
        .delete("/api/games/current")
        .header(session_header(session_key.inner()))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let response = game_status(&client, session_key.inner()).await.unwrap_err();
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(fetch_best_score(&client).await, None);
}

/// A score the database could not hold is rejected by every store alike
#[rocket::async_test]
async fn save_score_rejects_out_of_range_time() {
    let client = spawn_client().await;

    let response = save_score(&client, &Score::new("x".to_owned(), 1, u64::MAX)).await;
    assert_eq!(response.status(), Status::UnprocessableEntity);
    assert_eq!(fetch_best_score(&client).await, None);

    let response = save_score(&client, &Score::new("x".to_owned(), u32::MAX, i64::MAX as u64)).await;
    assert_eq!(response.status(), Status::Ok);
}

/// Sessions nobody plays in are dropped after the timeout
#[rocket::async_test]
async fn idle_session_expires() {
    let sessions = Sessions::new(16, SESSION_TIMEOUT);
    let long_ago = Instant::now()
        .checked_sub(SESSION_TIMEOUT * 2)
        .unwrap();
    let idle_key = insert_game(&sessions, "idle", "1234", long_ago).await;
    let fresh_key = insert_game(&sessions, "fresh", "1234", Instant::now()).await;
    let client = spawn_client_with(Box::new(MemoryScoreStore::new()), sessions).await;

    let response = game_status(&client, idle_key.inner()).await.unwrap_err();
    assert_eq!(response.status(), Status::NotFound);
    let response = submit_guess(&client, idle_key.inner(), "1234").await.unwrap_err();
    assert_eq!(response.status(), Status::NotFound);

    let status = game_status(&client, fresh_key.inner()).await.unwrap();
    assert_eq!(status.player_name, "fresh");
}

/// A win whose score cannot be saved is reported as a server error
#[rocket::async_test]
async fn store_failure_on_win_is_reported() {
    let sessions = Sessions::new(16, SESSION_TIMEOUT);
    let session_key = insert_game(&sessions, "alice", "1234", Instant::now()).await;
    let client = spawn_client_with(Box::new(UnreachableScoreStore), sessions).await;

    // Misses never touch the store
    let response = submit_guess(&client, session_key.inner(), "4321").await.unwrap();
    assert!(matches!(response, GuessResponse::Miss { moves: 1, .. }));

    let response = submit_guess(&client, session_key.inner(), "1234").await.unwrap_err();
    assert_eq!(response.status(), Status::InternalServerError);
    let body = response.into_string().await.unwrap();
    assert!(body.contains("failed to access the score store"), "{}", body);

    let response = client.get("/api/best-score").dispatch().await;
    assert_eq!(response.status(), Status::InternalServerError);

    let response = save_score(&client, &Score::new("bob".to_owned(), 3, 10)).await;
    assert_eq!(response.status(), Status::InternalServerError);
}

#[test]
fn session_keys_are_random_alphanumeric() {
    let first = SessionKey::generate(16);
    let second = SessionKey::generate(16);

    assert_eq!(first.inner().len(), 16);
    assert!(first.inner().chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(first, second);
    assert_eq!(first.to_string(), first.inner());

    assert_eq!(SessionKeyError::Missing.to_string(), "the session key is missing");
}

/// A key with characters a generated key never has is refused outright
#[rocket::async_test]
async fn malformed_session_key_is_rejected() {
    let client = spawn_client().await;
    let response = game_status(&client, "not-a-key!").await.unwrap_err();
    assert_eq!(response.status(), Status::BadRequest);
}
