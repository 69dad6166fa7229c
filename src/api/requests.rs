use super::*;

/// Returns the best score recorded so far, or `null` if nobody has won yet.
#[get("/best-score")]
pub async fn best_score(store: &State<SharedScoreStore>) -> RequestResult<Json<Option<Score>>> {
    let best = store.fetch_best_score().await?;
    Ok(Json(best))
}

/// Records a score in the store.
#[post("/save-score", format = "json", data = "<score>")]
pub async fn save_score(score: Json<Score>, store: &State<SharedScoreStore>) -> RequestResult<()> {
    let score = score.0;
    if score.name.trim().is_empty() {
        return Err(RequestError::MissingPlayerName);
    }
    if score.time > MAX_TIME {
        return Err(RequestError::ScoreOutOfRange {
            field: "time",
            value: score.time,
        });
    }

    tracing::info!(name = %score.name, moves = score.moves, time = score.time, "saving score");
    store.save_score(score).await?;
    Ok(())
}

/// Starts a new game for the player and returns the key of its session.
/// No session is created without a player name.
#[post("/games", format = "json", data = "<new_game>")]
pub async fn start_game(
    new_game: Json<NewGame>,
    sessions: &State<Sessions>,
) -> RequestResult<Json<GameStarted>> {
    let session = GameSession::start(&new_game.player_name).ok_or(RequestError::MissingPlayerName)?;
    let player_name = session.player_name().to_owned();

    let session_key = sessions.insert(session).await;
    tracing::info!(player = %player_name, "new game started");
    Ok(Json(GameStarted { session_key }))
}

#[get("/games/current")]
pub async fn game_status(
    session_key: SessionKeyHeader<'_>,
    sessions: &State<Sessions>,
) -> RequestResult<Json<SessionStatus>> {
    let status = sessions.status(session_key.0).await?;
    Ok(Json(status))
}

/// Scores a guess in the caller's session.
/// A winning guess ends the session, saves the score,
/// and reports the best score as it is after saving.
#[post("/games/current/guesses", format = "json", data = "<guess>")]
pub async fn submit_guess(
    session_key: SessionKeyHeader<'_>,
    guess: Json<GuessRequest>,
    sessions: &State<Sessions>,
    store: &State<SharedScoreStore>,
) -> RequestResult<Json<GuessResponse>> {
    let outcome = sessions.submit_guess(session_key.0, &guess.guess).await?;

    let response = match outcome {
        GuessOutcome::Miss { feedback, moves } => GuessResponse::Miss {
            feedback: feedback.to_string(),
            plus: feedback.plus,
            minus: feedback.minus,
            moves,
        },
        GuessOutcome::Won(score) => {
            tracing::info!(player = %score.name, moves = score.moves, time = score.time, "secret guessed");
            store.save_score(score.clone()).await?;
            let best_score = store.fetch_best_score().await?;
            GuessResponse::Won {
                message: score.win_message(),
                score,
                best_score,
            }
        }
    };

    Ok(Json(response))
}

/// Ends the caller's session without recording a score.
#[delete("/games/current")]
pub async fn abandon_game(
    session_key: SessionKeyHeader<'_>,
    sessions: &State<Sessions>,
) -> RequestResult<()> {
    sessions.abandon(session_key.0).await
}
