//! Submission phase: show the prompt, collect one movie title.

use crate::api::ApiClient;
use crate::render;
use crate::session::Session;
use crate::terminal::Terminal;
use crate::types::{GameState, PlayerState};
use crate::views::{ask_retry, Outcome, RetryChoice};

/// Run the submission view. If the caller already submitted
/// (`player_state == closed`) only the waiting message is shown; otherwise
/// the form collects a title (required) and a comment (optional) and issues
/// exactly one POST per accepted action. On success the view adopts the
/// follow-up GET's state, never the POST's own response body.
pub async fn run(
    api: &ApiClient,
    session: &Session,
    state: &GameState,
    terminal: &mut Terminal,
) -> Outcome {
    if state.player_state == Some(PlayerState::Closed) {
        println!("{}", render::WAITING_MESSAGE);
        return match terminal
            .prompt("Press Enter to check for updates (q to quit):")
            .await
        {
            Some(line) if line.eq_ignore_ascii_case("q") => Outcome::Quit,
            Some(_) => Outcome::Refresh,
            None => Outcome::Quit,
        };
    }

    // Mount: fetch the round for its prompt
    let round = loop {
        match api.fetch_round(session).await {
            Ok(round) => break round,
            Err(e) => match ask_retry(terminal, "the current round", &e).await {
                RetryChoice::Retry => continue,
                RetryChoice::Quit => return Outcome::Quit,
            },
        }
    };

    println!("Prompt: \"{}\"", round.prompt);

    let Some(title) = terminal.prompt_required("Movie title:").await else {
        return Outcome::Quit;
    };
    let Some(comment) = terminal.prompt("Comment (optional):").await else {
        return Outcome::Quit;
    };
    let comment = (!comment.is_empty()).then_some(comment);

    if let Err(e) = api.submit_movie(session, &title, comment.as_deref()).await {
        tracing::error!("submission failed: {}", e);
        println!("Submission failed: {}", e);
        // Remount so the form is usable again
        return Outcome::Refresh;
    }
    tracing::debug!("submitted movie {:?}", title);

    // The POST succeeded; the refreshed state comes from its own GET
    loop {
        match api.fetch_state(session).await {
            Ok(state) => return Outcome::StateChanged(state),
            Err(e) => match ask_retry(terminal, "the game state", &e).await {
                RetryChoice::Retry => continue,
                RetryChoice::Quit => return Outcome::Quit,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::session::Token;
    use crate::types::Phase;
    use crate::views::testutil;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    fn fixtures() -> (ApiClient, Session) {
        let api = ApiClient::new(&Config::default()).unwrap();
        let session = Session::new(
            "alice".to_string(),
            serde_json::from_str::<Token>(r#"{"access_token": "t", "token_type": "bearer"}"#)
                .unwrap(),
        );
        (api, session)
    }

    #[tokio::test]
    async fn test_open_player_submits_exactly_once_and_adopts_refetched_state() {
        let posts = testutil::Recorder::default();
        let recorder = posts.clone();

        // The POST body reports a different phase than the follow-up GET so
        // the outcome shows which one the view adopted
        let app = Router::new()
            .route("/round/", get(|| async { Json(testutil::round_json()) }))
            .route(
                "/submissions/",
                post(move |Json(body): Json<Value>| async move {
                    recorder.push(body);
                    Json(json!({ "state": "OverviewState" }))
                }),
            )
            .route(
                "/state/",
                get(|| async { Json(json!({ "state": "VotingState" })) }),
            );

        let (api, session) = testutil::serve(app).await;
        let open = GameState {
            state: Phase::SubmissionState,
            player_state: Some(PlayerState::Open),
        };

        let mut terminal = Terminal::scripted(&["Pacific Rim", ""]);
        let outcome = run(&api, &session, &open, &mut terminal).await;

        // One accepted action, one POST; the empty comment was omitted
        let bodies = posts.bodies();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0], json!({ "name": "Pacific Rim" }));

        // The GET's state won, not the POST's
        assert_eq!(
            outcome,
            Outcome::StateChanged(GameState {
                state: Phase::VotingState,
                player_state: None,
            })
        );
    }

    fn closed_state() -> GameState {
        GameState {
            state: Phase::SubmissionState,
            player_state: Some(PlayerState::Closed),
        }
    }

    #[tokio::test]
    async fn test_closed_player_sees_waiting_message_not_form() {
        // With the form skipped, the only interaction is the refresh prompt;
        // no round fetch and no POST happen before it
        let (api, session) = fixtures();

        let mut terminal = Terminal::scripted(&[""]);
        let outcome = run(&api, &session, &closed_state(), &mut terminal).await;
        assert_eq!(outcome, Outcome::Refresh);
    }

    #[tokio::test]
    async fn test_closed_player_can_quit_from_waiting() {
        let (api, session) = fixtures();

        let mut terminal = Terminal::scripted(&["q"]);
        let outcome = run(&api, &session, &closed_state(), &mut terminal).await;
        assert_eq!(outcome, Outcome::Quit);
    }
}
