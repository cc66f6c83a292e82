//! Application loop: login, then route views off the server-reported phase.

use crate::api::{ApiClient, ApiError};
use crate::router::{self, View};
use crate::session::Session;
use crate::terminal::Terminal;
use crate::types::GameState;
use crate::views::{self, ask_retry, Outcome, RetryChoice};

/// Login screen. Rejections surface the server's detail message and
/// re-prompt; nothing past this point runs without a session.
pub async fn login(api: &ApiClient, terminal: &mut Terminal) -> Option<Session> {
    loop {
        let username = terminal.prompt_required("Username:").await?;
        let password = terminal.prompt_required("Password:").await?;

        match api.login(&username, &password).await {
            Ok(token) => {
                tracing::info!("logged in as {}", username);
                return Some(Session::new(username, token));
            }
            Err(ApiError::Rejected { detail, .. }) if !detail.is_empty() => {
                println!("{}", detail);
            }
            Err(e) => {
                tracing::error!("login failed: {}", e);
                println!("Login failed: {}", e);
            }
        }
    }
}

async fn fetch_state_or_quit(
    api: &ApiClient,
    session: &Session,
    terminal: &mut Terminal,
) -> Option<GameState> {
    loop {
        match api.fetch_state(session).await {
            Ok(state) => return Some(state),
            Err(e) => match ask_retry(terminal, "the game state", &e).await {
                RetryChoice::Retry => continue,
                RetryChoice::Quit => return None,
            },
        }
    }
}

/// Unknown phase: nothing to render but an offer to re-fetch
async fn fallback(terminal: &mut Terminal) -> Outcome {
    println!("Oops");
    println!("The server reported a game phase this client doesn't know.");

    match terminal.prompt("Press Enter to refresh (q to quit):").await {
        Some(line) if line.eq_ignore_ascii_case("q") => Outcome::Quit,
        Some(_) => Outcome::Refresh,
        None => Outcome::Quit,
    }
}

/// Run the game loop for an authenticated session. The router is re-evaluated
/// on every adopted state; the client never polls, it re-fetches only after
/// its own actions or an explicit refresh.
pub async fn run(api: &ApiClient, session: &Session, terminal: &mut Terminal) {
    // Attach the display name. A rejection here (e.g. the name is already
    // registered) is not fatal to an existing player rejoining.
    if let Err(e) = api.register(session).await {
        tracing::warn!("user registration failed: {}", e);
    }

    let Some(mut state) = fetch_state_or_quit(api, session, terminal).await else {
        return;
    };

    loop {
        tracing::debug!("routing phase {:?}", state.state);

        let outcome = match router::route(&state) {
            View::Submission => views::submission::run(api, session, &state, terminal).await,
            View::Voting => views::voting::run(api, session, terminal).await,
            View::Overview => views::overview::run(api, session, terminal).await,
            View::Fallback => fallback(terminal).await,
        };

        match outcome {
            Outcome::StateChanged(next) => state = next,
            Outcome::Refresh => {
                let Some(next) = fetch_state_or_quit(api, session, terminal).await else {
                    return;
                };
                state = next;
            }
            Outcome::Quit => return,
        }
    }
}
