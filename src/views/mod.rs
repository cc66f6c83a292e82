//! Top-level views, one per game phase.
//!
//! Each view fetches its own round-scoped data on mount, runs until the user
//! acts, and returns an [`Outcome`] for the application loop to adopt. Views
//! never hold a reference to a state mutator; freshness comes from the
//! outcome, either a state the server already returned or an explicit
//! refresh request.

pub mod overview;
pub mod submission;
pub mod voting;

use crate::api::ApiError;
use crate::terminal::Terminal;
use crate::types::GameState;

/// What a view hands back to the application loop
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Adopt this state and re-route immediately
    StateChanged(GameState),
    /// Re-fetch `/state/` and re-route
    Refresh,
    /// Exit the client
    Quit,
}

pub(crate) enum RetryChoice {
    Retry,
    Quit,
}

/// Surface a failed load and ask whether to retry. Distinguishes "failed to
/// load" from "still loading" instead of silently keeping stale data.
pub(crate) async fn ask_retry(terminal: &mut Terminal, what: &str, err: &ApiError) -> RetryChoice {
    tracing::error!("failed to load {}: {}", what, err);
    println!("Failed to load {}: {}", what, err);

    match terminal.prompt("Press Enter to retry (q to quit):").await {
        Some(line) if line.eq_ignore_ascii_case("q") => RetryChoice::Quit,
        Some(_) => RetryChoice::Retry,
        None => RetryChoice::Quit,
    }
}
