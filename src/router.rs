//! Phase-driven view selection.
//!
//! A pure mapping from the server-reported phase to the view that should be
//! mounted. No transition is validated against the previous phase; the
//! backend's state machine is the single source of truth and any phase it
//! reports is accepted at face value.

use crate::types::{GameState, Phase};

/// The top-level views the client can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Submission,
    Voting,
    Overview,
    Fallback,
}

/// Select the view for a game state. Re-evaluated on every state update;
/// unrecognized phases get the fallback view rather than an error.
pub fn route(state: &GameState) -> View {
    match state.state {
        Phase::SubmissionState => View::Submission,
        Phase::VotingState => View::Voting,
        // Two revisions of the same phase name
        Phase::OverviewState | Phase::ResultState => View::Overview,
        Phase::Unknown => View::Fallback,
    }
}
