//! Voting phase: list all submissions, accumulate per-submission comments,
//! cast one vote.
//!
//! Comments live in a map owned by this view and are not sent as they are
//! typed; casting the single vote commits every non-empty comment written so
//! far, across the whole list, in one payload.

use std::collections::BTreeMap;

use crate::api::ApiClient;
use crate::render;
use crate::session::Session;
use crate::terminal::Terminal;
use crate::types::{Submission, SubmissionId};
use crate::views::{ask_retry, Outcome, RetryChoice};

#[derive(Debug, PartialEq)]
enum Command {
    Vote(usize),
    Comment(usize, String),
    Refresh,
    Quit,
    Invalid,
}

/// Parse one input line. Entry numbers are 1-based as displayed.
fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "v" | "vote" => match rest.parse() {
            Ok(n) => Command::Vote(n),
            Err(_) => Command::Invalid,
        },
        "c" | "comment" => match rest.split_once(char::is_whitespace) {
            Some((n, text)) => match n.parse() {
                Ok(n) => Command::Comment(n, text.trim().to_string()),
                Err(_) => Command::Invalid,
            },
            // "c 3" with no text clears the draft for entry 3
            None => match rest.parse() {
                Ok(n) => Command::Comment(n, String::new()),
                Err(_) => Command::Invalid,
            },
        },
        "r" | "refresh" => Command::Refresh,
        "q" | "quit" => Command::Quit,
        _ => Command::Invalid,
    }
}

/// Keep only non-empty drafts, keyed by submission id, for the vote payload
fn collect_comments(
    drafts: &BTreeMap<SubmissionId, String>,
) -> BTreeMap<SubmissionId, String> {
    drafts
        .iter()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(id, text)| (*id, text.trim().to_string()))
        .collect()
}

fn print_submissions(submissions: &[Submission], drafts: &BTreeMap<SubmissionId, String>) {
    for (i, submission) in submissions.iter().enumerate() {
        println!("[{}] {}", i + 1, render::render_movie_card(&submission.movie));
        println!("    Submitted by: {}", submission.submitting_user.name);
        if let Some(draft) = drafts.get(&submission.id) {
            if !draft.is_empty() {
                println!("    Your comment: {}", draft);
            }
        }
    }
}

/// Run the voting view. Whether the caller may vote at all (not twice, not
/// for their own submission) is the backend's rule; a rejected vote is
/// surfaced and the view stays usable.
pub async fn run(api: &ApiClient, session: &Session, terminal: &mut Terminal) -> Outcome {
    // Mount: fetch the submissions list
    let round = loop {
        match api.fetch_round(session).await {
            Ok(round) => break round,
            Err(e) => match ask_retry(terminal, "the submissions", &e).await {
                RetryChoice::Retry => continue,
                RetryChoice::Quit => return Outcome::Quit,
            },
        }
    };

    println!("Prompt: \"{}\"", round.prompt);
    println!("Voting is open. You have one vote.");

    let mut drafts: BTreeMap<SubmissionId, String> = BTreeMap::new();

    loop {
        print_submissions(&round.submissions, &drafts);

        let Some(line) = terminal
            .prompt("v <n> to vote, c <n> <text> to comment, r to refresh, q to quit:")
            .await
        else {
            return Outcome::Quit;
        };

        match parse_command(&line) {
            Command::Vote(n) => {
                let Some(submission) = n
                    .checked_sub(1)
                    .and_then(|i| round.submissions.get(i))
                else {
                    println!("No entry {}.", n);
                    continue;
                };

                let all_comments = collect_comments(&drafts);
                match api.cast_vote(session, submission.id, &all_comments).await {
                    // The vote response embeds the new state; no follow-up GET
                    Ok(state) => return Outcome::StateChanged(state),
                    Err(e) => {
                        tracing::error!("vote failed: {}", e);
                        println!("Vote failed: {}", e);
                    }
                }
            }
            Command::Comment(n, text) => {
                let Some(submission) = n
                    .checked_sub(1)
                    .and_then(|i| round.submissions.get(i))
                else {
                    println!("No entry {}.", n);
                    continue;
                };
                drafts.insert(submission.id, text);
            }
            Command::Refresh => return Outcome::Refresh,
            Command::Quit => return Outcome::Quit,
            Command::Invalid => println!("Didn't catch that."),
        }
    }
}
