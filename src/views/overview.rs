//! Overview phase: ranked round history plus the form that starts the next
//! round.

use crate::api::ApiClient;
use crate::render;
use crate::session::Session;
use crate::terminal::Terminal;
use crate::types::Round;
use crate::views::{ask_retry, Outcome, RetryChoice};

fn print_history(rounds: &[Round]) {
    if rounds.is_empty() {
        println!("No previous rounds (yet).");
        return;
    }

    for round in rounds {
        println!("Prompt: \"{}\"", round.prompt);
        for submission in render::rank_by_votes(&round.submissions) {
            println!("  {}", render::render_result_line(submission));
            for comment in &submission.comments {
                println!("  {}", render::render_comment(comment));
            }
        }
        println!();
    }
}

/// Run the overview view: show who is logged in, the ranked history of
/// completed rounds, and a prompt form. Posting a new prompt starts the next
/// round; its response embeds the new state, which is adopted directly.
pub async fn run(api: &ApiClient, session: &Session, terminal: &mut Terminal) -> Outcome {
    println!("Logged in user: {}", session.username);

    // Mount: fetch the round history
    let rounds = loop {
        match api.fetch_rounds(session).await {
            Ok(rounds) => break rounds,
            Err(e) => match ask_retry(terminal, "the round history", &e).await {
                RetryChoice::Retry => continue,
                RetryChoice::Quit => return Outcome::Quit,
            },
        }
    };

    print_history(&rounds);

    loop {
        let Some(line) = terminal
            .prompt("Enter a new prompt to start the next round (r to refresh, q to quit):")
            .await
        else {
            return Outcome::Quit;
        };

        match line.as_str() {
            "" => continue,
            "r" => return Outcome::Refresh,
            "q" => return Outcome::Quit,
            prompt => match api.start_round(session, prompt).await {
                Ok(state) => return Outcome::StateChanged(state),
                Err(e) => {
                    tracing::error!("starting a new round failed: {}", e);
                    println!("Could not start a new round: {}", e);
                }
            },
        }
    }
}
