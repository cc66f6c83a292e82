//! Presentational rendering of already-fetched data.
//!
//! Everything here is a pure function from parsed types to display strings;
//! no network calls and no string splitting (the API boundary already parsed
//! the delimiter-encoded fields).

use crate::types::{Comment, Movie, Person, Submission};

pub const WAITING_MESSAGE: &str = "Submission received. Waiting for the other players...";

pub fn render_person(person: &Person) -> String {
    match &person.picture_url {
        Some(url) => format!("{} <{}>", person.name, url),
        None => person.name.clone(),
    }
}

fn join_names(people: &[Person]) -> String {
    people
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Multi-line movie card: title, year and directors, cast, description
pub fn render_movie_card(movie: &Movie) -> String {
    let mut card = String::new();

    card.push_str(&movie.name);
    card.push('\n');

    let year = movie
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "????".to_string());
    card.push_str(&format!("  {} - {}\n", year, join_names(&movie.directors)));

    if !movie.genre.is_empty() {
        card.push_str(&format!("  Genre: {}\n", movie.genre));
    }

    if !movie.actors.is_empty() {
        card.push_str(&format!(
            "  Starring: {}\n",
            movie
                .actors
                .iter()
                .map(render_person)
                .collect::<Vec<_>>()
                .join("; ")
        ));
    }
    if !movie.description.is_empty() {
        card.push_str(&format!("  {}\n", movie.description));
    }
    if !movie.poster_url.is_empty() {
        card.push_str(&format!("  Poster: {}\n", movie.poster_url));
    }

    card
}

pub fn render_comment(comment: &Comment) -> String {
    format!("  > {}: {}", comment.author.name, comment.text)
}

/// One line of a ranked results list: movie, submitter, vote count and voters
pub fn render_result_line(submission: &Submission) -> String {
    let mut line = format!(
        "{} ({}): {} vote{}",
        submission.movie.name,
        submission.submitting_user.name,
        submission.vote_count(),
        if submission.vote_count() == 1 { "" } else { "s" },
    );
    if !submission.voting_users.is_empty() {
        let voters = submission
            .voting_users
            .iter()
            .map(|u| u.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        line.push_str(&format!(" [{}]", voters));
    }
    line
}

/// Order submissions by descending vote count. The sort is stable, so ties
/// keep the order the backend returned them in.
pub fn rank_by_votes(submissions: &[Submission]) -> Vec<&Submission> {
    let mut ranked: Vec<&Submission> = submissions.iter().collect();
    ranked.sort_by(|a, b| b.vote_count().cmp(&a.vote_count()));
    ranked
}
