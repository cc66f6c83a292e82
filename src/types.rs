use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server-assigned ids; the client never mints these
pub type RoundId = u64;
pub type SubmissionId = u64;
pub type UserId = u64;

/// Server-reported game phase. Unrecognized or missing values deserialize to
/// `Unknown` instead of failing, so a newer backend never breaks routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    SubmissionState,
    VotingState,
    OverviewState,
    ResultState,
    #[serde(other)]
    #[default]
    Unknown,
}

/// Per-player refinement of the submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
    Open,
    Closed,
}

/// The backend's `/state/` payload, also embedded in mutating responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub state: Phase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_state: Option<PlayerState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub author: User,
    pub text: String,
}

/// A director or actor, parsed out of the backend's delimiter-encoded fields
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub picture_url: Option<String>,
}

impl Person {
    /// Parse one `name,picture_url` entry. Trailing fields may be missing; a
    /// bare name yields a person without a picture, a blank entry yields none.
    fn parse(encoded: &str) -> Option<Person> {
        let mut fields = encoded.split(',');
        let name = fields.next()?.trim();
        if name.is_empty() {
            return None;
        }
        let picture_url = fields
            .next()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        Some(Person {
            name: name.to_string(),
            picture_url,
        })
    }
}

/// Parse a `;`-separated list of people, dropping blank entries
pub fn parse_people(encoded: &str) -> Vec<Person> {
    encoded.split(';').filter_map(Person::parse).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub name: String,
    pub poster_url: String,
    pub description: String,
    pub genre: String,
    pub release_date: Option<NaiveDate>,
    pub directors: Vec<Person>,
    pub actors: Vec<Person>,
}

impl Movie {
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|d| d.year())
    }
}

/// One player's movie entry for a round, with attribution and votes
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: SubmissionId,
    pub movie: Movie,
    pub submitting_user: User,
    pub voting_users: Vec<User>,
    pub comments: Vec<Comment>,
}

impl Submission {
    pub fn vote_count(&self) -> usize {
        self.voting_users.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub id: RoundId,
    pub prompt: String,
    pub submissions: Vec<Submission>,
}

// ========== Wire shapes ==========
//
// These mirror the backend JSON exactly. Delimiter-encoded fields are parsed
// in the `From` conversions so nothing downstream ever splits a string.

#[derive(Debug, Clone, Deserialize)]
pub struct MovieWire {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub poster_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub actors: String,
    #[serde(default)]
    pub directors: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentWire {
    pub author: User,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionWire {
    pub id: SubmissionId,
    pub movie: MovieWire,
    pub submitting_user: User,
    #[serde(default)]
    pub voting_users: Vec<User>,
    #[serde(default)]
    pub comments: Vec<CommentWire>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoundWire {
    pub id: RoundId,
    pub prompt: String,
    #[serde(default)]
    pub submissions: Vec<SubmissionWire>,
}

impl From<MovieWire> for Movie {
    fn from(wire: MovieWire) -> Self {
        Movie {
            id: wire.id,
            name: wire.name,
            poster_url: wire.poster_url,
            description: wire.description,
            genre: wire.genre,
            release_date: NaiveDate::parse_from_str(&wire.release_date, "%Y-%m-%d").ok(),
            directors: parse_people(&wire.directors),
            actors: parse_people(&wire.actors),
        }
    }
}

impl From<CommentWire> for Comment {
    fn from(wire: CommentWire) -> Self {
        Comment {
            author: wire.author,
            text: wire.text,
        }
    }
}

impl From<SubmissionWire> for Submission {
    fn from(wire: SubmissionWire) -> Self {
        Submission {
            id: wire.id,
            movie: wire.movie.into(),
            submitting_user: wire.submitting_user,
            voting_users: wire.voting_users,
            comments: wire.comments.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<RoundWire> for Round {
    fn from(wire: RoundWire) -> Self {
        Round {
            id: wire.id,
            prompt: wire.prompt,
            submissions: wire.submissions.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_deserializes_known_values() {
        let state: GameState = serde_json::from_str(r#"{"state": "SubmissionState"}"#).unwrap();
        assert_eq!(state.state, Phase::SubmissionState);
        assert_eq!(state.player_state, None);

        let state: GameState =
            serde_json::from_str(r#"{"state": "VotingState", "player_state": "open"}"#).unwrap();
        assert_eq!(state.state, Phase::VotingState);
        assert_eq!(state.player_state, Some(PlayerState::Open));
    }

    #[test]
    fn test_phase_tolerates_unknown_and_missing() {
        let state: GameState = serde_json::from_str(r#"{"state": "PodiumState"}"#).unwrap();
        assert_eq!(state.state, Phase::Unknown);

        let state: GameState = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(state.state, Phase::Unknown);
    }

    #[test]
    fn test_parse_person_full_entry() {
        let person = Person::parse("Rinko Kikuchi,https://example.com/rk.jpg").unwrap();
        assert_eq!(person.name, "Rinko Kikuchi");
        assert_eq!(
            person.picture_url.as_deref(),
            Some("https://example.com/rk.jpg")
        );
    }

    #[test]
    fn test_parse_person_bare_name() {
        let person = Person::parse("Idris Elba").unwrap();
        assert_eq!(person.name, "Idris Elba");
        assert_eq!(person.picture_url, None);

        // Trailing comma with nothing after it still renders the name
        let person = Person::parse("Idris Elba,").unwrap();
        assert_eq!(person.picture_url, None);
    }

    #[test]
    fn test_parse_people_skips_blank_entries() {
        let people = parse_people("Guillermo del Toro,https://x/gdt.jpg;;Travis Beacham");
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "Guillermo del Toro");
        assert_eq!(people[1].name, "Travis Beacham");
        assert_eq!(people[1].picture_url, None);

        assert!(parse_people("").is_empty());
    }

    #[test]
    fn test_movie_wire_conversion_parses_once() {
        let wire = MovieWire {
            id: 7,
            name: "Pacific Rim".to_string(),
            poster_url: "https://x/poster.jpg".to_string(),
            description: "Jaegers vs kaiju".to_string(),
            genre: "Action".to_string(),
            release_date: "2013-07-12".to_string(),
            actors: "Idris Elba,https://x/ie.jpg;Rinko Kikuchi".to_string(),
            directors: "Guillermo del Toro".to_string(),
        };

        let movie: Movie = wire.into();
        assert_eq!(movie.release_year(), Some(2013));
        assert_eq!(movie.actors.len(), 2);
        assert_eq!(movie.directors[0].name, "Guillermo del Toro");
    }

    #[test]
    fn test_movie_wire_tolerates_unparseable_date() {
        let wire = MovieWire {
            id: 1,
            name: "Untitled".to_string(),
            poster_url: String::new(),
            description: String::new(),
            genre: String::new(),
            release_date: "unknown".to_string(),
            actors: String::new(),
            directors: String::new(),
        };

        let movie: Movie = wire.into();
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.release_year(), None);
    }
}
