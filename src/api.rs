//! Authenticated REST client for the game backend.
//!
//! The backend owns all game logic; this client only issues requests and
//! decodes responses. Delimiter-encoded movie fields are parsed into
//! structured types here, at the boundary, via the wire conversions in
//! [`crate::types`].

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::session::{Session, Token};
use crate::types::{GameState, Round, RoundWire, SubmissionId};

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur talking to the backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("server rejected the request ({status}): {detail}")]
    Rejected { status: StatusCode, detail: String },

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

/// FastAPI-style rejection body
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct SubmissionRequest<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct VoteRequest<'a> {
    submission_id: SubmissionId,
    all_comments: &'a BTreeMap<SubmissionId, String>,
}

#[derive(Debug, Serialize)]
struct NewRoundRequest<'a> {
    prompt: &'a str,
}

/// Thin wrapper over a `reqwest::Client` pinned to one backend origin
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            base_url: config.backend_url.clone(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange username/password for a bearer token. The only unauthenticated
    /// call, and the only form-encoded one.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Token> {
        let response = self
            .http
            .post(self.url("/token/"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(ApiError::Transport)?;

        decode(check(response).await?).await
    }

    /// Attach the display name to the session, done once right after login
    pub async fn register(&self, session: &Session) -> ApiResult<()> {
        let response = self
            .http
            .post(self.url("/users/"))
            .bearer_auth(session.bearer())
            .json(&RegisterRequest {
                name: &session.username,
            })
            .send()
            .await
            .map_err(ApiError::Transport)?;

        check(response).await?;
        Ok(())
    }

    /// Fetch the current game phase (and the caller's player state)
    pub async fn fetch_state(&self, session: &Session) -> ApiResult<GameState> {
        let response = self
            .http
            .get(self.url("/state/"))
            .bearer_auth(session.bearer())
            .send()
            .await
            .map_err(ApiError::Transport)?;

        decode(check(response).await?).await
    }

    /// Fetch the active round: its prompt and submissions so far
    pub async fn fetch_round(&self, session: &Session) -> ApiResult<Round> {
        let response = self
            .http
            .get(self.url("/round/"))
            .bearer_auth(session.bearer())
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let wire: RoundWire = decode(check(response).await?).await?;
        Ok(wire.into())
    }

    /// Submit a movie for the active round. The backend identifies the
    /// submitter from the bearer credential and enforces one entry per user.
    pub async fn submit_movie(
        &self,
        session: &Session,
        name: &str,
        comment: Option<&str>,
    ) -> ApiResult<GameState> {
        let response = self
            .http
            .post(self.url("/submissions/"))
            .bearer_auth(session.bearer())
            .json(&SubmissionRequest { name, comment })
            .send()
            .await
            .map_err(ApiError::Transport)?;

        decode(check(response).await?).await
    }

    /// Cast the caller's single vote, committing every comment written so far.
    /// The response embeds the new game state.
    pub async fn cast_vote(
        &self,
        session: &Session,
        submission_id: SubmissionId,
        all_comments: &BTreeMap<SubmissionId, String>,
    ) -> ApiResult<GameState> {
        let response = self
            .http
            .post(self.url("/vote/"))
            .bearer_auth(session.bearer())
            .json(&VoteRequest {
                submission_id,
                all_comments,
            })
            .send()
            .await
            .map_err(ApiError::Transport)?;

        decode(check(response).await?).await
    }

    /// Fetch the history of completed rounds
    pub async fn fetch_rounds(&self, session: &Session) -> ApiResult<Vec<Round>> {
        let response = self
            .http
            .get(self.url("/rounds/"))
            .bearer_auth(session.bearer())
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let wire: Vec<RoundWire> = decode(check(response).await?).await?;
        Ok(wire.into_iter().map(Into::into).collect())
    }

    /// Post a new prompt, starting the next round. The response embeds the
    /// new game state.
    pub async fn start_round(&self, session: &Session, prompt: &str) -> ApiResult<GameState> {
        let response = self
            .http
            .post(self.url("/round/"))
            .bearer_auth(session.bearer())
            .json(&NewRoundRequest { prompt })
            .send()
            .await
            .map_err(ApiError::Transport)?;

        decode(check(response).await?).await
    }
}

/// Turn a non-2xx response into `Rejected`, surfacing the server's `detail`
/// message when the body carries one
async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = match response.bytes().await {
        Ok(body) => serde_json::from_slice::<ErrorBody>(&body)
            .map(|e| e.detail)
            .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned()),
        Err(_) => String::new(),
    };

    Err(ApiError::Rejected { status, detail })
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
