use serde::Deserialize;

/// Bearer credential returned by the token exchange
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    // Always "bearer"; kept because the wire carries it
    pub token_type: String,
}

/// The authenticated identity for this process. Created at login, held in
/// memory only, immutable afterwards. Every API call takes it explicitly so a
/// fake session can be injected in tests without any ambient lookup.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    token: Token,
}

impl Session {
    pub fn new(username: String, token: Token) -> Self {
        Self { username, token }
    }

    /// The opaque credential sent as `Authorization: Bearer <token>`
    pub fn bearer(&self) -> &str {
        &self.token.access_token
    }
}
