use serde::{Deserialize, Serialize};

/// Short-lived code from the first handshake step. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestToken {
    pub code: String,
}

/// Outcome of a completed handshake, and the record the token store persists.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationResult {
    pub access_token: String,
    pub username: String,
}

impl std::fmt::Debug for AuthorizationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationResult")
            .field("access_token", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}

#[derive(Serialize)]
pub(crate) struct RequestTokenRequest<'a> {
    pub consumer_key: &'a str,
    pub redirect_uri: &'a str,
}

#[derive(Serialize)]
pub(crate) struct AccessTokenRequest<'a> {
    pub consumer_key: &'a str,
    pub code: &'a str,
}
