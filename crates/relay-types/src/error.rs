use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RelayError {
    /// The request never produced a response.
    #[error("cannot communicate with the server: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}: \"{body}\"")]
    Protocol { status: u16, body: String },

    /// Success status, but the body is outside the vocabulary the
    /// operation expects.
    #[error("unexpected response from server: \"{body}\"")]
    Contract { body: String },

    #[error("must generate a session id first")]
    MissingSessionId,

    #[error("session does not exist. try deleting or generating a new session")]
    SessionMissing,

    /// An edit targeted an id the local catalog does not hold. The local
    /// and remote views have diverged; this is a bug, not a user condition.
    #[error("session \"{0}\" is missing from the local catalog")]
    CatalogDesync(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("navigation error: {0}")]
    Navigation(String),
}

impl From<serde_json::Error> for RelayError {
    fn from(e: serde_json::Error) -> Self {
        RelayError::Serialization(e.to_string())
    }
}

impl RelayError {
    /// Hard faults signal an invariant violation and are logged instead of
    /// shown in the error banner.
    pub fn is_hard_fault(&self) -> bool {
        matches!(self, RelayError::CatalogDesync(_))
    }
}
