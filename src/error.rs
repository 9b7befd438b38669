use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status. `message` carries the
    /// `error` field of the body when the endpoint supplies one.
    #[error("Erro na requisição: {status}")]
    Status { status: u16, message: Option<String> },

    #[error("login response did not contain a token")]
    MissingToken,

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("expected exactly {expected} genres, got {got}")]
    GenreCount { expected: usize, got: usize },

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn is_status(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }
}
