#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error creating credential from JSON or JSON parameters. Unrecognized credential type {0}.")]
    UnrecognizedCredentialType(String),

    #[error("Error creating credential from JSON or JSON parameters. {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    HttpError(#[from] reqwest::Error),

    #[error(transparent)]
    CredentialsIOError(#[from] std::io::Error),

    #[error("Private Key is required")]
    NoPrivateKeyFound,

    #[error("scopes is required")]
    ScopeRequired,

    #[error("token endpoint responded with status {status}: {error} {error_description:?}")]
    TokenErrorResponse {
        status: u16,
        error: String,
        error_description: Option<String>,
    },

    #[error("invalid token")]
    InvalidToken,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct TokenErrorResponse {
    pub(crate) error: String,
    #[serde(default)]
    pub(crate) error_description: Option<String>,
}
