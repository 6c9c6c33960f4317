use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The token endpoint rejected our credentials. Fatal: nothing else can
    /// succeed without an access token.
    #[error("authorization failed: {0}")]
    Auth(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error must abort the whole run instead of skipping the
    /// current video.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Auth(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
