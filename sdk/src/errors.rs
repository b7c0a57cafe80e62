use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoryApiError {
    /// The request could not be constructed from the given input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the service failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The credentials were rejected: bad username/password on login, a
    /// duplicate username on signup, or an invalid session token.
    #[error("Authentication failed: {0}")]
    Auth(String),
    /// The request returned a non-OK status code outside the auth taxonomy.
    #[error("Status error: {1} (Status {0})")]
    Status(reqwest::StatusCode, String),
    /// The response from the service had a shape the client does not
    /// recognize.
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type StoryApiResult<T> = Result<T, StoryApiError>;
