use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Story API error: {0}")]
    Api(#[from] storyhub_sdk::StoryApiError),
    #[error("No user is logged in")]
    NotLoggedIn,
    #[error("Unknown story id: {0}")]
    UnknownStory(String),
    #[error("A favorite update for story {0} is already in flight")]
    FavoritePending(String),
}
