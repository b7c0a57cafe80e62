use serde::{Deserialize, Serialize};

use crate::{Story, StoryDraft, User};

// https://hackorsnoozev3.docs.apiary.io/

/// Response envelope for `GET /stories`.
#[derive(Debug, Deserialize)]
pub struct StoriesResponse {
    pub stories: Vec<Story>,
}

/// Response envelope for `POST /stories` and `PUT /stories/{id}`.
#[derive(Debug, Deserialize)]
pub struct StoryResponse {
    pub story: Story,
}

/// Response envelope for `POST /signup` and `POST /login`. The token rides
/// next to the user, not inside it.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Response envelope for `GET /users/{username}`.
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

/// Body for calls that carry only the session token: `DELETE /stories/{id}`
/// and the favorite add/remove endpoints.
#[derive(Debug, Serialize)]
pub struct TokenBody<'a> {
    pub token: &'a str,
}

/// Body for `POST /stories` and `PUT /stories/{id}`.
#[derive(Debug, Serialize)]
pub struct StoryBody<'a> {
    pub token: &'a str,
    pub story: &'a StoryDraft,
}

/// Body for `POST /signup`.
#[derive(Debug, Serialize)]
pub struct SignupBody<'a> {
    pub user: SignupUser<'a>,
}

#[derive(Debug, Serialize)]
pub struct SignupUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

/// Body for `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub user: LoginUser<'a>,
}

#[derive(Debug, Serialize)]
pub struct LoginUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
}
