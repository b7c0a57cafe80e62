use crate::{
    api::{
        AuthResponse, LoginBody, LoginUser, SignupBody, SignupUser, StoriesResponse, StoryBody,
        StoryResponse, TokenBody, UserResponse,
    },
    client_utils, Session, Story, StoryApiResult, StoryDraft, StoryService, User,
};
use reqwest::{Client, Method};
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://hack-or-snooze-v3.herokuapp.com";

/// [`StoryService`] implementation over the hosted REST API.
pub struct HttpStoryService {
    base_url: String,
    client: Client,
}

#[derive(Clone, Default)]
pub struct HttpStoryServiceOptions {
    pub base_url: Option<String>,
    pub client: Option<Client>,
}

impl HttpStoryService {
    #[must_use]
    pub fn new(options: HttpStoryServiceOptions) -> Self {
        let HttpStoryServiceOptions { base_url, client } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);

        Self { base_url, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for HttpStoryService {
    fn default() -> Self {
        Self::new(HttpStoryServiceOptions::default())
    }
}

#[async_trait::async_trait]
impl StoryService for HttpStoryService {
    async fn list_stories(&self) -> StoryApiResult<Vec<Story>> {
        tracing::debug!("GET /stories");
        let response: StoriesResponse = client_utils::send_json(
            &self.client,
            Method::GET,
            &self.url("/stories"),
            None::<&()>,
        )
        .await?;
        Ok(response.stories)
    }

    async fn create_story(&self, session: &Session, draft: &StoryDraft) -> StoryApiResult<Story> {
        tracing::debug!(title = %draft.title, "POST /stories");
        let response: StoryResponse = client_utils::send_json(
            &self.client,
            Method::POST,
            &self.url("/stories"),
            Some(&StoryBody {
                token: &session.token,
                story: draft,
            }),
        )
        .await?;
        Ok(response.story)
    }

    async fn update_story(
        &self,
        session: &Session,
        story_id: &str,
        draft: &StoryDraft,
    ) -> StoryApiResult<Story> {
        tracing::debug!(story_id, "PUT /stories/{{id}}");
        let response: StoryResponse = client_utils::send_json(
            &self.client,
            Method::PUT,
            &self.url(&format!("/stories/{story_id}")),
            Some(&StoryBody {
                token: &session.token,
                story: draft,
            }),
        )
        .await?;
        Ok(response.story)
    }

    async fn delete_story(&self, session: &Session, story_id: &str) -> StoryApiResult<()> {
        tracing::debug!(story_id, "DELETE /stories/{{id}}");
        // The service echoes the deleted story back; nothing downstream
        // needs it.
        let _: Value = client_utils::send_json(
            &self.client,
            Method::DELETE,
            &self.url(&format!("/stories/{story_id}")),
            Some(&TokenBody {
                token: &session.token,
            }),
        )
        .await?;
        Ok(())
    }

    async fn signup(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> StoryApiResult<(User, Session)> {
        tracing::debug!(username, "POST /signup");
        let response: AuthResponse = client_utils::send_json(
            &self.client,
            Method::POST,
            &self.url("/signup"),
            Some(&SignupBody {
                user: SignupUser {
                    username,
                    password,
                    name,
                },
            }),
        )
        .await
        .map_err(client_utils::map_auth_status)?;
        let session = Session {
            username: response.user.username.clone(),
            token: response.token,
        };
        Ok((response.user, session))
    }

    async fn login(&self, username: &str, password: &str) -> StoryApiResult<(User, Session)> {
        tracing::debug!(username, "POST /login");
        let response: AuthResponse = client_utils::send_json(
            &self.client,
            Method::POST,
            &self.url("/login"),
            Some(&LoginBody {
                user: LoginUser { username, password },
            }),
        )
        .await
        .map_err(client_utils::map_auth_status)?;
        let session = Session {
            username: response.user.username.clone(),
            token: response.token,
        };
        Ok((response.user, session))
    }

    async fn fetch_user(&self, session: &Session) -> StoryApiResult<User> {
        tracing::debug!(username = %session.username, "GET /users/{{username}}");
        let response: UserResponse = client_utils::send_json(
            &self.client,
            Method::GET,
            &self.url(&format!(
                "/users/{}?token={}",
                session.username, session.token
            )),
            None::<&()>,
        )
        .await
        .map_err(client_utils::map_auth_status)?;
        Ok(response.user)
    }

    async fn set_favorite(
        &self,
        session: &Session,
        story_id: &str,
        favorited: bool,
    ) -> StoryApiResult<()> {
        let method = if favorited { Method::POST } else { Method::DELETE };
        tracing::debug!(story_id, favorited, "{} /users/{{username}}/favorites/{{storyId}}", method);
        let _: Value = client_utils::send_json(
            &self.client,
            method,
            &self.url(&format!(
                "/users/{}/favorites/{story_id}",
                session.username
            )),
            Some(&TokenBody {
                token: &session.token,
            }),
        )
        .await?;
        Ok(())
    }
}
