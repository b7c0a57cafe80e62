use crate::{Session, Story, StoryApiResult, StoryDraft, User};

/// The seam between the application layer and the remote story service.
///
/// Every mutating operation takes the caller's [`Session`]; the token in it
/// is the bearer credential for the call. Implementations must not hold any
/// story state of their own: collection bookkeeping belongs to the caller.
#[async_trait::async_trait]
pub trait StoryService: Send + Sync {
    /// Fetch the list of all known stories, most recent first. No auth
    /// required.
    async fn list_stories(&self) -> StoryApiResult<Vec<Story>>;

    /// Create a story from the draft. The returned record carries the id
    /// assigned by the service.
    async fn create_story(&self, session: &Session, draft: &StoryDraft) -> StoryApiResult<Story>;

    /// Replace the editable fields of an existing story.
    async fn update_story(
        &self,
        session: &Session,
        story_id: &str,
        draft: &StoryDraft,
    ) -> StoryApiResult<Story>;

    /// Delete a story by id.
    async fn delete_story(&self, session: &Session, story_id: &str) -> StoryApiResult<()>;

    /// Register a new user. Fails with [`crate::StoryApiError::Auth`] on a
    /// duplicate username, in which case no session is produced.
    async fn signup(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> StoryApiResult<(User, Session)>;

    /// Authenticate an existing user. Fails with
    /// [`crate::StoryApiError::Auth`] on bad credentials.
    async fn login(&self, username: &str, password: &str) -> StoryApiResult<(User, Session)>;

    /// Fetch the user behind an existing session. Used for silent re-login
    /// from stored credentials.
    async fn fetch_user(&self, session: &Session) -> StoryApiResult<User>;

    /// Mark or unmark a story as a favorite of the session's user. Each call
    /// is idempotent on the service side but not deduplicated: a duplicate
    /// add is masked only by the caller's set semantics.
    async fn set_favorite(
        &self,
        session: &Session,
        story_id: &str,
        favorited: bool,
    ) -> StoryApiResult<()>;
}
