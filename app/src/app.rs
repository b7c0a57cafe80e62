use crate::{
    errors::AppError,
    session::{CredentialStore, StoredCredentials},
    view::ViewerContext,
};
use std::{collections::HashSet, sync::Arc};
use storyhub_sdk::{Session, Story, StoryDraft, StoryService, User};

/// The logged-in user together with the session token authorizing their
/// calls.
#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub user: User,
    pub session: Session,
}

/// The application-state container: the global story list, the current
/// session, and the service they are synchronized against.
///
/// Local collections always reflect the last known successful remote state.
/// Every mutating operation talks to the service first and touches local
/// state only after the call resolves `Ok`, propagating the result into
/// every derived collection (global list, own stories, favorites) that
/// should mention it.
pub struct App {
    service: Arc<dyn StoryService>,
    credentials: Box<dyn CredentialStore>,
    stories: Vec<Story>,
    session: Option<ActiveSession>,
    pending_favorites: HashSet<String>,
}

impl App {
    #[must_use]
    pub fn new(service: Arc<dyn StoryService>, credentials: Box<dyn CredentialStore>) -> Self {
        Self {
            service,
            credentials,
            stories: Vec::new(),
            session: None,
            pending_favorites: HashSet::new(),
        }
    }

    /// All known stories, most recent first.
    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|active| &active.user)
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref().map(|active| &active.session)
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// The current user's own stories, newest submission first. Empty when
    /// nobody is logged in.
    #[must_use]
    pub fn own_stories(&self) -> &[Story] {
        self.current_user()
            .map_or(&[], |user| user.own_stories.as_slice())
    }

    /// The current user's favorites. Empty when nobody is logged in.
    #[must_use]
    pub fn favorites(&self) -> &[Story] {
        self.current_user()
            .map_or(&[], |user| user.favorites.as_slice())
    }

    /// Whether the story id is in the current user's favorites. Pure
    /// function of local state; no network call.
    #[must_use]
    pub fn is_favorite(&self, story_id: &str) -> bool {
        self.favorites().iter().any(|story| story.id == story_id)
    }

    /// How the current viewer relates to the given story, for rendering.
    #[must_use]
    pub fn viewer_context(&self, story: &Story) -> ViewerContext {
        ViewerContext {
            logged_in: self.is_logged_in(),
            own_story: self
                .current_user()
                .is_some_and(|user| user.username == story.username),
            favorited: self.is_favorite(&story.id),
        }
    }

    /// Replace the global story list from the service.
    pub async fn load_stories(&mut self) -> Result<&[Story], AppError> {
        let stories = self.service.list_stories().await?;
        self.stories = stories;
        Ok(&self.stories)
    }

    /// Register a new user and start a session. A duplicate username fails
    /// with an auth error and leaves the app logged out; the failure is
    /// logged and re-raised so the caller cannot proceed with an invalid
    /// session.
    pub async fn signup(
        &mut self,
        username: &str,
        password: &str,
        name: &str,
    ) -> Result<&User, AppError> {
        match self.service.signup(username, password, name).await {
            Ok((user, session)) => Ok(self.install_session(user, session)),
            Err(error) => {
                tracing::error!(username, %error, "signup failed");
                Err(error.into())
            }
        }
    }

    /// Authenticate an existing user and start a session. Logged and
    /// re-raised on failure, like [`Self::signup`].
    pub async fn login(&mut self, username: &str, password: &str) -> Result<&User, AppError> {
        match self.service.login(username, password).await {
            Ok((user, session)) => Ok(self.install_session(user, session)),
            Err(error) => {
                tracing::error!(username, %error, "login failed");
                Err(error.into())
            }
        }
    }

    /// Silent login from stored credentials. Any failure is swallowed and
    /// treated as "no session": missing credentials, a rejected token, and
    /// transport errors all land here.
    pub async fn resume(&mut self) -> Option<&User> {
        let StoredCredentials { username, token } = self.credentials.load()?;
        let session = Session { username, token };
        match self.service.fetch_user(&session).await {
            Ok(user) => Some(self.install_session(user, session)),
            Err(error) => {
                tracing::warn!(%error, "silent login from stored credentials failed");
                None
            }
        }
    }

    /// End the session and forget the stored credentials.
    pub fn logout(&mut self) {
        self.session = None;
        self.pending_favorites.clear();
        self.credentials.clear();
    }

    /// Post a new story. On success the returned record, carrying the id
    /// the service assigned, is prepended to both the global list and the
    /// user's own stories.
    pub async fn submit_story(&mut self, draft: &StoryDraft) -> Result<&Story, AppError> {
        let session = self.require_session()?;
        let story = self.service.create_story(&session, draft).await?;

        if let Some(active) = self.session.as_mut() {
            active.user.own_stories.insert(0, story.clone());
        }
        self.stories.insert(0, story);
        Ok(&self.stories[0])
    }

    /// Replace the editable fields of an existing story. The updated record
    /// is propagated into every local collection that mentions its id.
    pub async fn edit_story(&mut self, story_id: &str, draft: &StoryDraft) -> Result<Story, AppError> {
        let session = self.require_session()?;
        let story = self.service.update_story(&session, story_id, draft).await?;

        replace_story(&mut self.stories, &story);
        if let Some(active) = self.session.as_mut() {
            replace_story(&mut active.user.own_stories, &story);
            replace_story(&mut active.user.favorites, &story);
        }
        Ok(story)
    }

    /// Delete a story by id. An id not present in the global list fails
    /// before any network call; a remote failure mutates nothing. On
    /// success the id is purged from the global list, the user's own
    /// stories, and their favorites.
    pub async fn remove_story(&mut self, story_id: &str) -> Result<(), AppError> {
        let session = self.require_session()?;
        if !self.stories.iter().any(|story| story.id == story_id) {
            return Err(AppError::UnknownStory(story_id.to_string()));
        }
        self.service.delete_story(&session, story_id).await?;

        self.stories.retain(|story| story.id != story_id);
        if let Some(active) = self.session.as_mut() {
            active.user.own_stories.retain(|story| story.id != story_id);
            active.user.favorites.retain(|story| story.id != story_id);
        }
        Ok(())
    }

    /// Flip the favorite state of a story. Issues the opposite remote call
    /// for the current local state and updates the local set only after the
    /// call settles; toggling twice restores the original set.
    ///
    /// A second toggle for the same story while one is in flight is
    /// rejected with [`AppError::FavoritePending`] instead of racing.
    /// Returns the new favorited state.
    pub async fn toggle_favorite(&mut self, story_id: &str) -> Result<bool, AppError> {
        let session = self.require_session()?;
        let story = self
            .stories
            .iter()
            .find(|story| story.id == story_id)
            .cloned()
            .ok_or_else(|| AppError::UnknownStory(story_id.to_string()))?;

        if !self.pending_favorites.insert(story_id.to_string()) {
            return Err(AppError::FavoritePending(story_id.to_string()));
        }
        let favorited = !self.is_favorite(story_id);
        let result = self.service.set_favorite(&session, story_id, favorited).await;
        self.pending_favorites.remove(story_id);
        result?;

        if let Some(active) = self.session.as_mut() {
            if favorited {
                active.user.favorites.push(story);
            } else {
                active.user.favorites.retain(|story| story.id != story_id);
            }
        }
        Ok(favorited)
    }

    fn install_session(&mut self, user: User, session: Session) -> &User {
        self.credentials.save(&StoredCredentials {
            username: session.username.clone(),
            token: session.token.clone(),
        });
        let active = self.session.insert(ActiveSession { user, session });
        &active.user
    }

    fn require_session(&self) -> Result<Session, AppError> {
        self.session
            .as_ref()
            .map(|active| active.session.clone())
            .ok_or(AppError::NotLoggedIn)
    }
}

/// Swap the record wherever its id already appears; absent ids are left
/// alone.
fn replace_story(collection: &mut [Story], updated: &Story) {
    for story in collection.iter_mut().filter(|story| story.id == updated.id) {
        *story = updated.clone();
    }
}
