//! A mock [`StoryService`] for testing that tracks calls and yields
//! predefined results, so collection behavior can be exercised without a
//! network.

use std::{collections::VecDeque, sync::Mutex};

use crate::{
    Session, Story, StoryApiError, StoryApiResult, StoryDraft, StoryService, User,
};

/// One recorded call against the mock, with the arguments the caller passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    ListStories,
    CreateStory {
        token: String,
        draft: StoryDraft,
    },
    UpdateStory {
        token: String,
        story_id: String,
        draft: StoryDraft,
    },
    DeleteStory {
        token: String,
        story_id: String,
    },
    Signup {
        username: String,
    },
    Login {
        username: String,
    },
    FetchUser {
        username: String,
        token: String,
    },
    SetFavorite {
        token: String,
        story_id: String,
        favorited: bool,
    },
}

#[derive(Default)]
struct MockStoryServiceState {
    queued_story_lists: VecDeque<StoryApiResult<Vec<Story>>>,
    queued_stories: VecDeque<StoryApiResult<Story>>,
    queued_units: VecDeque<StoryApiResult<()>>,
    queued_auths: VecDeque<StoryApiResult<(User, Session)>>,
    queued_users: VecDeque<StoryApiResult<User>>,
    tracked_calls: Vec<ServiceCall>,
}

impl MockStoryServiceState {
    fn reset(&mut self) {
        self.tracked_calls.clear();
    }

    fn restore(&mut self) {
        self.queued_story_lists.clear();
        self.queued_stories.clear();
        self.queued_units.clear();
        self.queued_auths.clear();
        self.queued_users.clear();
        self.reset();
    }
}

/// A mock story service that tracks calls and yields predefined results.
///
/// Results are queued per return shape: `enqueue_list` feeds `list_stories`,
/// `enqueue_story` feeds `create_story`/`update_story`, `enqueue_unit` feeds
/// `delete_story`/`set_favorite`, `enqueue_auth` feeds `signup`/`login`, and
/// `enqueue_user` feeds `fetch_user`. A call with no queued result fails
/// with an `Invariant` error.
#[derive(Default)]
pub struct MockStoryService {
    state: Mutex<MockStoryServiceState>,
}

impl MockStoryService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_list(&self, result: StoryApiResult<Vec<Story>>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.queued_story_lists.push_back(result);
        drop(state);
        self
    }

    pub fn enqueue_story(&self, result: StoryApiResult<Story>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.queued_stories.push_back(result);
        drop(state);
        self
    }

    pub fn enqueue_unit(&self, result: StoryApiResult<()>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.queued_units.push_back(result);
        drop(state);
        self
    }

    pub fn enqueue_auth(&self, result: StoryApiResult<(User, Session)>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.queued_auths.push_back(result);
        drop(state);
        self
    }

    pub fn enqueue_user(&self, result: StoryApiResult<User>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.queued_users.push_back(result);
        drop(state);
        self
    }

    /// Retrieve the tracked calls accumulated so far.
    pub fn tracked_calls(&self) -> Vec<ServiceCall> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.clone()
    }

    /// Reset tracked calls without touching queued results.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.reset();
    }

    /// Clear both tracked calls and queued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.restore();
    }

    fn no_result(kind: &str) -> StoryApiError {
        StoryApiError::Invariant("mock", format!("no queued {kind} results available"))
    }
}

#[async_trait::async_trait]
impl StoryService for MockStoryService {
    async fn list_stories(&self) -> StoryApiResult<Vec<Story>> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(ServiceCall::ListStories);
        state
            .queued_story_lists
            .pop_front()
            .ok_or_else(|| Self::no_result("list"))?
    }

    async fn create_story(&self, session: &Session, draft: &StoryDraft) -> StoryApiResult<Story> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(ServiceCall::CreateStory {
            token: session.token.clone(),
            draft: draft.clone(),
        });
        state
            .queued_stories
            .pop_front()
            .ok_or_else(|| Self::no_result("story"))?
    }

    async fn update_story(
        &self,
        session: &Session,
        story_id: &str,
        draft: &StoryDraft,
    ) -> StoryApiResult<Story> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(ServiceCall::UpdateStory {
            token: session.token.clone(),
            story_id: story_id.to_string(),
            draft: draft.clone(),
        });
        state
            .queued_stories
            .pop_front()
            .ok_or_else(|| Self::no_result("story"))?
    }

    async fn delete_story(&self, session: &Session, story_id: &str) -> StoryApiResult<()> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(ServiceCall::DeleteStory {
            token: session.token.clone(),
            story_id: story_id.to_string(),
        });
        state
            .queued_units
            .pop_front()
            .ok_or_else(|| Self::no_result("unit"))?
    }

    async fn signup(
        &self,
        username: &str,
        _password: &str,
        _name: &str,
    ) -> StoryApiResult<(User, Session)> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(ServiceCall::Signup {
            username: username.to_string(),
        });
        state
            .queued_auths
            .pop_front()
            .ok_or_else(|| Self::no_result("auth"))?
    }

    async fn login(&self, username: &str, _password: &str) -> StoryApiResult<(User, Session)> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(ServiceCall::Login {
            username: username.to_string(),
        });
        state
            .queued_auths
            .pop_front()
            .ok_or_else(|| Self::no_result("auth"))?
    }

    async fn fetch_user(&self, session: &Session) -> StoryApiResult<User> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(ServiceCall::FetchUser {
            username: session.username.clone(),
            token: session.token.clone(),
        });
        state
            .queued_users
            .pop_front()
            .ok_or_else(|| Self::no_result("user"))?
    }

    async fn set_favorite(
        &self,
        session: &Session,
        story_id: &str,
        favorited: bool,
    ) -> StoryApiResult<()> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(ServiceCall::SetFavorite {
            token: session.token.clone(),
            story_id: story_id.to_string(),
            favorited,
        });
        state
            .queued_units
            .pop_front()
            .ok_or_else(|| Self::no_result("unit"))?
    }
}
