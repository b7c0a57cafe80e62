use storyhub_sdk::{
    testing::{MockStoryService, ServiceCall},
    Session, Story, StoryApiError, StoryDraft, StoryService,
};

fn story(id: &str) -> Story {
    Story {
        id: id.to_string(),
        title: "A title".to_string(),
        author: "An author".to_string(),
        url: "http://x.com".to_string(),
        username: "alice".to_string(),
        created_at: "2020-01-01T00:00:00Z".to_string(),
    }
}

fn session() -> Session {
    Session {
        username: "alice".to_string(),
        token: "tok".to_string(),
    }
}

#[tokio::test]
async fn mock_yields_queued_results_in_order_and_tracks_calls() {
    let mock = MockStoryService::new();
    mock.enqueue_list(Ok(vec![story("1")]))
        .enqueue_list(Ok(vec![story("2")]));

    let first = mock.list_stories().await.expect("first queued list");
    assert_eq!(first[0].id, "1");
    let second = mock.list_stories().await.expect("second queued list");
    assert_eq!(second[0].id, "2");

    mock.enqueue_unit(Ok(()));
    mock.set_favorite(&session(), "2", true)
        .await
        .expect("queued unit");

    assert_eq!(
        mock.tracked_calls(),
        vec![
            ServiceCall::ListStories,
            ServiceCall::ListStories,
            ServiceCall::SetFavorite {
                token: "tok".to_string(),
                story_id: "2".to_string(),
                favorited: true,
            },
        ]
    );
}

#[tokio::test]
async fn mock_records_arguments_of_mutating_calls() {
    let mock = MockStoryService::new();
    let draft = StoryDraft {
        title: "B".to_string(),
        author: "X".to_string(),
        url: "http://x.com".to_string(),
    };

    mock.enqueue_story(Ok(story("new")));
    mock.create_story(&session(), &draft)
        .await
        .expect("queued story");

    assert_eq!(
        mock.tracked_calls(),
        vec![ServiceCall::CreateStory {
            token: "tok".to_string(),
            draft,
        }]
    );
}

#[tokio::test]
async fn exhausted_queue_fails_with_invariant() {
    let mock = MockStoryService::new();
    let error = mock.list_stories().await.expect_err("nothing queued");
    assert!(matches!(error, StoryApiError::Invariant("mock", _)));
}

#[tokio::test]
async fn queued_errors_propagate_and_restore_clears_everything() {
    let mock = MockStoryService::new();
    mock.enqueue_auth(Err(StoryApiError::Auth("bad password".to_string())));

    let error = mock
        .login("alice", "wrong")
        .await
        .expect_err("queued auth error");
    assert!(matches!(error, StoryApiError::Auth(_)));
    assert_eq!(mock.tracked_calls().len(), 1);

    mock.restore();
    assert!(mock.tracked_calls().is_empty());
}
