//! Presentation-agnostic render layer: pure functions from records plus a
//! viewer context to markup fragments. Nothing here knows how the fragments
//! reach a screen, so the same core can back any UI.

use html_escape::{encode_double_quoted_attribute, encode_text};
use storyhub_sdk::{Story, User};

/// How the viewer relates to one story, decided by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerContext {
    /// Whether anyone is logged in; controls the favorite toggle.
    pub logged_in: bool,
    /// Whether the story belongs to the viewer; controls edit/delete.
    pub own_story: bool,
    pub favorited: bool,
}

/// Render one story as a list-item fragment: title as a link, hostname
/// annotation, author, poster username, plus the controls the viewer
/// context allows. All interpolated text is escaped.
#[must_use]
pub fn render_story(story: &Story, viewer: &ViewerContext) -> String {
    let mut markup = format!("<li id=\"{}\">", encode_double_quoted_attribute(&story.id));
    if viewer.own_story {
        markup.push_str(edit_control());
        markup.push_str(delete_control());
    }
    if viewer.logged_in {
        markup.push_str(&favorite_control(viewer.favorited));
    }
    markup.push_str(&format!(
        "<a href=\"{}\" target=\"a_blank\" class=\"story-link\">{}</a>",
        encode_double_quoted_attribute(&story.url),
        encode_text(&story.title),
    ));
    let host_name = story.host_name().unwrap_or_default();
    markup.push_str(&format!(
        "<small class=\"story-hostname\">({})</small>",
        encode_text(&host_name),
    ));
    markup.push_str(&format!(
        "<small class=\"story-author\">by {}</small>",
        encode_text(&story.author),
    ));
    markup.push_str(&format!(
        "<small class=\"story-user\">posted by {}</small>",
        encode_text(&story.username),
    ));
    markup.push_str("</li>");
    markup
}

/// Render a whole list, newest first, with a per-story viewer context.
/// Whole-list replacement, not incremental diffing; list sizes stay small
/// enough that simplicity wins.
#[must_use]
pub fn render_story_list(
    stories: &[Story],
    viewer_for: impl Fn(&Story) -> ViewerContext,
) -> String {
    stories
        .iter()
        .map(|story| render_story(story, &viewer_for(story)))
        .collect()
}

/// Render the user's own submissions, with edit/delete controls on every
/// entry and a placeholder when there are none.
#[must_use]
pub fn render_own_stories(user: &User) -> String {
    if user.own_stories.is_empty() {
        return format!(
            "<h3>No stories have been added by {} yet</h3>",
            encode_text(&user.username),
        );
    }
    render_story_list(&user.own_stories, |story| ViewerContext {
        logged_in: true,
        own_story: true,
        favorited: user.favorites.iter().any(|fav| fav.id == story.id),
    })
}

/// Render the user's favorites, all starred, with a placeholder when there
/// are none.
#[must_use]
pub fn render_favorites(user: &User) -> String {
    if user.favorites.is_empty() {
        return format!(
            "<h3>{} has no favorite stories currently</h3>",
            encode_text(&user.username),
        );
    }
    render_story_list(&user.favorites, |story| ViewerContext {
        logged_in: true,
        own_story: story.username == user.username,
        favorited: true,
    })
}

fn edit_control() -> &'static str {
    "<span class=\"pencil\"><i class=\"fa fa-pencil\" aria-hidden=\"true\"></i></span>"
}

fn delete_control() -> &'static str {
    "<button class=\"delete-button\">X</button>"
}

fn favorite_control(favorited: bool) -> String {
    let star_class = if favorited { "fas" } else { "far" };
    format!("<span class=\"star\"><i class=\"{star_class} fa-star\"></i></span>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story() -> Story {
        Story {
            id: "s1".to_string(),
            title: "A title".to_string(),
            author: "An author".to_string(),
            url: "https://sub.example.com/a/b".to_string(),
            username: "poster".to_string(),
            created_at: "2020-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn anonymous_viewer_gets_no_controls() {
        let markup = render_story(&story(), &ViewerContext::default());
        assert!(markup.contains("story-link"));
        assert!(markup.contains("(sub.example.com)"));
        assert!(markup.contains("by An author"));
        assert!(markup.contains("posted by poster"));
        assert!(!markup.contains("star"));
        assert!(!markup.contains("pencil"));
        assert!(!markup.contains("delete-button"));
    }

    #[test]
    fn logged_in_viewer_gets_favorite_toggle() {
        let unfavorited = render_story(
            &story(),
            &ViewerContext {
                logged_in: true,
                ..ViewerContext::default()
            },
        );
        assert!(unfavorited.contains("far fa-star"));

        let favorited = render_story(
            &story(),
            &ViewerContext {
                logged_in: true,
                favorited: true,
                ..ViewerContext::default()
            },
        );
        assert!(favorited.contains("fas fa-star"));
    }

    #[test]
    fn owner_gets_edit_and_delete_controls() {
        let markup = render_story(
            &story(),
            &ViewerContext {
                logged_in: true,
                own_story: true,
                favorited: false,
            },
        );
        assert!(markup.contains("pencil"));
        assert!(markup.contains("delete-button"));
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let mut hostile = story();
        hostile.title = "<script>alert(1)</script>".to_string();
        let markup = render_story(&hostile, &ViewerContext::default());
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_collections_render_placeholders() {
        let user = User {
            username: "alice".to_string(),
            name: "Alice".to_string(),
            ..User::default()
        };
        assert_eq!(
            render_own_stories(&user),
            "<h3>No stories have been added by alice yet</h3>"
        );
        assert_eq!(
            render_favorites(&user),
            "<h3>alice has no favorite stories currently</h3>"
        );
    }

    #[test]
    fn list_rendering_preserves_order() {
        let mut second = story();
        second.id = "s2".to_string();
        second.title = "Another".to_string();
        let markup = render_story_list(&[story(), second], |_| ViewerContext::default());
        let first_at = markup.find("id=\"s1\"").expect("first story rendered");
        let second_at = markup.find("id=\"s2\"").expect("second story rendered");
        assert!(first_at < second_at);
    }
}
