mod app;
mod errors;
mod session;
mod view;

pub use app::{ActiveSession, App};
pub use errors::AppError;
pub use session::{CredentialStore, MemoryCredentialStore, StoredCredentials};
pub use view::{render_favorites, render_own_stories, render_story, render_story_list, ViewerContext};
