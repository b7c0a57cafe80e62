mod api;
mod client_utils;
mod errors;
mod http;
mod service;
pub mod testing;
mod types;

pub use errors::*;
pub use http::{HttpStoryService, HttpStoryServiceOptions, DEFAULT_BASE_URL};
pub use service::StoryService;
pub use types::*;
