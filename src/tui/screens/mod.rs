//! Screen rendering and input handling.

mod clips;
mod compose;
mod explore;
mod feed;
mod messages;
mod profile;
mod story;

pub use clips::ClipsScreen;
pub use compose::ComposeScreen;
pub use explore::ExploreScreen;
pub use feed::{FeedFocus, FeedScreen};
pub use messages::MessagesScreen;
pub use profile::ProfileScreen;
pub use story::render_story;
