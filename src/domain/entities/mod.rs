pub mod event;
pub mod rating;
pub mod user_profile;

pub use event::{Event, EventDraft};
pub use rating::Rating;
pub use user_profile::UserProfile;
