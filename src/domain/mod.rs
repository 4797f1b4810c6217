pub mod entities;
pub mod themes;
pub mod value_objects;

pub use entities::{Event, EventDraft, Rating, UserProfile};
pub use themes::{EVENT_THEMES, EventTheme};
pub use value_objects::{Coordinates, RatingRole};
