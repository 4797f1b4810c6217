pub mod event_service;
pub mod membership_service;
pub mod profile_service;
pub mod rating_service;

pub use event_service::EventService;
pub use membership_service::MembershipService;
pub use profile_service::ProfileService;
pub use rating_service::RatingService;
