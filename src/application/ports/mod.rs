pub mod blob_store;
pub mod repositories;

pub use blob_store::BlobStore;
pub use repositories::{
    EventRepository, MembershipRepository, ProfileRepository, RatingRepository,
};
