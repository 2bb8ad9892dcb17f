//! Member profiles and their weighted completion score.
//!
//! The stored `profile_completion` is derived data: every write path in
//! [`ProfileService`] recomputes it from the scored fields before persisting.

pub mod completion;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use completion::{completion_report, profile_completion, CompletionReport, CompletionSource};
pub use domain::{
    ConsentFlags, Profile, ProfileDetails, ProfileField, ProfileId, ProfilePatch,
    ProfileRegistration, ProfileStatus,
};
pub use repository::{ProfileRepository, RepositoryError};
pub use router::profile_router;
pub use service::{ProfileService, ProfileServiceError};
