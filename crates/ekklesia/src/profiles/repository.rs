use super::domain::{Profile, ProfileId};

/// Storage abstraction so the profile service can be exercised in isolation.
pub trait ProfileRepository: Send + Sync {
    fn insert(&self, profile: Profile) -> Result<Profile, RepositoryError>;
    fn fetch(&self, id: &ProfileId) -> Result<Option<Profile>, RepositoryError>;

    /// Runs `change` against the stored profile as one atomic step and returns
    /// the stored result. Nothing is written when `change` fails.
    fn modify<F, E>(&self, id: &ProfileId, change: F) -> Result<Profile, E>
    where
        F: FnOnce(&mut Profile) -> Result<(), E>,
        E: From<RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("profile already exists")]
    Conflict,
    #[error("profile not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
