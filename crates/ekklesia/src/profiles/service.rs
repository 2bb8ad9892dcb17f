use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::{Profile, ProfileId, ProfilePatch, ProfileRegistration, ProfileStatus};
use super::repository::{ProfileRepository, RepositoryError};
use crate::roles::RoleHierarchy;

/// Service keeping stored profiles and their completion score in step.
pub struct ProfileService<R> {
    repository: Arc<R>,
    hierarchy: RoleHierarchy<'static>,
}

static PROFILE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_profile_id() -> ProfileId {
    let id = PROFILE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProfileId(format!("profile-{id:06}"))
}

impl<R> ProfileService<R>
where
    R: ProfileRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_hierarchy(repository, RoleHierarchy::standard())
    }

    pub fn with_hierarchy(repository: Arc<R>, hierarchy: RoleHierarchy<'static>) -> Self {
        Self {
            repository,
            hierarchy,
        }
    }

    pub fn hierarchy(&self) -> RoleHierarchy<'static> {
        self.hierarchy
    }

    /// Create a profile from sign-up metadata, scored from whatever was supplied.
    pub fn register(
        &self,
        registration: ProfileRegistration,
    ) -> Result<Profile, ProfileServiceError> {
        let profile = Profile::register(next_profile_id(), registration, Utc::now());
        let stored = self.repository.insert(profile)?;
        info!(
            profile_id = %stored.id,
            completion = stored.completion(),
            "profile registered"
        );
        Ok(stored)
    }

    /// Apply edits to scored fields and persist the recomputed score with them.
    pub fn update(
        &self,
        id: &ProfileId,
        patch: ProfilePatch,
    ) -> Result<Profile, ProfileServiceError> {
        let changed = patch.changes.len();
        let mut previous = 0;

        let profile = self
            .repository
            .modify(id, |profile| -> Result<(), ProfileServiceError> {
                previous = profile.completion();
                profile.apply(patch, Utc::now());
                Ok(())
            })?;

        debug!(
            profile_id = %id,
            changed,
            previous,
            completion = profile.completion(),
            "profile updated"
        );
        Ok(profile)
    }

    pub fn get(&self, id: &ProfileId) -> Result<Profile, ProfileServiceError> {
        let profile = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(profile)
    }

    /// Give the profile a new role on behalf of `approver_role_id`.
    pub fn assign_role(
        &self,
        id: &ProfileId,
        role_id: &str,
        approver_role_id: &str,
    ) -> Result<Profile, ProfileServiceError> {
        let role = self
            .hierarchy
            .role(role_id)
            .ok_or_else(|| ProfileServiceError::UnknownRole {
                role_id: role_id.to_string(),
            })?;

        if !self.hierarchy.can_approve(approver_role_id, role.id) {
            warn!(
                profile_id = %id,
                role = role.id,
                approver = approver_role_id,
                "role assignment refused"
            );
            return Err(ProfileServiceError::NotAuthorized {
                approver_role_id: approver_role_id.to_string(),
                role_id: role.id.to_string(),
            });
        }

        let profile = self
            .repository
            .modify(id, |profile| -> Result<(), ProfileServiceError> {
                profile.role = role.id.to_string();
                profile.touch(Utc::now());
                Ok(())
            })?;

        info!(profile_id = %id, role = role.id, approver = approver_role_id, "role assigned");
        Ok(profile)
    }

    /// Move a pending profile to active.
    pub fn activate(&self, id: &ProfileId) -> Result<Profile, ProfileServiceError> {
        self.repository.modify(id, |profile| {
            if profile.status != ProfileStatus::Pending {
                return Err(ProfileServiceError::InvalidTransition {
                    from: profile.status,
                    to: ProfileStatus::Active,
                });
            }

            profile.status = ProfileStatus::Active;
            profile.touch(Utc::now());
            Ok(())
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("unknown role '{role_id}'")]
    UnknownRole { role_id: String },
    #[error("role '{approver_role_id}' is not allowed to assign '{role_id}'")]
    NotAuthorized {
        approver_role_id: String,
        role_id: String,
    },
    #[error("profile cannot move from {} to {}", .from.label(), .to.label())]
    InvalidTransition {
        from: ProfileStatus,
        to: ProfileStatus,
    },
}
