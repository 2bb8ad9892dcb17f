use super::common::*;
use chrono::Utc;
use std::sync::Arc;

use crate::profiles::completion::profile_completion;
use crate::profiles::domain::{Profile, ProfileField, ProfileId, ProfilePatch, ProfileStatus};
use crate::profiles::repository::{ProfileRepository, RepositoryError};
use crate::profiles::service::{ProfileService, ProfileServiceError};
use crate::roles::DEFAULT_ROLE_ID;

#[test]
fn register_without_metadata_starts_at_zero() {
    let (service, repository) = build_service();

    let profile = service
        .register(registration(Default::default()))
        .expect("registration succeeds");

    assert_eq!(profile.completion(), 0);
    assert_eq!(profile.role, DEFAULT_ROLE_ID);
    assert_eq!(profile.status, ProfileStatus::Pending);
    assert!(profile.id.0.starts_with("profile-"));
    assert_eq!(repository.stored(&profile.id), Some(profile));
}

#[test]
fn register_scores_initial_metadata() {
    let (service, _) = build_service();

    let profile = service
        .register(registration(essentials()))
        .expect("registration succeeds");

    assert_eq!(profile.completion(), 80);
}

#[test]
fn update_recomputes_and_persists_score() {
    let (service, repository) = build_service();
    let profile = service
        .register(registration(essentials()))
        .expect("registration succeeds");

    let patch = ProfilePatch::default()
        .set(ProfileField::Neighborhood, "Poto-Poto")
        .set(ProfileField::PhotoUrl, "https://cdn.example.org/p.jpg");
    let updated = service.update(&profile.id, patch).expect("update succeeds");

    assert_eq!(updated.completion(), 90);
    let stored = repository.stored(&profile.id).expect("stored");
    assert_eq!(stored.completion(), 90);
    assert_eq!(stored.completion(), profile_completion(&stored.details));
    assert!(stored.updated_at >= stored.created_at);
}

#[test]
fn clearing_fields_lowers_the_score() {
    let (service, repository) = build_service();
    let profile = service
        .register(registration(full_details()))
        .expect("registration succeeds");
    assert_eq!(profile.completion(), 100);

    let patch = ProfilePatch::default()
        .clear(ProfileField::Email)
        .set(ProfileField::Address, "");
    let updated = service.update(&profile.id, patch).expect("update succeeds");

    assert_eq!(updated.completion(), 85);
    assert_eq!(updated.details.email, None);
    assert_eq!(
        repository.stored(&profile.id).expect("stored").completion(),
        85
    );
}

#[test]
fn update_of_unknown_profile_is_not_found() {
    let (service, _) = build_service();

    let err = service
        .update(&ProfileId("profile-missing".to_string()), ProfilePatch::default())
        .expect_err("profile does not exist");

    assert!(matches!(
        err,
        ProfileServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn concurrent_updates_from_one_snapshot_keep_both_edits() {
    let repository = Arc::new(GatedRepository::new(2));
    let service = ProfileService::new(repository.clone());
    let profile = repository
        .inner
        .insert(Profile::register(
            ProfileId("profile-shared".to_string()),
            registration(Default::default()),
            Utc::now(),
        ))
        .expect("seeded");

    std::thread::scope(|scope| {
        let city = scope.spawn(|| {
            service.update(
                &profile.id,
                ProfilePatch::default().set(ProfileField::City, "Pointe-Noire"),
            )
        });
        let email = scope.spawn(|| {
            service.update(
                &profile.id,
                ProfilePatch::default().set(ProfileField::Email, "fidele@example.org"),
            )
        });
        city
            .join()
            .expect("city writer finished")
            .expect("city update succeeds");
        email
            .join()
            .expect("email writer finished")
            .expect("email update succeeds");
    });

    let stored = repository.inner.stored(&profile.id).expect("stored");
    assert_eq!(stored.details.city.as_deref(), Some("Pointe-Noire"));
    assert_eq!(stored.details.email.as_deref(), Some("fidele@example.org"));
    assert_eq!(stored.completion(), 20);
    assert_eq!(stored.completion(), profile_completion(&stored.details));
}

#[test]
fn superior_can_assign_an_approvable_role() {
    let (service, repository) = build_service();
    let profile = service
        .register(registration(essentials()))
        .expect("registration succeeds");

    let promoted = service
        .assign_role(&profile.id, "membre", "chef_cellule")
        .expect("chef_cellule approves membre");

    assert_eq!(promoted.role, "membre");
    assert_eq!(promoted.completion(), profile.completion());
    assert_eq!(repository.stored(&profile.id).expect("stored").role, "membre");
}

#[test]
fn assignment_outside_approval_list_is_refused() {
    let (service, repository) = build_service();
    let profile = service
        .register(registration(essentials()))
        .expect("registration succeeds");

    let err = service
        .assign_role(&profile.id, "ancien", "fidele")
        .expect_err("fidele approves nobody");

    assert!(matches!(err, ProfileServiceError::NotAuthorized { .. }));
    assert_eq!(
        repository.stored(&profile.id).expect("stored").role,
        DEFAULT_ROLE_ID
    );
}

#[test]
fn assignment_of_unknown_role_is_rejected() {
    let (service, _) = build_service();
    let profile = service
        .register(registration(essentials()))
        .expect("registration succeeds");

    let err = service
        .assign_role(&profile.id, "archbishop", "pasteur_principal")
        .expect_err("role does not exist");

    assert!(matches!(
        err,
        ProfileServiceError::UnknownRole { ref role_id } if role_id == "archbishop"
    ));
}

#[test]
fn activation_only_applies_to_pending_profiles() {
    let (service, _) = build_service();
    let profile = service
        .register(registration(essentials()))
        .expect("registration succeeds");

    let active = service.activate(&profile.id).expect("pending activates");
    assert_eq!(active.status, ProfileStatus::Active);

    let err = service
        .activate(&profile.id)
        .expect_err("already active");
    assert!(matches!(
        err,
        ProfileServiceError::InvalidTransition {
            from: ProfileStatus::Active,
            to: ProfileStatus::Active,
        }
    ));
}

#[test]
fn repository_outage_is_surfaced() {
    let service = ProfileService::new(Arc::new(UnavailableRepository));

    let err = service
        .register(registration(essentials()))
        .expect_err("repository offline");

    assert!(err.to_string().contains("offline"));
}
