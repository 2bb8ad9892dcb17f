use std::collections::HashMap;
use std::sync::{Arc, Barrier, Mutex};

use crate::profiles::domain::{Profile, ProfileDetails, ProfileId, ProfileRegistration};
use crate::profiles::repository::{ProfileRepository, RepositoryError};
use crate::profiles::service::ProfileService;

pub(super) fn essentials() -> ProfileDetails {
    ProfileDetails {
        first_name: Some("Grâce".to_string()),
        last_name: Some("Mbemba".to_string()),
        gender: Some("F".to_string()),
        date_of_birth: Some("1991-04-12".to_string()),
        email: Some("grace.mbemba@example.org".to_string()),
        phone: Some("+242 06 555 0101".to_string()),
        city: Some("Brazzaville".to_string()),
        marital_status: Some("mariee".to_string()),
        ..ProfileDetails::default()
    }
}

pub(super) fn extras() -> ProfileDetails {
    ProfileDetails {
        neighborhood: Some("Moungali".to_string()),
        profession: Some("Infirmière".to_string()),
        photo_url: Some("https://cdn.example.org/avatars/grace.jpg".to_string()),
        address: Some("12 rue Mayama".to_string()),
        ..ProfileDetails::default()
    }
}

pub(super) fn full_details() -> ProfileDetails {
    ProfileDetails {
        neighborhood: extras().neighborhood,
        profession: extras().profession,
        photo_url: extras().photo_url,
        address: extras().address,
        ..essentials()
    }
}

pub(super) fn registration(details: ProfileDetails) -> ProfileRegistration {
    ProfileRegistration {
        details,
        church_id: Some("church-brazza-01".to_string()),
        ..ProfileRegistration::default()
    }
}

pub(super) fn build_service() -> (ProfileService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ProfileService::new(repository.clone());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ProfileId, Profile>>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self, id: &ProfileId) -> Option<Profile> {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .get(id)
            .cloned()
    }
}

impl ProfileRepository for MemoryRepository {
    fn insert(&self, profile: Profile) -> Result<Profile, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&profile.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }

    fn fetch(&self, id: &ProfileId) -> Result<Option<Profile>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn modify<F, E>(&self, id: &ProfileId, change: F) -> Result<Profile, E>
    where
        F: FnOnce(&mut Profile) -> Result<(), E>,
        E: From<RepositoryError>,
    {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let stored = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let mut draft = stored.clone();
        change(&mut draft)?;
        *stored = draft.clone();
        Ok(draft)
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn insert(&self, _profile: Profile) -> Result<Profile, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: &ProfileId) -> Result<Option<Profile>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn modify<F, E>(&self, _id: &ProfileId, _change: F) -> Result<Profile, E>
    where
        F: FnOnce(&mut Profile) -> Result<(), E>,
        E: From<RepositoryError>,
    {
        Err(RepositoryError::Unavailable("offline".to_string()).into())
    }
}

/// Holds every writer at a barrier after it has read the stored profile, so
/// concurrent edits all start from the same snapshot.
pub(super) struct GatedRepository {
    pub(super) inner: MemoryRepository,
    gate: Barrier,
}

impl GatedRepository {
    pub(super) fn new(writers: usize) -> Self {
        Self {
            inner: MemoryRepository::default(),
            gate: Barrier::new(writers),
        }
    }
}

impl ProfileRepository for GatedRepository {
    fn insert(&self, profile: Profile) -> Result<Profile, RepositoryError> {
        self.inner.insert(profile)
    }

    fn fetch(&self, id: &ProfileId) -> Result<Option<Profile>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn modify<F, E>(&self, id: &ProfileId, change: F) -> Result<Profile, E>
    where
        F: FnOnce(&mut Profile) -> Result<(), E>,
        E: From<RepositoryError>,
    {
        self.inner.fetch(id)?;
        self.gate.wait();
        self.inner.modify(id, change)
    }
}
