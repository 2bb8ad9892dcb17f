use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::completion::profile_completion;
use crate::roles::DEFAULT_ROLE_ID;

/// Stable identifier for a member profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub String);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Profile fields that count toward the completion score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FirstName,
    LastName,
    Gender,
    Phone,
    Email,
    DateOfBirth,
    City,
    MaritalStatus,
    Neighborhood,
    Profession,
    PhotoUrl,
    Address,
}

impl ProfileField {
    pub const ALL: [Self; 12] = [
        Self::FirstName,
        Self::LastName,
        Self::Gender,
        Self::Phone,
        Self::Email,
        Self::DateOfBirth,
        Self::City,
        Self::MaritalStatus,
        Self::Neighborhood,
        Self::Profession,
        Self::PhotoUrl,
        Self::Address,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Gender => "gender",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::DateOfBirth => "date_of_birth",
            Self::City => "city",
            Self::MaritalStatus => "marital_status",
            Self::Neighborhood => "neighborhood",
            Self::Profession => "profession",
            Self::PhotoUrl => "photo_url",
            Self::Address => "address",
        }
    }

    /// Weight in half points: essentials count 2, cosmetic details count 1.
    pub(crate) const fn half_weight(self) -> u32 {
        match self {
            Self::Neighborhood | Self::Profession | Self::PhotoUrl | Self::Address => 1,
            _ => 2,
        }
    }

    pub fn weight(self) -> f32 {
        self.half_weight() as f32 / 2.0
    }

    fn slot(self, details: &ProfileDetails) -> &Option<String> {
        match self {
            Self::FirstName => &details.first_name,
            Self::LastName => &details.last_name,
            Self::Gender => &details.gender,
            Self::Phone => &details.phone,
            Self::Email => &details.email,
            Self::DateOfBirth => &details.date_of_birth,
            Self::City => &details.city,
            Self::MaritalStatus => &details.marital_status,
            Self::Neighborhood => &details.neighborhood,
            Self::Profession => &details.profession,
            Self::PhotoUrl => &details.photo_url,
            Self::Address => &details.address,
        }
    }

    fn slot_mut(self, details: &mut ProfileDetails) -> &mut Option<String> {
        match self {
            Self::FirstName => &mut details.first_name,
            Self::LastName => &mut details.last_name,
            Self::Gender => &mut details.gender,
            Self::Phone => &mut details.phone,
            Self::Email => &mut details.email,
            Self::DateOfBirth => &mut details.date_of_birth,
            Self::City => &mut details.city,
            Self::MaritalStatus => &mut details.marital_status,
            Self::Neighborhood => &mut details.neighborhood,
            Self::Profession => &mut details.profession,
            Self::PhotoUrl => &mut details.photo_url,
            Self::Address => &mut details.address,
        }
    }
}

/// Editable personal details. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub marital_status: Option<String>,
    pub profession: Option<String>,
}

impl ProfileDetails {
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        field.slot(self).as_deref()
    }

    pub fn set(&mut self, field: ProfileField, value: Option<String>) {
        *field.slot_mut(self) = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    Pending,
    Active,
    Suspended,
}

impl ProfileStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Suspended => "Suspended",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentFlags {
    pub data_processing: bool,
    pub communications: bool,
}

/// Metadata captured at sign-up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRegistration {
    #[serde(flatten)]
    pub details: ProfileDetails,
    #[serde(default)]
    pub church_id: Option<String>,
    #[serde(default)]
    pub tribe_id: Option<String>,
    #[serde(default)]
    pub consents: ConsentFlags,
}

/// Changes to scored fields; `None` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfilePatch {
    pub changes: BTreeMap<ProfileField, Option<String>>,
}

impl ProfilePatch {
    pub fn set(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        self.changes.insert(field, Some(value.into()));
        self
    }

    pub fn clear(mut self, field: ProfileField) -> Self {
        self.changes.insert(field, None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// A member's record. `profile_completion` is only ever written by the
/// recompute path so it cannot drift from the scored fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: ProfileId,
    #[serde(flatten)]
    pub details: ProfileDetails,
    pub church_id: Option<String>,
    pub tribe_id: Option<String>,
    pub role: String,
    pub status: ProfileStatus,
    pub consents: ConsentFlags,
    profile_completion: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn register(id: ProfileId, registration: ProfileRegistration, now: DateTime<Utc>) -> Self {
        let ProfileRegistration {
            details,
            church_id,
            tribe_id,
            consents,
        } = registration;

        let profile_completion = profile_completion(&details);
        Self {
            id,
            details,
            church_id,
            tribe_id,
            role: DEFAULT_ROLE_ID.to_string(),
            status: ProfileStatus::Pending,
            consents,
            profile_completion,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn completion(&self) -> u8 {
        self.profile_completion
    }

    /// Applies the patch and recomputes the score in the same step.
    pub fn apply(&mut self, patch: ProfilePatch, now: DateTime<Utc>) {
        for (field, value) in patch.changes {
            self.details.set(field, value);
        }
        self.profile_completion = profile_completion(&self.details);
        self.updated_at = now;
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
