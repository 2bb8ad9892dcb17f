use serde::Serialize;
use serde_json::{Map, Value};

use super::domain::{Profile, ProfileDetails, ProfileField};

const TOTAL_HALF_WEIGHT: u32 = {
    let mut total = 0;
    let mut index = 0;
    while index < ProfileField::ALL.len() {
        total += ProfileField::ALL[index].half_weight();
        index += 1;
    }
    total
};

/// Anything that can say whether a scored field holds a value.
pub trait CompletionSource {
    fn is_filled(&self, field: ProfileField) -> bool;
}

impl CompletionSource for ProfileDetails {
    fn is_filled(&self, field: ProfileField) -> bool {
        self.get(field).is_some_and(|value| !value.is_empty())
    }
}

impl CompletionSource for Profile {
    fn is_filled(&self, field: ProfileField) -> bool {
        self.details.is_filled(field)
    }
}

/// Raw JSON objects: null, missing, and `""` are unfilled, anything else counts.
impl CompletionSource for Map<String, Value> {
    fn is_filled(&self, field: ProfileField) -> bool {
        match self.get(field.name()) {
            None | Some(Value::Null) => false,
            Some(Value::String(value)) => !value.is_empty(),
            Some(_) => true,
        }
    }
}

/// Weighted completion percentage in `0..=100`, rounded half away from zero.
pub fn profile_completion<S>(source: &S) -> u8
where
    S: CompletionSource + ?Sized,
{
    let filled: u32 = ProfileField::ALL
        .into_iter()
        .filter(|field| source.is_filled(*field))
        .map(ProfileField::half_weight)
        .sum();

    ((filled * 200 + TOTAL_HALF_WEIGHT) / (2 * TOTAL_HALF_WEIGHT)) as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionReport {
    pub score: u8,
    pub filled: Vec<ProfileField>,
    pub missing: Vec<ProfileField>,
}

pub fn completion_report<S>(source: &S) -> CompletionReport
where
    S: CompletionSource + ?Sized,
{
    let (filled, missing): (Vec<_>, Vec<_>) = ProfileField::ALL
        .into_iter()
        .partition(|field| source.is_filled(*field));

    CompletionReport {
        score: profile_completion(source),
        filled,
        missing,
    }
}
