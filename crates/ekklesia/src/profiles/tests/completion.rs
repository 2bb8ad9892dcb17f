use super::common::*;
use serde_json::{json, Map, Value};

use crate::profiles::completion::{completion_report, profile_completion};
use crate::profiles::domain::{ProfileDetails, ProfileField};

fn details_from_mask(mask: u16) -> ProfileDetails {
    let mut details = ProfileDetails::default();
    for (index, field) in ProfileField::ALL.into_iter().enumerate() {
        if mask & (1 << index) != 0 {
            details.set(field, Some(format!("{}-value", field.name())));
        }
    }
    details
}

#[test]
fn empty_profile_scores_zero() {
    assert_eq!(profile_completion(&ProfileDetails::default()), 0);
}

#[test]
fn full_profile_scores_one_hundred() {
    assert_eq!(profile_completion(&full_details()), 100);
}

#[test]
fn essentials_alone_score_eighty() {
    assert_eq!(profile_completion(&essentials()), 80);
}

#[test]
fn optional_fields_alone_score_twenty() {
    assert_eq!(profile_completion(&extras()), 20);
}

#[test]
fn empty_strings_count_as_missing() {
    let details = ProfileDetails {
        first_name: Some(String::new()),
        last_name: Some(String::new()),
        ..ProfileDetails::default()
    };
    assert_eq!(profile_completion(&details), 0);
}

#[test]
fn whitespace_is_still_a_value() {
    let details = ProfileDetails {
        city: Some(" ".to_string()),
        ..ProfileDetails::default()
    };
    assert_eq!(profile_completion(&details), 10);
}

#[test]
fn weights_total_ten() {
    let total: f32 = ProfileField::ALL.into_iter().map(ProfileField::weight).sum();
    assert_eq!(total, 10.0);
    assert_eq!(ProfileField::Address.weight(), 0.5);
    assert_eq!(ProfileField::MaritalStatus.weight(), 1.0);
}

#[test]
fn every_combination_stays_in_range_and_is_monotonic() {
    for mask in 0u16..(1 << 12) {
        let score = profile_completion(&details_from_mask(mask));
        assert!(score <= 100, "mask {mask:#b} scored {score}");
        assert_eq!(score % 5, 0, "mask {mask:#b} scored {score}");

        for bit in 0..12 {
            if mask & (1 << bit) == 0 {
                let extended = profile_completion(&details_from_mask(mask | (1 << bit)));
                assert!(
                    extended > score,
                    "filling field {bit} lowered {score} to {extended}"
                );
            }
        }
    }
}

#[test]
fn report_lists_missing_fields() {
    let report = completion_report(&essentials());
    assert_eq!(report.score, 80);
    assert_eq!(report.filled.len(), 8);
    assert_eq!(
        report.missing,
        vec![
            ProfileField::Neighborhood,
            ProfileField::Profession,
            ProfileField::PhotoUrl,
            ProfileField::Address,
        ]
    );
}

#[test]
fn json_objects_are_scored_like_records() {
    let value = json!({
        "first_name": "Paul",
        "last_name": "",
        "gender": null,
        "phone": "+242 06 000 0000",
        "profession": "Enseignant",
        "church_id": "ignored",
    });
    let Value::Object(fields) = value else {
        panic!("object literal");
    };

    // first_name + phone (2) and profession (0.5) out of 10
    assert_eq!(profile_completion(&fields), 25);
}

#[test]
fn non_string_json_values_count_as_filled() {
    let mut fields = Map::new();
    fields.insert("date_of_birth".to_string(), json!(19910412));
    assert_eq!(profile_completion(&fields), 10);
}
