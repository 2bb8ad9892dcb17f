//! Display helpers for amounts and dates shown to members.

use chrono::{DateTime, Utc};

/// Groups thousands with a space: `1234567` becomes `1 234 567`.
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn format_currency(amount: i64, currency: &str) -> String {
    format!("{} {}", format_number(amount), currency)
}

/// Short French label for how long ago `then` happened, relative to `now`.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed < chrono::Duration::zero() {
        return then.format("%d/%m/%Y").to_string();
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    match (days, hours, minutes) {
        (0, 0, 0) => "à l'instant".to_string(),
        (0, 0, minutes) => format!("il y a {minutes} min"),
        (0, hours, _) => format!("il y a {hours} h"),
        (1, _, _) => "hier".to_string(),
        (days, _, _) if days < 7 => format!("il y a {days} jours"),
        _ => then.format("%d/%m/%Y").to_string(),
    }
}
