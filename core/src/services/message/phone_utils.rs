//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is valid (international E.164 format)
pub fn is_valid_phone_number(phone: &str) -> bool {
    INTERNATIONAL_PHONE_REGEX.is_match(&normalize_phone_number(phone))
}

/// Mask a phone number for logging, keeping only the last four digits
pub fn mask_phone(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
