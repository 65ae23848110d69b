use once_cell::sync::Lazy;
use regex::Regex;

use crate::email::EmailChecker;
use crate::error::{ContactError, ContactResult};

/// Diagnostic shown whenever a phone number has the wrong shape.
pub const NUMBER_SHAPE: &str = "It must start with '+' and contain 9 to 13 digits.";

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{9,13}$").expect("valid number regex"));

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> ContactResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ContactError::EmptyField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Accepts any non-blank name and returns its title-cased form.
pub fn validate_name(value: &str) -> ContactResult<String> {
    non_blank(value, "name").map(|name| title_case(&name))
}

/// Accepts exactly `+` followed by 9 to 13 ASCII digits.
pub fn validate_number(value: &str) -> ContactResult<String> {
    let number = non_blank(value, "number")?;
    if NUMBER_RE.is_match(&number) {
        Ok(number)
    } else {
        Err(ContactError::InvalidFormat {
            field: "number".into(),
            reason: NUMBER_SHAPE.into(),
        })
    }
}

/// Delegates to `checker`; the rejection reason is passed through as-is.
pub fn validate_email(value: &str, checker: &dyn EmailChecker) -> ContactResult<String> {
    let email = non_blank(value, "email")?;
    checker
        .check(&email)
        .map_err(|rejection| ContactError::InvalidFormat {
            field: "email".into(),
            reason: rejection.to_string(),
        })?;
    Ok(email)
}

/// Upper-cases the first letter of every word and lower-cases the rest.
/// Any non-letter starts a new word, so `o'neil` becomes `O'Neil`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for c in value.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
