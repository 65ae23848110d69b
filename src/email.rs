//! Email address syntax checking.
//!
//! Only the shape of the address is examined. Nothing here resolves the
//! domain or talks to a mail server.

use thiserror::Error;

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

/// Reason an address was rejected, phrased for the person typing it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailRejection {
    #[error("The email address is not valid. It must have exactly one @-sign.")]
    AtSignCount,

    #[error("There must be something before the @-sign.")]
    EmptyLocalPart,

    #[error("There must be something after the @-sign.")]
    EmptyDomain,

    #[error("The email address is too long ({0} characters too many).")]
    TooLong(usize),

    #[error("The email address is too long before the @-sign ({0} characters too many).")]
    LocalPartTooLong(usize),

    #[error("The email address contains invalid characters before the @-sign: {0}.")]
    LocalPartCharacters(String),

    #[error("An email address cannot start with a period.")]
    LeadingPeriod,

    #[error("An email address cannot have a period immediately before the @-sign.")]
    PeriodBeforeAt,

    #[error("An email address cannot have two periods in a row.")]
    ConsecutivePeriods,

    #[error("The part after the @-sign contains invalid characters: {0}.")]
    DomainCharacters(String),

    #[error("The part after the @-sign is not valid. It should have a period.")]
    DomainWithoutPeriod,

    #[error("An email address cannot have a period immediately after the @-sign.")]
    PeriodAfterAt,

    #[error("An email address cannot end with a period.")]
    TrailingPeriod,

    #[error("An email address cannot have a hyphen immediately before or after a period.")]
    HyphenAtLabelEdge,

    #[error("The part after the @-sign is not valid. A label is longer than 63 characters.")]
    LabelTooLong,

    #[error("The part after the @-sign is not valid. It is not within a valid top-level domain.")]
    NumericTopLevel,
}

/// Decides whether a string is a syntactically valid email address.
pub trait EmailChecker {
    fn check(&self, address: &str) -> Result<(), EmailRejection>;
}

/// Default checker: dot-atom local part and hostname-style domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxChecker;

impl EmailChecker for SyntaxChecker {
    fn check(&self, address: &str) -> Result<(), EmailRejection> {
        let mut parts = address.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => return Err(EmailRejection::AtSignCount),
        };

        if local.is_empty() {
            return Err(EmailRejection::EmptyLocalPart);
        }
        if domain.is_empty() {
            return Err(EmailRejection::EmptyDomain);
        }
        if address.len() > MAX_ADDRESS_LEN {
            return Err(EmailRejection::TooLong(address.len() - MAX_ADDRESS_LEN));
        }

        check_local_part(local)?;
        check_domain(domain)
    }
}

/// Letters and digits outside ASCII are allowed on both sides of the `@`
/// (SMTPUTF8 local parts, internationalized domain labels).
fn is_unicode_alphanumeric(c: char) -> bool {
    !c.is_ascii() && c.is_alphanumeric()
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_unicode_alphanumeric(c) || "!#$%&'*+-/=?^_`{|}~".contains(c)
}

fn check_local_part(local: &str) -> Result<(), EmailRejection> {
    if local.len() > MAX_LOCAL_LEN {
        return Err(EmailRejection::LocalPartTooLong(local.len() - MAX_LOCAL_LEN));
    }

    let bad = invalid_chars(local, |c| is_atext(c) || c == '.');
    if !bad.is_empty() {
        return Err(EmailRejection::LocalPartCharacters(bad));
    }

    if local.starts_with('.') {
        return Err(EmailRejection::LeadingPeriod);
    }
    if local.ends_with('.') {
        return Err(EmailRejection::PeriodBeforeAt);
    }
    if local.contains("..") {
        return Err(EmailRejection::ConsecutivePeriods);
    }
    Ok(())
}

fn check_domain(domain: &str) -> Result<(), EmailRejection> {
    let bad = invalid_chars(domain, |c| {
        c.is_ascii_alphanumeric() || is_unicode_alphanumeric(c) || c == '-' || c == '.'
    });
    if !bad.is_empty() {
        return Err(EmailRejection::DomainCharacters(bad));
    }

    if domain.starts_with('.') {
        return Err(EmailRejection::PeriodAfterAt);
    }
    if domain.ends_with('.') {
        return Err(EmailRejection::TrailingPeriod);
    }
    if domain.contains("..") {
        return Err(EmailRejection::ConsecutivePeriods);
    }
    if !domain.contains('.') {
        return Err(EmailRejection::DomainWithoutPeriod);
    }

    for label in domain.split('.') {
        if label.starts_with('-') || label.ends_with('-') {
            return Err(EmailRejection::HyphenAtLabelEdge);
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(EmailRejection::LabelTooLong);
        }
    }

    let tld = domain.rsplit('.').next().unwrap_or_default();
    if tld.chars().all(|c| c.is_ascii_digit()) {
        return Err(EmailRejection::NumericTopLevel);
    }
    Ok(())
}

/// Distinct offending characters, quoted and comma separated.
fn invalid_chars(part: &str, allowed: impl Fn(char) -> bool) -> String {
    let mut seen: Vec<char> = Vec::new();
    for c in part.chars().filter(|c| !allowed(*c)) {
        if !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen.iter()
        .map(|c| format!("'{}'", c))
        .collect::<Vec<_>>()
        .join(", ")
}
