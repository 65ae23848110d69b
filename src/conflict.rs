//! Uniqueness checks over a loaded table snapshot.

use crate::model::{Contact, ContactField, Id};

/// Does any row other than `exclude` already hold `value` in `field`?
///
/// Names and emails compare trimmed and case-insensitively; numbers compare
/// as exact strings.
pub fn has_conflict(
    rows: &[Contact],
    field: ContactField,
    value: &str,
    exclude: Option<Id<Contact>>,
) -> bool {
    rows.iter()
        .filter(|row| Some(row.id) != exclude)
        .any(|row| same_value(field, row.get(field), value))
}

/// First field of `candidate` that collides with another row, checked in
/// name, email, number order.
pub fn first_conflict(rows: &[Contact], candidate: &Contact) -> Option<ContactField> {
    ContactField::ALL
        .into_iter()
        .find(|&field| has_conflict(rows, field, candidate.get(field), Some(candidate.id)))
}

fn same_value(field: ContactField, stored: &str, candidate: &str) -> bool {
    match field {
        ContactField::Name | ContactField::Email => {
            stored.trim().to_lowercase() == candidate.trim().to_lowercase()
        }
        ContactField::Number => stored == candidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<Contact> {
        vec![
            Contact::create("Ann".into(), "ann@x.com".into(), "+111111111".into()),
            Contact::create("Bob".into(), "bob@x.com".into(), "+222222222".into()),
        ]
    }

    #[test]
    fn name_conflict_ignores_case_and_whitespace() {
        let rows = table();
        assert!(has_conflict(&rows, ContactField::Name, "  aNN ", None));
        assert!(!has_conflict(&rows, ContactField::Name, "Annie", None));
    }

    #[test]
    fn email_conflict_ignores_case() {
        let rows = table();
        assert!(has_conflict(&rows, ContactField::Email, "BOB@X.COM", None));
    }

    #[test]
    fn number_conflict_is_exact() {
        let rows = table();
        assert!(has_conflict(&rows, ContactField::Number, "+222222222", None));
        assert!(!has_conflict(&rows, ContactField::Number, "+2222222220", None));
    }

    #[test]
    fn excluded_row_is_not_a_conflict() {
        let rows = table();
        let ann = rows[0].id;
        assert!(!has_conflict(&rows, ContactField::Email, "ann@x.com", Some(ann)));
        assert!(has_conflict(&rows, ContactField::Email, "bob@x.com", Some(ann)));
    }

    #[test]
    fn empty_table_never_conflicts() {
        assert!(!has_conflict(&[], ContactField::Name, "Ann", None));
    }

    #[test]
    fn first_conflict_reports_each_field_independently() {
        let rows = table();
        let by_name = Contact::create("Ann".into(), "other@x.com".into(), "+333333333".into());
        let by_email = Contact::create("Cat".into(), "ann@x.com".into(), "+333333333".into());
        let by_number = Contact::create("Cat".into(), "cat@x.com".into(), "+111111111".into());
        let fresh = Contact::create("Cat".into(), "cat@x.com".into(), "+333333333".into());

        assert_eq!(first_conflict(&rows, &by_name), Some(ContactField::Name));
        assert_eq!(first_conflict(&rows, &by_email), Some(ContactField::Email));
        assert_eq!(first_conflict(&rows, &by_number), Some(ContactField::Number));
        assert_eq!(first_conflict(&rows, &fresh), None);
    }
}
