use tracing::{info, warn};

use crate::conflict;
use crate::console::{ask_yes_no, Console};
use crate::db::TableStore;
use crate::email::EmailChecker;
use crate::error::{ContactError, ContactResult};
use crate::model::{Contact, ContactField};
use crate::ops::field_edit::{run_field_edit, FieldEdit};
use crate::render;
use crate::validation;

/// Validate, reject duplicates on any of the three columns, then append.
pub fn add_contact(
    store: &dyn TableStore,
    checker: &dyn EmailChecker,
    name: &str,
    email: &str,
    number: &str,
) -> ContactResult<Contact> {
    let contact = Contact::create(
        validation::validate_name(name)?,
        validation::validate_email(email, checker)?,
        validation::validate_number(number)?,
    );

    let rows = store.load_all()?;
    if let Some(field) = conflict::first_conflict(&rows, &contact) {
        warn!(%field, "rejected duplicate contact");
        return Err(ContactError::DuplicateContact {
            field,
            value: contact.get(field).to_string(),
        });
    }

    store.append(&contact)?;
    info!(name = %contact.name, "contact added");
    Ok(contact)
}

#[derive(Debug, Clone)]
pub enum DeleteOutcome {
    Deleted(Vec<Contact>),
    Cancelled(Vec<Contact>),
}

/// Remove every row whose name matches `key`, after the user confirms.
pub fn delete_contact(
    store: &dyn TableStore,
    console: &mut dyn Console,
    key: &str,
) -> ContactResult<DeleteOutcome> {
    let key = validation::non_blank(key, "name")?;
    let mut rows = store.load_all()?;

    let (matched, kept): (Vec<Contact>, Vec<Contact>) =
        rows.drain(..).partition(|c| c.name_matches(&key));
    if matched.is_empty() {
        return Err(ContactError::NotFound { key });
    }

    console.print("Found contact:");
    console.print(&render::render_contacts(&matched));

    if !ask_yes_no(console, "Are you sure you want to delete this contact? (yes/no): ") {
        return Ok(DeleteOutcome::Cancelled(matched));
    }

    store.overwrite(&kept)?;
    info!(removed = matched.len(), "contact deleted");
    Ok(DeleteOutcome::Deleted(matched))
}

/// Before and after values of an updated row.
#[derive(Debug, Clone)]
pub struct UpdateSummary {
    pub before: Contact,
    pub after: Contact,
}

impl UpdateSummary {
    pub fn changed_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|&f| self.before.get(f) != self.after.get(f))
            .collect()
    }

    /// One `Column: old --> new` line per field, unchanged ones included.
    pub fn lines(&self) -> Vec<String> {
        ContactField::ALL
            .iter()
            .map(|&f| format!("{}: {} --> {}", f.column(), self.before.get(f), self.after.get(f)))
            .collect()
    }
}

/// Edit the first row whose name matches `key`, one field at a time.
///
/// Each field is prompted in name, email, number order and runs its own
/// [`FieldEdit`]. Only accepted values are written; the whole table is then
/// persisted even when nothing changed.
pub fn update_contact(
    store: &dyn TableStore,
    checker: &dyn EmailChecker,
    console: &mut dyn Console,
    key: &str,
) -> ContactResult<UpdateSummary> {
    let key = validation::non_blank(key, "name")?;
    let mut rows = store.load_all()?;

    let index = rows
        .iter()
        .position(|c| c.name_matches(&key))
        .ok_or_else(|| ContactError::NotFound { key: key.clone() })?;
    let before = rows[index].clone();

    console.print("Found contact:");
    console.print(&render::render_contacts(std::slice::from_ref(&before)));

    let mut after = before.clone();
    for field in ContactField::ALL {
        let edit = FieldEdit::new(field, &rows, before.id, checker);
        if let Some(value) = run_field_edit(console, edit) {
            after.set(field, value);
        }
    }

    let summary = UpdateSummary { before, after };
    console.print("Summary of changes:");
    for line in summary.lines() {
        console.print(&line);
    }

    rows[index] = summary.after.clone();
    store.overwrite(&rows)?;
    info!(changed = ?summary.changed_fields(), "contact updated");
    Ok(summary)
}
