//! Per-field edit state machine used by the update workflow.
//!
//! ```text
//! AwaitingInput --blank--> KeepCurrent
//! AwaitingInput --invalid--> Rejected --(retry)--> ...
//! AwaitingInput --taken--> ConflictDetected --(retry)--> ...
//! Rejected | ConflictDetected --blank--> Abandoned
//! any non-settled state --valid, free--> Accepted
//! ```
//!
//! `KeepCurrent` and `Abandoned` both leave the stored value alone.

use std::fmt;

use crate::conflict;
use crate::console::Console;
use crate::email::EmailChecker;
use crate::error::ContactError;
use crate::model::{Contact, ContactField, Id};
use crate::validation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    AwaitingInput,
    Rejected,
    ConflictDetected,
    Accepted(String),
    Abandoned,
    KeepCurrent,
}

impl EditState {
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            EditState::Accepted(_) | EditState::Abandoned | EditState::KeepCurrent
        )
    }
}

/// Why a submitted value did not settle the field.
#[derive(Debug)]
pub enum FieldRejection {
    Invalid(ContactError),
    Taken(ContactField),
}

impl fmt::Display for FieldRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRejection::Invalid(e) => f.write_str(&e.user_message()),
            FieldRejection::Taken(field) => {
                write!(f, "Another contact already uses this {}.", field)
            }
        }
    }
}

pub struct FieldEdit<'a> {
    field: ContactField,
    rows: &'a [Contact],
    editing: Id<Contact>,
    checker: &'a dyn EmailChecker,
    state: EditState,
}

impl<'a> FieldEdit<'a> {
    pub fn new(
        field: ContactField,
        rows: &'a [Contact],
        editing: Id<Contact>,
        checker: &'a dyn EmailChecker,
    ) -> Self {
        Self {
            field,
            rows,
            editing,
            checker,
            state: EditState::AwaitingInput,
        }
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn prompt_text(&self) -> String {
        format!("Enter new {} (leave blank to keep current): ", self.field)
    }

    /// Feed one line of input. Submitting to a settled edit changes nothing.
    pub fn submit(&mut self, input: &str) -> Result<(), FieldRejection> {
        if self.state.is_settled() {
            return Ok(());
        }

        if input.trim().is_empty() {
            self.state = match self.state {
                EditState::AwaitingInput => EditState::KeepCurrent,
                _ => EditState::Abandoned,
            };
            return Ok(());
        }

        let value = match self.validate(input) {
            Ok(value) => value,
            Err(e) => {
                self.state = EditState::Rejected;
                return Err(FieldRejection::Invalid(e));
            }
        };

        if conflict::has_conflict(self.rows, self.field, &value, Some(self.editing)) {
            self.state = EditState::ConflictDetected;
            return Err(FieldRejection::Taken(self.field));
        }

        self.state = EditState::Accepted(value);
        Ok(())
    }

    /// The new value, if one was accepted.
    pub fn into_value(self) -> Option<String> {
        match self.state {
            EditState::Accepted(value) => Some(value),
            _ => None,
        }
    }

    fn validate(&self, input: &str) -> Result<String, ContactError> {
        match self.field {
            ContactField::Name => validation::validate_name(input),
            ContactField::Email => validation::validate_email(input, self.checker),
            ContactField::Number => validation::validate_number(input),
        }
    }
}

/// Prompt until the edit settles, printing each rejection.
/// End of input counts as a blank answer.
pub fn run_field_edit(console: &mut dyn Console, mut edit: FieldEdit<'_>) -> Option<String> {
    while !edit.state().is_settled() {
        let input = console.prompt(&edit.prompt_text());
        if let Err(rejection) = edit.submit(&input) {
            console.print(&rejection.to_string());
        }
    }
    edit.into_value()
}
