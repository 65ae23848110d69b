use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::Id;

/// Column order of the persisted table.
pub const COLUMNS: [&str; 3] = ["Name", "Email", "Number"];

/// One row of the contact table.
///
/// Every column is kept as text; `number` in particular must never be
/// parsed as a numeric value or the leading `+` would be lost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip)]
    pub id: Id<Contact>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Number")]
    pub number: String,
}

impl Contact {
    /// Builds a contact from already validated values.
    pub fn create(name: String, email: String, number: String) -> Self {
        Self {
            id: Id::generate(),
            name,
            email,
            number,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Number => &self.number,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Number => self.number = value,
        }
    }

    /// Case- and whitespace-insensitive exact match on the name.
    pub fn name_matches(&self, key: &str) -> bool {
        self.name.trim().to_lowercase() == key.trim().to_lowercase()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![self.name.clone(), self.email.clone(), self.number.clone()]
    }
}

/// The three unique columns of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Number,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Number];

    pub fn column(self) -> &'static str {
        match self {
            ContactField::Name => COLUMNS[0],
            ContactField::Email => COLUMNS[1],
            ContactField::Number => COLUMNS[2],
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Number => "number",
        };
        f.write_str(label)
    }
}
