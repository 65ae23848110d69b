use crate::db::TableStore;
use crate::error::{ContactError, ContactResult};
use crate::model::Contact;
use crate::validation;

/// The whole table, with "no rows" kept distinct from a populated listing.
#[derive(Debug, Clone)]
pub enum Listing {
    Empty,
    Contacts(Vec<Contact>),
}

pub fn all_contacts(store: &dyn TableStore) -> ContactResult<Listing> {
    let contacts = store.load_all()?;
    if contacts.is_empty() {
        Ok(Listing::Empty)
    } else {
        Ok(Listing::Contacts(contacts))
    }
}

pub fn is_empty(store: &dyn TableStore) -> ContactResult<bool> {
    Ok(store.load_all()?.is_empty())
}

/// Case-insensitive substring match against name, email or number.
pub fn search(store: &dyn TableStore, keyword: &str) -> ContactResult<Vec<Contact>> {
    let keyword = validation::non_blank(keyword, "keyword")?;
    let lower = keyword.to_lowercase();

    let matches: Vec<Contact> = store
        .load_all()?
        .into_iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&lower)
                || c.email.to_lowercase().contains(&lower)
                || c.number.contains(&lower)
        })
        .collect();

    if matches.is_empty() {
        return Err(ContactError::NotFound { key: keyword });
    }
    Ok(matches)
}
