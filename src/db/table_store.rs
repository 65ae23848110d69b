use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use crate::config::Config;
use crate::db::schema;
use crate::error::{ContactError, ContactResult};
use crate::model::{Contact, ContactField, COLUMNS};

/// Whole-table persistence for contacts.
pub trait TableStore {
    fn exists(&self) -> bool;

    /// Every row in file order. A missing table is created empty.
    fn load_all(&self) -> ContactResult<Vec<Contact>>;

    fn append(&self, contact: &Contact) -> ContactResult<()>;

    /// Replace the table contents with `contacts`.
    fn overwrite(&self, contacts: &[Contact]) -> ContactResult<()>;
}

/// A CSV file with a `Name,Email,Number` header.
#[derive(Debug, Clone)]
pub struct CsvTableStore {
    path: PathBuf,
}

impl CsvTableStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.table_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the header-only file if it is missing or zero-length.
    pub fn ensure_initialized(&self) -> ContactResult<()> {
        let empty = std::fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true);
        if empty {
            debug!(path = %self.path.display(), "creating contact table");
            schema::initialize(&self.path)?;
        }
        Ok(())
    }
}

impl TableStore for CsvTableStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load_all(&self) -> ContactResult<Vec<Contact>> {
        self.ensure_initialized()?;

        let mut reader = ReaderBuilder::new().from_reader(File::open(&self.path)?);
        schema::check_header(reader.headers()?)?;

        let mut contacts = Vec::new();
        for (index, row) in reader.deserialize::<Contact>().enumerate() {
            let contact = row?;
            if let Some(field) = ContactField::ALL
                .into_iter()
                .find(|&f| contact.get(f).trim().is_empty())
            {
                return Err(ContactError::BlankCell { row: index + 1, field });
            }
            contacts.push(contact);
        }
        debug!(path = %self.path.display(), rows = contacts.len(), "loaded contact table");
        Ok(contacts)
    }

    fn append(&self, contact: &Contact) -> ContactResult<()> {
        self.ensure_initialized()?;

        let mut file = OpenOptions::new().read(true).append(true).open(&self.path)?;
        if !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.serialize(contact)?;
        writer.flush()?;
        debug!(path = %self.path.display(), "appended contact row");
        Ok(())
    }

    fn overwrite(&self, contacts: &[Contact]) -> ContactResult<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(File::create(&self.path)?);
        writer.write_record(COLUMNS)?;
        for contact in contacts {
            writer.serialize(contact)?;
        }
        writer.flush()?;
        debug!(path = %self.path.display(), rows = contacts.len(), "rewrote contact table");
        Ok(())
    }
}

/// True when the file is empty or its last byte is a line break.
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.seek(SeekFrom::End(0))? == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
