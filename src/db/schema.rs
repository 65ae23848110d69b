use std::fs::File;
use std::path::Path;

use csv::{StringRecord, WriterBuilder};

use crate::error::{ContactError, ContactResult};
use crate::model::COLUMNS;

/// Create the table file containing only its header row.
pub fn initialize(path: &Path) -> ContactResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let mut writer = WriterBuilder::new().from_writer(File::create(path)?);
    writer.write_record(COLUMNS)?;
    writer.flush()?;
    Ok(())
}

/// Reject a table whose header is not exactly `Name,Email,Number`.
pub fn check_header(header: &StringRecord) -> ContactResult<()> {
    if header.iter().eq(COLUMNS.iter().copied()) {
        Ok(())
    } else {
        Err(ContactError::Schema {
            found: header.iter().collect::<Vec<_>>().join(","),
        })
    }
}
