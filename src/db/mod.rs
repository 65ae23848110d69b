pub mod schema;
pub mod table_store;

pub use table_store::{CsvTableStore, TableStore};
