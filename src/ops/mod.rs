pub mod contact_ops;
pub mod field_edit;

pub use contact_ops::{DeleteOutcome, UpdateSummary};
pub use field_edit::{EditState, FieldEdit, FieldRejection};
