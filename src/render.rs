//! Tabular display of contact rows.

use comfy_table::{presets::ASCII_FULL, ContentArrangement, Table};

use crate::model::{Contact, COLUMNS};

pub fn render_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers.to_vec());
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

pub fn render_contacts(contacts: &[Contact]) -> String {
    render_table(&COLUMNS, contacts.iter().map(Contact::to_row).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_every_cell() {
        let contacts = vec![
            Contact::create("Ann".into(), "ann@x.com".into(), "+111111111".into()),
            Contact::create("Bob".into(), "bob@x.com".into(), "+222222222".into()),
        ];
        let out = render_contacts(&contacts);
        for text in ["Name", "Email", "Number", "Ann", "bob@x.com", "+111111111"] {
            assert!(out.contains(text), "missing {text} in\n{out}");
        }
    }

    #[test]
    fn renders_header_only_for_no_rows() {
        let out = render_contacts(&[]);
        assert!(out.contains("Name"));
        assert!(!out.contains('@'));
    }
}
