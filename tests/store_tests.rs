use std::fs;

use contact_book::config::Config;
use contact_book::db::*;
use contact_book::error::ContactError;
use contact_book::model::*;
use tempfile::TempDir;

fn setup() -> (TempDir, CsvTableStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvTableStore::new(dir.path().join("contacts.csv"));
    (dir, store)
}

fn contact(name: &str, email: &str, number: &str) -> Contact {
    Contact::create(name.into(), email.into(), number.into())
}

// ==========================================================================
// INITIALIZATION
// ==========================================================================

#[test]
fn missing_table_loads_empty_and_is_created() {
    let (_dir, store) = setup();
    assert!(!store.exists());

    let rows = store.load_all().unwrap();
    assert!(rows.is_empty());
    assert!(store.exists());
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "Name,Email,Number\n");
}

#[test]
fn store_uses_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().join("book.csv"));
    let store = CsvTableStore::from_config(&config);
    assert_eq!(store.path(), config.table_path.as_path());
    assert_eq!(Config::default().table_path.to_str(), Some("contacts.csv"));
}

#[test]
fn initialize_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("book.csv");
    schema::initialize(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Email,Number\n");
}

#[test]
fn zero_length_file_is_treated_as_empty_table() {
    let (_dir, store) = setup();
    fs::write(store.path(), "").unwrap();

    assert!(store.load_all().unwrap().is_empty());
    store.append(&contact("Ann", "ann@x.com", "+111111111")).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn ensure_initialized_keeps_existing_rows() {
    let (_dir, store) = setup();
    store.append(&contact("Ann", "ann@x.com", "+111111111")).unwrap();
    store.ensure_initialized().unwrap();
    assert_eq!(store.load_all().unwrap().len(), 1);
}

// ==========================================================================
// READ / WRITE
// ==========================================================================

#[test]
fn append_then_load_keeps_number_as_text() {
    let (_dir, store) = setup();
    store.append(&contact("Ann", "ann@x.com", "+0011111111")).unwrap();

    let rows = store.load_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Ann");
    assert_eq!(rows[0].email, "ann@x.com");
    assert_eq!(rows[0].number, "+0011111111");
}

#[test]
fn append_without_prior_load_writes_header() {
    let (_dir, store) = setup();
    store.append(&contact("Ann", "ann@x.com", "+111111111")).unwrap();
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "Name,Email,Number\nAnn,ann@x.com,+111111111\n"
    );
}

#[test]
fn append_after_row_without_trailing_newline() {
    let (_dir, store) = setup();
    fs::write(store.path(), "Name,Email,Number\nAnn,ann@x.com,+111111111").unwrap();
    assert_eq!(store.load_all().unwrap().len(), 1);

    store.append(&contact("Bob", "bob@x.com", "+222222222")).unwrap();
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "Name,Email,Number\nAnn,ann@x.com,+111111111\nBob,bob@x.com,+222222222\n"
    );
    let names: Vec<String> = store.load_all().unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Ann", "Bob"]);
}

#[test]
fn append_after_header_without_trailing_newline() {
    let (_dir, store) = setup();
    fs::write(store.path(), "Name,Email,Number").unwrap();

    store.append(&contact("Ann", "ann@x.com", "+111111111")).unwrap();
    let rows = store.load_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].number, "+111111111");
}

#[test]
fn names_with_commas_are_quoted() {
    let (_dir, store) = setup();
    store.append(&contact("Smith, Ann", "ann@x.com", "+111111111")).unwrap();
    assert_eq!(store.load_all().unwrap()[0].name, "Smith, Ann");
}

#[test]
fn overwrite_replaces_rows_in_order() {
    let (_dir, store) = setup();
    store.append(&contact("Ann", "ann@x.com", "+111111111")).unwrap();
    store
        .overwrite(&[
            contact("Bob", "bob@x.com", "+222222222"),
            contact("Cat", "cat@x.com", "+333333333"),
        ])
        .unwrap();

    let names: Vec<String> = store.load_all().unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Bob", "Cat"]);
}

#[test]
fn overwrite_with_no_rows_keeps_header() {
    let (_dir, store) = setup();
    store.append(&contact("Ann", "ann@x.com", "+111111111")).unwrap();
    store.overwrite(&[]).unwrap();
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "Name,Email,Number\n");
}

#[test]
fn each_load_assigns_fresh_distinct_ids() {
    let (_dir, store) = setup();
    store.append(&contact("Ann", "ann@x.com", "+111111111")).unwrap();
    store.append(&contact("Bob", "bob@x.com", "+222222222")).unwrap();

    let first = store.load_all().unwrap();
    let second = store.load_all().unwrap();
    assert_ne!(first[0].id, first[1].id);
    assert_ne!(first[0].id, second[0].id);
}

// ==========================================================================
// FAILURES
// ==========================================================================

#[test]
fn unexpected_header_is_a_storage_failure() {
    let (_dir, store) = setup();
    fs::write(store.path(), "Name,Phone\nAnn,+111111111\n").unwrap();

    let err = store.load_all().unwrap_err();
    assert!(matches!(err, ContactError::Schema { .. }));
    assert!(err.is_storage_failure());
}

#[test]
fn short_row_is_a_storage_failure() {
    let (_dir, store) = setup();
    fs::write(store.path(), "Name,Email,Number\nAnn,ann@x.com\n").unwrap();
    assert!(store.load_all().unwrap_err().is_storage_failure());
}

#[test]
fn blank_cell_is_a_storage_failure() {
    let (_dir, store) = setup();
    fs::write(
        store.path(),
        "Name,Email,Number\nAnn,ann@x.com,+111111111\nBob,  ,+222222222\n",
    )
    .unwrap();

    let err = store.load_all().unwrap_err();
    assert!(matches!(
        err,
        ContactError::BlankCell { row: 2, field: ContactField::Email }
    ));
    assert!(err.is_storage_failure());
}

#[test]
fn directory_path_is_a_storage_failure() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvTableStore::new(dir.path());
    assert!(store.load_all().unwrap_err().is_storage_failure());
}
