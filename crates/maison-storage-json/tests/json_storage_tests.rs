use std::{fs, sync::Arc};

use chrono::NaiveDate;
use maison_core::{BookingSession, CoreError, ReservationDispatcher};
use maison_domain::{ContactField, RoomCatalog, RoomCatalogEntry};
use maison_storage_json::{load_catalog, save_catalog, JsonOutboxDispatcher, StorageError};
use tempfile::tempdir;

fn submitted_session(dispatcher: &dyn ReservationDispatcher) -> BookingSession {
    let mut session = BookingSession::new(Arc::new(RoomCatalog::seed()));
    session.set_dates(
        NaiveDate::from_ymd_opt(2025, 9, 1),
        NaiveDate::from_ymd_opt(2025, 9, 5),
    );
    session.advance();
    session.select_room("family-loft");
    session.advance();
    session.set_contact_field(ContactField::FirstName, "Mia");
    session.set_contact_field(ContactField::LastName, "Keller");
    session.set_contact_field(ContactField::Email, "mia@example.ch");
    session.set_contact_field(ContactField::Phone, "+41 44 000 00 00");
    session.submit(dispatcher).expect("submit");
    session
}

#[test]
fn catalog_round_trips_through_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("rooms.json");
    let catalog = RoomCatalog::seed();

    save_catalog(&path, &catalog).expect("save catalog");
    let loaded = load_catalog(&path).expect("load catalog");

    assert_eq!(loaded, catalog);
    assert!(!dir.path().join("rooms.json.tmp").exists());
}

#[test]
fn duplicate_rooms_fail_catalog_validation() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("rooms.json");
    let catalog = RoomCatalog::new(vec![
        RoomCatalogEntry::new("a", "a", "A", 2, 20),
        RoomCatalogEntry::new("a", "b", "B", 2, 20),
    ]);
    save_catalog(&path, &catalog).expect("save catalog");

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, StorageError::Core(CoreError::InvalidCatalog(_))));
}

#[test]
fn malformed_catalog_reports_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("rooms.json");
    fs::write(&path, r#"{"rooms": 3}"#).unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, StorageError::Serde { .. }));
    assert!(err.to_string().contains("rooms.json"));
}

#[test]
fn missing_catalog_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let err = load_catalog(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }));
}

#[test]
fn outbox_receives_one_file_per_submission() {
    let dir = tempdir().expect("tempdir");
    let outbox = JsonOutboxDispatcher::new(dir.path().join("outbox")).expect("outbox");

    let session = submitted_session(&outbox);
    let confirmation = session.confirmation().expect("confirmation");

    assert!(outbox.path_for(confirmation).exists());
    let pending = outbox.pending().expect("read outbox");
    assert_eq!(pending.len(), 1);
    assert_eq!(&pending[0], confirmation);
    assert_eq!(pending[0].nights(), 4);
}
