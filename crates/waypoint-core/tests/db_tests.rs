use std::{
    collections::HashSet,
    sync::Barrier,
    thread,
};

use jiff::civil::date;
use rusqlite::Connection;
use tempfile::NamedTempFile;
use waypoint_core::{
    models::{Pace, TripRequest},
    Database, WaypointError,
};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn sample_trip() -> TripRequest {
    TripRequest {
        origin: "Hanoi".to_string(),
        destination: "Hue".to_string(),
        start_date: date(2024, 3, 1),
        end_date: date(2024, 3, 3),
        interests: vec!["Museums".to_string(), "Food".to_string()],
        pace: Pace::Tight,
        model: "llama3".to_string(),
    }
}

#[test]
fn test_database_initialization_is_repeatable() {
    let (temp_file, db) = create_test_db();
    drop(db);
    // Reopening runs the schema again without error
    Database::new(temp_file.path()).expect("Failed to reopen database");
}

#[test]
fn test_save_and_get_record() {
    let (_temp_file, mut db) = create_test_db();

    let saved = db
        .save_record("user-1", &sample_trip(), "Day 1\nMorning: Walk")
        .expect("Failed to save record");

    assert_eq!(saved.user_id, "user-1");
    assert_eq!(saved.start_date, "2024-03-01");
    assert_eq!(saved.end_date, "2024-03-03");
    assert_eq!(saved.pace, "tight");
    assert_eq!(saved.interests, vec!["Museums", "Food"]);
    assert_eq!(saved.day_limit(), Some(3));

    let loaded = db
        .get_record("user-1", saved.timestamp)
        .expect("Failed to get record")
        .expect("Record should exist");
    assert_eq!(loaded, saved);
}

#[test]
fn test_records_are_newest_first_and_never_overwritten() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.save_record("user-1", &sample_trip(), "first").unwrap();
    let second = db.save_record("user-1", &sample_trip(), "second").unwrap();
    let third = db.save_record("user-1", &sample_trip(), "third").unwrap();

    // Saves within the same second get distinct, increasing timestamps
    assert!(first.timestamp < second.timestamp);
    assert!(second.timestamp < third.timestamp);

    let records = db.list_records("user-1").expect("Failed to list records");
    let texts: Vec<&str> = records.iter().map(|r| r.itinerary.as_str()).collect();
    assert_eq!(texts, vec!["third", "second", "first"]);
}

#[test]
fn test_records_are_isolated_per_user() {
    let (_temp_file, mut db) = create_test_db();

    let alice = db.save_record("alice", &sample_trip(), "a").unwrap();
    db.save_record("bob", &sample_trip(), "b").unwrap();

    let records = db.list_records("alice").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].itinerary, "a");
    assert!(db.get_record("bob", alice.timestamp).unwrap().map_or(true, |r| r.user_id == "bob"));
    assert!(db.list_records("carol").unwrap().is_empty());
}

#[test]
fn test_get_missing_record() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_record("user-1", 12345).unwrap().is_none());
}

#[test]
fn test_unparseable_stored_dates_still_load() {
    let (temp_file, mut db) = create_test_db();
    let saved = db.save_record("user-1", &sample_trip(), "Day 1").unwrap();

    let conn = Connection::open(temp_file.path()).unwrap();
    conn.execute(
        "UPDATE chats SET start_date = 'not a date' WHERE user_id = 'user-1'",
        [],
    )
    .unwrap();

    let loaded = db.get_record("user-1", saved.timestamp).unwrap().unwrap();
    assert_eq!(loaded.start_date, "not a date");
    assert_eq!(loaded.day_limit(), None);
}

#[test]
fn test_create_and_verify_user() {
    let (_temp_file, mut db) = create_test_db();

    let user = db
        .create_user("  Traveller@Example.com ", "secret1")
        .expect("Failed to create user");
    assert_eq!(user.email, "traveller@example.com");
    assert_eq!(user.local_id.len(), 36);

    let verified = db
        .verify_user("TRAVELLER@example.com", "secret1")
        .expect("Failed to verify user");
    assert_eq!(verified.local_id, user.local_id);
}

#[test]
fn test_passwords_are_not_stored_in_plain_text() {
    let (temp_file, mut db) = create_test_db();
    db.create_user("a@example.com", "secret1").unwrap();
    db.create_user("b@example.com", "secret1").unwrap();

    let conn = Connection::open(temp_file.path()).unwrap();
    let hashes: Vec<String> = conn
        .prepare("SELECT password_hash FROM users ORDER BY email")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(hashes.len(), 2);
    assert!(hashes.iter().all(|h| h != "secret1" && h.len() == 64));
    // Distinct salts give distinct hashes for the same password
    assert_ne!(hashes[0], hashes[1]);
}

#[test]
fn test_duplicate_email_is_rejected() {
    let (_temp_file, mut db) = create_test_db();
    db.create_user("a@example.com", "secret1").unwrap();

    let err = db.create_user("A@Example.com", "another1").unwrap_err();
    assert!(matches!(err, WaypointError::Authentication(_)));
}

#[test]
fn test_signup_validation() {
    let (_temp_file, mut db) = create_test_db();

    let err = db.create_user("not-an-email", "secret1").unwrap_err();
    assert!(matches!(err, WaypointError::InvalidInput { ref field, .. } if field == "email"));

    let err = db.create_user("a@example.com", "12345").unwrap_err();
    assert!(matches!(err, WaypointError::InvalidInput { ref field, .. } if field == "password"));
}

#[test]
fn test_wrong_password_is_rejected() {
    let (_temp_file, mut db) = create_test_db();
    db.create_user("a@example.com", "secret1").unwrap();

    let err = db.verify_user("a@example.com", "secret2").unwrap_err();
    assert!(matches!(err, WaypointError::Authentication(_)));
}

#[test]
fn test_concurrent_saves_from_separate_connections() {
    const THREADS: usize = 4;
    const SAVES_PER_THREAD: usize = 5;

    let (temp_file, _db) = create_test_db();
    let path = temp_file.path();
    let barrier = &Barrier::new(THREADS);

    let failures: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(move || {
                    let mut db = Database::new(path).unwrap();
                    barrier.wait();
                    (0..SAVES_PER_THREAD)
                        .filter(|i| {
                            db.save_record("user-1", &sample_trip(), &format!("save {i}"))
                                .is_err()
                        })
                        .count()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });
    assert_eq!(failures, 0);

    let db = Database::new(temp_file.path()).unwrap();
    let records = db.list_records("user-1").unwrap();
    assert_eq!(records.len(), THREADS * SAVES_PER_THREAD);

    let timestamps: HashSet<i64> = records.iter().map(|r| r.timestamp).collect();
    assert_eq!(timestamps.len(), records.len());
}

#[test]
fn test_concurrent_signups_for_one_email() {
    const THREADS: usize = 4;

    let (temp_file, _db) = create_test_db();
    let path = temp_file.path();
    let barrier = &Barrier::new(THREADS);

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(move || {
                    let mut db = Database::new(path).unwrap();
                    barrier.wait();
                    db.create_user("race@example.com", "secret1")
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, WaypointError::Authentication(_))));
}
