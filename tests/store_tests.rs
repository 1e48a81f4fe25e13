use chrono::NaiveDateTime;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;
use teamhours::errors::{AppError, AppResult};
use teamhours::models::entry::TimeEntry;
use teamhours::models::entry_kind::EntryKind;
use teamhours::models::location::Location;
use teamhours::models::month::MonthRef;
use teamhours::models::settings::UserSettings;
use teamhours::models::team::{Member, Team};
use teamhours::store::cache::CachedSettingsStore;
use teamhours::store::memory::MemoryStore;
use teamhours::store::sqlite::SqliteStore;
use teamhours::store::{EntryStore, SettingsStore, TeamStore};

mod common;
use common::setup_test_db;

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

/// Settings store that counts backend reads.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    loads: AtomicUsize,
}

impl SettingsStore for CountingStore {
    fn load_settings(&self, user_id: &str) -> AppResult<UserSettings> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load_settings(user_id)
    }

    fn save_settings(&self, user_id: &str, settings: &UserSettings) -> AppResult<()> {
        self.inner.save_settings(user_id, settings)
    }
}

#[test]
fn test_sqlite_settings_defaults_are_stored_on_first_read() {
    let db_path = setup_test_db("store_settings_defaults");
    let store = SqliteStore::open(&db_path).unwrap();

    let settings = store.load_settings("ada").unwrap();
    assert_eq!(settings, UserSettings::default());

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let stored: String = conn
        .query_row(
            "SELECT document FROM user_settings WHERE user_id = 'ada'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert!(stored.contains("\"default_work_hours\":7.0"));
}

#[test]
fn test_sqlite_malformed_settings_are_merged_with_defaults() {
    let db_path = setup_test_db("store_settings_malformed");
    let store = SqliteStore::open(&db_path).unwrap();

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute(
        "INSERT INTO user_settings (user_id, document, updated_at) VALUES ('ada', ?1, 'now')",
        [r#"{"default_work_hours":"eight","driver_compensation_percent":120,"email":"ada@example.com","unknown":1}"#],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO user_settings (user_id, document, updated_at) VALUES ('bob', '[1,2,3]', 'now')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO user_settings (user_id, document, updated_at) VALUES ('carol', ?1, 'now')",
        [r#"{"default_work_hours":0,"driver_compensation_percent":-500,"passenger_compensation_percent":80}"#],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO user_settings (user_id, document, updated_at) VALUES ('dave', ?1, 'now')",
        [r#"{"default_work_hours":24,"passenger_compensation_percent":900}"#],
    )
    .unwrap();

    let ada = store.load_settings("ada").unwrap();
    assert_eq!(ada.default_work_hours, 7.0);
    assert_eq!(ada.driver_compensation_percent, 120.0);
    assert_eq!(ada.passenger_compensation_percent, 90.0);
    assert_eq!(ada.email.as_deref(), Some("ada@example.com"));

    assert_eq!(store.load_settings("bob").unwrap(), UserSettings::default());

    // out-of-range numbers fall back to their defaults, valid ones are kept
    let carol = store.load_settings("carol").unwrap();
    assert_eq!(carol.default_work_hours, 7.0);
    assert_eq!(carol.driver_compensation_percent, 100.0);
    assert_eq!(carol.passenger_compensation_percent, 80.0);
    assert!(carol.validate().is_ok());

    let dave = store.load_settings("dave").unwrap();
    assert_eq!(dave.default_work_hours, 7.0);
    assert_eq!(dave.passenger_compensation_percent, 90.0);
    assert!(dave.validate().is_ok());
}

#[test]
fn test_sqlite_entries_roundtrip_and_audit() {
    let db_path = setup_test_db("store_entries_sqlite");
    let store = SqliteStore::open(&db_path).unwrap();

    let entry = TimeEntry::new("ada", dt("2025-09-01 09:00"), Location::OnSite)
        .with_end(dt("2025-09-01 17:00"))
        .with_pause(30)
        .with_driver_hours(1.5);
    let stored = store.insert_entry(&entry).unwrap();
    assert!(stored.id > 0);

    let special = TimeEntry::new("ada", dt("2025-09-02 00:00"), Location::Office)
        .with_kind(EntryKind::BankHoliday)
        .with_duration(420);
    store.insert_entry(&special).unwrap();

    let loaded = store
        .entries_for_month("ada", MonthRef::parse("2025-09").unwrap())
        .unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].location, Location::OnSite);
    assert_eq!(loaded[0].driver_time_hours, Some(1.5));
    assert_eq!(loaded[1].kind, EntryKind::BankHoliday);
    assert_eq!(loaded[1].duration_minutes, Some(420));

    assert!(
        store
            .entries_for_month("bob", MonthRef::parse("2025-09").unwrap())
            .unwrap()
            .is_empty()
    );

    store.delete_entry("ada", stored.id).unwrap();
    assert!(matches!(
        store.delete_entry("ada", stored.id),
        Err(AppError::EntryNotFound(_))
    ));

    let log = store.audit_log().unwrap();
    assert!(log.iter().any(|r| r.operation == "add"));
    assert!(log.iter().any(|r| r.operation == "del"));
}

#[test]
fn test_sqlite_published_snapshot_roundtrip() {
    let db_path = setup_test_db("store_published_sqlite");
    let store = SqliteStore::open(&db_path).unwrap();
    let month = MonthRef::parse("2025-09").unwrap();

    store
        .create_team(&Team {
            id: "ops".into(),
            name: "Operations".into(),
            created_at: "2025-09-01T00:00:00+00:00".into(),
        })
        .unwrap();
    store.upsert_member("ops", &Member::new("ada")).unwrap();

    let snapshot = teamhours::models::team::PublishedMonth {
        team_id: "ops".into(),
        user_id: "ada".into(),
        month,
        entries: vec![
            TimeEntry::new("ada", dt("2025-09-01 09:00"), Location::Office)
                .with_end(dt("2025-09-01 12:00")),
        ],
        settings: UserSettings {
            default_work_hours: 8.0,
            ..UserSettings::default()
        },
        published_at: "2025-10-01T08:00:00+00:00".into(),
    };
    store.publish_month(&snapshot).unwrap();

    let loaded = store.published_month("ops", "ada", month).unwrap().unwrap();
    assert_eq!(loaded, snapshot);
    assert!(store.published_month("ops", "bob", month).unwrap().is_none());
}

#[test]
fn test_memory_store_running_entry_and_teams() {
    let store = MemoryStore::new();

    store
        .insert_entry(&TimeEntry::new("ada", dt("2025-09-01 08:00"), Location::Office))
        .unwrap();
    assert!(store.running_entry("ada").unwrap().is_some());
    assert!(store.running_entry("bob").unwrap().is_none());

    let team = Team {
        id: "ops".into(),
        name: "Operations".into(),
        created_at: String::new(),
    };
    store.create_team(&team).unwrap();
    assert!(matches!(store.create_team(&team), Err(AppError::TeamExists(_))));
    assert!(matches!(
        store.upsert_member("nope", &Member::new("ada")),
        Err(AppError::TeamNotFound(_))
    ));

    store.upsert_member("ops", &Member::new("ada")).unwrap();
    assert!(store.remove_member("ops", "ada").unwrap());
    assert!(!store.remove_member("ops", "ada").unwrap());
}

#[test]
fn test_cache_serves_reads_until_ttl_expires() {
    let backend = Arc::new(CountingStore::default());
    let cached = CachedSettingsStore::new(backend.clone(), Duration::from_millis(100));

    cached.load_settings("ada").unwrap();
    cached.load_settings("ada").unwrap();
    assert_eq!(backend.loads.load(Ordering::SeqCst), 1);

    thread::sleep(Duration::from_millis(250));
    cached.load_settings("ada").unwrap();
    assert_eq!(backend.loads.load(Ordering::SeqCst), 2);
}

#[test]
fn test_cache_invalidation_and_write_through() {
    let backend = Arc::new(CountingStore::default());
    let cached = CachedSettingsStore::new(backend.clone(), Duration::from_secs(300));

    cached.load_settings("ada").unwrap();
    cached.invalidate("ada");
    cached.load_settings("ada").unwrap();
    assert_eq!(backend.loads.load(Ordering::SeqCst), 2);

    let updated = UserSettings {
        default_work_hours: 8.5,
        ..UserSettings::default()
    };
    cached.save_settings("ada", &updated).unwrap();

    // served from the cache, no third backend read
    assert_eq!(cached.load_settings("ada").unwrap().default_work_hours, 8.5);
    assert_eq!(backend.loads.load(Ordering::SeqCst), 2);
    assert_eq!(backend.inner.load_settings("ada").unwrap(), updated);
}
