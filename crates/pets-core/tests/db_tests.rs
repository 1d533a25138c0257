use pets_core::{contract::DATABASE_VERSION, Database, Filter, PetError};
use rusqlite::{params, types::Value};
use tempfile::{NamedTempFile, TempDir};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::open(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn rex(breed: &str) -> Vec<(&'static str, Value)> {
    vec![
        ("name", Value::Text("Rex".to_string())),
        ("breed", Value::Text(breed.to_string())),
    ]
}

fn count_pets(db: &Database) -> i64 {
    db.readable()
        .query_row("SELECT COUNT(*) FROM pets", [], |row| row.get(0))
        .expect("Failed to count pets")
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert_eq!(db.version().unwrap(), DATABASE_VERSION);
    assert_eq!(count_pets(&db), 0);
}

#[test]
fn test_table_has_contract_columns() {
    let (_temp_file, db) = create_test_db();

    let mut stmt = db
        .readable()
        .prepare("SELECT name FROM pragma_table_info('pets') ORDER BY cid")
        .unwrap();
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(columns, vec!["_id", "name", "breed", "gender", "weight"]);
}

#[test]
fn test_readable_and_writable_share_the_file() {
    let (_temp_file, mut db) = create_test_db();

    db.writable()
        .execute(
            "INSERT INTO pets (name, breed, gender, weight) VALUES (?1, ?2, ?3, ?4)",
            params!["Toto", "Terrier", 1, 7],
        )
        .unwrap();

    assert_eq!(count_pets(&db), 1);
}

#[test]
fn test_reopen_keeps_rows() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shelter.db");

    {
        let mut db = Database::open(&path).unwrap();
        db.insert_row(&rex("")).unwrap();
        db.close().unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(count_pets(&db), 1);
}

#[test]
fn test_upgrade_on_empty_database_leaves_table_queryable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shelter.db");
    Database::open(&path).unwrap().close().unwrap();

    let db = Database::open_with_version(&path, DATABASE_VERSION + 1).unwrap();

    assert_eq!(db.version().unwrap(), DATABASE_VERSION + 1);
    assert_eq!(count_pets(&db), 0);
}

#[test]
fn test_upgrade_discards_existing_rows() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shelter.db");

    {
        let mut db = Database::open(&path).unwrap();
        db.insert_row(&rex("Collie")).unwrap();
        assert_eq!(count_pets(&db), 1);
    }

    // The upgrade recreates the table; earlier rows are not expected to survive.
    let db = Database::open_with_version(&path, DATABASE_VERSION + 1).unwrap();
    assert_eq!(count_pets(&db), 0);
}

#[test]
fn test_explicit_upgrade_call() {
    let (_temp_file, mut db) = create_test_db();
    db.insert_row(&rex("Collie")).unwrap();

    db.upgrade(DATABASE_VERSION, DATABASE_VERSION + 2).unwrap();

    assert_eq!(db.version().unwrap(), DATABASE_VERSION + 2);
    assert_eq!(count_pets(&db), 0);
}

#[test]
fn test_newer_schema_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shelter.db");
    Database::open_with_version(&path, DATABASE_VERSION + 1)
        .unwrap()
        .close()
        .unwrap();

    let err = Database::open(&path).err().expect("downgrade must fail");
    assert!(matches!(
        err,
        PetError::SchemaDowngrade { found, supported }
            if found == DATABASE_VERSION + 1 && supported == DATABASE_VERSION
    ));
}

#[test]
fn test_unopenable_path_is_storage_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("dir").join("shelter.db");

    let err = Database::open(&path).err().expect("open must fail");
    assert!(matches!(err, PetError::StorageUnavailable { .. }));
}

#[test]
fn test_corrupt_file_is_storage_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shelter.db");
    std::fs::write(&path, b"this is definitely not a sqlite database file, not at all").unwrap();

    let err = Database::open(&path).err().expect("open must fail");
    assert!(matches!(err, PetError::StorageUnavailable { .. }));
}

#[test]
fn test_in_memory_database() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.path().to_str(), Some(":memory:"));
    assert_eq!(count_pets(&db), 0);
}

#[test]
fn test_out_of_range_id_filter_matches_nothing() {
    let (_temp_file, mut db) = create_test_db();
    db.writable()
        .execute(
            "INSERT INTO pets (_id, name, breed, gender, weight) VALUES (-1, 'Ghost', '', 0, 0)",
            [],
        )
        .unwrap();

    let deleted = db.delete_rows(Some(&Filter::by_id(u64::MAX))).unwrap();

    assert_eq!(deleted, 0);
    assert_eq!(count_pets(&db), 1);
}
