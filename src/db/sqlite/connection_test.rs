//! Tests for SQLite database connection and migrations.

use crate::db::{Database, Note, NoteRepository, SqliteDatabase};

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_note_table() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("Migration should succeed");

    // Verify the table exists by querying sqlite_master.
    // _sqlx_migrations is created by sqlx for migration tracking.
    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    for table in ["_sqlx_migrations", "note"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("First migration should succeed");
    db.migrate().await.expect("Second migration should succeed");
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_preserves_existing_rows() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");

    let created = db
        .notes()
        .create(&Note {
            id: String::new(),
            title: "Survivor".to_string(),
            content: "Still here".to_string(),
        })
        .await
        .expect("Create should succeed");

    // A second bootstrap must not touch existing data.
    db.migrate().await.expect("Migration should succeed");

    let retrieved = db.notes().get(&created.id).await.expect("Get should succeed");
    assert_eq!(retrieved.title, "Survivor");
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_database_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.db");

    let db = SqliteDatabase::open(&path)
        .await
        .expect("Open should succeed");
    db.migrate().await.expect("Migration should succeed");

    assert!(path.exists(), "Database file should have been created");
}

#[tokio::test(flavor = "multi_thread")]
async fn data_survives_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.db");

    let created = {
        let db = SqliteDatabase::open(&path)
            .await
            .expect("Open should succeed");
        db.migrate().await.expect("Migration should succeed");
        db.notes()
            .create(&Note {
                id: String::new(),
                title: "Durable".to_string(),
                content: "On disk".to_string(),
            })
            .await
            .expect("Create should succeed")
    };

    let db = SqliteDatabase::open(&path)
        .await
        .expect("Reopen should succeed");
    db.migrate().await.expect("Migration should succeed");

    let retrieved = db.notes().get(&created.id).await.expect("Get should succeed");
    assert_eq!(retrieved.title, "Durable");
    assert_eq!(retrieved.content, "On disk");
}
