//! SQLite-backed shortcut store
//!
//! One table, `shortcuts`, with a UNIQUE constraint on `id` and a compound
//! index on `(is_active, sort_order)` backing the listing query. The
//! connection is owned by the store and handed to handlers through shared
//! state; there is no process-global handle.

use chrono::Utc;
use rusqlite::{params, Connection, OpenFlags, Row};
use std::path::PathBuf;
use tokio::sync::Mutex;

use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{validate, NewShortcut, Shortcut};

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the database file
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the database file inside the data directory
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("launchpad.db")
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("launchpad_data")
    }
}

/// Shortcut store over an embedded SQLite database.
///
/// All methods serialize access through an async mutex; concurrent
/// requests are isolated by SQLite's own transaction semantics.
pub struct ShortcutStore {
    conn: Mutex<Connection>,
}

impl ShortcutStore {
    /// Open (or create) the store at the configured location.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let conn = Connection::open_with_flags(
            config.db_path(),
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
            ",
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS shortcuts (
                id          TEXT    NOT NULL UNIQUE,
                name        TEXT    NOT NULL,
                description TEXT    NOT NULL,
                icon        TEXT    NOT NULL,
                uri         TEXT    NOT NULL,
                color       TEXT    NOT NULL,
                sort_order  INTEGER NOT NULL DEFAULT 0,
                is_active   INTEGER NOT NULL DEFAULT 1,
                created_at  INTEGER NOT NULL,
                updated_at  INTEGER NOT NULL
            )",
            [],
        )?;

        // Compound index backing the active listing sort
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_active_order
             ON shortcuts(is_active, sort_order)",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Insert a single shortcut. The input is trimmed and validated first;
    /// a duplicate `id` is rejected without touching the table.
    pub async fn insert(&self, shortcut: NewShortcut) -> StoreResult<Shortcut> {
        let shortcut = shortcut.normalized();
        validate(&shortcut)?;

        let now = Utc::now().timestamp_millis();
        let conn = self.conn.lock().await;
        insert_row(&conn, &shortcut, now)?;

        Ok(materialize(shortcut, now))
    }

    /// Insert a batch of shortcuts in a single transaction. If any row is
    /// invalid or collides on `id`, nothing is written.
    pub async fn insert_many(&self, shortcuts: &[NewShortcut]) -> StoreResult<Vec<Shortcut>> {
        let normalized: Vec<NewShortcut> =
            shortcuts.iter().map(NewShortcut::normalized).collect();
        for shortcut in &normalized {
            validate(shortcut)?;
        }

        let now = Utc::now().timestamp_millis();
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        for shortcut in &normalized {
            insert_row(&tx, shortcut, now)?;
        }
        tx.commit()?;

        Ok(normalized
            .into_iter()
            .map(|shortcut| materialize(shortcut, now))
            .collect())
    }

    /// Delete every shortcut. Returns the number of rows removed.
    pub async fn delete_all(&self) -> StoreResult<usize> {
        let conn = self.conn.lock().await;
        let removed = conn.execute("DELETE FROM shortcuts", [])?;
        Ok(removed)
    }

    /// All active shortcuts, ordered by sort key ascending with ties
    /// broken by creation time ascending.
    pub async fn list_active(&self) -> StoreResult<Vec<Shortcut>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare_cached(
            "SELECT id, name, description, icon, uri, color,
                    sort_order, is_active, created_at, updated_at
             FROM shortcuts
             WHERE is_active = 1
             ORDER BY sort_order ASC, created_at ASC",
        )?;

        let rows = stmt.query_map([], row_to_shortcut)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Total number of records, active or not.
    pub async fn count(&self) -> StoreResult<usize> {
        let conn = self.conn.lock().await;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM shortcuts", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn insert_row(conn: &Connection, shortcut: &NewShortcut, now: i64) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO shortcuts
            (id, name, description, icon, uri, color,
             sort_order, is_active, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            shortcut.id,
            shortcut.name,
            shortcut.description,
            shortcut.icon,
            shortcut.uri,
            shortcut.color,
            shortcut.sort_order,
            shortcut.is_active,
            now,
            now,
        ],
    )
    .map_err(|e| map_insert_err(e, &shortcut.id))?;

    Ok(())
}

/// Surface a UNIQUE violation as a duplicate-id error instead of a raw
/// database error.
fn map_insert_err(err: rusqlite::Error, id: &str) -> StoreError {
    match err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StoreError::DuplicateId(id.to_string())
        }
        other => StoreError::Database(other),
    }
}

fn materialize(shortcut: NewShortcut, now: i64) -> Shortcut {
    Shortcut {
        id: shortcut.id,
        name: shortcut.name,
        description: shortcut.description,
        icon: shortcut.icon,
        uri: shortcut.uri,
        color: shortcut.color,
        sort_order: shortcut.sort_order,
        is_active: shortcut.is_active,
        created_at: now,
        updated_at: now,
    }
}

fn row_to_shortcut(row: &Row<'_>) -> rusqlite::Result<Shortcut> {
    Ok(Shortcut {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        icon: row.get(3)?,
        uri: row.get(4)?,
        color: row.get(5)?,
        sort_order: row.get(6)?,
        is_active: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::defaults::default_shortcuts;
    use std::time::Duration;
    use tempfile::tempdir;

    fn sample(id: &str) -> NewShortcut {
        NewShortcut::new(
            id,
            "Calculator",
            "Launch Windows Calculator",
            "🧮",
            "andrejlauncher://calculator",
            "bg-blue-500 hover:bg-blue-600",
        )
    }

    #[tokio::test]
    async fn test_insert_then_list_sorted_by_order() {
        let dir = tempdir().unwrap();
        let store = ShortcutStore::open(StoreConfig::new(dir.path())).unwrap();

        store.insert(sample("second").sort_order(2)).await.unwrap();
        store.insert(sample("first").sort_order(1)).await.unwrap();

        let listed = store.list_active().await.unwrap();
        let ids: Vec<_> = listed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_order_ties_broken_by_creation_time() {
        let dir = tempdir().unwrap();
        let store = ShortcutStore::open(StoreConfig::new(dir.path())).unwrap();

        store.insert(sample("older").sort_order(1)).await.unwrap();
        // Ensure a distinct creation timestamp for the second row
        tokio::time::sleep(Duration::from_millis(5)).await;
        store.insert(sample("newer").sort_order(1)).await.unwrap();

        let listed = store.list_active().await.unwrap();
        let ids: Vec<_> = listed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["older", "newer"]);
    }

    #[tokio::test]
    async fn test_listing_excludes_inactive() {
        let dir = tempdir().unwrap();
        let store = ShortcutStore::open(StoreConfig::new(dir.path())).unwrap();

        store.insert(sample("visible")).await.unwrap();
        store.insert(sample("hidden").active(false)).await.unwrap();

        let listed = store.list_active().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "visible");

        // Both rows exist in the table
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_id_leaves_store_unchanged() {
        let dir = tempdir().unwrap();
        let store = ShortcutStore::open(StoreConfig::new(dir.path())).unwrap();

        store.insert(sample("calculator")).await.unwrap();
        let before = store.count().await.unwrap();

        let mut clashing = sample("calculator");
        clashing.name = "Another Calculator".to_string();
        let err = store.insert(clashing).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(id) if id == "calculator"));

        assert_eq!(store.count().await.unwrap(), before);
        let listed = store.list_active().await.unwrap();
        assert_eq!(listed[0].name, "Calculator");
    }

    #[tokio::test]
    async fn test_insert_many_is_atomic() {
        let dir = tempdir().unwrap();
        let store = ShortcutStore::open(StoreConfig::new(dir.path())).unwrap();

        let batch = vec![sample("a"), sample("b"), sample("a")];
        let err = store.insert_many(&batch).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));

        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_field() {
        let dir = tempdir().unwrap();
        let store = ShortcutStore::open(StoreConfig::new(dir.path())).unwrap();

        let mut invalid = sample("blank");
        invalid.icon = "   ".to_string();
        let err = store.insert(invalid).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_trims_fields() {
        let dir = tempdir().unwrap();
        let store = ShortcutStore::open(StoreConfig::new(dir.path())).unwrap();

        let mut padded = sample("padded");
        padded.name = "  Calculator  ".to_string();
        padded.uri = " andrejlauncher://calculator ".to_string();
        store.insert(padded).await.unwrap();

        let listed = store.list_active().await.unwrap();
        assert_eq!(listed[0].name, "Calculator");
        assert_eq!(listed[0].uri, "andrejlauncher://calculator");
    }

    #[tokio::test]
    async fn test_delete_all() {
        let dir = tempdir().unwrap();
        let store = ShortcutStore::open(StoreConfig::new(dir.path())).unwrap();

        store.insert_many(&default_shortcuts()).await.unwrap();
        let removed = store.delete_all().await.unwrap();
        assert_eq!(removed, 4);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_reseed_converges_on_defaults() {
        let dir = tempdir().unwrap();
        let store = ShortcutStore::open(StoreConfig::new(dir.path())).unwrap();

        // A custom row that a reseed is allowed to destroy
        store.insert(sample("custom")).await.unwrap();

        for _ in 0..2 {
            store.delete_all().await.unwrap();
            store.insert_many(&default_shortcuts()).await.unwrap();
        }

        let listed = store.list_active().await.unwrap();
        let ids: Vec<_> = listed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["calculator", "linkedin", "explorer", "terminal"]);
        assert_eq!(store.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_reopen_persists_rows() {
        let dir = tempdir().unwrap();

        {
            let store = ShortcutStore::open(StoreConfig::new(dir.path())).unwrap();
            store.insert(sample("durable")).await.unwrap();
        }

        let store = ShortcutStore::open(StoreConfig::new(dir.path())).unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
