use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, params};

/// A schema migration, applied once and recorded in the `log` table as
/// `migration_applied` with the version as target.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250901_0001_create_entries",
        description: "Created entries and user_settings tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS entries (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id           TEXT NOT NULL,
            location          TEXT NOT NULL DEFAULT 'O' CHECK(location IN ('O','R','C','T')),
            kind              TEXT NOT NULL DEFAULT 'work',
            start_time        TEXT NOT NULL,
            end_time          TEXT,
            pause_minutes     INTEGER NOT NULL DEFAULT 0,
            duration_minutes  INTEGER,
            driver_hours      REAL,
            passenger_hours   REAL,
            month_key         TEXT NOT NULL,
            created_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_user_month ON entries(user_id, month_key);
        CREATE INDEX IF NOT EXISTS idx_entries_user_start ON entries(user_id, start_time);

        CREATE TABLE IF NOT EXISTS user_settings (
            user_id     TEXT PRIMARY KEY,
            document    TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250915_0002_create_teams",
        description: "Created teams, team_members and published_months tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS teams (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS team_members (
            team_id       TEXT NOT NULL REFERENCES teams(id) ON DELETE CASCADE,
            user_id       TEXT NOT NULL,
            display_name  TEXT,
            email         TEXT,
            PRIMARY KEY (team_id, user_id)
        );

        CREATE TABLE IF NOT EXISTS published_months (
            team_id       TEXT NOT NULL REFERENCES teams(id) ON DELETE CASCADE,
            user_id       TEXT NOT NULL,
            month_key     TEXT NOT NULL,
            document      TEXT NOT NULL,
            published_at  TEXT NOT NULL,
            PRIMARY KEY (team_id, user_id, month_key)
        );
        "#,
    },
];

/// Ensure that the `log` table exists; it also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations, returning how many ran.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        apply(conn, m)?;
        tracing::info!(version = m.version, "migration applied");
        success(format!("Migration applied: {} → {}", m.version, m.description));
        applied += 1;
    }

    Ok(applied)
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
