//! SQLite connection wrapper (lightweight, one connection per operation).

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        // concurrent report workers open their own connections
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }
}
