use crate::errors::{AppError, AppResult};
use crate::models::entry::{TIMESTAMP_FORMAT, TimeEntry, parse_timestamp};
use crate::models::entry_kind::EntryKind;
use crate::models::location::Location;
use crate::models::month::MonthRef;
use crate::models::team::{Member, PublishedMonth, Team};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const ENTRY_COLUMNS: &str = "id, user_id, location, kind, start_time, end_time, pause_minutes, \
     duration_minutes, driver_hours, passenger_hours, created_at";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_entry(row: &Row) -> Result<TimeEntry> {
    let loc_str: String = row.get("location")?;
    let location = Location::from_db_str(&loc_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidLocation(loc_str.clone())))?;

    let kind_str: String = row.get("kind")?;
    let kind = EntryKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidEntryKind(kind_str.clone())))?;

    let start_str: String = row.get("start_time")?;
    let start_time = parse_timestamp(&start_str)
        .ok_or_else(|| conversion_error(4, AppError::InvalidTime(start_str.clone())))?;

    let end_time = match row.get::<_, Option<String>>("end_time")? {
        Some(s) => Some(
            parse_timestamp(&s).ok_or_else(|| conversion_error(5, AppError::InvalidTime(s.clone())))?,
        ),
        None => None,
    };

    Ok(TimeEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        location,
        kind,
        start_time,
        end_time,
        pause_minutes: row.get("pause_minutes")?,
        duration_minutes: row.get("duration_minutes")?,
        driver_time_hours: row.get("driver_hours")?,
        passenger_time_hours: row.get("passenger_hours")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert an entry and return its new id.
pub fn insert_entry(conn: &Connection, e: &TimeEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (user_id, location, kind, start_time, end_time, pause_minutes,
                              duration_minutes, driver_hours, passenger_hours, month_key, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            e.user_id,
            e.location.to_db_str(),
            e.kind.to_db_str(),
            e.start_time.format(TIMESTAMP_FORMAT).to_string(),
            e.end_str(),
            e.pause_minutes,
            e.duration_minutes,
            e.driver_time_hours,
            e.passenger_time_hours,
            e.month().key(),
            e.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update an entry (all fields except id and owner). Returns false when no
/// row matched.
pub fn update_entry(conn: &Connection, e: &TimeEntry) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE entries
         SET location = ?1, kind = ?2, start_time = ?3, end_time = ?4,
             pause_minutes = ?5, duration_minutes = ?6,
             driver_hours = ?7, passenger_hours = ?8, month_key = ?9
         WHERE id = ?10 AND user_id = ?11",
        params![
            e.location.to_db_str(),
            e.kind.to_db_str(),
            e.start_time.format(TIMESTAMP_FORMAT).to_string(),
            e.end_str(),
            e.pause_minutes,
            e.duration_minutes,
            e.driver_time_hours,
            e.passenger_time_hours,
            e.month().key(),
            e.id,
            e.user_id,
        ],
    )?;
    Ok(changed > 0)
}

pub fn delete_entry(conn: &Connection, user_id: &str, id: i64) -> AppResult<bool> {
    let changed = conn.execute(
        "DELETE FROM entries WHERE id = ?1 AND user_id = ?2",
        params![id, user_id],
    )?;
    Ok(changed > 0)
}

pub fn load_entry(conn: &Connection, user_id: &str, id: i64) -> AppResult<Option<TimeEntry>> {
    let sql = format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1 AND user_id = ?2");
    Ok(conn
        .query_row(&sql, params![id, user_id], map_entry)
        .optional()?)
}

pub fn load_entries_for_month(
    conn: &Connection,
    user_id: &str,
    month: MonthRef,
) -> AppResult<Vec<TimeEntry>> {
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE user_id = ?1 AND month_key = ?2
         ORDER BY start_time ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![user_id, month.key()], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The latest entry with neither end time nor duration.
pub fn load_running_entry(conn: &Connection, user_id: &str) -> AppResult<Option<TimeEntry>> {
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE user_id = ?1 AND end_time IS NULL AND duration_minutes IS NULL
         ORDER BY start_time DESC
         LIMIT 1"
    );
    Ok(conn.query_row(&sql, [user_id], map_entry).optional()?)
}

// ---------------------------
// Settings documents
// ---------------------------

pub fn load_settings_document(conn: &Connection, user_id: &str) -> AppResult<Option<String>> {
    Ok(conn
        .query_row(
            "SELECT document FROM user_settings WHERE user_id = ?1",
            [user_id],
            |row| row.get(0),
        )
        .optional()?)
}

pub fn upsert_settings_document(conn: &Connection, user_id: &str, document: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO user_settings (user_id, document, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(user_id) DO UPDATE SET document = excluded.document,
                                            updated_at = excluded.updated_at",
        params![user_id, document, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

// ---------------------------
// Teams
// ---------------------------

pub fn insert_team(conn: &Connection, team: &Team) -> AppResult<()> {
    conn.execute(
        "INSERT INTO teams (id, name, created_at) VALUES (?1, ?2, ?3)",
        params![team.id, team.name, team.created_at],
    )?;
    Ok(())
}

pub fn load_team(conn: &Connection, team_id: &str) -> AppResult<Option<Team>> {
    Ok(conn
        .query_row(
            "SELECT id, name, created_at FROM teams WHERE id = ?1",
            [team_id],
            |row| {
                Ok(Team {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: row.get(2)?,
                })
            },
        )
        .optional()?)
}

pub fn upsert_member(conn: &Connection, team_id: &str, member: &Member) -> AppResult<()> {
    conn.execute(
        "INSERT INTO team_members (team_id, user_id, display_name, email)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(team_id, user_id) DO UPDATE SET display_name = excluded.display_name,
                                                     email = excluded.email",
        params![team_id, member.user_id, member.display_name, member.email],
    )?;
    Ok(())
}

pub fn delete_member(conn: &Connection, team_id: &str, user_id: &str) -> AppResult<bool> {
    let changed = conn.execute(
        "DELETE FROM team_members WHERE team_id = ?1 AND user_id = ?2",
        params![team_id, user_id],
    )?;
    Ok(changed > 0)
}

pub fn load_members(conn: &Connection, team_id: &str) -> AppResult<Vec<Member>> {
    let mut stmt = conn.prepare(
        "SELECT user_id, display_name, email FROM team_members
         WHERE team_id = ?1
         ORDER BY user_id ASC",
    )?;
    let rows = stmt.query_map([team_id], |row| {
        Ok(Member {
            user_id: row.get(0)?,
            display_name: row.get(1)?,
            email: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Published months (JSON snapshots)
// ---------------------------

pub fn upsert_published(conn: &Connection, snapshot: &PublishedMonth) -> AppResult<()> {
    let document = serde_json::to_string(snapshot)?;
    conn.execute(
        "INSERT INTO published_months (team_id, user_id, month_key, document, published_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(team_id, user_id, month_key) DO UPDATE SET document = excluded.document,
                                                                published_at = excluded.published_at",
        params![
            snapshot.team_id,
            snapshot.user_id,
            snapshot.month.key(),
            document,
            snapshot.published_at,
        ],
    )?;
    Ok(())
}

pub fn load_published(
    conn: &Connection,
    team_id: &str,
    user_id: &str,
    month: MonthRef,
) -> AppResult<Option<PublishedMonth>> {
    let document: Option<String> = conn
        .query_row(
            "SELECT document FROM published_months
             WHERE team_id = ?1 AND user_id = ?2 AND month_key = ?3",
            params![team_id, user_id, month.key()],
            |row| row.get(0),
        )
        .optional()?;

    match document {
        Some(doc) => Ok(Some(serde_json::from_str(&doc)?)),
        None => Ok(None),
    }
}
