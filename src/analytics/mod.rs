// Best-effort query log for schedule-generation calls. Kept in its own
// SQLite file so the read-only catalog DB stays untouched. A failure to
// record is logged and swallowed; it must never fail the request itself.

use chrono::Utc;
use rusqlite::{Connection, params};
use std::env;
use std::error::Error;
use std::path::PathBuf;

/// Path to the analytics DB. Honors ANALYTICS_DB_PATH (and a `.env` file).
pub fn analytics_db_path() -> PathBuf {
    let _ = dotenv::dotenv();
    match env::var("ANALYTICS_DB_PATH") {
        Ok(p) => PathBuf::from(p),
        Err(_) => PathBuf::from("analytics.db"),
    }
}

pub fn open_analytics_connection() -> Result<Connection, Box<dyn Error>> {
    let conn = Connection::open(analytics_db_path())?;
    init_db(&conn)?;
    Ok(conn)
}

/// Ensure the queries table exists.
pub fn init_db(conn: &Connection) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS queries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ts TEXT NOT NULL,
            duration_ms INTEGER,
            request_json TEXT,
            schedule_count INTEGER
        )",
        [],
    )?;
    Ok(())
}

/// Record one schedule-generation call.
pub fn record_query(
    conn: &Connection,
    duration_ms: i64,
    request_json: &str,
    schedule_count: i64,
) -> Result<(), Box<dyn Error>> {
    let ts = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO queries (ts, duration_ms, request_json, schedule_count)
         VALUES (?1, ?2, ?3, ?4)",
        params![ts, duration_ms, request_json, schedule_count],
    )?;
    Ok(())
}

/// Fetch the most recent query rows (id, ts, duration_ms, request_json,
/// schedule_count), newest first.
pub fn fetch_recent_queries(
    conn: &Connection,
    limit: i64,
) -> Result<Vec<(i64, String, i64, String, i64)>, Box<dyn Error>> {
    let mut stmt = conn.prepare(
        "SELECT id, ts, duration_ms, request_json, schedule_count
         FROM queries ORDER BY id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}
