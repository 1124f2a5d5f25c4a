// SQLite access for the course catalog. All statements are parameterized;
// filter values are never spliced into SQL text.

use rusqlite::{Connection, Row, params_from_iter};
use std::env;
use std::error::Error;
use std::path::PathBuf;

use crate::models::{CourseRequest, Section};

/// Columns of the `Classes` table, in storage order. Doubles as the whitelist
/// for search filters: a filter key must match one of these exactly.
pub const COLUMNS: [&str; 12] = [
    "Subj",
    "Crse",
    "Title",
    "Creds",
    "CRN",
    "Avail",
    "Max",
    "Time",
    "Day",
    "Location",
    "Instructor",
    "Notes",
];

fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Path to the course catalog DB. Honors CLASSES_DB_PATH (and a `.env` file).
pub fn classes_db_path() -> PathBuf {
    load_dotenv();
    match env::var("CLASSES_DB_PATH") {
        Ok(p) => PathBuf::from(p),
        Err(_) => PathBuf::from("classes.db"),
    }
}

/// Open a short-lived connection to the catalog DB.
pub fn open_connection() -> Result<Connection, Box<dyn Error>> {
    let conn = Connection::open(classes_db_path())?;
    Ok(conn)
}

/// Create the `Classes` table if missing. CRN is the integer row identity;
/// everything else is stored as text exactly as ingested.
pub fn init_schema(conn: &Connection) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS Classes (
            Subj TEXT NOT NULL,
            Crse TEXT NOT NULL,
            Title TEXT NOT NULL,
            Creds TEXT NOT NULL DEFAULT '',
            CRN INTEGER PRIMARY KEY,
            Avail TEXT NOT NULL DEFAULT '',
            Max TEXT NOT NULL DEFAULT '',
            Time TEXT NOT NULL DEFAULT '',
            Day TEXT NOT NULL DEFAULT '',
            Location TEXT NOT NULL DEFAULT '',
            Instructor TEXT NOT NULL DEFAULT '',
            Notes TEXT NOT NULL DEFAULT ''
        )",
        [],
    )?;
    Ok(())
}

fn section_from_row(row: &Row<'_>) -> rusqlite::Result<Section> {
    Ok(Section {
        subj: row.get("Subj")?,
        crse: row.get("Crse")?,
        title: row.get("Title")?,
        creds: row.get("Creds")?,
        crn: row.get("CRN")?,
        avail: row.get("Avail")?,
        max: row.get("Max")?,
        time: row.get("Time")?,
        day: row.get("Day")?,
        location: row.get("Location")?,
        instructor: row.get("Instructor")?,
        notes: row.get("Notes")?,
    })
}

/// Search the catalog by field filters. Each filter is a (column, pattern)
/// pair combined with AND; patterns go through SQL `LIKE`, so callers get
/// substring matching by including `%` themselves. Column names are checked
/// against the whitelist before touching the statement.
pub fn search_sections(
    conn: &Connection,
    filters: &[(String, String)],
) -> Result<Vec<Section>, Box<dyn Error>> {
    let mut sql = String::from("SELECT * FROM Classes WHERE 1=1");
    let mut values: Vec<String> = Vec::with_capacity(filters.len());
    for (column, pattern) in filters {
        if !COLUMNS.contains(&column.as_str()) {
            return Err(format!("unknown search column: {}", column).into());
        }
        sql.push_str(&format!(" AND {} LIKE ?{}", column, values.len() + 1));
        values.push(pattern.clone());
    }
    sql.push_str(" ORDER BY CRN ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), section_from_row)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

/// Fetch every section matching any of the requested courses, ordered by CRN
/// ascending within each course. That ordering is a contract with the
/// algorithm layer: associated-section detection scans consecutive CRNs and
/// is only correct over CRN-sorted rows.
pub fn fetch_sections_for_requests(
    conn: &Connection,
    requests: &[CourseRequest],
) -> Result<Vec<Section>, Box<dyn Error>> {
    if requests.is_empty() {
        return Ok(Vec::new());
    }

    let mut clauses = Vec::with_capacity(requests.len());
    let mut values: Vec<String> = Vec::with_capacity(requests.len() * 2);
    for request in requests {
        clauses.push(format!(
            "(Subj = ?{} AND Crse = ?{})",
            values.len() + 1,
            values.len() + 2
        ));
        values.push(request.subj.clone());
        values.push(request.code.clone());
    }
    let sql = format!(
        "SELECT * FROM Classes WHERE {} ORDER BY Subj, Crse, CRN ASC",
        clauses.join(" OR ")
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), section_from_row)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

/// Distinct (Subj, Crse) pairs present in the catalog.
pub fn list_courses(conn: &Connection) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    let mut stmt =
        conn.prepare("SELECT DISTINCT Subj, Crse FROM Classes ORDER BY Subj, Crse")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}
