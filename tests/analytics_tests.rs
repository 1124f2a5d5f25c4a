use rusqlite::Connection;
use schedule_builder::analytics::{fetch_recent_queries, init_db, record_query};

#[test]
fn test_record_and_fetch_recent() {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init analytics schema");

    record_query(&conn, 12, r#"[{"Subj":"CS","Code":"1210"}]"#, 4).expect("record");
    record_query(&conn, 7, r#"[{"Subj":"BIO","Code":"1400"}]"#, 0).expect("record");

    let recent = fetch_recent_queries(&conn, 10).expect("fetch");
    assert_eq!(recent.len(), 2);
    // newest first
    assert_eq!(recent[0].3, r#"[{"Subj":"BIO","Code":"1400"}]"#);
    assert_eq!(recent[0].4, 0);
    assert_eq!(recent[1].2, 12);
    assert_eq!(recent[1].4, 4);

    let limited = fetch_recent_queries(&conn, 1).expect("fetch");
    assert_eq!(limited.len(), 1);
}

#[test]
fn test_init_db_is_idempotent() {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("first init");
    init_db(&conn).expect("second init");
}
