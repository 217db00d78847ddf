//! Local journal of every punch handed to the transport.

use crate::errors::AppResult;
use crate::models::payload::LogPayload;
use rusqlite::{Connection, Row, params};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Punch {
    pub id: i64,
    pub session: String,
    pub employee_id: String,
    pub action: String,
    pub job_id: String,
    pub timestamp: String,
    pub payload: String,
    pub delivered: bool,
}

fn map_punch(row: &Row) -> rusqlite::Result<Punch> {
    Ok(Punch {
        id: row.get(0)?,
        session: row.get(1)?,
        employee_id: row.get(2)?,
        action: row.get(3)?,
        job_id: row.get(4)?,
        timestamp: row.get(5)?,
        payload: row.get(6)?,
        delivered: row.get::<_, i64>(7)? != 0,
    })
}

pub fn insert_punch(conn: &Connection, session: &str, payload: &LogPayload) -> AppResult<i64> {
    let json = payload.to_json()?;
    conn.execute(
        "INSERT INTO punches (session, employee_id, action, job_id, timestamp, payload, delivered)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0)",
        params![
            session,
            payload.employee_id,
            payload.action,
            payload.job_id,
            payload.timestamp,
            json
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn mark_delivered(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("UPDATE punches SET delivered = 1 WHERE id = ?1", [id])?;
    Ok(())
}

/// Load punches in insertion order, optionally for one employee only.
pub fn load_punches(conn: &Connection, employee_id: Option<&str>) -> AppResult<Vec<Punch>> {
    let sql = "SELECT id, session, employee_id, action, job_id, timestamp, payload, delivered
               FROM punches
               WHERE (?1 IS NULL OR employee_id = ?1)
               ORDER BY id ASC";

    let mut stmt = conn.prepare(sql)?;
    let punches = stmt
        .query_map(params![employee_id], map_punch)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(punches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::models::action::ClockAction;
    use crate::models::employee::Employee;
    use crate::models::location::LocationReading;
    use chrono::Utc;

    #[test]
    fn journal_tracks_delivery() {
        let pool = DbPool::in_memory().unwrap();
        let p = LogPayload::build(
            &Employee::new("E03", "Caprea Kovecses"),
            ClockAction::ClockIn,
            None,
            "",
            &LocationReading::Denied,
            Utc::now(),
        );
        let first = insert_punch(&pool.conn, "default", &p).unwrap();
        insert_punch(&pool.conn, "default", &p).unwrap();
        mark_delivered(&pool.conn, first).unwrap();

        let all = load_punches(&pool.conn, Some("E03")).unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].delivered);
        assert!(!all[1].delivered);
        assert_eq!(all[0].action, "Clock In");
        assert!(load_punches(&pool.conn, Some("E04")).unwrap().is_empty());
        assert_eq!(load_punches(&pool.conn, None).unwrap().len(), 2);
    }
}
