//! Session-scoped key/value storage.
//!
//! Every row belongs to one named session; clearing a session drops all of
//! its keys, which resets the clock state to its defaults.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

pub const KEY_ON_BREAK: &str = "onBreak";
pub const KEY_CLOCKED_IN: &str = "isClockedIn";
pub const KEY_NOTES: &str = "notes";

pub struct SessionStore<'a> {
    conn: &'a Connection,
    session: String,
}

impl<'a> SessionStore<'a> {
    pub fn new(conn: &'a Connection, session: &str) -> Self {
        Self {
            conn,
            session: session.to_string(),
        }
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM session_storage WHERE session = ?1 AND key = ?2",
                params![self.session, key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO session_storage (session, key, value) VALUES (?1, ?2, ?3)
             ON CONFLICT(session, key) DO UPDATE SET value = excluded.value",
            params![self.session, key, value],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> AppResult<()> {
        self.conn.execute(
            "DELETE FROM session_storage WHERE session = ?1 AND key = ?2",
            params![self.session, key],
        )?;
        Ok(())
    }

    /// Drop every key of this session. Returns the number of keys removed.
    pub fn clear(&self) -> AppResult<usize> {
        let n = self.conn.execute(
            "DELETE FROM session_storage WHERE session = ?1",
            params![self.session],
        )?;
        Ok(n)
    }

    /// Flags are stored as the strings "true"/"false"; anything else is false.
    pub fn get_flag(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key)?.as_deref() == Some("true"))
    }

    pub fn set_flag(&self, key: &str, value: bool) -> AppResult<()> {
        self.set(key, if value { "true" } else { "false" })
    }
}
