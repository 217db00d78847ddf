//! Punch relay.
//!
//! Each punch is journaled locally, then handed to the transport exactly
//! once. Delivery is never confirmed to the user and never retried; a failed
//! send only leaves the journal row marked undelivered.

use crate::core::gps::{LocationProvider, locate_with_timeout};
use crate::db::punches::{insert_punch, mark_delivered};
use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::employee::Employee;
use crate::models::job::Job;
use crate::models::payload::LogPayload;
use chrono::Utc;
use rusqlite::Connection;
use std::sync::Arc;
use std::time::Duration;

pub trait Transport {
    fn send(&self, payload: &LogPayload) -> AppResult<()>;
}

/// Form-encoded POST with a single `payload` field. The response body is
/// never read.
pub struct HttpTransport {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url: url.to_string(),
            client,
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, payload: &LogPayload) -> AppResult<()> {
        let json = payload.to_json()?;
        self.client
            .post(&self.url)
            .form(&[("payload", json)])
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

/// Used when no endpoint is configured: every punch stays local.
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    fn send(&self, _payload: &LogPayload) -> AppResult<()> {
        Err(AppError::NoEndpoint)
    }
}

pub struct EventLogger<'a> {
    conn: &'a Connection,
    session: String,
    transport: Box<dyn Transport>,
    locator: Arc<dyn LocationProvider>,
    gps_timeout: Duration,
}

impl<'a> EventLogger<'a> {
    pub fn new(
        conn: &'a Connection,
        session: &str,
        transport: Box<dyn Transport>,
        locator: Arc<dyn LocationProvider>,
        gps_timeout: Duration,
    ) -> Self {
        Self {
            conn,
            session: session.to_string(),
            transport,
            locator,
            gps_timeout,
        }
    }

    /// Relay one punch. `notes` is read before the location lookup and only
    /// kept for a clock-out.
    pub fn log(
        &self,
        employee: &Employee,
        action: ClockAction,
        job: Option<&Job>,
        notes: &str,
    ) -> LogPayload {
        let notes = if action.carries_notes() {
            notes.trim().to_string()
        } else {
            String::new()
        };

        let reading = locate_with_timeout(Arc::clone(&self.locator), self.gps_timeout);
        let payload = LogPayload::build(employee, action, job, &notes, &reading, Utc::now());

        let journal_id = match insert_punch(self.conn, &self.session, &payload) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("failed to journal {} punch: {}", action, e);
                None
            }
        };

        match self.transport.send(&payload) {
            Ok(()) => {
                if let Some(id) = journal_id
                    && let Err(e) = mark_delivered(self.conn, id)
                {
                    log::warn!("failed to mark punch {id} delivered: {e}");
                }
            }
            Err(e) => log::debug!("{} punch not delivered: {}", action, e),
        }

        payload
    }
}
