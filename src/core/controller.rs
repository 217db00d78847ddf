//! Clock session controller: owns the session state for one employee and
//! runs each action as validate → persist → relay → status.

use crate::core::event_log::EventLogger;
use crate::core::jobs::{load_failure_status, restore_selection, selection_status};
use crate::core::state::{self, Rejection};
use crate::db::log::ttlog;
use crate::db::session_store::{KEY_CLOCKED_IN, KEY_NOTES, KEY_ON_BREAK, SessionStore};
use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::buttons::ButtonStates;
use crate::models::employee::Employee;
use crate::models::job::Job;
use crate::models::payload::LogPayload;
use crate::models::session_state::SessionState;
use crate::models::status::Status;
use rusqlite::Connection;

/// Result of running one action.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub status: Status,
    pub accepted: bool,
    pub payloads: Vec<LogPayload>,
}

pub struct ClockController<'a> {
    conn: &'a Connection,
    employee: Employee,
    jobs: Vec<Job>,
    state: SessionState,
    store: SessionStore<'a>,
    logger: EventLogger<'a>,
}

impl<'a> ClockController<'a> {
    /// Restore the persisted flags, install the job list (or note why it is
    /// missing) and re-select the employee's last job if it is still offered.
    pub fn load(
        conn: &'a Connection,
        employee: Employee,
        store: SessionStore<'a>,
        logger: EventLogger<'a>,
        jobs: AppResult<Vec<Job>>,
    ) -> AppResult<(Self, Status)> {
        let mut state = SessionState {
            is_clocked_in: store.get_flag(KEY_CLOCKED_IN)?,
            on_break: store.get_flag(KEY_ON_BREAK)?,
            selected_job: None,
        };

        let (jobs, status) = match jobs {
            Ok(jobs) => {
                let last = store.get(&employee.last_job_key())?;
                state.selected_job = restore_selection(&jobs, last.as_deref());
                let status = selection_status(state.selected_job.as_ref());
                (jobs, status)
            }
            Err(e) => {
                log::warn!("job list unavailable: {e}");
                (Vec::new(), load_failure_status(&e))
            }
        };

        let ctl = Self {
            conn,
            employee,
            jobs,
            state,
            store,
            logger,
        };
        Ok((ctl, status))
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn buttons(&self) -> ButtonStates {
        ButtonStates::derive(&self.state)
    }

    pub fn notes(&self) -> AppResult<String> {
        Ok(self.store.get(KEY_NOTES)?.unwrap_or_default())
    }

    /// Select a job from the loaded list and remember it for this employee.
    /// Switching jobs while clocked in is allowed.
    pub fn select_job(&mut self, job_id: &str) -> AppResult<Status> {
        let job = self
            .jobs
            .iter()
            .find(|j| j.id == job_id)
            .cloned()
            .ok_or_else(|| AppError::UnknownJob(job_id.to_string()))?;

        self.store.set(&self.employee.last_job_key(), &job.id)?;
        self.audit("select", &self.employee.code, &job.id);
        let status = Status::info(format!("Selected: {}", job.name));
        self.state.selected_job = Some(job);
        Ok(status)
    }

    pub fn clear_job(&mut self) -> AppResult<Status> {
        self.state.selected_job = None;
        self.store.remove(&self.employee.last_job_key())?;
        Ok(Status::warn("Please select a job to continue."))
    }

    /// Notes can only be edited while clocked in.
    pub fn set_notes(&mut self, text: &str) -> AppResult<Status> {
        if !self.buttons().notes {
            return Ok(Status::warn("Clock in before adding notes."));
        }
        if text.trim().is_empty() {
            self.store.remove(KEY_NOTES)?;
            return Ok(Status::info("Notes cleared."));
        }
        self.store.set(KEY_NOTES, text)?;
        Ok(Status::info("Notes saved for clock out."))
    }

    /// Run one action. A rejected action leaves state and storage untouched.
    /// `notes` overrides the stored draft for a clock-out.
    pub fn perform(&mut self, action: ClockAction, notes: Option<&str>) -> AppResult<Outcome> {
        let notes = match notes {
            Some(n) => n.to_string(),
            None => self.notes()?,
        };

        let transition = match state::apply(&self.state, action) {
            Ok(t) => t,
            Err(Rejection(status)) => {
                return Ok(Outcome {
                    status,
                    accepted: false,
                    payloads: Vec::new(),
                });
            }
        };

        self.state.is_clocked_in = transition.is_clocked_in;
        self.state.on_break = transition.on_break;
        self.store.set_flag(KEY_ON_BREAK, self.state.on_break)?;
        self.store.set_flag(KEY_CLOCKED_IN, self.state.is_clocked_in)?;

        let job = self.state.selected_job.as_ref();
        let payloads: Vec<LogPayload> = transition
            .events
            .iter()
            .map(|ev| self.logger.log(&self.employee, *ev, job, &notes))
            .collect();

        if action == ClockAction::ClockOut {
            self.store.remove(KEY_NOTES)?;
        }

        self.audit(
            "punch",
            &self.employee.code,
            &format!(
                "{} ({})",
                action,
                job.map(|j| j.id.as_str()).unwrap_or_default()
            ),
        );

        Ok(Outcome {
            status: transition.status,
            accepted: true,
            payloads,
        })
    }

    /// End the session: every stored key goes, flags fall back to false.
    pub fn end_session(&mut self) -> AppResult<usize> {
        let n = self.store.clear()?;
        self.state = SessionState::default();
        self.audit(
            "session_clear",
            self.store.session(),
            &format!("{n} keys removed"),
        );
        Ok(n)
    }

    /// Internal audit line; a failure here never blocks the action.
    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(self.conn, operation, target, message) {
            log::warn!("failed to write internal log: {e}");
        }
    }
}
