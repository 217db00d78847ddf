//! Pure validation of the four clock actions.
//!
//! Nothing here touches storage or the network: `apply` looks at the current
//! state and either describes the transition to perform or rejects it with
//! the warning to show. `on_break` is never true while clocked out.

use crate::models::action::ClockAction;
use crate::models::session_state::SessionState;
use crate::models::status::Status;

/// Outcome of an accepted action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub is_clocked_in: bool,
    pub on_break: bool,
    /// Punches to relay, in order.
    pub events: Vec<ClockAction>,
    pub status: Status,
}

/// Reason an action was refused; the state stays as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection(pub Status);

impl Rejection {
    fn warn(msg: &str) -> Self {
        Rejection(Status::warn(msg))
    }
}

pub fn apply(state: &SessionState, action: ClockAction) -> Result<Transition, Rejection> {
    match action {
        ClockAction::ClockIn => clock_in(state),
        ClockAction::BreakStart => break_start(state),
        ClockAction::BreakEnd => break_end(state),
        ClockAction::ClockOut => clock_out(state),
    }
}

fn clock_in(state: &SessionState) -> Result<Transition, Rejection> {
    let Some(job) = &state.selected_job else {
        return Err(Rejection::warn("Please select a job before clocking in."));
    };
    if state.is_clocked_in {
        return Err(Rejection::warn("You are already clocked in."));
    }

    Ok(Transition {
        is_clocked_in: true,
        on_break: false,
        events: vec![ClockAction::ClockIn],
        status: Status::ok(format!("Clocked In ✅ ({})", job.name)),
    })
}

fn break_start(state: &SessionState) -> Result<Transition, Rejection> {
    if !state.has_job() {
        return Err(Rejection::warn("Select a job before starting break."));
    }
    if !state.is_clocked_in {
        return Err(Rejection::warn("You must Clock In before starting break."));
    }
    if state.on_break {
        return Err(Rejection::warn("Break is already active."));
    }

    Ok(Transition {
        is_clocked_in: true,
        on_break: true,
        events: vec![ClockAction::BreakStart],
        status: Status::ok("Break Started 🟡"),
    })
}

fn break_end(state: &SessionState) -> Result<Transition, Rejection> {
    if !state.has_job() {
        return Err(Rejection::warn("Select a job before ending break."));
    }
    if !state.is_clocked_in {
        return Err(Rejection::warn("You must Clock In before ending break."));
    }
    if !state.on_break {
        return Err(Rejection::warn("No active break to end."));
    }

    Ok(Transition {
        is_clocked_in: true,
        on_break: false,
        events: vec![ClockAction::BreakEnd],
        status: Status::ok("Break Ended ✅"),
    })
}

fn clock_out(state: &SessionState) -> Result<Transition, Rejection> {
    if !state.has_job() {
        return Err(Rejection::warn("Please select a job before clocking out."));
    }
    if !state.is_clocked_in {
        return Err(Rejection::warn("You are not clocked in."));
    }

    let mut events = Vec::with_capacity(2);
    if state.on_break {
        events.push(ClockAction::BreakEnd);
    }
    events.push(ClockAction::ClockOut);

    Ok(Transition {
        is_clocked_in: false,
        on_break: false,
        events,
        status: Status::ok("Clocked Out ✅ (Notes saved if entered)"),
    })
}
