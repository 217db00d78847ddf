use serde::Serialize;
use std::fmt;

/// The four punches an employee can record.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ClockAction {
    ClockIn,
    BreakStart,
    BreakEnd,
    ClockOut,
}

impl ClockAction {
    /// Label sent to the endpoint as `action`.
    pub fn label(&self) -> &'static str {
        match self {
            ClockAction::ClockIn => "Clock In",
            ClockAction::BreakStart => "Break Start",
            ClockAction::BreakEnd => "Break End",
            ClockAction::ClockOut => "Clock Out",
        }
    }

    /// Only a clock-out carries the notes field.
    pub fn carries_notes(&self) -> bool {
        matches!(self, ClockAction::ClockOut)
    }
}

impl fmt::Display for ClockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
