use super::session_state::SessionState;

/// Which actions are currently available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    pub clock_in: bool,
    pub break_start: bool,
    pub break_end: bool,
    pub clock_out: bool,
    pub notes: bool,
}

impl ButtonStates {
    pub fn derive(state: &SessionState) -> Self {
        let has_job = state.has_job();
        let clocked = state.is_clocked_in;
        let on_break = state.on_break;

        Self {
            clock_in: !clocked && has_job,
            break_start: clocked && !on_break && has_job,
            break_end: clocked && on_break && has_job,
            clock_out: clocked && has_job,
            notes: clocked,
        }
    }

    /// (label, enabled) pairs in display order.
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("clock-in", self.clock_in),
            ("break-start", self.break_start),
            ("break-end", self.break_end),
            ("clock-out", self.clock_out),
            ("notes", self.notes),
        ]
    }
}
