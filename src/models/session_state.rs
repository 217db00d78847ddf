use super::job::Job;

/// Clock state of one session.
///
/// `is_clocked_in` and `on_break` are persisted in session storage;
/// `selected_job` is rebuilt on every run from the last job id and the
/// freshly loaded job list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub is_clocked_in: bool,
    pub on_break: bool,
    pub selected_job: Option<Job>,
}

impl SessionState {
    pub fn has_job(&self) -> bool {
        self.selected_job.is_some()
    }
}
