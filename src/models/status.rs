use serde::Serialize;

/// Severity of the status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusKind {
    Info,
    Ok,
    Warn,
    Err,
}

/// One status banner line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::new(StatusKind::Info, msg)
    }

    pub fn ok(msg: impl Into<String>) -> Self {
        Self::new(StatusKind::Ok, msg)
    }

    pub fn warn(msg: impl Into<String>) -> Self {
        Self::new(StatusKind::Warn, msg)
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self::new(StatusKind::Err, msg)
    }

    fn new(kind: StatusKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            message: msg.into(),
        }
    }

    /// Print through the shared terminal helpers.
    pub fn show(&self) {
        use crate::ui::messages;
        match self.kind {
            StatusKind::Info => messages::info(&self.message),
            StatusKind::Ok => messages::success(&self.message),
            StatusKind::Warn => messages::warning(&self.message),
            StatusKind::Err => messages::error(&self.message),
        }
    }
}
