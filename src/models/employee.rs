use serde::Serialize;

/// An employee resolved from the static directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub code: String, // ⇔ `--emp` value, e.g. "E01"
    pub name: String,
}

impl Employee {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.name)
    }

    /// Session key that remembers the last job picked by this employee.
    pub fn last_job_key(&self) -> String {
        format!("lastJob_{}", self.code)
    }
}
