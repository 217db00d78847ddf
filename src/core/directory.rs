//! Static employee directory and the `--emp` lookup.

use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;

/// Employee code → display name, compiled into the binary.
pub const DIRECTORY: &[(&str, &str)] = &[
    ("E01", "Shannon Kovecses"),
    ("E02", "Shauna Bari"),
    ("E03", "Caprea Kovecses"),
    ("E04", "Matthew Bari"),
    ("E05", "Employee Five"),
    ("E06", "Employee Six"),
    ("E07", "Employee Seven"),
    ("E08", "Employee Eight"),
    ("E09", "Employee Nine"),
    ("E10", "Employee Ten"),
];

pub fn lookup(code: &str) -> Option<Employee> {
    DIRECTORY
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(c, name)| Employee::new(c, name))
}

/// Resolve the employee for this run. Codes match exactly (case-sensitive);
/// a missing or unknown code stops everything else.
pub fn resolve(code: Option<&str>) -> AppResult<Employee> {
    code.and_then(lookup).ok_or(AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve_to_their_names() {
        for (code, name) in DIRECTORY {
            let e = resolve(Some(code)).unwrap();
            assert_eq!(e.name, *name);
            assert_eq!(e.greeting(), format!("Welcome, {name}"));
        }
    }

    #[test]
    fn missing_or_unknown_is_unauthorized() {
        for code in [None, Some(""), Some("E11"), Some("e01"), Some(" E01")] {
            assert!(matches!(resolve(code), Err(AppError::Unauthorized)));
        }
    }
}
