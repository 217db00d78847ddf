use crate::models::status::StatusKind;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "●";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn palette(kind: StatusKind) -> (&'static str, &'static str) {
    match kind {
        StatusKind::Info => (FG_BLUE, ICON_INFO),
        StatusKind::Ok => (FG_GREEN, ICON_OK),
        StatusKind::Warn => (FG_YELLOW, ICON_WARN),
        StatusKind::Err => (FG_RED, ICON_ERR),
    }
}

/// Colors are dropped when NO_COLOR is set.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Format one status line for the terminal.
pub fn render<T: fmt::Display>(kind: StatusKind, msg: T) -> String {
    let (color, icon) = palette(kind);
    if use_color() {
        format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
    } else {
        format!("{} {}", icon, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(StatusKind::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render(StatusKind::Ok, msg));
}

/// Rejected actions are expected outcomes, so they go to stdout.
pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", render(StatusKind::Warn, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(StatusKind::Err, msg));
}

/// Section header (employee greeting).
pub fn header<T: fmt::Display>(msg: T) {
    if use_color() {
        println!("{}{}{}{}", FG_BLUE, BOLD, msg, RESET);
    } else {
        println!("{}", msg);
    }
}
