use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, use_color};
use ansi_term::Colour;

/// ANSI colour for an operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "punch" => Colour::Green,
        "select" => Colour::Cyan,
        "session_clear" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Log { print: true }) {
        return Ok(());
    }

    let pool = DbPool::open(&cfg.database)?;
    let entries = load_log(&pool.conn)?;
    if entries.is_empty() {
        info("Internal log is empty.");
        return Ok(());
    }

    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);
    let op_w = entries
        .iter()
        .map(|e| e.operation.len() + e.target.len() + 3)
        .max()
        .unwrap_or(10)
        .min(40);

    println!("📜 Internal log:\n");

    for e in entries {
        let op_target = if e.target.is_empty() {
            e.operation.clone()
        } else {
            format!("{} ({})", e.operation, e.target)
        };
        let padding = " ".repeat(op_w.saturating_sub(op_target.chars().count()));
        let shown = if use_color() {
            let painted = color_for_operation(&e.operation).paint(e.operation.as_str());
            op_target.replacen(&e.operation, &painted.to_string(), 1)
        } else {
            op_target
        };

        println!(
            "{:>id_w$}: {} | {}{} => {}",
            e.id,
            e.date,
            shown,
            padding,
            e.message,
            id_w = id_w
        );
    }

    Ok(())
}
