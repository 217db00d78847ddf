use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::directory;
use crate::db::pool::DbPool;
use crate::db::punches::load_punches;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

/// List journaled punches and whether the endpoint accepted them.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Punches { all } = &cli.command else {
        return Ok(());
    };

    let employee = if *all {
        None
    } else {
        Some(directory::resolve(cli.emp.as_deref())?)
    };

    let pool = DbPool::open(&cfg.database)?;
    let punches = load_punches(&pool.conn, employee.as_ref().map(|e| e.code.as_str()))?;

    if punches.is_empty() {
        info("No punches recorded.");
        return Ok(());
    }

    let mut table = Table::new(&["ID", "TIMESTAMP", "EMP", "ACTION", "JOB", "SENT"]);
    for p in &punches {
        table.add_row(vec![
            p.id.to_string(),
            p.timestamp.clone(),
            p.employee_id.clone(),
            p.action.clone(),
            p.job_id.clone(),
            if p.delivered { "yes" } else { "no" }.to_string(),
        ]);
    }
    print!("{}", table.render());

    let pending = punches.iter().filter(|p| !p.delivered).count();
    if pending > 0 {
        info(format!("{pending} punch(es) were not confirmed by the endpoint."));
    }
    Ok(())
}
