use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::directory;
use crate::db::pool::DbPool;
use crate::db::punches::load_punches;
use crate::errors::AppResult;
use crate::export::export_punches;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        all,
        force,
    } = &cli.command
    {
        let employee = if *all {
            None
        } else {
            Some(directory::resolve(cli.emp.as_deref())?)
        };

        let pool = DbPool::open(&cfg.database)?;
        let punches = load_punches(&pool.conn, employee.as_ref().map(|e| e.code.as_str()))?;
        export_punches(&punches, format, file, *force)?;
    }
    Ok(())
}
