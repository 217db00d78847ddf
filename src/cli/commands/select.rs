use crate::cli::commands::with_controller;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Select { job_id, clear } = &cli.command {
        with_controller(cli, cfg, |ctl| {
            let status = match job_id {
                Some(id) if !*clear && !id.trim().is_empty() => ctl.select_job(id.trim())?,
                _ => ctl.clear_job()?,
            };
            status.show();
            Ok(())
        })?;
    }

    Ok(())
}
