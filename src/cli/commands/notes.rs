use crate::cli::commands::with_controller;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Notes { text, show } = &cli.command {
        with_controller(cli, cfg, |ctl| {
            if *show || text.is_none() {
                let notes = ctl.notes()?;
                if notes.is_empty() {
                    info("No notes saved.");
                } else {
                    println!("{notes}");
                }
                return Ok(());
            }

            let status = ctl.set_notes(text.as_deref().unwrap_or_default())?;
            status.show();
            Ok(())
        })?;
    }

    Ok(())
}
