use crate::cli::commands::with_controller;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::action::ClockAction;

/// Handle `clock-in`, `break-start`, `break-end` and `clock-out`.
///
/// A rejected action prints its warning and still exits successfully.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (action, notes) = match &cli.command {
        Commands::ClockIn => (ClockAction::ClockIn, None),
        Commands::BreakStart => (ClockAction::BreakStart, None),
        Commands::BreakEnd => (ClockAction::BreakEnd, None),
        Commands::ClockOut { notes } => (ClockAction::ClockOut, notes.as_deref()),
        _ => return Ok(()),
    };

    with_controller(cli, cfg, |ctl| {
        let outcome = ctl.perform(action, notes)?;
        outcome.status.show();
        Ok(())
    })
}
