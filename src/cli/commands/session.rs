use crate::cli::commands::with_controller;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { clear } = &cli.command {
        with_controller(cli, cfg, |ctl| {
            if *clear {
                let n = ctl.end_session()?;
                success(format!("Session '{}' cleared ({} keys).", cfg.session, n));
            } else {
                info(format!("Session: {}", cfg.session));
            }
            Ok(())
        })?;
    }

    Ok(())
}
