use crate::cli::commands::with_controller;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::table::Table;

/// List the offered jobs. Pay is never shown.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    with_controller(cli, cfg, |ctl| {
        if ctl.jobs().is_empty() {
            return Ok(());
        }

        let selected = ctl.state().selected_job.as_ref().map(|j| j.id.clone());
        let mut table = Table::new(&["", "ID", "JOB"]);
        for job in ctl.jobs() {
            let marker = if selected.as_deref() == Some(job.id.as_str()) {
                "*"
            } else {
                ""
            };
            table.add_row(vec![marker.to_string(), job.id.clone(), job.name.clone()]);
        }

        println!();
        print!("{}", table.render());
        Ok(())
    })
}
