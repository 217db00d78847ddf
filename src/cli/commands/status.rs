use crate::cli::commands::with_controller;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::use_color;
use ansi_term::Colour;

fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

/// Print the clock state and which actions are available right now.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    with_controller(cli, cfg, |ctl| {
        let state = ctl.state();
        let job = state
            .selected_job
            .as_ref()
            .map(|j| format!("{} ({})", j.name, j.id))
            .unwrap_or_else(|| "--".to_string());

        println!();
        println!("Job         : {job}");
        println!("Clocked in  : {}", yes_no(state.is_clocked_in));
        println!("On break    : {}", yes_no(state.on_break));
        println!();
        println!("Actions:");
        for (label, enabled) in ctl.buttons().entries() {
            let (word, colour) = if enabled {
                ("enabled", Colour::Green)
            } else {
                ("disabled", Colour::Fixed(244))
            };
            let mark = if use_color() {
                colour.paint(word).to_string()
            } else {
                word.to_string()
            };
            println!("  {:<12} {}", label, mark);
        }
        Ok(())
    })
}
