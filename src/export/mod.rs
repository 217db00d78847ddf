// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;

use crate::db::punches::Punch;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use clap::ValueEnum;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the punch journal to `file`, asking before overwriting unless `force`.
pub fn export_punches(
    punches: &[Punch],
    format: &ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = expand_tilde(file);
    fs_utils::ensure_writable(&path, force)?;

    match format {
        ExportFormat::Csv => csv::write_csv(&path, punches)?,
        ExportFormat::Json => json::write_json(&path, punches)?,
    }

    success(format!(
        "{} export completed: {} ({} punches)",
        format.as_str().to_uppercase(),
        path.display(),
        punches.len()
    ));
    Ok(())
}
