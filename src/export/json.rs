use crate::db::punches::Punch;
use crate::errors::AppResult;
use crate::models::payload::LogPayload;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct PunchExport {
    id: i64,
    session: String,
    delivered: bool,
    #[serde(flatten)]
    payload: LogPayload,
}

/// Write punches as a pretty-printed JSON array.
pub fn write_json(path: &Path, punches: &[Punch]) -> AppResult<()> {
    let rows = punches
        .iter()
        .map(|p| -> AppResult<PunchExport> {
            Ok(PunchExport {
                id: p.id,
                session: p.session.clone(),
                delivered: p.delivered,
                payload: serde_json::from_str(&p.payload)?,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    let json = serde_json::to_string_pretty(&rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
