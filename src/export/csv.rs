use crate::db::punches::Punch;
use crate::errors::AppResult;
use crate::models::payload::LogPayload;
use csv::Writer;
use std::path::Path;

/// Write punches as CSV, one column per payload field plus delivery state.
pub fn write_csv(path: &Path, punches: &[Punch]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "session",
        "timestamp",
        "employee_id",
        "employee_name",
        "action",
        "job_id",
        "job_name",
        "job_pay",
        "notes",
        "latitude",
        "longitude",
        "accuracy",
        "gps_denied",
        "delivered",
    ])?;

    for p in punches {
        let payload: LogPayload = serde_json::from_str(&p.payload)?;
        wtr.write_record(&[
            p.id.to_string(),
            p.session.clone(),
            payload.timestamp,
            payload.employee_id,
            payload.employee_name,
            payload.action,
            payload.job_id,
            payload.job_name,
            cell(&payload.job_pay),
            payload.notes,
            cell(&payload.latitude),
            cell(&payload.longitude),
            cell(&payload.accuracy),
            payload.gps_denied.to_string(),
            p.delivered.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn cell(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
