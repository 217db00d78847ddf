use super::action::ClockAction;
use super::employee::Employee;
use super::job::{Job, number_value};
use super::location::LocationReading;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat record relayed to the logging endpoint for every punch.
///
/// Missing job or coordinate fields are sent as empty strings, which is what
/// the receiving sheet expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogPayload {
    pub employee_id: String,
    pub employee_name: String,
    pub action: String,
    pub job_id: String,
    pub job_name: String,
    pub job_pay: Value,
    pub notes: String,
    pub latitude: Value,
    pub longitude: Value,
    pub accuracy: Value,
    pub gps_denied: bool,
    pub timestamp: String,
}

impl LogPayload {
    pub fn build(
        employee: &Employee,
        action: ClockAction,
        job: Option<&Job>,
        notes: &str,
        reading: &LocationReading,
        at: DateTime<Utc>,
    ) -> Self {
        let blank = || Value::String(String::new());
        let fix = reading.fix();

        Self {
            employee_id: employee.code.clone(),
            employee_name: employee.name.clone(),
            action: action.label().to_string(),
            job_id: job.map(|j| j.id.clone()).unwrap_or_default(),
            job_name: job.map(|j| j.name.clone()).unwrap_or_default(),
            job_pay: job.map(Job::pay_value).unwrap_or_else(blank),
            notes: if action.carries_notes() {
                notes.trim().to_string()
            } else {
                String::new()
            },
            latitude: fix.map(|f| number_value(f.latitude)).unwrap_or_else(blank),
            longitude: fix.map(|f| number_value(f.longitude)).unwrap_or_else(blank),
            accuracy: fix
                .and_then(|f| f.accuracy)
                .map(number_value)
                .unwrap_or_else(blank),
            gps_denied: reading.is_denied(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::GpsFix;
    use chrono::TimeZone;

    fn emp() -> Employee {
        Employee::new("E01", "Shannon Kovecses")
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 13, 5, 9).unwrap()
    }

    #[test]
    fn clock_in_payload_carries_job_snapshot() {
        let job = Job::new("J1", "Mowing", 15.0);
        let p = LogPayload::build(
            &emp(),
            ClockAction::ClockIn,
            Some(&job),
            "ignored",
            &LocationReading::Denied,
            at(),
        );
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["action"], "Clock In");
        assert_eq!(v["jobId"], "J1");
        assert_eq!(v["jobPay"], 15);
        assert_eq!(v["notes"], "");
        assert_eq!(v["latitude"], "");
        assert_eq!(v["gpsDenied"], true);
        assert_eq!(v["timestamp"], "2025-06-02T13:05:09.000Z");
    }

    #[test]
    fn clock_out_keeps_trimmed_notes_and_coords() {
        let job = Job::new("J1", "Mowing", 15.0);
        let reading = LocationReading::Fix(GpsFix {
            latitude: 43.5,
            longitude: -79.25,
            accuracy: None,
        });
        let p = LogPayload::build(
            &emp(),
            ClockAction::ClockOut,
            Some(&job),
            "  gate left open \n",
            &reading,
            at(),
        );
        assert_eq!(p.notes, "gate left open");
        assert_eq!(p.latitude, serde_json::json!(43.5));
        assert_eq!(p.accuracy, serde_json::json!(""));
        assert!(!p.gps_denied);
    }
}
