//! Job list loading and selection restore.

use crate::errors::{AppError, AppResult};
use crate::models::job::Job;
use crate::models::status::Status;
use crate::utils::path::expand_tilde;
use regex::Regex;
use std::fs;
use std::sync::OnceLock;
use std::time::Duration;

/// Where the job list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSource {
    Http { url: String, timeout: Duration },
    File(String),
}

impl JobSource {
    pub fn describe(&self) -> String {
        match self {
            JobSource::Http { url, .. } => url.clone(),
            JobSource::File(path) => path.clone(),
        }
    }
}

/// Fetch and parse the job list.
pub fn load_jobs(source: &JobSource) -> AppResult<Vec<Job>> {
    let body = match source {
        JobSource::Http { url, timeout } => {
            let client = reqwest::blocking::Client::builder()
                .timeout(*timeout)
                .build()?;
            client.get(url).send()?.error_for_status()?.text()?
        }
        JobSource::File(path) => fs::read_to_string(expand_tilde(path))?,
    };
    parse_jobs_body(&body)
}

fn jsonp_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)^\s*[A-Za-z_$][\w$.]*\s*\((.*)\)\s*;?\s*$").expect("valid JSONP regex")
    })
}

/// Parse a job list body. Accepts a plain JSON array or the same array
/// wrapped in a JSONP callback (`loadJobs([...]);`).
pub fn parse_jobs_body(body: &str) -> AppResult<Vec<Job>> {
    let trimmed = body.trim();
    let json = if trimmed.starts_with('[') {
        trimmed
    } else if let Some(caps) = jsonp_re().captures(trimmed) {
        caps.get(1).map(|m| m.as_str()).unwrap_or_default()
    } else {
        return Err(AppError::InvalidJobs(
            "expected a JSON array or a JSONP callback".into(),
        ));
    };

    let jobs: Vec<Job> =
        serde_json::from_str(json).map_err(|e| AppError::InvalidJobs(e.to_string()))?;
    Ok(jobs.into_iter().filter(|j| !j.id.is_empty()).collect())
}

/// Pick the remembered job if it is still offered.
pub fn restore_selection(jobs: &[Job], last_id: Option<&str>) -> Option<Job> {
    let id = last_id?;
    jobs.iter().find(|j| j.id == id).cloned()
}

/// Banner shown once the job list is in place.
pub fn selection_status(selected: Option<&Job>) -> Status {
    match selected {
        Some(job) => Status::info(format!("Selected: {}", job.name)),
        None => Status::info("Select the current job to enable clock actions."),
    }
}

pub fn load_failure_status(err: &AppError) -> Status {
    Status::err(format!("Jobs failed to load ({err})."))
}
