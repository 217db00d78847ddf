//! One handler per subcommand, plus the shared start-up every employee
//! command goes through: resolve employee, open storage, load jobs.

pub mod clock;
pub mod config;
pub mod export;
pub mod init;
pub mod jobs;
pub mod log;
pub mod notes;
pub mod punches;
pub mod select;
pub mod session;
pub mod status;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::controller::ClockController;
use crate::core::directory;
use crate::core::event_log::{EventLogger, HttpTransport, OfflineTransport, Transport};
use crate::core::gps::{CommandLocation, FixedLocation, LocationProvider, NoLocation};
use crate::core::jobs::{JobSource, load_jobs};
use crate::db::pool::DbPool;
use crate::db::session_store::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::models::location::GpsFix;
use crate::ui::messages::header;
use std::sync::Arc;
use std::time::Duration;

pub fn job_source(cfg: &Config) -> AppResult<JobSource> {
    if let Some(path) = &cfg.jobs_file {
        return Ok(JobSource::File(path.clone()));
    }
    match &cfg.endpoint {
        Some(url) => Ok(JobSource::Http {
            url: url.clone(),
            timeout: Duration::from_secs(cfg.request_timeout_secs),
        }),
        None => Err(AppError::NoEndpoint),
    }
}

fn transport(cfg: &Config) -> AppResult<Box<dyn Transport>> {
    Ok(match &cfg.endpoint {
        Some(url) => Box::new(HttpTransport::new(
            url,
            Duration::from_secs(cfg.request_timeout_secs),
        )?),
        None => Box::new(OfflineTransport),
    })
}

/// Coordinates from the command line win over the configured command.
fn locator(cli: &Cli, cfg: &Config) -> AppResult<Arc<dyn LocationProvider>> {
    match (cli.lat, cli.lon) {
        (Some(latitude), Some(longitude)) => {
            let fix = GpsFix::parse(&format!("{latitude},{longitude}")).ok_or_else(|| {
                AppError::InvalidCoordinates(format!("{latitude},{longitude}"))
            })?;
            Ok(Arc::new(FixedLocation(GpsFix {
                accuracy: cli.accuracy,
                ..fix
            })))
        }
        (None, None) => Ok(match &cfg.gps_command {
            Some(command) => Arc::new(CommandLocation {
                command: command.clone(),
            }),
            None => Arc::new(NoLocation),
        }),
        _ => Err(AppError::InvalidCoordinates(
            "--lat and --lon must be given together".into(),
        )),
    }
}

/// Start-up for employee commands, then run `f` on the controller.
///
/// An unknown employee stops here, before storage or network are touched.
pub fn with_controller<F>(cli: &Cli, cfg: &Config, f: F) -> AppResult<()>
where
    F: FnOnce(&mut ClockController<'_>) -> AppResult<()>,
{
    let employee = directory::resolve(cli.emp.as_deref())?;
    let locator = locator(cli, cfg)?;

    let pool = DbPool::open(&cfg.database)?;
    header(employee.greeting());

    let store = SessionStore::new(&pool.conn, &cfg.session);
    let logger = EventLogger::new(
        &pool.conn,
        &cfg.session,
        transport(cfg)?,
        locator,
        Duration::from_secs(cfg.gps_timeout_secs),
    );

    let jobs = job_source(cfg).and_then(|src| {
        ::log::debug!("loading jobs from {}", src.describe());
        load_jobs(&src)
    });
    let (mut ctl, status) = ClockController::load(&pool.conn, employee, store, logger, jobs)?;
    status.show();

    f(&mut ctl)
}
