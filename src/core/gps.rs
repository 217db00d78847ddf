//! Best-effort device location.
//!
//! A lookup never blocks a punch for longer than the configured timeout and
//! never fails it: errors, missing providers and timeouts all read as
//! [`LocationReading::Denied`].

use crate::errors::{AppError, AppResult};
use crate::models::location::{GpsFix, LocationReading};
use std::process::Command;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

pub trait LocationProvider: Send + Sync {
    fn locate(&self) -> AppResult<GpsFix>;
}

/// Coordinates given on the command line.
pub struct FixedLocation(pub GpsFix);

impl LocationProvider for FixedLocation {
    fn locate(&self) -> AppResult<GpsFix> {
        Ok(self.0)
    }
}

/// No location source available.
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn locate(&self) -> AppResult<GpsFix> {
        Err(AppError::InvalidCoordinates("no location source".into()))
    }
}

/// External command printing `lat,lon[,accuracy]`, e.g. a gpsd client.
pub struct CommandLocation {
    pub command: String,
}

impl LocationProvider for CommandLocation {
    fn locate(&self) -> AppResult<GpsFix> {
        let output = if cfg!(target_os = "windows") {
            Command::new("cmd").args(["/C", self.command.as_str()]).output()?
        } else {
            Command::new("sh").args(["-c", self.command.as_str()]).output()?
        };

        if !output.status.success() {
            return Err(AppError::InvalidCoordinates(format!(
                "'{}' exited with {}",
                self.command, output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout.lines().next().unwrap_or_default();
        GpsFix::parse(line).ok_or_else(|| AppError::InvalidCoordinates(line.to_string()))
    }
}

/// Ask `provider` for a fix, waiting at most `timeout`.
///
/// The lookup runs on its own thread and is not cancelled on timeout.
pub fn locate_with_timeout(provider: Arc<dyn LocationProvider>, timeout: Duration) -> LocationReading {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let _ = tx.send(provider.locate());
    });

    match rx.recv_timeout(timeout) {
        Ok(Ok(fix)) => LocationReading::Fix(fix),
        Ok(Err(e)) => {
            log::debug!("location unavailable: {e}");
            LocationReading::Denied
        }
        Err(_) => {
            log::debug!("location lookup timed out after {:?}", timeout);
            LocationReading::Denied
        }
    }
}
