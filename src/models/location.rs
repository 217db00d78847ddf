use serde::Serialize;

/// A device position reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GpsFix {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>, // metres
}

/// Outcome of a location lookup: a fix, or nothing (denied, missing, timed out).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationReading {
    Fix(GpsFix),
    Denied,
}

impl LocationReading {
    pub fn is_denied(&self) -> bool {
        matches!(self, LocationReading::Denied)
    }

    pub fn fix(&self) -> Option<&GpsFix> {
        match self {
            LocationReading::Fix(f) => Some(f),
            LocationReading::Denied => None,
        }
    }
}

impl GpsFix {
    /// Parse `lat,lon[,accuracy]`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().split(',').map(str::trim);
        let latitude = parts.next()?.parse::<f64>().ok()?;
        let longitude = parts.next()?.parse::<f64>().ok()?;
        let accuracy = match parts.next() {
            Some(a) if !a.is_empty() => Some(a.parse::<f64>().ok()?),
            _ => None,
        };
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
            accuracy,
        })
    }
}
