//! External wind and swell telemetry rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{AnalyticsSpotId, BuoyId};

/// Anything carrying a measurement instant.
pub trait Timestamped {
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Wind observation for an analytics spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindRecord {
    pub spot_id: AnalyticsSpotId,
    pub timestamp: DateTime<Utc>,
    /// Knots
    pub wind_speed: Option<f64>,
    /// Degrees, meteorological convention (direction the wind blows from)
    pub wind_direction: Option<f64>,
    #[serde(default)]
    pub wind_gust: Option<f64>,
}

/// Swell and tide observation from a buoy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwellRecord {
    pub buoy_id: BuoyId,
    pub timestamp: DateTime<Utc>,
    /// Feet
    pub wave_height: Option<f64>,
    /// Feet
    pub swell_height: Option<f64>,
    /// Seconds
    pub swell_period: Option<f64>,
    /// Compass text as published by the buoy (e.g. "WNW")
    pub swell_direction: Option<String>,
    /// Feet relative to MLLW
    pub tide: Option<f64>,
}

impl Timestamped for WindRecord {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Timestamped for SwellRecord {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl<T: Timestamped> Timestamped for &T {
    fn timestamp(&self) -> DateTime<Utc> {
        (*self).timestamp()
    }
}
