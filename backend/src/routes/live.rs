use crate::api::SpotId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message returned with the degraded payload when telemetry cannot be read.
pub const LIVE_DATA_UNAVAILABLE: &str = "Live data temporarily unavailable";

/// Latest buoy reading for a spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveSwell {
    /// "3.5ft 12s WNW"
    pub formatted: Option<String>,
    /// Bare feet value, "3.5"
    pub height: Option<String>,
    pub period: Option<i64>,
    pub direction: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Latest wind reading for a spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveWind {
    /// "12 kts WNW"
    pub formatted: Option<String>,
    pub speed: Option<i64>,
    pub direction: Option<String>,
    pub direction_degrees: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveTide {
    /// "2.5 ft"
    pub formatted: String,
    pub height: String,
}

/// Current conditions at a spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveSpotData {
    pub spot_id: SpotId,
    pub spot_name: String,
    pub swell: Option<LiveSwell>,
    pub wind: Option<LiveWind>,
    pub tide: Option<LiveTide>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LiveSpotData {
    /// All-null payload returned when the analytics store is unreachable.
    pub fn unavailable(spot_id: SpotId, spot_name: impl Into<String>) -> Self {
        Self {
            spot_id,
            spot_name: spot_name.into(),
            swell: None,
            wind: None,
            tide: None,
            updated_at: None,
            error: Some(LIVE_DATA_UNAVAILABLE.to_string()),
        }
    }
}

pub const GET_LIVE_SPOT_DATA: &str = "get_live_spot_data";
