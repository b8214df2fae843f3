use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::time::resolve_timezone;
use crate::api::{AnalyticsSpotId, BuoyId, SpotId};

/// A surf spot as stored in the application database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: SpotId,
    pub name: String,
    /// Free-text location (e.g. "Santa Cruz, CA")
    pub location: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub break_type: Option<String>,
    /// IANA zone name; unset on older rows
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Spot {
    /// The zone used for every local-time computation about this spot.
    pub fn effective_timezone(&self, default: Tz) -> Tz {
        resolve_timezone(self.timezone.as_deref(), default)
    }
}

/// Spot entry of the analytics reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSpot {
    pub id: AnalyticsSpotId,
    pub name: String,
}

/// Association between an analytics spot and the buoy that measures its swell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotBuoyLink {
    pub spot_id: AnalyticsSpotId,
    pub buoy_id: BuoyId,
}
