//! Public API surface for the surf report backend.
//!
//! This file consolidates the identifier types and the DTOs returned by the
//! HTTP API. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::session::{SessionRecord, SessionReport};
pub use crate::models::spot::{AnalyticsSpot, Spot, SpotBuoyLink};
pub use crate::models::telemetry::{SwellRecord, WindRecord};
pub use crate::routes::live::{LiveSpotData, LiveSwell, LiveTide, LiveWind};
pub use crate::routes::report::SpotReport;
pub use crate::routes::sessions::{SessionListing, SessionListResponse};
pub use crate::routes::spots::SpotListResponse;
pub use crate::services::consensus::{ConsensusResult, WindowedConsensus};
pub use crate::services::enrichment::SwellSignature;
pub use crate::services::time_windows::{TimeWindow, TimeWindowTable, WindowSpan};

use serde::{Deserialize, Serialize};
use std::fmt;

crate::define_id_type!(
    /// Spot identifier in the application database.
    i64,
    SpotId
);

crate::define_id_type!(
    /// Logged session identifier.
    i64,
    SessionId
);

crate::define_id_type!(
    /// Spot identifier in the external analytics reference dataset.
    ///
    /// Wind telemetry is keyed by this id, not by [`SpotId`].
    i64,
    AnalyticsSpotId
);

/// Buoy station identifier (e.g. NDBC station "46225").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuoyId(pub String);

impl BuoyId {
    pub fn new(value: impl Into<String>) -> Self {
        BuoyId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuoyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_transparently() {
        assert_eq!(serde_json::to_string(&SpotId::new(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&BuoyId::new("46225")).unwrap(),
            "\"46225\""
        );
    }

    #[test]
    fn test_id_display() {
        assert_eq!(SessionId::new(42).to_string(), "42");
        assert_eq!(AnalyticsSpotId::new(3).to_string(), "3");
        assert_eq!(BuoyId::new("46086").to_string(), "46086");
    }

    #[test]
    fn test_integer_ids_convert_both_ways() {
        let id = SpotId::from(9);
        assert_eq!(id.value(), 9);
        assert_eq!(i64::from(id), 9);
        assert!(SessionId::new(1) < SessionId::new(2));
        let parsed: AnalyticsSpotId = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, AnalyticsSpotId::new(12));
    }
}
