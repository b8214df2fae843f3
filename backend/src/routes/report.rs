use crate::api::{SessionReport, Spot, TimeWindow, TimeWindowTable, WindowedConsensus};
use serde::{Deserialize, Serialize};

/// Crowd consensus of today's sessions at a spot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotReport {
    pub spot: Spot,
    pub consensus: WindowedConsensus,
    /// Window whose consensus the UI shows first
    pub latest_consensus_time: TimeWindow,
    /// Whether any session was logged today, in or out of a window
    pub has_consensus_today: bool,
    /// Today's sessions, newest first
    pub recent_sessions: Vec<SessionReport>,
    pub time_windows: TimeWindowTable,
    /// IANA zone all local times of this report are expressed in
    pub spot_timezone: String,
}

pub const GET_SPOT_REPORT: &str = "get_spot_report";
