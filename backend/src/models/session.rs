use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{SessionId, SpotId};

/// A logged surf session as stored by the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: SessionId,
    pub user_id: String,
    /// Free text typed by the surfer; matched against spot names
    pub location: String,
    #[serde(default)]
    pub spot_id: Option<SpotId>,
    pub session_date: DateTime<Utc>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub wave_height: Option<String>,
    #[serde(default)]
    pub wave_consistency: Option<String>,
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub crowd: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

fn default_public() -> bool {
    true
}

/// The subset of a session the consensus engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub location: String,
    pub session_date: DateTime<Utc>,
    pub wave_height: Option<String>,
    pub shape: Option<String>,
    pub rating: Option<String>,
    pub power: Option<String>,
    pub crowd: Option<String>,
    pub duration_minutes: Option<i32>,
}

impl From<&SessionRecord> for SessionReport {
    fn from(s: &SessionRecord) -> Self {
        Self {
            location: s.location.clone(),
            session_date: s.session_date,
            wave_height: s.wave_height.clone(),
            shape: s.shape.clone(),
            rating: s.rating.clone(),
            power: s.power.clone(),
            crowd: s.crowd.clone(),
            duration_minutes: s.duration_minutes,
        }
    }
}
