use crate::api::{SessionRecord, SwellSignature};
use serde::{Deserialize, Serialize};

/// A session as listed in feeds, with its environmental snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionListing {
    #[serde(flatten)]
    pub session: SessionRecord,
    /// `None` when the analytics store failed for this session
    pub swell_signature: Option<SwellSignature>,
}

/// One page of a session feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionListing>,
    pub limit: usize,
    pub offset: usize,
}

pub const LIST_PUBLIC_SESSIONS: &str = "list_public_sessions";
pub const LIST_USER_SESSIONS: &str = "list_user_sessions";
pub const GET_SESSION: &str = "get_session";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SessionId;
    use chrono::{TimeZone, Utc};

    fn record() -> SessionRecord {
        SessionRecord {
            id: SessionId::new(9),
            user_id: "user-1".to_string(),
            location: "Steamer Lane".to_string(),
            spot_id: None,
            session_date: Utc.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap(),
            duration_minutes: Some(90),
            wave_height: Some("head-high".to_string()),
            wave_consistency: None,
            shape: Some("clean".to_string()),
            power: None,
            crowd: None,
            rating: Some("fun".to_string()),
            notes: None,
            is_public: true,
        }
    }

    #[test]
    fn test_listing_flattens_session() {
        let listing = SessionListing {
            session: record(),
            swell_signature: Some(SwellSignature {
                swell_height: Some("3ft".to_string()),
                ..Default::default()
            }),
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["id"], 9);
        assert_eq!(json["location"], "Steamer Lane");
        assert_eq!(json["swell_signature"]["swell_height"], "3ft");
        assert!(json["swell_signature"]["wind_speed"].is_null());
    }

    #[test]
    fn test_failed_signature_is_null() {
        let listing = SessionListing {
            session: record(),
            swell_signature: None,
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert!(json["swell_signature"].is_null());
    }
}
