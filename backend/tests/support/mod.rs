#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::collections::HashSet;
use std::sync::Mutex;

use surf_report::api::{AnalyticsSpotId, BuoyId, SessionId, SpotId};
use surf_report::db::repositories::{LocalRepository, SeedData};
use surf_report::models::{
    AnalyticsSpot, SessionRecord, Spot, SpotBuoyLink, SwellRecord, WindRecord,
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the variables on unwind and serializes access to the process
/// environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub const STEAMER_LANE: i64 = 1;
pub const PIPELINE: i64 = 2;
pub const MYSTERY_REEF: i64 = 3;

pub const STEAMER_ANALYTICS: i64 = 10;
pub const PIPELINE_ANALYTICS: i64 = 20;
pub const STEAMER_BUOY: &str = "46269";

/// Wall-clock time in `tz` as a UTC instant.
pub fn local(tz: Tz, y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    tz.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_else(|| panic!("ambiguous or missing local time {y}-{m}-{d} {h}:{min}"))
        .with_timezone(&Utc)
}

pub fn utc(h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, h, min, 0).unwrap()
}

/// "Now" used by the report tests: 2024-06-03 15:00 in Santa Cruz.
pub fn afternoon_in_santa_cruz() -> DateTime<Utc> {
    local(chrono_tz::America::Los_Angeles, 2024, 6, 3, 15, 0)
}

pub fn spot(id: i64, name: &str, location: &str, timezone: Option<&str>) -> Spot {
    Spot {
        id: SpotId::new(id),
        name: name.to_string(),
        location: location.to_string(),
        latitude: None,
        longitude: None,
        description: None,
        difficulty: None,
        break_type: None,
        timezone: timezone.map(String::from),
    }
}

pub fn session(
    id: i64,
    user: &str,
    location: &str,
    at: DateTime<Utc>,
    rating: &str,
    public: bool,
) -> SessionRecord {
    SessionRecord {
        id: SessionId::new(id),
        user_id: user.to_string(),
        location: location.to_string(),
        spot_id: None,
        session_date: at,
        duration_minutes: Some(90),
        wave_height: Some("chest".to_string()),
        wave_consistency: None,
        shape: Some("clean".to_string()),
        power: None,
        crowd: None,
        rating: Some(rating.to_string()),
        notes: None,
        is_public: public,
    }
}

pub fn wind(spot: i64, at: DateTime<Utc>, speed: f64, direction: f64) -> WindRecord {
    WindRecord {
        spot_id: AnalyticsSpotId::new(spot),
        timestamp: at,
        wind_speed: Some(speed),
        wind_direction: Some(direction),
        wind_gust: None,
    }
}

pub fn swell(
    at: DateTime<Utc>,
    swell_height: f64,
    wave_height: f64,
    period: f64,
    direction: &str,
    tide: Option<f64>,
) -> SwellRecord {
    SwellRecord {
        buoy_id: BuoyId::new(STEAMER_BUOY),
        timestamp: at,
        wave_height: Some(wave_height),
        swell_height: Some(swell_height),
        swell_period: Some(period),
        swell_direction: Some(direction.to_string()),
        tide,
    }
}

/// Three spots, telemetry for Steamer Lane only, five sessions.
///
/// Santa Cruz is UTC-7 on 2024-06-03:
/// - sessions 1, 2, 3 at 06:00, 07:00, 09:00 local (ratings fun, fun, epic)
/// - session 4 at Pipeline, 08:00 in Honolulu
/// - session 5 is private and from the previous day
pub fn seed() -> SeedData {
    let la = chrono_tz::America::Los_Angeles;
    SeedData {
        spots: vec![
            spot(STEAMER_LANE, "Steamer Lane", "Santa Cruz, CA", Some("America/Los_Angeles")),
            spot(PIPELINE, "Pipeline", "North Shore, Oahu", Some("Pacific/Honolulu")),
            spot(MYSTERY_REEF, "Mystery Reef", "Somewhere", None),
        ],
        sessions: vec![
            session(1, "kai", "Steamer Lane", local(la, 2024, 6, 3, 6, 0), "fun", true),
            session(2, "kai", "steamer lane, santa cruz", local(la, 2024, 6, 3, 7, 0), "fun", true),
            session(3, "leilani", "Steamer Lane", local(la, 2024, 6, 3, 9, 0), "epic", true),
            session(
                4,
                "leilani",
                "Pipeline",
                local(chrono_tz::Pacific::Honolulu, 2024, 6, 3, 8, 0),
                "epic",
                true,
            ),
            session(5, "kai", "Steamer Lane", local(la, 2024, 6, 2, 8, 0), "flat", false),
        ],
        analytics_spots: vec![
            AnalyticsSpot {
                id: AnalyticsSpotId::new(STEAMER_ANALYTICS),
                name: "Steamer Lane".to_string(),
            },
            AnalyticsSpot {
                id: AnalyticsSpotId::new(PIPELINE_ANALYTICS),
                name: "Pipeline".to_string(),
            },
        ],
        buoy_links: vec![SpotBuoyLink {
            spot_id: AnalyticsSpotId::new(STEAMER_ANALYTICS),
            buoy_id: BuoyId::new(STEAMER_BUOY),
        }],
        wind: vec![
            wind(STEAMER_ANALYTICS, utc(18, 0), 12.6, 315.0),
            wind(STEAMER_ANALYTICS, utc(15, 0), 8.4, 290.0),
        ],
        swell: vec![
            swell(utc(15, 30), 3.45, 5.0, 12.6, "WNW", Some(2.5)),
            swell(utc(19, 0), 0.0, 4.0, 10.0, "W", None),
        ],
    }
}

pub fn seeded_repository() -> LocalRepository {
    LocalRepository::from_seed(seed())
}
