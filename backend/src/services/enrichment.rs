//! Swell signatures: the wind, swell and tide readings nearest to a session.
//!
//! For one session the chain is
//!
//! ```text
//! location text ──match──▶ analytics spot ──link──▶ buoy
//!                               │                    │
//!                         wind records          swell records
//!                               │                    │
//!                          nearest(ts)          nearest(ts)
//!                               └──── format ────────┘
//! ```
//!
//! A missing link only blanks the fields that depend on it. A storage failure
//! anywhere in the chain fails that one session, reported as
//! [`EnrichmentOutcome::Failed`] so the caller can log it and move on.

use chrono::{DateTime, Utc};
use futures::future::{join_all, try_join};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::formatting::{
    cardinal, direction_text, effective_swell_height, format_height, format_period, format_speed,
};
use super::nearest::nearest;
use crate::db::repository::{RepositoryError, TelemetryRepository};
use crate::models::{AnalyticsSpot, SessionRecord, SwellRecord, WindRecord};

/// Environmental snapshot attached to a logged session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwellSignature {
    /// "3.5ft"
    pub swell_height: Option<String>,
    /// Seconds
    pub swell_period: Option<i64>,
    pub swell_direction: Option<String>,
    /// Knots
    pub wind_speed: Option<i64>,
    /// Compass point, e.g. "WNW"
    pub wind_direction: Option<String>,
    /// "2ft"
    pub tide_height: Option<String>,
}

impl SwellSignature {
    /// Build a signature from the nearest wind and swell readings, either of
    /// which may be missing.
    pub fn from_records(wind: Option<&WindRecord>, swell: Option<&SwellRecord>) -> Self {
        let wind_speed = format_speed(wind.and_then(|w| w.wind_speed));
        let wind_direction = cardinal(wind.and_then(|w| w.wind_direction)).map(String::from);

        match swell {
            Some(s) => Self {
                swell_height: format_height(effective_swell_height(s.swell_height, s.wave_height)),
                swell_period: format_period(s.swell_period),
                swell_direction: direction_text(s.swell_direction.as_deref()),
                wind_speed,
                wind_direction,
                tide_height: format_height(s.tide),
            },
            None => Self {
                wind_speed,
                wind_direction,
                ..Self::default()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Why a session could not be enriched.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentFailure {
    #[error("telemetry read failed while {stage}: {source}")]
    Telemetry {
        stage: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl EnrichmentFailure {
    fn telemetry(stage: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Telemetry { stage, source }
    }
}

/// Result of enriching one session.
#[derive(Debug)]
pub enum EnrichmentOutcome {
    /// Signature built; individual fields may still be null.
    Enriched(SwellSignature),
    Failed(EnrichmentFailure),
}

impl EnrichmentOutcome {
    pub fn signature(&self) -> Option<&SwellSignature> {
        match self {
            Self::Enriched(signature) => Some(signature),
            Self::Failed(_) => None,
        }
    }

    pub fn into_signature(self) -> Option<SwellSignature> {
        match self {
            Self::Enriched(signature) => Some(signature),
            Self::Failed(_) => None,
        }
    }
}

/// First analytics spot whose name contains `location`, or is contained in
/// it, ignoring case. Blank locations match nothing.
pub fn match_analytics_spot<'a>(
    location: &str,
    spots: &'a [AnalyticsSpot],
) -> Option<&'a AnalyticsSpot> {
    let needle = location.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    spots.iter().find(|spot| {
        let name = spot.name.trim().to_lowercase();
        !name.is_empty() && (name.contains(&needle) || needle.contains(&name))
    })
}

/// Enrich a single session logged at `location` at `instant`.
pub async fn enrich_session<R: TelemetryRepository + ?Sized>(
    repo: &R,
    location: &str,
    instant: DateTime<Utc>,
) -> EnrichmentOutcome {
    match resolve_signature(repo, location, instant).await {
        Ok(signature) => EnrichmentOutcome::Enriched(signature),
        Err(failure) => EnrichmentOutcome::Failed(failure),
    }
}

async fn resolve_signature<R: TelemetryRepository + ?Sized>(
    repo: &R,
    location: &str,
    instant: DateTime<Utc>,
) -> Result<SwellSignature, EnrichmentFailure> {
    let spots = repo
        .fetch_analytics_spots()
        .await
        .map_err(EnrichmentFailure::telemetry("loading analytics spots"))?;

    let Some(spot) = match_analytics_spot(location, &spots) else {
        debug!("No analytics spot matches location '{}'", location);
        return Ok(SwellSignature::default());
    };

    let buoy = repo
        .fetch_buoy_link(spot.id)
        .await
        .map_err(EnrichmentFailure::telemetry("resolving buoy link"))?;
    if buoy.is_none() {
        debug!("Analytics spot {} has no linked buoy", spot.id);
    }

    let swell_records = async {
        match &buoy {
            Some(buoy_id) => repo.fetch_swell_records(buoy_id).await,
            None => Ok(Vec::new()),
        }
    };
    let (wind, swell) = try_join(repo.fetch_wind_records(spot.id), swell_records)
        .await
        .map_err(EnrichmentFailure::telemetry("reading wind and swell records"))?;

    Ok(SwellSignature::from_records(
        nearest(instant, &wind),
        nearest(instant, &swell),
    ))
}

/// Enrich many sessions concurrently, one outcome per input in input order.
pub async fn enrich_batch<R: TelemetryRepository + ?Sized>(
    repo: &R,
    sessions: &[SessionRecord],
) -> Vec<EnrichmentOutcome> {
    join_all(
        sessions
            .iter()
            .map(|session| enrich_session(repo, &session.location, session.session_date)),
    )
    .await
}

/// Signatures for a page of sessions. Failed sessions get `None` and are
/// logged with their id; the rest of the page is unaffected.
pub async fn signatures_for<R: TelemetryRepository + ?Sized>(
    repo: &R,
    sessions: &[SessionRecord],
) -> Vec<Option<SwellSignature>> {
    enrich_batch(repo, sessions)
        .await
        .into_iter()
        .zip(sessions)
        .map(|(outcome, session)| match outcome {
            EnrichmentOutcome::Enriched(signature) => Some(signature),
            EnrichmentOutcome::Failed(reason) => {
                warn!("Error enriching session {}: {}", session.id, reason);
                None
            }
        })
        .collect()
}
