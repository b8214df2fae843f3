//! Repository traits for the application and analytics stores.
//!
//! The report engine only reads. Implementations must be `Send + Sync` so a
//! single instance can be shared across concurrent request handlers and
//! concurrent per-session enrichment tasks.

pub mod error;

use async_trait::async_trait;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::api::{AnalyticsSpotId, BuoyId, SessionId, SpotId};
use crate::models::{AnalyticsSpot, SessionRecord, SessionReport, Spot, SwellRecord, WindRecord};

/// Spots and the session reports logged at them.
#[async_trait]
pub trait SpotRepository: Send + Sync {
    /// Fetch a spot by id; `Ok(None)` when it does not exist.
    async fn get_spot(&self, spot_id: SpotId) -> RepositoryResult<Option<Spot>>;

    /// List spots ordered by name, optionally filtered by a case-insensitive
    /// substring of name or location.
    async fn list_spots(
        &self,
        search: Option<&str>,
        limit: usize,
        offset: usize,
    ) -> RepositoryResult<Vec<Spot>>;

    /// Reports logged at a spot, newest first.
    ///
    /// A session belongs to the spot when its location text contains the
    /// spot's name or location (case-insensitive). Reports are not filtered
    /// by date.
    async fn fetch_session_reports_for_spot(
        &self,
        spot: &Spot,
    ) -> RepositoryResult<Vec<SessionReport>>;
}

/// Logged sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn get_session(&self, session_id: SessionId) -> RepositoryResult<Option<SessionRecord>>;

    /// Public sessions, newest first.
    async fn list_public_sessions(
        &self,
        limit: usize,
        offset: usize,
    ) -> RepositoryResult<Vec<SessionRecord>>;

    /// Sessions of one user, newest first.
    async fn list_user_sessions(
        &self,
        user_id: &str,
        limit: usize,
        offset: usize,
    ) -> RepositoryResult<Vec<SessionRecord>>;
}

/// External analytics store: reference spots, buoy links and telemetry.
#[async_trait]
pub trait TelemetryRepository: Send + Sync {
    /// Reference spots in store order.
    async fn fetch_analytics_spots(&self) -> RepositoryResult<Vec<AnalyticsSpot>>;

    /// Buoy linked to an analytics spot (first link when several exist).
    async fn fetch_buoy_link(&self, spot_id: AnalyticsSpotId) -> RepositoryResult<Option<BuoyId>>;

    /// Wind records of a spot, unordered.
    async fn fetch_wind_records(&self, spot_id: AnalyticsSpotId) -> RepositoryResult<Vec<WindRecord>>;

    /// Swell records of a buoy, unordered.
    async fn fetch_swell_records(&self, buoy_id: &BuoyId) -> RepositoryResult<Vec<SwellRecord>>;
}

/// Everything the HTTP layer needs from storage.
#[async_trait]
pub trait FullRepository: SpotRepository + SessionRepository + TelemetryRepository {
    /// Whether the store answers.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
