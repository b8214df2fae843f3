//! In-memory repository for development and tests.
//!
//! Holds both the application data (spots, sessions) and the analytics data
//! (reference spots, buoy links, telemetry). It can be seeded from a JSON
//! file and can simulate the analytics store being unreachable, either
//! entirely or for individual spots.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::api::{AnalyticsSpotId, BuoyId, SessionId, SpotId};
use crate::db::repository::{
    ErrorContext, FullRepository, RepositoryError, RepositoryResult, SessionRepository,
    SpotRepository, TelemetryRepository,
};
use crate::models::{
    AnalyticsSpot, SessionRecord, SessionReport, Spot, SpotBuoyLink, SwellRecord, WindRecord,
};

/// Serialized form of a [`LocalRepository`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub spots: Vec<Spot>,
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    #[serde(default)]
    pub analytics_spots: Vec<AnalyticsSpot>,
    #[serde(default)]
    pub buoy_links: Vec<SpotBuoyLink>,
    #[serde(default)]
    pub wind: Vec<WindRecord>,
    #[serde(default)]
    pub swell: Vec<SwellRecord>,
}

/// In-memory implementation of every repository trait.
pub struct LocalRepository {
    data: RwLock<SeedData>,
    analytics_available: AtomicBool,
    failing_spots: RwLock<HashSet<AnalyticsSpotId>>,
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::from_seed(SeedData::default())
    }

    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            data: RwLock::new(seed),
            analytics_available: AtomicBool::new(true),
            failing_spots: RwLock::new(HashSet::new()),
        }
    }

    /// Load a repository from a JSON seed file.
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to read seed file {}: {}",
                path.display(),
                e
            ))
        })?;
        let seed: SeedData = serde_json::from_str(&content).map_err(|e| {
            RepositoryError::invalid_data(
                format!("Failed to parse seed file: {}", e),
                ErrorContext::new("from_seed_file").with_details(path.display().to_string()),
            )
        })?;
        log::debug!(
            "Loaded seed: {} spots, {} sessions, {} wind rows, {} swell rows",
            seed.spots.len(),
            seed.sessions.len(),
            seed.wind.len(),
            seed.swell.len()
        );
        Ok(Self::from_seed(seed))
    }

    pub fn insert_spot(&self, spot: Spot) {
        self.data.write().spots.push(spot);
    }

    pub fn insert_session(&self, session: SessionRecord) {
        self.data.write().sessions.push(session);
    }

    pub fn insert_analytics_spot(&self, spot: AnalyticsSpot) {
        self.data.write().analytics_spots.push(spot);
    }

    pub fn insert_buoy_link(&self, link: SpotBuoyLink) {
        self.data.write().buoy_links.push(link);
    }

    pub fn insert_wind(&self, record: WindRecord) {
        self.data.write().wind.push(record);
    }

    pub fn insert_swell(&self, record: SwellRecord) {
        self.data.write().swell.push(record);
    }

    /// Make every analytics read fail (or succeed again).
    pub fn set_analytics_available(&self, available: bool) {
        self.analytics_available.store(available, Ordering::SeqCst);
    }

    /// Make telemetry reads for one analytics spot fail.
    pub fn fail_analytics_spot(&self, spot_id: AnalyticsSpotId) {
        self.failing_spots.write().insert(spot_id);
    }

    fn ensure_analytics(&self, operation: &str) -> RepositoryResult<()> {
        if self.analytics_available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepositoryError::unavailable(
                "analytics store unreachable",
                ErrorContext::new(operation),
            ))
        }
    }

    fn ensure_spot_readable(&self, operation: &str, spot_id: AnalyticsSpotId) -> RepositoryResult<()> {
        self.ensure_analytics(operation)?;
        if self.failing_spots.read().contains(&spot_id) {
            return Err(RepositoryError::unavailable(
                "analytics read failed",
                ErrorContext::new(operation)
                    .with_entity("analytics_spot")
                    .with_entity_id(spot_id),
            ));
        }
        Ok(())
    }
}

/// Blank needles match nothing.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    !needle.is_empty() && haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn page<T: Clone>(items: Vec<&T>, limit: usize, offset: usize) -> Vec<T> {
    items.into_iter().skip(offset).take(limit).cloned().collect()
}

fn newest_first(sessions: &mut [&SessionRecord]) {
    sessions.sort_by(|a, b| b.session_date.cmp(&a.session_date));
}

#[async_trait]
impl SpotRepository for LocalRepository {
    async fn get_spot(&self, spot_id: SpotId) -> RepositoryResult<Option<Spot>> {
        Ok(self.data.read().spots.iter().find(|s| s.id == spot_id).cloned())
    }

    async fn list_spots(
        &self,
        search: Option<&str>,
        limit: usize,
        offset: usize,
    ) -> RepositoryResult<Vec<Spot>> {
        let data = self.data.read();
        let mut spots: Vec<&Spot> = data
            .spots
            .iter()
            .filter(|s| match search {
                Some(q) => contains_ignore_case(&s.name, q) || contains_ignore_case(&s.location, q),
                None => true,
            })
            .collect();
        spots.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(page(spots, limit, offset))
    }

    async fn fetch_session_reports_for_spot(
        &self,
        spot: &Spot,
    ) -> RepositoryResult<Vec<SessionReport>> {
        let data = self.data.read();
        let mut sessions: Vec<&SessionRecord> = data
            .sessions
            .iter()
            .filter(|s| {
                contains_ignore_case(&s.location, &spot.name)
                    || contains_ignore_case(&s.location, &spot.location)
            })
            .collect();
        newest_first(&mut sessions);
        Ok(sessions.into_iter().map(SessionReport::from).collect())
    }
}

#[async_trait]
impl SessionRepository for LocalRepository {
    async fn get_session(&self, session_id: SessionId) -> RepositoryResult<Option<SessionRecord>> {
        Ok(self
            .data
            .read()
            .sessions
            .iter()
            .find(|s| s.id == session_id)
            .cloned())
    }

    async fn list_public_sessions(
        &self,
        limit: usize,
        offset: usize,
    ) -> RepositoryResult<Vec<SessionRecord>> {
        let data = self.data.read();
        let mut sessions: Vec<&SessionRecord> = data.sessions.iter().filter(|s| s.is_public).collect();
        newest_first(&mut sessions);
        Ok(page(sessions, limit, offset))
    }

    async fn list_user_sessions(
        &self,
        user_id: &str,
        limit: usize,
        offset: usize,
    ) -> RepositoryResult<Vec<SessionRecord>> {
        let data = self.data.read();
        let mut sessions: Vec<&SessionRecord> =
            data.sessions.iter().filter(|s| s.user_id == user_id).collect();
        newest_first(&mut sessions);
        Ok(page(sessions, limit, offset))
    }
}

#[async_trait]
impl TelemetryRepository for LocalRepository {
    async fn fetch_analytics_spots(&self) -> RepositoryResult<Vec<AnalyticsSpot>> {
        self.ensure_analytics("fetch_analytics_spots")?;
        Ok(self.data.read().analytics_spots.clone())
    }

    async fn fetch_buoy_link(&self, spot_id: AnalyticsSpotId) -> RepositoryResult<Option<BuoyId>> {
        self.ensure_spot_readable("fetch_buoy_link", spot_id)?;
        Ok(self
            .data
            .read()
            .buoy_links
            .iter()
            .find(|l| l.spot_id == spot_id)
            .map(|l| l.buoy_id.clone()))
    }

    async fn fetch_wind_records(&self, spot_id: AnalyticsSpotId) -> RepositoryResult<Vec<WindRecord>> {
        self.ensure_spot_readable("fetch_wind_records", spot_id)?;
        Ok(self
            .data
            .read()
            .wind
            .iter()
            .filter(|w| w.spot_id == spot_id)
            .cloned()
            .collect())
    }

    async fn fetch_swell_records(&self, buoy_id: &BuoyId) -> RepositoryResult<Vec<SwellRecord>> {
        self.ensure_analytics("fetch_swell_records")?;
        Ok(self
            .data
            .read()
            .swell
            .iter()
            .filter(|s| &s.buoy_id == buoy_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FullRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
