//! Data Transfer Objects for the HTTP API.
//!
//! Response bodies for the report endpoints are re-exported from the routes
//! module since they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Live
    LiveSpotData, LiveSwell, LiveTide, LiveWind,
    // Report
    SpotReport,
    // Sessions
    SessionListResponse, SessionListing, SwellSignature,
    // Spots
    Spot, SpotListResponse,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// `?limit&offset` of listing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// `?search&limit&offset` of the spot directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotSearchQuery {
    pub search: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}
