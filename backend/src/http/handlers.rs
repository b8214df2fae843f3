//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    HealthResponse, LiveSpotData, PageQuery, SessionListResponse, SessionListing, Spot,
    SpotListResponse, SpotReport, SpotSearchQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{SessionId, SessionRecord, SpotId};
use crate::db::repository::FullRepository;
use crate::db::services as db_services;
use crate::services::{build_live_data, build_spot_report, signatures_for};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and storage is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Spots
// =============================================================================

/// GET /v1/spots
pub async fn list_spots(
    State(state): State<AppState>,
    Query(query): Query<SpotSearchQuery>,
) -> HandlerResult<SpotListResponse> {
    let limit = state.config.listing.clamp_limit(query.limit);
    let offset = query.offset.unwrap_or(0);
    let spots = db_services::list_spots(
        state.repository.as_ref(),
        query.search.as_deref(),
        limit,
        offset,
    )
    .await?;

    Ok(Json(SpotListResponse {
        spots,
        limit,
        offset,
    }))
}

/// GET /v1/spots/{spot_id}
pub async fn get_spot(
    State(state): State<AppState>,
    Path(spot_id): Path<i64>,
) -> HandlerResult<Spot> {
    let spot = db_services::get_spot(state.repository.as_ref(), SpotId::new(spot_id)).await?;
    Ok(Json(spot))
}

/// GET /v1/spots/{spot_id}/report
///
/// Today's crowd consensus per time window, in the spot's local time.
pub async fn get_spot_report(
    State(state): State<AppState>,
    Path(spot_id): Path<i64>,
) -> HandlerResult<SpotReport> {
    let report = build_spot_report(
        state.repository.as_ref(),
        SpotId::new(spot_id),
        state.clock.as_ref(),
        state.resolver.as_ref(),
        &state.config.report,
    )
    .await?;
    Ok(Json(report))
}

/// GET /v1/spots/{spot_id}/live
///
/// Latest wind, swell and tide. Telemetry failures degrade the payload
/// instead of failing the request.
pub async fn get_live_spot_data(
    State(state): State<AppState>,
    Path(spot_id): Path<i64>,
) -> HandlerResult<LiveSpotData> {
    let data = build_live_data(state.repository.as_ref(), SpotId::new(spot_id)).await?;
    Ok(Json(data))
}

// =============================================================================
// Sessions
// =============================================================================

async fn with_signatures(
    repo: &dyn FullRepository,
    sessions: Vec<SessionRecord>,
) -> Vec<SessionListing> {
    let signatures = signatures_for(repo, &sessions).await;
    sessions
        .into_iter()
        .zip(signatures)
        .map(|(session, swell_signature)| SessionListing {
            session,
            swell_signature,
        })
        .collect()
}

/// GET /v1/sessions/public
pub async fn list_public_sessions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> HandlerResult<SessionListResponse> {
    let limit = state.config.listing.clamp_limit(query.limit);
    let offset = query.offset.unwrap_or(0);
    let repo = state.repository.as_ref();
    let sessions = repo.list_public_sessions(limit, offset).await?;

    Ok(Json(SessionListResponse {
        sessions: with_signatures(repo, sessions).await,
        limit,
        offset,
    }))
}

/// GET /v1/sessions/user/{user_id}
pub async fn list_user_sessions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> HandlerResult<SessionListResponse> {
    if user_id.trim().is_empty() {
        return Err(AppError::BadRequest("user_id must not be empty".to_string()));
    }
    let limit = state.config.listing.clamp_limit(query.limit);
    let offset = query.offset.unwrap_or(0);
    let repo = state.repository.as_ref();
    let sessions = repo.list_user_sessions(&user_id, limit, offset).await?;

    Ok(Json(SessionListResponse {
        sessions: with_signatures(repo, sessions).await,
        limit,
        offset,
    }))
}

/// GET /v1/sessions/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
) -> HandlerResult<SessionListing> {
    let repo = state.repository.as_ref();
    let session = db_services::get_session(repo, SessionId::new(session_id)).await?;
    let mut listings = with_signatures(repo, vec![session]).await;
    listings
        .pop()
        .map(Json)
        .ok_or_else(|| AppError::Internal("session enrichment returned no result".to_string()))
}
