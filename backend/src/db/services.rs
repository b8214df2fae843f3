//! Thin service functions over the repository traits.
//!
//! These add the "not found" policy and log context on top of the raw
//! repository calls, so handlers and the report services stay backend-agnostic.

use log::debug;

use crate::api::{SessionId, SpotId};
use crate::db::repository::{
    ErrorContext, FullRepository, RepositoryError, RepositoryResult, SessionRepository,
    SpotRepository,
};
use crate::models::{SessionRecord, Spot};

/// Whether the store is reachable.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Fetch a spot, turning absence into [`RepositoryError::NotFound`].
pub async fn get_spot<R: SpotRepository + ?Sized>(repo: &R, spot_id: SpotId) -> RepositoryResult<Spot> {
    repo.get_spot(spot_id).await?.ok_or_else(|| {
        RepositoryError::not_found(
            "Spot not found",
            ErrorContext::new("get_spot").with_entity("spot").with_entity_id(spot_id),
        )
    })
}

pub async fn list_spots<R: SpotRepository + ?Sized>(
    repo: &R,
    search: Option<&str>,
    limit: usize,
    offset: usize,
) -> RepositoryResult<Vec<Spot>> {
    let search = search.map(str::trim).filter(|s| !s.is_empty());
    let spots = repo.list_spots(search, limit, offset).await?;
    debug!("list_spots search={:?} -> {} spots", search, spots.len());
    Ok(spots)
}

/// Fetch a session, turning absence into [`RepositoryError::NotFound`].
pub async fn get_session<R: SessionRepository + ?Sized>(
    repo: &R,
    session_id: SessionId,
) -> RepositoryResult<SessionRecord> {
    repo.get_session(session_id).await?.ok_or_else(|| {
        RepositoryError::not_found(
            "Session not found",
            ErrorContext::new("get_session")
                .with_entity("session")
                .with_entity_id(session_id),
        )
    })
}
