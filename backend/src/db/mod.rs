//! Storage access for spots, sessions and external telemetry.
//!
//! This module provides abstractions for database operations via the Repository pattern,
//! allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / report services                         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                             │
//! │  - Not-found policy                                      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/)                         │
//! │  SpotRepository · SessionRepository · TelemetryRepository│
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │        (in-memory, JSON-seedable)             │
//!     └──────────────────────────────────────────────┘
//! ```

pub mod repositories;
pub mod repository;
pub mod services;

pub use repositories::{LocalRepository, SeedData};
pub use repository::{
    ErrorContext, FullRepository, RepositoryError, RepositoryResult, SessionRepository,
    SpotRepository, TelemetryRepository,
};

use std::sync::Arc;

use crate::config::StorageSettings;

/// Build the repository selected by the storage settings.
///
/// Without a seed file the repository starts empty.
pub fn create_repository(settings: &StorageSettings) -> RepositoryResult<Arc<dyn FullRepository>> {
    let repo = match settings.seed_file.as_deref() {
        Some(path) => {
            log::info!("Seeding local repository from {}", path.display());
            LocalRepository::from_seed_file(path)?
        }
        None => LocalRepository::new(),
    };
    Ok(Arc::new(repo))
}
