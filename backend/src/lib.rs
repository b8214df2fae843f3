//! # Surf Report Backend
//!
//! Crowd-sourced surf condition reports and environmental swell signatures.
//!
//! Surfers log sessions with subjective ratings. This crate turns those
//! reports into a per-spot "spot report" (today's consensus per local time
//! window) and attaches to each session the wind, swell and tide readings
//! nearest in time to it.
//!
//! ## Architecture
//!
//! - [`api`]: identifiers and the DTOs returned by the HTTP API
//! - [`models`]: stored records and timezone-aware time resolution
//! - [`services`]: consensus, window selection, telemetry matching, formatting
//! - [`db`]: repository traits and the in-memory local repository
//! - [`config`]: TOML and environment configuration
//! - [`routes`]: response types per endpoint
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
