//! Spot report assembly.

use chrono::{DateTime, Utc};
use log::debug;

use super::consensus::{aggregate, reports_for_local_day};
use super::window_selector::select_active;
use crate::api::{SpotId, SpotReport};
use crate::config::ReportSettings;
use crate::db::repository::{RepositoryResult, SpotRepository};
use crate::db::services::get_spot;
use crate::models::time::{Clock, LocalTimeResolver};
use crate::models::{SessionReport, Spot};

/// Build the report for `spot` from its session reports as of `now`.
///
/// `reports` must be newest first; that order decides consensus ties and
/// the order of `recent_sessions`.
pub fn assemble_report(
    spot: Spot,
    reports: &[SessionReport],
    now: DateTime<Utc>,
    settings: &ReportSettings,
    resolver: &dyn LocalTimeResolver,
) -> SpotReport {
    let tz = spot.effective_timezone(settings.default_timezone);
    let today = resolver.local_date(now, tz);
    let table = &settings.time_windows;

    let consensus = aggregate(reports, tz, today, table, resolver);
    let todays = reports_for_local_day(reports, tz, today, resolver);
    let current_hour = resolver.local_hour(now, tz);
    let latest = select_active(&consensus, current_hour, table);

    debug!(
        "Spot {} report: {} of {} reports today ({}), local hour {}, showing {}",
        spot.id,
        todays.len(),
        reports.len(),
        tz.name(),
        current_hour,
        latest
    );

    SpotReport {
        has_consensus_today: !todays.is_empty(),
        recent_sessions: todays
            .into_iter()
            .take(settings.recent_sessions_limit)
            .cloned()
            .collect(),
        consensus,
        latest_consensus_time: latest,
        time_windows: *table,
        spot_timezone: tz.name().to_string(),
        spot,
    }
}

/// Load a spot and its sessions and build its report.
///
/// Fails with `NotFound` for an unknown spot.
pub async fn build_spot_report<R: SpotRepository + ?Sized>(
    repo: &R,
    spot_id: SpotId,
    clock: &dyn Clock,
    resolver: &dyn LocalTimeResolver,
    settings: &ReportSettings,
) -> RepositoryResult<SpotReport> {
    let spot = get_spot(repo, spot_id).await?;
    let reports = repo.fetch_session_reports_for_spot(&spot).await?;
    Ok(assemble_report(spot, &reports, clock.now(), settings, resolver))
}
