//! Crowd consensus over today's session reports.
//!
//! Reports are restricted to the spot's local "today", bucketed by time window
//! and reduced to the most frequent value of each categorical field. Ties are
//! broken by the order in which the tied values were first seen in the input,
//! so the caller's ordering of `reports` is part of the result.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::time_windows::{TimeWindow, TimeWindowTable};
use crate::models::session::SessionReport;
use crate::models::time::LocalTimeResolver;

/// Consensus of one time window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusResult {
    pub session_count: usize,
    pub wave_height: Option<String>,
    pub shape: Option<String>,
    pub rating: Option<String>,
}

/// Consensus for every window of the day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowedConsensus {
    pub morning: ConsensusResult,
    pub midday: ConsensusResult,
    pub afternoon: ConsensusResult,
}

impl WindowedConsensus {
    pub fn get(&self, window: TimeWindow) -> &ConsensusResult {
        match window {
            TimeWindow::Morning => &self.morning,
            TimeWindow::Midday => &self.midday,
            TimeWindow::Afternoon => &self.afternoon,
        }
    }

    fn get_mut(&mut self, window: TimeWindow) -> &mut ConsensusResult {
        match window {
            TimeWindow::Morning => &mut self.morning,
            TimeWindow::Midday => &mut self.midday,
            TimeWindow::Afternoon => &mut self.afternoon,
        }
    }
}

/// Most frequent non-null value; ties go to whichever tied value appeared first.
pub fn most_common<'a, I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    // (value, count) in first-seen order
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for value in values.into_iter().flatten() {
        match counts.iter_mut().find(|entry| entry.0 == value) {
            Some(entry) => entry.1 += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        // strictly greater keeps the earlier value on ties
        if best.map_or(true, |(_, n)| count > n) {
            best = Some((value, count));
        }
    }
    best.map(|(v, _)| v.to_string())
}

/// Consensus of a single group of reports.
pub fn consensus_for(reports: &[&SessionReport]) -> ConsensusResult {
    if reports.is_empty() {
        return ConsensusResult::default();
    }

    ConsensusResult {
        session_count: reports.len(),
        wave_height: most_common(reports.iter().map(|r| r.wave_height.as_deref())),
        shape: most_common(reports.iter().map(|r| r.shape.as_deref())),
        rating: most_common(reports.iter().map(|r| r.rating.as_deref())),
    }
}

/// Reports whose local calendar date in `tz` is `today`, in input order.
pub fn reports_for_local_day<'a>(
    reports: &'a [SessionReport],
    tz: Tz,
    today: NaiveDate,
    resolver: &dyn LocalTimeResolver,
) -> Vec<&'a SessionReport> {
    reports
        .iter()
        .filter(|r| resolver.local_date(r.session_date, tz) == today)
        .collect()
}

/// Group today's reports by time window and compute each window's consensus.
///
/// Reports from other local days and reports outside every window are ignored.
pub fn aggregate(
    reports: &[SessionReport],
    tz: Tz,
    today: NaiveDate,
    table: &TimeWindowTable,
    resolver: &dyn LocalTimeResolver,
) -> WindowedConsensus {
    let todays = reports_for_local_day(reports, tz, today, resolver);

    let mut groups: [Vec<&SessionReport>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for report in todays {
        if let Some(window) = table.classify(report.session_date, tz, resolver) {
            groups[window_index(window)].push(report);
        }
    }

    let mut consensus = WindowedConsensus::default();
    for window in TimeWindow::ALL {
        *consensus.get_mut(window) = consensus_for(&groups[window_index(window)]);
    }
    consensus
}

fn window_index(window: TimeWindow) -> usize {
    match window {
        TimeWindow::Morning => 0,
        TimeWindow::Midday => 1,
        TimeWindow::Afternoon => 2,
    }
}
