//! Choice of the window whose consensus is shown as "current".

use super::consensus::WindowedConsensus;
use super::time_windows::{TimeWindow, TimeWindowTable};

/// Pick the active window for a spot report.
///
/// First pass, latest window first: a window with at least one report wins as
/// soon as its start hour has been reached locally. If none qualifies, fall
/// back to the window containing the current hour, or morning when the hour
/// lies outside every window.
pub fn select_active(
    consensus: &WindowedConsensus,
    current_local_hour: u32,
    table: &TimeWindowTable,
) -> TimeWindow {
    let latest_first = [TimeWindow::Afternoon, TimeWindow::Midday, TimeWindow::Morning];

    let with_data = latest_first.into_iter().find(|w| {
        consensus.get(*w).session_count > 0 && current_local_hour >= table.span(*w).start
    });
    if let Some(window) = with_data {
        return window;
    }

    latest_first
        .into_iter()
        .find(|w| table.span(*w).contains(current_local_hour))
        .unwrap_or(TimeWindow::Morning)
}
