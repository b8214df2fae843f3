//! Time-of-day windows used to bucket same-day session reports.
//!
//! The window boundaries are configuration ([`TimeWindowTable`]) rather than
//! constants, so alternative schemes can be loaded from `surf-report.toml` and
//! exercised in tests. Hours outside every window classify to `None`; callers
//! are expected to handle that case explicitly.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::time::LocalTimeResolver;

/// One of the named local-time buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Morning,
    Midday,
    Afternoon,
}

impl TimeWindow {
    /// All windows in chronological order.
    pub const ALL: [TimeWindow; 3] = [TimeWindow::Morning, TimeWindow::Midday, TimeWindow::Afternoon];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Morning => "morning",
            TimeWindow::Midday => "midday",
            TimeWindow::Afternoon => "afternoon",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open local-hour range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpan {
    pub start: u32,
    pub end: u32,
}

impl WindowSpan {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start && hour < self.end
    }
}

/// A window table that cannot partition a day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowTableError {
    #[error("time window '{window}' must satisfy start < end <= 24 (got {}..{})", .span.start, .span.end)]
    InvalidSpan { window: TimeWindow, span: WindowSpan },

    #[error("time windows '{0}' and '{1}' overlap")]
    Overlap(TimeWindow, TimeWindow),
}

/// Boundaries of the three windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindowTable {
    pub morning: WindowSpan,
    pub midday: WindowSpan,
    pub afternoon: WindowSpan,
}

impl Default for TimeWindowTable {
    fn default() -> Self {
        Self {
            morning: WindowSpan::new(5, 10),
            midday: WindowSpan::new(10, 14),
            afternoon: WindowSpan::new(14, 19),
        }
    }
}

impl TimeWindowTable {
    pub fn span(&self, window: TimeWindow) -> WindowSpan {
        match window {
            TimeWindow::Morning => self.morning,
            TimeWindow::Midday => self.midday,
            TimeWindow::Afternoon => self.afternoon,
        }
    }

    /// Check that every span is non-empty, within a day, and disjoint from the others.
    pub fn validate(&self) -> Result<(), WindowTableError> {
        for window in TimeWindow::ALL {
            let span = self.span(window);
            if span.start >= span.end || span.end > 24 {
                return Err(WindowTableError::InvalidSpan { window, span });
            }
        }
        for (i, a) in TimeWindow::ALL.iter().enumerate() {
            for b in &TimeWindow::ALL[i + 1..] {
                let (sa, sb) = (self.span(*a), self.span(*b));
                if sa.start < sb.end && sb.start < sa.end {
                    return Err(WindowTableError::Overlap(*a, *b));
                }
            }
        }
        Ok(())
    }

    /// Window containing a local hour, if any.
    pub fn classify_hour(&self, hour: u32) -> Option<TimeWindow> {
        TimeWindow::ALL
            .into_iter()
            .find(|w| self.span(*w).contains(hour))
    }

    /// Window containing `instant` once converted to local time in `tz`.
    pub fn classify(
        &self,
        instant: DateTime<Utc>,
        tz: Tz,
        resolver: &dyn LocalTimeResolver,
    ) -> Option<TimeWindow> {
        self.classify_hour(resolver.local_hour(instant, tz))
    }
}
