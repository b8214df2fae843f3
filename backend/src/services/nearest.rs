//! Nearest-in-time lookup over telemetry rows.

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::telemetry::Timestamped;

/// Absolute distance between two instants, at full timestamp precision.
fn distance(a: DateTime<Utc>, b: DateTime<Utc>) -> TimeDelta {
    (a - b).abs()
}

/// Candidate closest in time to `target`.
///
/// Linear scan over unsorted input; on an exact tie the earlier candidate in
/// input order is kept. Returns `None` for an empty slice.
pub fn nearest<T: Timestamped>(target: DateTime<Utc>, candidates: &[T]) -> Option<&T> {
    let mut best: Option<(&T, TimeDelta)> = None;
    for candidate in candidates {
        let delta = distance(candidate.timestamp(), target);
        match best {
            Some((_, best_delta)) if delta >= best_delta => {}
            _ => best = Some((candidate, delta)),
        }
    }
    best.map(|(c, _)| c)
}

/// Candidate with the greatest timestamp (first one on ties).
pub fn latest<T: Timestamped>(candidates: &[T]) -> Option<&T> {
    let mut best: Option<&T> = None;
    for candidate in candidates {
        match best {
            Some(b) if candidate.timestamp() <= b.timestamp() => {}
            _ => best = Some(candidate),
        }
    }
    best
}
