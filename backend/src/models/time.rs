//! Timezone-aware local time resolution.
//!
//! Everything that buckets sessions by local hour or local calendar date goes
//! through [`LocalTimeResolver`], never through the host's locale, so DST
//! transitions can be exercised deterministically in tests. "Now" comes from a
//! [`Clock`] for the same reason.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

/// Zone applied to spots without a (valid) timezone.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

/// Converts UTC instants into wall-clock values of an IANA zone.
pub trait LocalTimeResolver: Send + Sync {
    /// Local hour-of-day (0..=23) of `instant` in `tz`.
    fn local_hour(&self, instant: DateTime<Utc>, tz: Tz) -> u32;

    /// Local calendar date of `instant` in `tz`.
    fn local_date(&self, instant: DateTime<Utc>, tz: Tz) -> NaiveDate;
}

/// Resolver backed by the IANA database compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTzResolver;

impl LocalTimeResolver for ChronoTzResolver {
    fn local_hour(&self, instant: DateTime<Utc>, tz: Tz) -> u32 {
        instant.with_timezone(&tz).hour()
    }

    fn local_date(&self, instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
        instant.with_timezone(&tz).date_naive()
    }
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parse an IANA zone name, falling back to `default` when the name is
/// missing, blank or unknown.
pub fn resolve_timezone(name: Option<&str>, default: Tz) -> Tz {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        None => default,
        Some(n) => match n.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                log::warn!("Unknown timezone '{}', using {}", n, default.name());
                default
            }
        },
    }
}
