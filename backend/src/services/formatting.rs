//! Display formatting for raw wind, swell and tide values.
//!
//! All functions take optional inputs and return `None` for missing or
//! non-finite values instead of failing.

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Round half toward positive infinity (2.5 -> 3, -2.5 -> -2).
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// 16-point compass name for a direction in degrees.
pub fn cardinal(degrees: Option<f64>) -> Option<&'static str> {
    let degrees = finite(degrees)?;
    let index = (round_half_up(degrees / 22.5) as i64).rem_euclid(16) as usize;
    Some(COMPASS_POINTS[index])
}

/// Height rounded to 0.1, without unit: "3", "3.5".
pub fn format_height_value(value: Option<f64>) -> Option<String> {
    let value = finite(value)?;
    let rounded = round_half_up(value * 10.0) / 10.0;
    if rounded.fract() == 0.0 {
        // avoids "-0" for small negative tides
        Some(format!("{}", rounded as i64))
    } else {
        Some(format!("{:.1}", rounded))
    }
}

/// Height rounded to 0.1 with a feet suffix: "3ft", "3.5ft".
pub fn format_height(value: Option<f64>) -> Option<String> {
    format_height_value(value).map(|h| format!("{}ft", h))
}

/// Integer knots; callers add the "kts" suffix.
pub fn format_speed(value: Option<f64>) -> Option<i64> {
    finite(value).map(|v| round_half_up(v) as i64)
}

/// Integer seconds of swell period.
pub fn format_period(value: Option<f64>) -> Option<i64> {
    finite(value).map(|v| round_half_up(v) as i64)
}

/// Swell height to report: the swell component when present and non-zero,
/// otherwise the combined wave height.
pub fn effective_swell_height(swell_height: Option<f64>, wave_height: Option<f64>) -> Option<f64> {
    finite(swell_height)
        .filter(|h| *h != 0.0)
        .or_else(|| finite(wave_height))
}

/// Blank direction text counts as missing.
pub fn direction_text(direction: Option<&str>) -> Option<String> {
    direction
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
}

/// "12 kts WNW" when both parts are known.
pub fn format_wind(speed: Option<i64>, direction: Option<&str>) -> Option<String> {
    match (speed, direction) {
        (Some(s), Some(d)) => Some(format!("{} kts {}", s, d)),
        _ => None,
    }
}

/// "3.5ft 12s WNW", skipping unknown period or direction; `None` without a height.
pub fn format_swell(height: Option<&str>, period: Option<i64>, direction: Option<&str>) -> Option<String> {
    let height = height?;
    let mut parts = vec![format!("{}ft", height)];
    if let Some(p) = period {
        parts.push(format!("{}s", p));
    }
    if let Some(d) = direction {
        parts.push(d.to_string());
    }
    Some(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cardinal_basic() {
        assert_eq!(cardinal(Some(0.0)), Some("N"));
        assert_eq!(cardinal(Some(90.0)), Some("E"));
        assert_eq!(cardinal(Some(180.0)), Some("S"));
        assert_eq!(cardinal(Some(270.0)), Some("W"));
        assert_eq!(cardinal(Some(292.5)), Some("WNW"));
    }

    #[test]
    fn test_cardinal_wraparound() {
        assert_eq!(cardinal(Some(360.0)), Some("N"));
        assert_eq!(cardinal(Some(355.0)), Some("N"));
        assert_eq!(cardinal(Some(348.0)), Some("NNW"));
        assert_eq!(cardinal(Some(-10.0)), Some("N"));
        assert_eq!(cardinal(Some(-30.0)), Some("NNW"));
    }

    #[test]
    fn test_cardinal_bucket_boundaries() {
        // 100 / 22.5 = 4.44 -> "E"
        assert_eq!(cardinal(Some(100.0)), Some("E"));
        // 101.25 / 22.5 = 4.5 -> rounds up to "ESE"
        assert_eq!(cardinal(Some(101.25)), Some("ESE"));
        assert_eq!(cardinal(Some(101.0)), Some("E"));
    }

    #[test]
    fn test_cardinal_missing() {
        assert_eq!(cardinal(None), None);
        assert_eq!(cardinal(Some(f64::NAN)), None);
    }

    #[test]
    fn test_format_height() {
        assert_eq!(format_height(Some(3.0)).as_deref(), Some("3ft"));
        assert_eq!(format_height(Some(3.45)).as_deref(), Some("3.5ft"));
        assert_eq!(format_height(Some(3.04)).as_deref(), Some("3ft"));
        assert_eq!(format_height(Some(12.96)).as_deref(), Some("13ft"));
        assert_eq!(format_height(Some(0.25)).as_deref(), Some("0.3ft"));
        assert_eq!(format_height(None), None);
        assert_eq!(format_height(Some(f64::INFINITY)), None);
    }

    #[test]
    fn test_format_height_negative_tide() {
        assert_eq!(format_height_value(Some(-0.04)).as_deref(), Some("0"));
        assert_eq!(format_height_value(Some(-1.25)).as_deref(), Some("-1.2"));
        assert_eq!(format_height_value(Some(-2.0)).as_deref(), Some("-2"));
    }

    #[test]
    fn test_format_speed_and_period() {
        assert_eq!(format_speed(Some(12.4)), Some(12));
        assert_eq!(format_speed(Some(12.5)), Some(13));
        assert_eq!(format_speed(None), None);
        assert_eq!(format_period(Some(13.7)), Some(14));
        assert_eq!(format_period(Some(f64::NAN)), None);
    }

    #[test]
    fn test_effective_swell_height() {
        assert_eq!(effective_swell_height(Some(4.2), Some(6.0)), Some(4.2));
        assert_eq!(effective_swell_height(Some(0.0), Some(6.0)), Some(6.0));
        assert_eq!(effective_swell_height(None, Some(6.0)), Some(6.0));
        assert_eq!(effective_swell_height(None, None), None);
    }

    #[test]
    fn test_direction_text() {
        assert_eq!(direction_text(Some("WNW")).as_deref(), Some("WNW"));
        assert_eq!(direction_text(Some("")), None);
        assert_eq!(direction_text(None), None);
    }

    #[test]
    fn test_format_wind_and_swell() {
        assert_eq!(format_wind(Some(12), Some("WNW")).as_deref(), Some("12 kts WNW"));
        assert_eq!(format_wind(Some(12), None), None);
        assert_eq!(
            format_swell(Some("3.5"), Some(12), Some("WNW")).as_deref(),
            Some("3.5ft 12s WNW")
        );
        assert_eq!(format_swell(Some("3"), None, Some("S")).as_deref(), Some("3ft S"));
        assert_eq!(format_swell(Some("3"), Some(9), None).as_deref(), Some("3ft 9s"));
        assert_eq!(format_swell(None, Some(9), Some("S")), None);
    }

    proptest! {
        #[test]
        fn prop_cardinal_always_defined(degrees in -720.0f64..720.0) {
            let point = cardinal(Some(degrees));
            prop_assert!(point.is_some());
            prop_assert!(COMPASS_POINTS.contains(&point.unwrap()));
        }

        #[test]
        fn prop_format_height_never_emits_nan(value in -50.0f64..50.0) {
            let text = format_height(Some(value)).unwrap();
            prop_assert!(text.ends_with("ft"));
            prop_assert!(!text.contains("NaN"));
            prop_assert!(!text.contains(".0ft"));
        }
    }
}
