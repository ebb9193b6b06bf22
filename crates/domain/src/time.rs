//! Conversion from backend epoch-millisecond timestamps.
//!
//! The backend encodes timestamps as floating-point milliseconds since
//! the Unix epoch. Fractional milliseconds carry no information and are
//! discarded by truncation toward zero, never rounded up.

use chrono::{DateTime, TimeZone, Utc};

/// Convert a floating-point epoch-millisecond value to a UTC instant.
///
/// Truncates the fractional part: `1.9` becomes 1 ms since epoch.
/// Values outside chrono's representable range collapse to the epoch,
/// which the backend never emits in practice.
#[must_use]
pub fn datetime_from_epoch_ms(epoch_ms: f64) -> DateTime<Utc> {
    #[allow(clippy::cast_possible_truncation)]
    let millis = epoch_ms as i64;
    match Utc.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) => dt,
        _ => DateTime::<Utc>::UNIX_EPOCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_whole_milliseconds() {
        let dt = datetime_from_epoch_ms(1.0);
        assert_eq!(dt.timestamp_millis(), 1);

        let dt = datetime_from_epoch_ms(1_700_000_000_000.0);
        assert_eq!(dt.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn truncates_fractional_milliseconds() {
        // Fractions are discarded, never rounded up.
        assert_eq!(datetime_from_epoch_ms(1.9).timestamp_millis(), 1);
        assert_eq!(datetime_from_epoch_ms(2.0001).timestamp_millis(), 2);
        assert_eq!(datetime_from_epoch_ms(0.7).timestamp_millis(), 0);
    }

    #[test]
    fn out_of_range_collapses_to_epoch() {
        assert_eq!(datetime_from_epoch_ms(f64::MAX).timestamp_millis(), 0);
    }
}
