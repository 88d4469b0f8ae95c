//! Epoch timestamp formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats epoch milliseconds as RFC 3339 in UTC, e.g. `2020-09-13T12:26:40.000Z`.
///
/// Returns `None` when the value is outside chrono's representable range.
pub fn format_epoch_millis(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_epoch_millis() {
        assert_eq!(
            format_epoch_millis(1_600_000_000_000).as_deref(),
            Some("2020-09-13T12:26:40.000Z")
        );
        assert_eq!(
            format_epoch_millis(1_600_000_000_123).as_deref(),
            Some("2020-09-13T12:26:40.123Z")
        );
    }

    #[test]
    fn test_format_epoch_zero() {
        assert_eq!(
            format_epoch_millis(0).as_deref(),
            Some("1970-01-01T00:00:00.000Z")
        );
    }

    #[test]
    fn test_format_out_of_range() {
        assert!(format_epoch_millis(i64::MAX).is_none());
    }
}
