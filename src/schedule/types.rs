//! Schedule entry types.

use alloy::primitives::Address;
use chrono::{DateTime, Timelike, Utc};
use serde::Deserialize;

/// One scheduled allowlist membership window.
///
/// The address should be allowed from `start` (inclusive) until `end`
/// (exclusive). Times carry minute precision.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub address: Address,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ScheduleEntry {
    /// Whether the entry window is inverted and can never be active.
    pub fn is_inverted(&self) -> bool {
        self.start >= self.end
    }
}

/// Truncate a timestamp to whole-minute precision.
pub fn truncate_to_minute(t: DateTime<Utc>) -> DateTime<Utc> {
    t.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_to_minute() {
        let t = Utc.with_ymd_and_hms(2026, 8, 7, 10, 30, 59).unwrap();
        let truncated = truncate_to_minute(t);
        assert_eq!(truncated, Utc.with_ymd_and_hms(2026, 8, 7, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_inverted_window_detection() {
        let start = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap();
        let entry = ScheduleEntry {
            address: Address::ZERO,
            start,
            end,
        };
        assert!(entry.is_inverted());

        let ok = ScheduleEntry {
            address: Address::ZERO,
            start: end,
            end: start,
        };
        assert!(!ok.is_inverted());
    }
}
