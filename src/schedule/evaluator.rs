//! Schedule evaluation.

use std::collections::BTreeSet;

use alloy::primitives::Address;
use chrono::{DateTime, Utc};

use crate::schedule::types::{truncate_to_minute, ScheduleEntry};

/// The set of addresses that should be allowed at `now`.
///
/// An entry is active iff `start <= now < end` with `now` truncated to
/// minute precision. The result is the deduplicated union over all
/// active entries. Pure function of its inputs.
pub fn scheduled_addresses(entries: &[ScheduleEntry], now: DateTime<Utc>) -> BTreeSet<Address> {
    let now = truncate_to_minute(now);
    entries
        .iter()
        .filter(|entry| entry.start <= now && now < entry.end)
        .map(|entry| entry.address)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use chrono::TimeZone;

    const ADDR_A: Address = address!("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    const ADDR_B: Address = address!("0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, h, m, 0).unwrap()
    }

    fn entry(address: Address, start: DateTime<Utc>, end: DateTime<Utc>) -> ScheduleEntry {
        ScheduleEntry { address, start, end }
    }

    #[test]
    fn test_start_is_inclusive() {
        let entries = vec![entry(ADDR_A, at(10, 0), at(12, 0))];
        let active = scheduled_addresses(&entries, at(10, 0));
        assert!(active.contains(&ADDR_A));
    }

    #[test]
    fn test_end_is_exclusive() {
        let entries = vec![entry(ADDR_A, at(10, 0), at(12, 0))];
        let active = scheduled_addresses(&entries, at(12, 0));
        assert!(active.is_empty());
    }

    #[test]
    fn test_adjacent_windows_form_a_seam() {
        // One window ends exactly where the next begins. At the boundary
        // minute only the second window covers the address.
        let entries = vec![
            entry(ADDR_A, at(10, 0), at(12, 0)),
            entry(ADDR_A, at(12, 0), at(14, 0)),
        ];
        let active = scheduled_addresses(&entries, at(12, 0));
        assert_eq!(active.len(), 1);
        assert!(active.contains(&ADDR_A));
    }

    #[test]
    fn test_overlapping_entries_deduplicate() {
        let entries = vec![
            entry(ADDR_A, at(10, 0), at(12, 0)),
            entry(ADDR_A, at(11, 0), at(13, 0)),
            entry(ADDR_B, at(11, 0), at(12, 0)),
        ];
        let active = scheduled_addresses(&entries, at(11, 30));
        assert_eq!(active.len(), 2);
        assert!(active.contains(&ADDR_A));
        assert!(active.contains(&ADDR_B));
    }

    #[test]
    fn test_now_is_truncated_to_minute() {
        let entries = vec![entry(ADDR_A, at(10, 0), at(12, 0))];
        // 11:59:59 truncates to 11:59, still inside the window.
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 11, 59, 59).unwrap();
        assert!(scheduled_addresses(&entries, now).contains(&ADDR_A));

        // 12:00:59 truncates to 12:00, outside the half-open window.
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 59).unwrap();
        assert!(scheduled_addresses(&entries, now).is_empty());
    }

    #[test]
    fn test_inverted_window_never_matches() {
        let entries = vec![entry(ADDR_A, at(12, 0), at(10, 0))];
        assert!(scheduled_addresses(&entries, at(11, 0)).is_empty());
        assert!(scheduled_addresses(&entries, at(12, 0)).is_empty());
    }

    #[test]
    fn test_no_entries_yields_empty_set() {
        assert!(scheduled_addresses(&[], at(11, 0)).is_empty());
    }
}
