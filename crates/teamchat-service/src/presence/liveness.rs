//! Online/offline derivation.

/// A member is online iff fewer than `threshold_ms` milliseconds have
/// elapsed since `last_seen`. Exactly `threshold_ms` reads as offline.
pub fn is_online(last_seen: i64, now: i64, threshold_ms: i64) -> bool {
    now.saturating_sub(last_seen) < threshold_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: i64 = 15_000;

    #[test]
    fn test_fresh_heartbeat_is_online() {
        assert!(is_online(1_000, 1_000, THRESHOLD));
        assert!(is_online(0, 14_999, THRESHOLD));
    }

    #[test]
    fn test_threshold_boundary_is_offline() {
        assert!(!is_online(0, 15_000, THRESHOLD));
        assert!(!is_online(0, 16_000, THRESHOLD));
    }

    #[test]
    fn test_future_last_seen_counts_as_online() {
        // Client clock ahead of ours; treat as just seen.
        assert!(is_online(20_000, 10_000, THRESHOLD));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        assert!(!is_online(i64::MIN, i64::MAX, THRESHOLD));
        assert!(is_online(i64::MAX, i64::MIN, THRESHOLD));
    }
}
