//! Presence tracking configuration.

use serde::{Deserialize, Serialize};

/// A member is online iff a heartbeat was recorded within this many
/// milliseconds.
pub const PRESENCE_THRESHOLD_MS: i64 = 15_000;

/// Heartbeat cadence suggested to clients.
pub const HEARTBEAT_INTERVAL_MS: u64 = 5_000;

/// Presence liveness settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceConfig {
    /// Staleness threshold in milliseconds.
    #[serde(default = "default_threshold")]
    pub threshold_ms: i64,
    /// Heartbeat interval advertised to clients in milliseconds.
    #[serde(default = "default_interval")]
    pub heartbeat_interval_ms: u64,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            threshold_ms: default_threshold(),
            heartbeat_interval_ms: default_interval(),
        }
    }
}

fn default_threshold() -> i64 {
    PRESENCE_THRESHOLD_MS
}

fn default_interval() -> u64 {
    HEARTBEAT_INTERVAL_MS
}
