//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

/// Result of a recorded heartbeat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartbeatResponse {
    /// The caller's member id in the workspace.
    pub member_id: Uuid,
    /// Recorded heartbeat time (ms since epoch).
    pub last_seen: i64,
    /// How often the client should send heartbeats (ms).
    pub heartbeat_interval_ms: u64,
}

/// Online flag of a single member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberPresenceResponse {
    /// Member id.
    pub member_id: Uuid,
    /// Whether the member is online.
    pub online: bool,
}

/// Liveness probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Readiness probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status: `"ok"` or `"degraded"`.
    pub status: String,
    /// Database status: `"connected"`, `"unreachable"`, or `"in_memory"`.
    pub database: String,
}
