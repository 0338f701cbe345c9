//! Presence tracking.

pub mod liveness;
pub mod tracker;

pub use liveness::is_online;
pub use tracker::{Heartbeat, PresenceService};
