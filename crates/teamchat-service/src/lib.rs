//! # teamchat-service
//!
//! Business logic service layer for TeamChat. Services orchestrate the
//! store traits from `teamchat-database` and the clock from
//! `teamchat-core`.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod presence;

pub use context::CallerContext;
pub use presence::{Heartbeat, PresenceService, is_online};
