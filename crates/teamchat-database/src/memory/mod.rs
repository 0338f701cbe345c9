//! In-memory store implementations backed by `DashMap`.
//!
//! Test doubles for the PostgreSQL repositories. The directory is seeded
//! by hand and nothing survives a restart.

pub mod member;
pub mod presence;

pub use member::MemoryMembershipDirectory;
pub use presence::MemoryPresenceStore;
