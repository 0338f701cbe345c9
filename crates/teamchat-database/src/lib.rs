//! # teamchat-database
//!
//! PostgreSQL connection management, the store traits consumed by the
//! service layer, their PostgreSQL repositories, and in-memory
//! implementations used by tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::{DatabasePool, DatabaseStatus};
pub use store::{MembershipDirectory, PresenceStore};
