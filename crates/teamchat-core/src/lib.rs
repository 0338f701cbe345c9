//! # teamchat-core
//!
//! Core crate for the TeamChat presence service. Contains configuration
//! schemas, the clock capability used for every "now" reading, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other TeamChat crates.

pub mod clock;
pub mod config;
pub mod error;
pub mod result;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::AppError;
pub use result::AppResult;
