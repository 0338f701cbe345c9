//! # teamchat-api
//!
//! HTTP API layer for TeamChat built on Axum.
//!
//! Provides the presence endpoints, health probes, request logging and
//! CORS middleware, the caller extractor, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
