//! # teamchat-auth
//!
//! Authentication for TeamChat.
//!
//! - `jwt` — HS256 token claims, minting, and validation
//! - `resolver` — turns an optional bearer token into an optional principal

pub mod jwt;
pub mod resolver;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use resolver::AuthResolver;
