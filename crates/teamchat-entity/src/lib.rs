//! # teamchat-entity
//!
//! Domain entity models for TeamChat. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities additionally derive `sqlx::FromRow`.

pub mod member;
pub mod presence;
