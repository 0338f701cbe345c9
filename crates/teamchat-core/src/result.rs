//! Convenience result type alias for TeamChat.

use crate::error::AppError;

/// A specialized `Result` type for TeamChat operations.
pub type AppResult<T> = Result<T, AppError>;
