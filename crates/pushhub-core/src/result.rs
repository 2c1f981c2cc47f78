//! Convenience result type alias for PushHub.

use crate::error::AppError;

/// A specialized `Result` type for PushHub operations, so that crates do
/// not need to spell out `Result<T, AppError>` everywhere.
pub type AppResult<T> = Result<T, AppError>;
