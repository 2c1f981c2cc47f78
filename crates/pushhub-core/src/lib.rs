//! # pushhub-core
//!
//! Core crate for PushHub. Contains the capability traits, configuration
//! schemas, typed identifiers, filter/predicate types, and the unified
//! error system shared by the rest of the workspace.
//!
//! This crate has **no** internal dependencies on other PushHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
