//! # pushhub-database
//!
//! PostgreSQL connection management, SQL rendering of filter conditions,
//! and concrete repository implementations for the PushHub entities.

pub mod connection;
pub mod migration;
pub mod query;
pub mod repositories;

pub use connection::DatabasePool;
