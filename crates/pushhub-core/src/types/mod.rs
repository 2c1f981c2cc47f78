//! Core type definitions used across the PushHub workspace.

pub mod filter;
pub mod id;
pub mod pagination;
pub mod sorting;

pub use filter::{Condition, FilterField, FilterOp, FilterValue};
pub use id::{AppId, NotificationId, UserId};
pub use pagination::{PageRequest, PageResponse};
pub use sorting::{SortDirection, SortField};
