//! # pushhub-element
//!
//! The Notification element type: status resolution and filter predicates,
//! list criteria, the admin sidebar source tree, and table-view display
//! helpers. The host admin panel consumes this crate through the
//! [`pushhub_core::traits::ElementType`] contract.

pub mod capabilities;
pub mod criteria;
pub mod element;
pub mod predicate;
pub mod sources;
pub mod table;

pub use capabilities::{AppRegistry, PermissionChecker};
pub use criteria::{NotificationCriteria, ScheduleFilter};
pub use element::NotificationElementType;
