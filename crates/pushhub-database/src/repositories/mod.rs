//! Repository implementations for the PushHub entities.

pub mod app;
pub mod notification;

pub use app::AppRepository;
pub use notification::NotificationRepository;
