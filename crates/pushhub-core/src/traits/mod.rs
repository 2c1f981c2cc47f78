//! Core traits defined in `pushhub-core` and implemented by other crates.

pub mod element;

pub use element::{ElementSource, ElementStatus, ElementType, TableAttribute, Viewer};
