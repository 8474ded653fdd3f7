//! Shared value types used by the config store and the overlay

pub mod color;
pub mod types;
