//! Domain types for type safety and clarity
//!
//! Refactored into sub-modules for better organization.

pub mod domain;
pub mod geometry;

pub use domain::Visibility;
pub use geometry::{Dimensions, OverlayRect, Position};
