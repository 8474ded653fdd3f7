//! Speech balloon overlay: geometry, style, visibility and paint planning

pub mod geometry;
pub mod render;

pub use geometry::{FontSpec, OverlayGeometry, OverlayStyle};
pub use render::{Canvas, PaintOp};
