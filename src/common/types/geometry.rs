//! Geometric types for overlay coordinates and dimensions
//!
//! Provides type-safe wrappers for positions and sizes to avoid
//! common integer confusion (e.g., swapping width/height or x/y).
//! Values are signed: configured offsets can legitimately place the
//! overlay partially off-screen.

use serde::{Deserialize, Serialize};

/// A position in 2D space (host window coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Width × height pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<(i32, i32)> for Dimensions {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

/// Bounding rectangle of the balloon, in host window pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct OverlayRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl OverlayRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Same origin, different height
    pub fn with_height(self, height: i32) -> Self {
        Self { height, ..self }
    }

    /// Whether the rectangle lies entirely inside a window of the given size.
    /// An edge past `i32::MAX` never fits.
    pub fn fits_within(&self, window: Dimensions) -> bool {
        let within = |start: i32, extent: i32, limit: i32| {
            start >= 0 && start.checked_add(extent).is_some_and(|end| end <= limit)
        };
        within(self.x, self.width, window.width) && within(self.y, self.height, window.height)
    }
}
