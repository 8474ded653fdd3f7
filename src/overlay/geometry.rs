//! Balloon placement, style and visibility
//!
//! `OverlayGeometry` owns no drawing surface. It reads `baloon.*` settings
//! from the shared store on every call and turns them, together with the
//! host window size supplied by the caller, into rectangles and styles for a
//! rendering collaborator. Placement reads only the size and offset keys and
//! style reads only the style keys, so a bad value in one never fails the other.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::common::color::Rgba;
use crate::common::types::{OverlayRect, Position, Visibility};
use crate::config::{BalloonPlacement, ConfigError, ConfigStore, Snapshot};
use crate::constants::overlay::GROWTH_FACTOR;
use crate::constants::{defaults, keys};

/// Font family and point size
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontSpec {
    pub family: String,
    pub size: i32,
}

/// Visual parameters handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayStyle {
    pub foreground: Rgba,
    pub background: Rgba,
    pub font: FontSpec,
    /// High-quality rendering before the background fill
    pub high_quality: bool,
    /// High-quality rendering before the content, if not already enabled
    pub high_quality_text: bool,
}

impl OverlayStyle {
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, ConfigError> {
        use defaults::balloon as d;
        use keys::balloon as k;

        Ok(Self {
            foreground: snapshot.get_color(k::FOREGROUND, d::FOREGROUND)?,
            background: snapshot.get_color(k::BACKGROUND, d::BACKGROUND)?,
            font: FontSpec {
                family: snapshot.get_string(k::FONT, d::FONT)?,
                size: snapshot.get_int(k::FONT_SIZE, d::FONT_SIZE)?,
            },
            high_quality: snapshot.get_bool(k::HIGH_QUALITY, d::HIGH_QUALITY)?,
            high_quality_text: snapshot.get_bool(k::HIGH_QUALITY_TEXT, d::HIGH_QUALITY_TEXT)?,
        })
    }
}

/// Top-left corner: horizontally centered plus `x_offset`, `y_offset` above the bottom edge.
/// Integer division truncates; the result is not clamped to the window.
fn anchor(placement: &BalloonPlacement, window_width: i32, window_height: i32) -> Position {
    let x = (window_width / 2)
        .saturating_sub(placement.width / 2)
        .saturating_add(placement.x_offset);
    let y = window_height.saturating_sub(placement.y_offset);
    Position::new(x, y)
}

/// Tallest the balloon may grow to
fn max_height(placement: &BalloonPlacement) -> i32 {
    placement.height.saturating_mul(GROWTH_FACTOR)
}

/// Bounds reserving the full growth band
pub fn desired_bounds(placement: &BalloonPlacement, window_width: i32, window_height: i32) -> OverlayRect {
    let Position { x, y } = anchor(placement, window_width, window_height);
    OverlayRect::new(x, y, placement.width, max_height(placement))
}

/// Resting bounds: same anchor, unscaled height
pub fn initial_bounds(placement: &BalloonPlacement, window_width: i32, window_height: i32) -> OverlayRect {
    let Position { x, y } = anchor(placement, window_width, window_height);
    OverlayRect::new(x, y, placement.width, placement.height)
}

/// Paint-time bounds: keep the origin and width, size the height to the
/// content but never outside `[height, height * GROWTH_FACTOR]`
pub fn fitted_bounds(placement: &BalloonPlacement, current: OverlayRect, content_height: i32) -> OverlayRect {
    let min = placement.height;
    let max = max_height(placement).max(min);
    current.with_height(content_height.clamp(min, max))
}

/// Geometry and visibility of the speech balloon
#[derive(Debug)]
pub struct OverlayGeometry {
    store: Arc<ConfigStore>,
    visibility: Visibility,
}

impl OverlayGeometry {
    /// Starts hidden
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self {
            store,
            visibility: Visibility::default(),
        }
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// Current size and offsets from the store's snapshot
    pub fn placement(&self) -> Result<BalloonPlacement, ConfigError> {
        BalloonPlacement::load(&self.store)
    }

    /// Bounds including the multi-line growth band (height × 3)
    pub fn compute_desired_bounds(
        &self,
        window_width: i32,
        window_height: i32,
    ) -> Result<OverlayRect, ConfigError> {
        let placement = self.placement()?;
        Ok(desired_bounds(&placement, window_width, window_height))
    }

    /// Resting bounds, height not scaled
    pub fn initial_placement(
        &self,
        window_width: i32,
        window_height: i32,
    ) -> Result<OverlayRect, ConfigError> {
        let placement = self.placement()?;
        Ok(initial_bounds(&placement, window_width, window_height))
    }

    /// Resize `current` for content of the given preferred height
    pub fn fit_to_content(
        &self,
        current: OverlayRect,
        content_height: i32,
    ) -> Result<OverlayRect, ConfigError> {
        let placement = self.placement()?;
        Ok(fitted_bounds(&placement, current, content_height))
    }

    pub fn style(&self) -> Result<OverlayStyle, ConfigError> {
        OverlayStyle::from_snapshot(&*self.store.resolve()?)
    }

    /// Switch to the requested state, whatever the current one is
    pub fn toggle(&mut self, visible: bool) {
        self.visibility = Visibility::from(visible);
        debug!(visibility = ?self.visibility, "Balloon visibility changed");
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_shown()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::common::types::Dimensions;
    use crate::config::test_support::store_with;

    fn geometry_with(text: &str) -> (tempfile::TempDir, OverlayGeometry) {
        let (dir, store) = store_with(text);
        (dir, OverlayGeometry::new(store))
    }

    #[test]
    fn test_desired_bounds_with_defaults() {
        let (_dir, geometry) = geometry_with("");
        assert_eq!(
            geometry.compute_desired_bounds(800, 600).unwrap(),
            OverlayRect::new(200, 300, 400, 300)
        );
    }

    #[test]
    fn test_initial_placement_with_defaults() {
        let (_dir, geometry) = geometry_with("");
        let initial = geometry.initial_placement(800, 600).unwrap();
        let desired = geometry.compute_desired_bounds(800, 600).unwrap();

        assert_eq!(initial, OverlayRect::new(200, 300, 400, 100));
        assert_eq!(initial.position(), desired.position());
        assert_eq!(desired.height, initial.height * 3);
    }

    #[test]
    fn test_offsets_and_truncating_division() {
        let (_dir, geometry) = geometry_with(
            "baloon.width=301\nbaloon.height=50\nbaloon.xOffset=-20\nbaloon.yOffset=100\n",
        );
        // 1001 / 2 = 500, 301 / 2 = 150
        assert_eq!(
            geometry.compute_desired_bounds(1001, 700).unwrap(),
            OverlayRect::new(330, 600, 301, 150)
        );
    }

    #[test]
    fn test_no_clamping_to_window() {
        let (_dir, geometry) = geometry_with("baloon.yOffset=900\n");
        let bounds = geometry.compute_desired_bounds(200, 600).unwrap();
        assert_eq!(bounds, OverlayRect::new(-100, -300, 400, 300));
    }

    #[test]
    fn test_window_size_is_read_per_call() {
        let (_dir, geometry) = geometry_with("");
        assert_eq!(geometry.initial_placement(800, 600).unwrap().x, 200);
        assert_eq!(geometry.initial_placement(1000, 600).unwrap().x, 300);
    }

    #[test]
    fn test_invalidation_is_picked_up() {
        let (_dir, geometry) = geometry_with("baloon.width=400\n");
        assert_eq!(geometry.initial_placement(800, 600).unwrap().width, 400);

        fs::write(
            &geometry.store().sources().override_path,
            "baloon.width=200\n",
        )
        .unwrap();
        geometry.store().invalidate();

        assert_eq!(
            geometry.initial_placement(800, 600).unwrap(),
            OverlayRect::new(300, 300, 200, 100)
        );
    }

    #[test]
    fn test_malformed_setting_fails_geometry() {
        let (_dir, geometry) = geometry_with("baloon.height=tall\n");
        assert!(matches!(
            geometry.compute_desired_bounds(800, 600),
            Err(ConfigError::Malformed { .. })
        ));
    }

    #[test]
    fn test_fit_to_content_stays_in_band() {
        let (_dir, geometry) = geometry_with("");
        let initial = geometry.initial_placement(800, 600).unwrap();

        assert_eq!(geometry.fit_to_content(initial, 40).unwrap().height, 100);
        assert_eq!(geometry.fit_to_content(initial, 180).unwrap().height, 180);
        assert_eq!(geometry.fit_to_content(initial, 1000).unwrap().height, 300);

        let fitted = geometry.fit_to_content(initial, 180).unwrap();
        assert_eq!(fitted.position(), initial.position());
        assert_eq!(fitted.width, initial.width);
    }

    #[test]
    fn test_style_defaults() {
        let (_dir, geometry) = geometry_with("");
        let style = geometry.style().unwrap();
        assert_eq!(style.foreground, Rgba::WHITE);
        assert_eq!(style.background, Rgba::BLACK);
        assert_eq!(
            style.font,
            FontSpec {
                family: "Arial".to_string(),
                size: 15
            }
        );
        assert!(style.high_quality);
        assert!(style.high_quality_text);
    }

    #[test]
    fn test_style_bad_color_arity_uses_default() {
        let (_dir, geometry) = geometry_with("baloon.background=1,2,3\n");
        assert_eq!(geometry.style().unwrap().background, Rgba::BLACK);
    }

    #[test]
    fn test_toggle_state_machine() {
        let (_dir, mut geometry) = geometry_with("");
        assert_eq!(geometry.visibility(), Visibility::Hidden);

        geometry.toggle(true);
        assert_eq!(geometry.visibility(), Visibility::Shown);
        geometry.toggle(false);
        assert_eq!(geometry.visibility(), Visibility::Hidden);

        // Repeating a request is a no-op transition
        geometry.toggle(false);
        assert!(!geometry.is_visible());
        geometry.toggle(true);
        geometry.toggle(true);
        assert!(geometry.is_visible());
    }

    #[test]
    fn test_extreme_offsets_saturate() {
        let placement = BalloonPlacement {
            y_offset: i32::MIN,
            ..BalloonPlacement::default()
        };
        assert_eq!(desired_bounds(&placement, 800, 600).y, i32::MAX);
    }

    #[test]
    fn test_bounds_ignore_malformed_style_keys() {
        let (_dir, geometry) = geometry_with("baloon.highQuality=yes\nbaloon.fontSize=big\n");
        assert_eq!(
            geometry.compute_desired_bounds(800, 600).unwrap(),
            OverlayRect::new(200, 300, 400, 300)
        );
        let initial = geometry.initial_placement(800, 600).unwrap();
        assert_eq!(initial, OverlayRect::new(200, 300, 400, 100));
        assert_eq!(geometry.fit_to_content(initial, 150).unwrap().height, 150);

        // Only the style path touches those keys
        assert!(matches!(
            geometry.style(),
            Err(ConfigError::Malformed { .. })
        ));
    }

    #[test]
    fn test_style_ignores_malformed_placement_keys() {
        let (_dir, geometry) = geometry_with("baloon.width=wide\n");
        assert!(geometry.compute_desired_bounds(800, 600).is_err());
        assert_eq!(geometry.style().unwrap().font.size, 15);
    }

    #[test]
    fn test_saturated_offset_does_not_fit_window() {
        let (_dir, geometry) = geometry_with("baloon.xOffset=2147483000\n");
        let window = Dimensions::new(1920, 1080);
        let bounds = geometry
            .compute_desired_bounds(window.width, window.height)
            .unwrap();
        assert_eq!(bounds, OverlayRect::new(i32::MAX, 780, 400, 300));
        assert!(!bounds.fits_within(window));
    }
}
