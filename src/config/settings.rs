//! Typed views over configuration namespaces
//!
//! Each struct reads one key namespace through the typed accessors, applying
//! the shipped defaults from `constants::defaults`. A view is built from a
//! single snapshot, so all of its fields come from the same configuration.
//! Views are never cached; an invalidated store is picked up by the next `load`.

use std::time::Duration;

use serde::Serialize;

use super::error::ConfigError;
use super::store::{ConfigStore, Snapshot};
use crate::common::color::Rgba;
use crate::constants::defaults;
use crate::constants::keys;
use crate::constants::overlay::TEXT_PLACEHOLDER;

/// Read a non-negative integer setting as a duration in `unit`s
fn duration(
    snapshot: &Snapshot,
    key: &str,
    default: i32,
    unit: fn(u64) -> Duration,
) -> Result<Duration, ConfigError> {
    let value = snapshot.get_int(key, default)?;
    u64::try_from(value).map(unit).map_err(|e| {
        ConfigError::malformed(key, &value.to_string(), "non-negative duration", e)
    })
}

/// The four `baloon.*` keys that position and size the balloon.
///
/// Placement reads nothing else, so a malformed style value never blocks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalloonPlacement {
    pub width: i32,
    /// Resting height; the desired height reserves a multiple of this
    pub height: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl BalloonPlacement {
    pub fn load(store: &ConfigStore) -> Result<Self, ConfigError> {
        Self::from_snapshot(&*store.resolve()?)
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, ConfigError> {
        use defaults::balloon as d;
        use keys::balloon as k;

        Ok(Self {
            width: snapshot.get_int(k::WIDTH, d::WIDTH)?,
            height: snapshot.get_int(k::HEIGHT, d::HEIGHT)?,
            x_offset: snapshot.get_int(k::X_OFFSET, d::X_OFFSET)?,
            y_offset: snapshot.get_int(k::Y_OFFSET, d::Y_OFFSET)?,
        })
    }
}

impl Default for BalloonPlacement {
    fn default() -> Self {
        use defaults::balloon as d;

        Self {
            width: d::WIDTH,
            height: d::HEIGHT,
            x_offset: d::X_OFFSET,
            y_offset: d::Y_OFFSET,
        }
    }
}

/// Speech balloon settings (`baloon.*`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalloonSettings {
    pub width: i32,
    /// Resting height; the desired height reserves a multiple of this
    pub height: i32,
    pub x_offset: i32,
    pub y_offset: i32,
    pub font: String,
    pub font_size: i32,
    pub background: Rgba,
    pub foreground: Rgba,
    /// Enable high-quality rendering before the background fill
    pub high_quality: bool,
    /// Enable high-quality rendering before the text (only when `high_quality` is off)
    pub high_quality_text: bool,
    pub format_string: String,
}

impl BalloonSettings {
    pub fn load(store: &ConfigStore) -> Result<Self, ConfigError> {
        Self::from_snapshot(&*store.resolve()?)
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, ConfigError> {
        use defaults::balloon as d;
        use keys::balloon as k;

        let placement = BalloonPlacement::from_snapshot(snapshot)?;

        Ok(Self {
            width: placement.width,
            height: placement.height,
            x_offset: placement.x_offset,
            y_offset: placement.y_offset,
            font: snapshot.get_string(k::FONT, d::FONT)?,
            font_size: snapshot.get_int(k::FONT_SIZE, d::FONT_SIZE)?,
            background: snapshot.get_color(k::BACKGROUND, d::BACKGROUND)?,
            foreground: snapshot.get_color(k::FOREGROUND, d::FOREGROUND)?,
            high_quality: snapshot.get_bool(k::HIGH_QUALITY, d::HIGH_QUALITY)?,
            high_quality_text: snapshot.get_bool(k::HIGH_QUALITY_TEXT, d::HIGH_QUALITY_TEXT)?,
            format_string: snapshot.get_string(k::FORMAT_STRING, d::FORMAT_STRING)?,
        })
    }

    /// Wrap a dialog line in the configured format string
    pub fn format(&self, text: &str) -> String {
        self.format_string.replace(TEXT_PLACEHOLDER, text)
    }
}

impl Default for BalloonSettings {
    fn default() -> Self {
        use defaults::balloon as d;

        Self {
            width: d::WIDTH,
            height: d::HEIGHT,
            x_offset: d::X_OFFSET,
            y_offset: d::Y_OFFSET,
            font: d::FONT.to_string(),
            font_size: d::FONT_SIZE,
            background: d::BACKGROUND,
            foreground: d::FOREGROUND,
            high_quality: d::HIGH_QUALITY,
            high_quality_text: d::HIGH_QUALITY_TEXT,
            format_string: d::FORMAT_STRING.to_string(),
        }
    }
}

/// Initial vertical position of the companion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartY {
    /// Let the host window decide
    Auto,
    Fixed(i32),
}

impl StartY {
    fn parse(key: &str, raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        raw.trim()
            .parse()
            .map(Self::Fixed)
            .map_err(|e| ConfigError::malformed(key, raw, "'auto' or integer", e))
    }
}

/// Companion character settings (`waifu.*`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaifuSettings {
    /// Required; there is no sensible default name
    pub name: String,
    pub height: i32,
    pub mirrored: bool,
    pub welcome_enabled: bool,
    pub welcome_delay: Duration,
    pub always_on_top: bool,
    pub start_y: StartY,
    pub skin_index: i32,
    /// Free-form quality hint passed through to the sprite renderer
    pub high_quality: String,
    pub language: String,
    pub use_native_language: bool,
}

impl WaifuSettings {
    pub fn load(store: &ConfigStore) -> Result<Self, ConfigError> {
        Self::from_snapshot(&*store.resolve()?)
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, ConfigError> {
        use defaults::waifu as d;
        use keys::waifu as k;

        let start_y = snapshot.get_string(k::START_Y, d::START_Y)?;

        Ok(Self {
            name: snapshot.get_string(k::NAME, None)?,
            height: snapshot.get_int(k::HEIGHT, d::HEIGHT)?,
            mirrored: snapshot.get_bool(k::MIRRORED, d::MIRRORED)?,
            welcome_enabled: snapshot.get_bool(k::WELCOME_ENABLED, d::WELCOME_ENABLED)?,
            welcome_delay: duration(
                snapshot,
                k::WELCOME_DELAY,
                d::WELCOME_DELAY_MS,
                Duration::from_millis,
            )?,
            always_on_top: snapshot.get_bool(k::ALWAYS_ON_TOP, d::ALWAYS_ON_TOP)?,
            start_y: StartY::parse(k::START_Y, &start_y)?,
            skin_index: snapshot.get_int(k::SKIN_INDEX, d::SKIN_INDEX)?,
            high_quality: snapshot.get_string(k::HIGH_QUALITY, d::HIGH_QUALITY)?,
            language: snapshot.get_string(k::LANGUAGE, d::LANGUAGE)?,
            use_native_language: snapshot.get_bool(k::LANGUAGE_USE_NATIVE, d::LANGUAGE_USE_NATIVE)?,
        })
    }
}

/// Name of the dialog adapter (top-level `adapter` key)
pub fn adapter(store: &ConfigStore) -> Result<String, ConfigError> {
    store.get_string(keys::ADAPTER, defaults::ADAPTER)
}

/// Voice playback settings (`voice.*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoiceSettings {
    pub enabled: bool,
    /// Percentage, 0-100
    pub volume: i32,
}

impl VoiceSettings {
    pub fn load(store: &ConfigStore) -> Result<Self, ConfigError> {
        Self::from_snapshot(&*store.resolve()?)
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, ConfigError> {
        Ok(Self {
            enabled: snapshot.get_bool(keys::voice::ENABLED, defaults::voice::ENABLED)?,
            volume: snapshot.get_int(keys::voice::VOLUME, defaults::voice::VOLUME)?,
        })
    }
}

/// Dialog trigger settings (`dialogs.*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialogSettings {
    pub enabled: bool,
    pub on_click: bool,
    pub on_idle: bool,
    /// How long a balloon stays up when the line has no voice
    pub no_voice_duration: Duration,
    pub idle_frequency: Duration,
}

impl DialogSettings {
    pub fn load(store: &ConfigStore) -> Result<Self, ConfigError> {
        Self::from_snapshot(&*store.resolve()?)
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, ConfigError> {
        use defaults::dialogs as d;
        use keys::dialogs as k;

        Ok(Self {
            enabled: snapshot.get_bool(k::ENABLED, d::ENABLED)?,
            on_click: snapshot.get_bool(k::ON_CLICK, d::ON_CLICK)?,
            on_idle: snapshot.get_bool(k::ON_IDLE, d::ON_IDLE)?,
            no_voice_duration: duration(
                snapshot,
                k::NO_VOICE_DURATION,
                d::NO_VOICE_DURATION_SECS,
                Duration::from_secs,
            )?,
            idle_frequency: duration(
                snapshot,
                k::IDLE_FREQUENCY,
                d::IDLE_FREQUENCY_SECS,
                Duration::from_secs,
            )?,
        })
    }
}

/// Idle floating animation settings (`floating.*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FloatingSettings {
    pub enabled: bool,
    pub pixel_per_step: i32,
    pub pixel_range: i32,
    pub step_sleep: Duration,
    pub swap_sleep: Duration,
    pub switch_sleep: Duration,
}

impl FloatingSettings {
    pub fn load(store: &ConfigStore) -> Result<Self, ConfigError> {
        Self::from_snapshot(&*store.resolve()?)
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, ConfigError> {
        use defaults::floating as d;
        use keys::floating as k;

        Ok(Self {
            enabled: snapshot.get_bool(k::ENABLED, d::ENABLED)?,
            pixel_per_step: snapshot.get_int(k::PIXEL_PER_STEP, d::PIXEL_PER_STEP)?,
            pixel_range: snapshot.get_int(k::PIXEL_RANGE, d::PIXEL_RANGE)?,
            step_sleep: duration(snapshot, k::STEP_SLEEP, d::STEP_SLEEP_MS, Duration::from_millis)?,
            swap_sleep: duration(snapshot, k::SWAP_SLEEP, d::SWAP_SLEEP_MS, Duration::from_millis)?,
            switch_sleep: duration(
                snapshot,
                k::SWITCH_SLEEP,
                d::SWITCH_SLEEP_MS,
                Duration::from_millis,
            )?,
        })
    }
}

/// Jump-on-click animation settings (`jump.*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JumpSettings {
    pub on_click: bool,
    pub count: i32,
    pub pixel_per_step: i32,
    pub step_sleep: Duration,
    pub pixel_range: i32,
}

impl JumpSettings {
    pub fn load(store: &ConfigStore) -> Result<Self, ConfigError> {
        Self::from_snapshot(&*store.resolve()?)
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, ConfigError> {
        use defaults::jump as d;
        use keys::jump as k;

        Ok(Self {
            on_click: snapshot.get_bool(k::ON_CLICK, d::ON_CLICK)?,
            count: snapshot.get_int(k::COUNT, d::COUNT)?,
            pixel_per_step: snapshot.get_int(k::PIXEL_PER_STEP, d::PIXEL_PER_STEP)?,
            step_sleep: duration(snapshot, k::STEP_SLEEP, d::STEP_SLEEP_MS, Duration::from_millis)?,
            pixel_range: snapshot.get_int(k::PIXEL_RANGE, d::PIXEL_RANGE)?,
        })
    }
}
