//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Configuration paths and filenames
pub mod config {
    /// Directory (relative to the working directory) holding the user override file
    pub const DIR: &str = "config";

    /// Configuration filename, shared by the bundled resource and the override file
    pub const FILENAME: &str = "config.properties";

    /// Logical path of the bundled default configuration
    pub const BUNDLED_PATH: &str = "config/config.properties";

    /// Bundled default configuration text, embedded at compile time
    pub const BUNDLED_DEFAULTS: &str = include_str!("../assets/config/config.properties");
}

/// Configuration key names
///
/// The `baloon` spelling is part of the on-disk format and must not be corrected.
pub mod keys {
    pub const ADAPTER: &str = "adapter";

    pub mod balloon {
        pub const WIDTH: &str = "baloon.width";
        pub const HEIGHT: &str = "baloon.height";
        pub const X_OFFSET: &str = "baloon.xOffset";
        pub const Y_OFFSET: &str = "baloon.yOffset";
        pub const FONT: &str = "baloon.font";
        pub const FONT_SIZE: &str = "baloon.fontSize";
        pub const BACKGROUND: &str = "baloon.background";
        pub const FOREGROUND: &str = "baloon.foreground";
        pub const HIGH_QUALITY: &str = "baloon.highQuality";
        pub const HIGH_QUALITY_TEXT: &str = "baloon.highQualityText";
        pub const FORMAT_STRING: &str = "baloon.formatString";
    }

    pub mod waifu {
        pub const NAME: &str = "waifu.name";
        pub const HEIGHT: &str = "waifu.height";
        pub const MIRRORED: &str = "waifu.mirrored";
        pub const WELCOME_ENABLED: &str = "waifu.welcome.enabled";
        pub const WELCOME_DELAY: &str = "waifu.welcome.delay";
        pub const ALWAYS_ON_TOP: &str = "waifu.alwaysOnTop";
        pub const START_Y: &str = "waifu.startY";
        pub const SKIN_INDEX: &str = "waifu.skinIndex";
        pub const HIGH_QUALITY: &str = "waifu.highQuality";
        pub const LANGUAGE: &str = "waifu.language";
        pub const LANGUAGE_USE_NATIVE: &str = "waifu.language.useNative";
    }

    pub mod voice {
        pub const ENABLED: &str = "voice.enabled";
        pub const VOLUME: &str = "voice.volume";
    }

    pub mod dialogs {
        pub const ENABLED: &str = "dialogs.enabled";
        pub const ON_CLICK: &str = "dialogs.onClick";
        pub const ON_IDLE: &str = "dialogs.onIdle";
        pub const NO_VOICE_DURATION: &str = "dialogs.baloon.noVoiceDuration";
        pub const IDLE_FREQUENCY: &str = "dialogs.idle.frequency";
    }

    pub mod floating {
        pub const ENABLED: &str = "floating.enabled";
        pub const PIXEL_PER_STEP: &str = "floating.pixelPerStep";
        pub const PIXEL_RANGE: &str = "floating.pixelRange";
        pub const STEP_SLEEP: &str = "floating.stepSleep";
        pub const SWAP_SLEEP: &str = "floating.swapSleep";
        pub const SWITCH_SLEEP: &str = "floating.switchSleep";
    }

    pub mod jump {
        pub const ON_CLICK: &str = "jump.onClick";
        pub const COUNT: &str = "jump.count";
        pub const PIXEL_PER_STEP: &str = "jump.pixelPerStep";
        pub const STEP_SLEEP: &str = "jump.stepSleep";
        pub const PIXEL_RANGE: &str = "jump.pixelRange";
    }
}

/// Overlay drawing constants
pub mod overlay {
    /// Corner radius of the balloon background
    pub const CORNER_RADIUS: f64 = 10.0;

    /// Desired height is the configured height times this factor (room for multi-line text)
    pub const GROWTH_FACTOR: i32 = 3;

    /// Placeholder substituted by the balloon format string
    pub const TEXT_PLACEHOLDER: &str = "[[text]]";
}

/// Default configuration values
/// These are used when a key is missing from the resolved configuration
pub mod defaults {
    pub const ADAPTER: &str = "Ship";

    /// Speech balloon settings
    pub mod balloon {
        use crate::common::color::Rgba;

        /// Default balloon width in pixels
        pub const WIDTH: i32 = 400;

        /// Default resting balloon height in pixels
        pub const HEIGHT: i32 = 100;

        /// Horizontal offset from the centered position
        pub const X_OFFSET: i32 = 0;

        /// Distance of the balloon's top edge from the window's bottom edge
        pub const Y_OFFSET: i32 = 300;

        pub const FONT: &str = "Arial";
        pub const FONT_SIZE: i32 = 15;

        pub const BACKGROUND: Rgba = Rgba::BLACK;
        pub const FOREGROUND: Rgba = Rgba::WHITE;

        pub const HIGH_QUALITY: bool = true;
        pub const HIGH_QUALITY_TEXT: bool = true;

        pub const FORMAT_STRING: &str = "[[text]]";
    }

    /// Companion character settings
    pub mod waifu {
        pub const HEIGHT: i32 = 800;
        pub const MIRRORED: bool = false;
        pub const WELCOME_ENABLED: bool = true;
        /// Delay before the welcome line, in milliseconds
        pub const WELCOME_DELAY_MS: i32 = 5000;
        pub const ALWAYS_ON_TOP: bool = true;
        pub const START_Y: &str = "auto";
        pub const SKIN_INDEX: i32 = 0;
        pub const HIGH_QUALITY: &str = "";
        pub const LANGUAGE: &str = "Chinese";
        pub const LANGUAGE_USE_NATIVE: bool = false;
    }

    pub mod voice {
        pub const ENABLED: bool = true;
        /// Volume percentage (0-100)
        pub const VOLUME: i32 = 50;
    }

    pub mod dialogs {
        pub const ENABLED: bool = true;
        pub const ON_CLICK: bool = true;
        pub const ON_IDLE: bool = true;
        /// Seconds a balloon stays up when no voice line accompanies it
        pub const NO_VOICE_DURATION_SECS: i32 = 3;
        /// Seconds between idle dialog lines
        pub const IDLE_FREQUENCY_SECS: i32 = 60;
    }

    pub mod floating {
        pub const ENABLED: bool = true;
        pub const PIXEL_PER_STEP: i32 = 1;
        pub const PIXEL_RANGE: i32 = 300;
        pub const STEP_SLEEP_MS: i32 = 16;
        pub const SWAP_SLEEP_MS: i32 = 100;
        pub const SWITCH_SLEEP_MS: i32 = 10;
    }

    pub mod jump {
        pub const ON_CLICK: bool = true;
        pub const COUNT: i32 = 2;
        pub const PIXEL_PER_STEP: i32 = 5;
        pub const STEP_SLEEP_MS: i32 = 15;
        pub const PIXEL_RANGE: i32 = 40;
    }
}
