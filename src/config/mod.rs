//! Configuration management
//!
//! Resolves the bundled defaults and the user override file into a cached
//! snapshot, and exposes typed accessors plus per-namespace settings views.

pub mod accessors;
pub mod error;
pub mod properties;
pub mod settings;
pub mod store;

pub use error::ConfigError;
pub use settings::{
    BalloonPlacement, BalloonSettings, DialogSettings, FloatingSettings, JumpSettings, StartY,
    VoiceSettings, WaifuSettings,
};
pub use store::{ConfigSources, ConfigStore, Origin, Snapshot};
