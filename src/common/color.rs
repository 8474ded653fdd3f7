//! Color type conversions and utilities
//!
//! Provides type-safe color handling with conversions between:
//! - Channel lists (`R,G,B,A`, the configuration file form)
//! - ARGB32 values (u32)
//! - Hex strings (#AARRGGBB format)

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a channel list could not become a color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Not exactly four comma-separated channels
    #[error("expected 4 channels (R,G,B,A), found {0}")]
    Arity(usize),

    /// A channel is not an integer in 0-255
    #[error("channel {index} ('{value}') is not an integer in 0-255")]
    Channel { index: usize, value: String },
}

/// 8-bit-per-channel color with straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse the configuration form `R,G,B,A`.
    /// Channels are trimmed; the channel count is checked before any channel is parsed.
    pub fn parse_channels(data: &str) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = data.split(',').collect();
        if parts.len() != 4 {
            return Err(ColorParseError::Arity(parts.len()));
        }

        let mut channels = [0u8; 4];
        for (index, (slot, part)) in channels.iter_mut().zip(&parts).enumerate() {
            let part = part.trim();
            *slot = part.parse::<u8>().map_err(|_| ColorParseError::Channel {
                index,
                value: part.to_string(),
            })?;
        }

        let [r, g, b, a] = channels;
        Ok(Self::new(r, g, b, a))
    }

    /// Get raw ARGB32 value
    pub fn argb32(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Convert to HEX string (#AARRGGBB)
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.argb32())
    }
}

/// Formats in the configuration form, so a color can be written back to a file
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.r, self.g, self.b, self.a)
    }
}
