//! Configuration resolution and speech-balloon geometry for the desktop companion
//!
//! - [`config`]: two-layer `key=value` configuration with cached, typed access
//! - [`overlay`]: balloon bounds, style, visibility and paint planning

#![deny(unsafe_code)]

pub mod common;
pub mod config;
pub mod constants;
pub mod overlay;
