//! Three-channel PWM RGB light driver.
//!
//! Exposes the light model, its ports and adapters for integration testing
//! and for embedding in other firmware.  All ESP-IDF-specific code is
//! guarded by `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;

pub use app::ports::ChannelPort;
pub use config::LightConfig;
pub use drivers::effects::{FadePass, SMOOTH_PASSES};
pub use drivers::rgb_light::{LightState, NamedColour, Primary, Rgb, RgbLight};
