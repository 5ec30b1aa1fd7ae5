//! Light timing and brightness parameters.
//!
//! Passed to [`RgbLight::with_config`](crate::drivers::rgb_light::RgbLight::with_config)
//! at construction; there is no runtime reconfiguration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Brightness stepping and effect timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    // --- Brightness ---
    /// Amount added/subtracted per brightness step
    pub brightness_step: u8,
    /// Lowest level a lit channel can be dimmed to
    pub brightness_floor: u8,

    // --- Effects ---
    /// Per-unit delay during a smooth fade pass (milliseconds)
    pub fade_step_ms: u32,
    /// Dark phase of a strobe (milliseconds)
    pub strobe_off_ms: u32,
    /// Lit phase of a strobe (milliseconds)
    pub strobe_on_ms: u32,
    /// Hold time per colour in an RGB cycle (milliseconds)
    pub cycle_hold_ms: u32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            brightness_step: 25,
            brightness_floor: 5,

            fade_step_ms: 5,
            strobe_off_ms: 500,
            strobe_on_ms: 250,
            cycle_hold_ms: 250,
        }
    }
}

impl LightConfig {
    /// Range-check the parameters.  Rejects instead of clamping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brightness_step == 0 {
            return Err(ConfigError::ValidationFailed(
                "brightness_step must be non-zero",
            ));
        }
        if self.brightness_floor == 0 {
            // A zero floor would let decrease_brightness() extinguish a channel.
            return Err(ConfigError::ValidationFailed(
                "brightness_floor must be non-zero",
            ));
        }
        Ok(())
    }

    /// Total blocking time of one `smooth_cycle()` (six passes of 256 steps).
    pub fn smooth_cycle_ms(&self) -> u64 {
        6 * 256 * self.fade_step_ms as u64
    }
}
