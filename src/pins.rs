//! GPIO / peripheral pin assignments for the light board.
//!
//! Single source of truth — the binary references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// RGB LED (common-cathode, one PWM channel per colour)
// ---------------------------------------------------------------------------

pub const LED_R_GPIO: i32 = 11;
pub const LED_G_GPIO: i32 = 12;
pub const LED_B_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC frequency for the RGB LED (1 kHz).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;
/// Number of LEDC channels available in low-speed mode.
pub const LEDC_CHANNEL_COUNT: usize = 8;
