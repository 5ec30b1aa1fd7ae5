//! LEDC PWM peripheral bring-up.
//!
//! Configures the shared LEDC timer once from `main()` and binds GPIOs to
//! LEDC channels on demand, using raw ESP-IDF sys calls.  On host builds
//! every function is a logged no-op so the adapters above stay testable.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during LEDC peripheral setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    LedcTimerFailed(i32),
    LedcChannelFailed(i32),
    LedcChannelsExhausted,
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LedcTimerFailed(rc)   => write!(f, "LEDC timer config failed (rc={})", rc),
            Self::LedcChannelFailed(rc) => write!(f, "LEDC channel config failed (rc={})", rc),
            Self::LedcChannelsExhausted => write!(f, "no free LEDC channel"),
        }
    }
}

impl core::error::Error for HwInitError {}

// ── LEDC timer ────────────────────────────────────────────────

/// Configure LEDC timer 0 (1 kHz, 8-bit) shared by every LED channel.
#[cfg(target_os = "espidf")]
pub fn init_ledc_timer() -> Result<(), HwInitError> {
    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
        freq_hz: pins::LED_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    // SAFETY: Called once from main() before any channel is bound.
    let ret = unsafe { ledc_timer_config(&timer) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::LedcTimerFailed(ret));
    }
    info!(
        "hw_init: LEDC timer0 configured ({} Hz, {}-bit)",
        pins::LED_PWM_FREQ_HZ,
        pins::PWM_RESOLUTION_BITS
    );
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_ledc_timer() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): LEDC timer init skipped");
    Ok(())
}

// ── LEDC channels ─────────────────────────────────────────────

/// Route `gpio` to LEDC `channel` on timer 0, starting dark.
#[cfg(target_os = "espidf")]
pub fn ledc_bind(gpio: i32, channel: u32) -> Result<(), HwInitError> {
    let cfg = ledc_channel_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        channel,
        timer_sel: ledc_timer_t_LEDC_TIMER_0,
        gpio_num: gpio,
        duty: 0,
        hpoint: 0,
        ..Default::default()
    };
    // SAFETY: Main-task only; the timer was configured by init_ledc_timer().
    let ret = unsafe { ledc_channel_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::LedcChannelFailed(ret));
    }
    info!("hw_init: GPIO{} -> LEDC CH{}", gpio, channel);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_bind(gpio: i32, channel: u32) -> Result<(), HwInitError> {
    log::debug!("hw_init(sim): GPIO{} -> LEDC CH{}", gpio, channel);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn ledc_set(channel: u32, duty: u8) {
    // SAFETY: LEDC channels were configured in ledc_bind(); duty register
    // writes are race-free since only the main task calls this function.
    unsafe {
        ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, duty as u32);
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_channel: u32, _duty: u8) {}
