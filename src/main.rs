//! RGB light firmware — demo entry point.
//!
//! Brings up the LEDC timer, wires an [`RgbLight`] to the board's three
//! LED pins and walks through every colour, brightness and effect
//! operation forever.
//!
//! ```text
//!   LedcChannels (ChannelPort) ─┐
//!                               ├─▶ RgbLight ─▶ colour / brightness / effects
//!   SystemDelay  (DelayNs)     ─┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use embedded_hal::delay::DelayNs;
use log::info;

use rgb_light::adapters::ledc::LedcChannels;
use rgb_light::adapters::time::SystemDelay;
use rgb_light::drivers::hw_init;
use rgb_light::{LightConfig, NamedColour, RgbLight, pins};

const STROBE_COUNT: usize = 5;
const STEP_HOLD_MS: u32 = 400;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("rgb-light v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    // Without the timer no channel can be bound; nothing useful is left to do.
    hw_init::init_ledc_timer()?;

    // ── 3. Light ──────────────────────────────────────────────
    let config = LightConfig::default();
    let mut light = RgbLight::with_config(
        LedcChannels::new(),
        SystemDelay::new(),
        pins::LED_R_GPIO,
        pins::LED_G_GPIO,
        pins::LED_B_GPIO,
        config,
    );
    let mut delay = SystemDelay::new();

    info!("System ready. Entering demo loop.");

    // ── 4. Demo loop ──────────────────────────────────────────
    loop {
        for colour in [
            NamedColour::Red,
            NamedColour::Green,
            NamedColour::Blue,
            NamedColour::White,
        ] {
            info!("demo: {:?}", colour);
            light.set_named_colour(colour);
            delay.delay_ms(STEP_HOLD_MS);
        }

        info!("demo: dimming");
        light.set_colour(255, 128, 0);
        for _ in 0..10 {
            light.decrease_brightness();
            delay.delay_ms(STEP_HOLD_MS / 2);
        }
        info!("demo: brightening");
        for _ in 0..10 {
            light.increase_brightness();
            delay.delay_ms(STEP_HOLD_MS / 2);
        }

        info!("demo: strobe x{}", STROBE_COUNT);
        for _ in 0..STROBE_COUNT {
            light.strobe_once();
        }

        info!("demo: rgb cycle");
        light.cycle_rgb_once();
        light.smooth_cycle();

        light.turn_off();
        delay.delay_ms(STEP_HOLD_MS);
    }
}
