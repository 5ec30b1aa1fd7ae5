//! Blocking visual effects for [`RgbLight`].
//!
//! Every effect runs to completion on the caller's thread, sleeping through
//! the injected [`DelayNs`].  There is no cancellation; a caller wanting a
//! repeated strobe or cycle loops around the single-shot call.
//!
//! ## Effects
//!
//! | Effect           | Sequence                                   | Duration  |
//! |------------------|--------------------------------------------|-----------|
//! | `strobe_once`    | off, 500 ms, on, 250 ms                    | 750 ms    |
//! | `cycle_rgb_once` | red, green, blue, 250 ms each              | 750 ms    |
//! | `smooth_cycle`   | six 256-step fades around the colour wheel | ~7.7 s    |

use embedded_hal::delay::DelayNs;
use log::info;

use super::rgb_light::{LightState, NamedColour, Primary, RgbLight};
use crate::app::ports::ChannelPort;

/// One linear fade of a single channel across the full 0–255 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadePass {
    pub primary: Primary,
    pub rising: bool,
}

/// The colour-wheel walk performed by `smooth_cycle()`, starting from blue.
pub const SMOOTH_PASSES: [FadePass; 6] = [
    // blue -> violet
    FadePass { primary: Primary::Red, rising: true },
    // violet -> red
    FadePass { primary: Primary::Blue, rising: false },
    // red -> yellow
    FadePass { primary: Primary::Green, rising: true },
    // yellow -> green
    FadePass { primary: Primary::Red, rising: false },
    // green -> teal
    FadePass { primary: Primary::Blue, rising: true },
    // teal -> blue
    FadePass { primary: Primary::Green, rising: false },
];

const CYCLE_ORDER: [NamedColour; 3] = [NamedColour::Red, NamedColour::Green, NamedColour::Blue];

impl<P: ChannelPort, D: DelayNs> RgbLight<P, D> {
    /// Off for `strobe_off_ms`, then back on for `strobe_on_ms`.
    pub fn strobe_once(&mut self) {
        self.turn_off();
        self.delay.delay_ms(self.config.strobe_off_ms);
        self.turn_on();
        self.delay.delay_ms(self.config.strobe_on_ms);
    }

    /// Show red, green and blue in turn, holding each for `cycle_hold_ms`.
    /// Leaves blue as the stored colour.
    pub fn cycle_rgb_once(&mut self) {
        for colour in CYCLE_ORDER {
            self.set_named_colour(colour);
            self.delay.delay_ms(self.config.cycle_hold_ms);
        }
    }

    /// Fade around the colour wheel.  Levels are written straight to the
    /// channels, so the stored colour is not updated and a later `turn_on()`
    /// brings it back.
    pub fn smooth_cycle(&mut self) {
        info!(
            "rgb_light: smooth cycle start ({} ms)",
            self.config.smooth_cycle_ms()
        );
        self.state = LightState::Lit;
        for pass in SMOOTH_PASSES {
            self.fade(pass);
        }
        info!("rgb_light: smooth cycle done");
    }

    fn fade(&mut self, pass: FadePass) {
        let channel = self.channel(pass.primary);
        for step in 0..=u8::MAX {
            let level = if pass.rising { step } else { u8::MAX - step };
            self.port.write_level(channel, level);
            self.delay.delay_ms(self.config.fade_step_ms);
        }
    }
}
