//! Three-channel PWM RGB light.
//!
//! Holds the last commanded intensity per channel and the three channel
//! identifiers it was built with.  Colour setters store first and then
//! drive the outputs; `turn_off()` forces the outputs low without touching
//! the stored colour, so the next `turn_on()` restores it.
//!
//! ## Brightness stepping
//!
//! Only lit channels are stepped.  A channel at 0 stays at 0, so stepping
//! never changes hue by switching a channel on.  Increase saturates at 255;
//! decrease stops at the configured floor (5 by default) so a dimmed
//! channel stays faintly on.
//!
//! The timed effects live in [`effects`](super::effects).

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::app::ports::ChannelPort;
use crate::config::LightConfig;

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

pub const COLOUR_RED: Rgb = (255, 0, 0);
pub const COLOUR_GREEN: Rgb = (0, 255, 0);
pub const COLOUR_BLUE: Rgb = (0, 0, 255);
pub const COLOUR_WHITE: Rgb = (255, 255, 255);

/// Fixed colour presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColour {
    Red,
    Green,
    Blue,
    White,
}

impl NamedColour {
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => COLOUR_RED,
            Self::Green => COLOUR_GREEN,
            Self::Blue => COLOUR_BLUE,
            Self::White => COLOUR_WHITE,
        }
    }

    /// Map a raw preset index (0 = red, 1 = green, 2 = blue, 3 = white).
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Red),
            1 => Some(Self::Green),
            2 => Some(Self::Blue),
            3 => Some(Self::White),
            _ => None,
        }
    }
}

/// One of the three primaries, used to address a channel of the light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primary {
    Red,
    Green,
    Blue,
}

/// Coarse output state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    /// Outputs reflect the stored colour (or an effect's direct writes).
    Lit,
    /// Outputs forced low; stored colour preserved.
    Dark,
}

pub struct RgbLight<P: ChannelPort, D> {
    pub(super) port: P,
    pub(super) delay: D,
    pub(super) red: P::Channel,
    pub(super) green: P::Channel,
    pub(super) blue: P::Channel,
    pub(super) colour: Rgb,
    pub(super) state: LightState,
    pub(super) config: LightConfig,
}

impl<P: ChannelPort, D: DelayNs> RgbLight<P, D> {
    /// Configure the three channels as outputs with the default timings.
    /// The stored colour starts at full white; nothing is lit until the
    /// first `turn_on()` or colour setter.
    pub fn new(port: P, delay: D, red: P::Channel, green: P::Channel, blue: P::Channel) -> Self {
        Self::with_config(port, delay, red, green, blue, LightConfig::default())
    }

    pub fn with_config(
        mut port: P,
        delay: D,
        red: P::Channel,
        green: P::Channel,
        blue: P::Channel,
        config: LightConfig,
    ) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("rgb_light: {}, using default config", e);
                LightConfig::default()
            }
        };

        port.configure_output(red);
        port.configure_output(green);
        port.configure_output(blue);
        debug!(
            "rgb_light: outputs configured (r={:?}, g={:?}, b={:?})",
            red, green, blue
        );

        Self {
            port,
            delay,
            red,
            green,
            blue,
            colour: COLOUR_WHITE,
            state: LightState::Dark,
            config,
        }
    }

    /// Drive the stored colour onto the outputs.
    pub fn turn_on(&mut self) {
        let (r, g, b) = self.colour;
        self.port.write_level(self.red, r);
        self.port.write_level(self.green, g);
        self.port.write_level(self.blue, b);
        self.state = LightState::Lit;
        trace!("rgb_light: on ({}, {}, {})", r, g, b);
    }

    /// Force every output low.  The stored colour is kept.
    pub fn turn_off(&mut self) {
        self.port.write_binary(self.red, false);
        self.port.write_binary(self.green, false);
        self.port.write_binary(self.blue, false);
        self.state = LightState::Dark;
        trace!("rgb_light: off");
    }

    pub fn set_named_colour(&mut self, colour: NamedColour) {
        let (r, g, b) = colour.rgb();
        self.set_colour(r, g, b);
    }

    /// Select a preset by raw index.  Unknown indices are ignored and the
    /// outputs are left as they were.
    pub fn set_colour_index(&mut self, index: u8) {
        match NamedColour::from_index(index) {
            Some(colour) => self.set_named_colour(colour),
            None => debug!("rgb_light: ignoring unknown preset {}", index),
        }
    }

    pub fn set_colour(&mut self, r: u8, g: u8, b: u8) {
        self.colour = (r, g, b);
        debug!("rgb_light: colour ({}, {}, {})", r, g, b);
        self.turn_on();
    }

    /// Step every lit channel up by `brightness_step`, saturating at 255.
    pub fn increase_brightness(&mut self) {
        let step = self.config.brightness_step;
        let (r, g, b) = self.colour;
        debug!("rgb_light: brightness up");
        self.set_colour(brighter(r, step), brighter(g, step), brighter(b, step));
    }

    /// Step every lit channel down by `brightness_step`, stopping at
    /// `brightness_floor`.
    pub fn decrease_brightness(&mut self) {
        let step = self.config.brightness_step;
        let floor = self.config.brightness_floor;
        let (r, g, b) = self.colour;
        debug!("rgb_light: brightness down");
        self.set_colour(
            dimmer(r, step, floor),
            dimmer(g, step, floor),
            dimmer(b, step, floor),
        );
    }
}

impl<P: ChannelPort, D> RgbLight<P, D> {
    /// Last commanded colour (not necessarily what is on the outputs while
    /// Dark or after a smooth cycle).
    pub fn colour(&self) -> Rgb {
        self.colour
    }

    pub fn state(&self) -> LightState {
        self.state
    }

    pub fn is_lit(&self) -> bool {
        self.state == LightState::Lit
    }

    pub fn channel(&self, primary: Primary) -> P::Channel {
        match primary {
            Primary::Red => self.red,
            Primary::Green => self.green,
            Primary::Blue => self.blue,
        }
    }

    pub fn config(&self) -> &LightConfig {
        &self.config
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Give back the injected collaborators.  Outputs are left as they are.
    pub fn release(self) -> (P, D) {
        (self.port, self.delay)
    }
}

fn brighter(level: u8, step: u8) -> u8 {
    if level == 0 {
        return 0;
    }
    let candidate = level as u16 + step as u16;
    if candidate > u8::MAX as u16 {
        u8::MAX
    } else {
        candidate as u8
    }
}

fn dimmer(level: u8, step: u8, floor: u8) -> u8 {
    if level == 0 {
        return 0;
    }
    let candidate = level as i16 - step as i16;
    if candidate < floor as i16 {
        floor
    } else {
        candidate as u8
    }
}
