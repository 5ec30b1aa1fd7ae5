//! Generic embedded-hal PWM adapter.
//!
//! Wraps three [`SetDutyCycle`] outputs (any HAL: LEDC, TIM, PWM slices)
//! behind [`ChannelPort`], addressed by [`Primary`].  Levels are scaled
//! onto each output's own duty range, so an 8-bit level works on a 10- or
//! 16-bit timer.  PWM errors are logged and dropped.

use embedded_hal::pwm::{Error as _, SetDutyCycle};
use log::warn;

use crate::app::ports::ChannelPort;
use crate::drivers::rgb_light::Primary;

pub struct PwmChannels<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> PwmChannels<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }

    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    fn apply(&mut self, channel: Primary, write: Write) {
        let result = match channel {
            Primary::Red => write.apply(&mut self.red).map_err(|e| e.kind()),
            Primary::Green => write.apply(&mut self.green).map_err(|e| e.kind()),
            Primary::Blue => write.apply(&mut self.blue).map_err(|e| e.kind()),
        };
        if let Err(kind) = result {
            warn!("pwm: {:?} write failed ({:?})", channel, kind);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Write {
    Level(u8),
    Binary(bool),
}

impl Write {
    fn apply<P: SetDutyCycle>(self, pin: &mut P) -> Result<(), P::Error> {
        match self {
            Self::Level(level) => pin.set_duty_cycle_fraction(level as u16, u8::MAX as u16),
            Self::Binary(true) => pin.set_duty_cycle_fully_on(),
            Self::Binary(false) => pin.set_duty_cycle_fully_off(),
        }
    }
}

impl<R, G, B> ChannelPort for PwmChannels<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    type Channel = Primary;

    /// Outputs are already configured by the HAL when handed to [`PwmChannels::new`].
    fn configure_output(&mut self, _channel: Primary) {}

    fn write_level(&mut self, channel: Primary, level: u8) {
        self.apply(channel, Write::Level(level));
    }

    fn write_binary(&mut self, channel: Primary, high: bool) {
        self.apply(channel, Write::Binary(high));
    }
}
