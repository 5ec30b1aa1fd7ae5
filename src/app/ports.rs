//! Port traits — the hexagonal boundary between the light model and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RgbLight (domain)
//! ```
//!
//! Driven adapters (LEDC, embedded-hal PWM, in-memory simulation) implement
//! [`ChannelPort`].  [`RgbLight`](crate::drivers::rgb_light::RgbLight)
//! consumes it via generics, so the colour/effect logic never touches
//! hardware registers directly.
//!
//! The sleep capability is not a port of its own: the light takes any
//! [`embedded_hal::delay::DelayNs`], which every HAL in the ecosystem
//! already implements.

use core::fmt::Debug;

// ───────────────────────────────────────────────────────────────
// Channel output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the light calls this to drive its three outputs.
///
/// All methods are infallible from the caller's point of view.  An
/// adapter that talks to fallible hardware logs the failure and drops
/// the write; the light is a best-effort actuator.
pub trait ChannelPort {
    /// Opaque channel identifier (GPIO number, LEDC slot, enum tag, ...).
    type Channel: Copy + PartialEq + Debug;

    /// Configure `channel` as an output.  Called once per channel when the
    /// light is constructed.
    fn configure_output(&mut self, channel: Self::Channel);

    /// Write a variable PWM level (0 = dark, 255 = full duty).
    fn write_level(&mut self, channel: Self::Channel, level: u8);

    /// Write a binary low/high level.
    fn write_binary(&mut self, channel: Self::Channel, high: bool);
}

impl<P: ChannelPort + ?Sized> ChannelPort for &mut P {
    type Channel = P::Channel;

    fn configure_output(&mut self, channel: Self::Channel) {
        (**self).configure_output(channel);
    }

    fn write_level(&mut self, channel: Self::Channel, level: u8) {
        (**self).write_level(channel, level);
    }

    fn write_binary(&mut self, channel: Self::Channel, high: bool) {
        (**self).write_binary(channel, high);
    }
}
