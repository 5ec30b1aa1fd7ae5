//! Mock hardware for integration tests.
//!
//! Records every channel write and every delay so tests can assert on the
//! full output history without touching real GPIO/PWM registers.

use embedded_hal::delay::DelayNs;
use rgb_light::{ChannelPort, Rgb, RgbLight};

pub const RED_PIN: u8 = 3;
pub const GREEN_PIN: u8 = 5;
pub const BLUE_PIN: u8 = 6;

// ── Channel call record ───────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelCall {
    Configure(u8),
    Level { channel: u8, level: u8 },
    Binary { channel: u8, high: bool },
}

// ── MockChannels ──────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockChannels {
    pub calls: Vec<ChannelCall>,
}

#[allow(dead_code)]
impl MockChannels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Physical level of `channel` after replaying every write.
    pub fn output(&self, channel: u8) -> u8 {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match *c {
                ChannelCall::Level { channel: ch, level } if ch == channel => Some(level),
                ChannelCall::Binary { channel: ch, high } if ch == channel => {
                    Some(if high { 255 } else { 0 })
                }
                _ => None,
            })
            .unwrap_or(0)
    }

    pub fn outputs(&self) -> Rgb {
        (
            self.output(RED_PIN),
            self.output(GREEN_PIN),
            self.output(BLUE_PIN),
        )
    }

    /// Level writes only, in order.
    pub fn levels(&self) -> Vec<(u8, u8)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                ChannelCall::Level { channel, level } => Some((channel, level)),
                _ => None,
            })
            .collect()
    }
}

impl ChannelPort for MockChannels {
    type Channel = u8;

    fn configure_output(&mut self, channel: u8) {
        self.calls.push(ChannelCall::Configure(channel));
    }

    fn write_level(&mut self, channel: u8, level: u8) {
        self.calls.push(ChannelCall::Level { channel, level });
    }

    fn write_binary(&mut self, channel: u8, high: bool) {
        self.calls.push(ChannelCall::Binary { channel, high });
    }
}

// ── MockDelay ─────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockDelay {
    pub waits_ms: Vec<u32>,
}

#[allow(dead_code)]
impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        self.waits_ms.iter().map(|&ms| ms as u64).sum()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}

// ── Fixture ───────────────────────────────────────────────────

pub type MockLight = RgbLight<MockChannels, MockDelay>;

pub fn make_light() -> MockLight {
    RgbLight::new(
        MockChannels::new(),
        MockDelay::new(),
        RED_PIN,
        GREEN_PIN,
        BLUE_PIN,
    )
}
