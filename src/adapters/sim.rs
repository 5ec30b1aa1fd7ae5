//! In-memory channel bank.
//!
//! Implements [`ChannelPort`] for host runs: every write is tracked per
//! channel so callers can read back the "physical" level without any
//! hardware.  Capacity is fixed; no heap.

use heapless::Vec;
use log::{trace, warn};

use crate::app::ports::ChannelPort;

const SIM_CHANNELS: usize = 8;

#[derive(Debug, Clone, Copy)]
struct SimChannel {
    id: u8,
    level: u8,
}

/// Simulated output channels addressed by `u8` id.
#[derive(Debug, Default)]
pub struct SimChannels {
    channels: Vec<SimChannel, SIM_CHANNELS>,
    writes: u32,
}

impl SimChannels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level of a configured channel.
    pub fn level(&self, id: u8) -> Option<u8> {
        self.find(id).map(|c| c.level)
    }

    pub fn is_configured(&self, id: u8) -> bool {
        self.find(id).is_some()
    }

    /// Number of level/binary writes accepted so far, wrapping at `u32::MAX`.
    pub fn writes(&self) -> u32 {
        self.writes
    }

    fn find(&self, id: u8) -> Option<&SimChannel> {
        self.channels.iter().find(|c| c.id == id)
    }

    fn set(&mut self, id: u8, level: u8) {
        match self.channels.iter_mut().find(|c| c.id == id) {
            Some(channel) => {
                channel.level = level;
                self.writes = self.writes.wrapping_add(1);
                trace!("sim: ch{} = {}", id, level);
            }
            None => warn!("sim: write to unconfigured ch{} ignored", id),
        }
    }
}

impl ChannelPort for SimChannels {
    type Channel = u8;

    fn configure_output(&mut self, channel: u8) {
        if self.is_configured(channel) {
            return;
        }
        if self
            .channels
            .push(SimChannel { id: channel, level: 0 })
            .is_err()
        {
            warn!("sim: channel bank full, ch{} not configured", channel);
        }
    }

    fn write_level(&mut self, channel: u8, level: u8) {
        self.set(channel, level);
    }

    fn write_binary(&mut self, channel: u8, high: bool) {
        self.set(channel, if high { u8::MAX } else { 0 });
    }
}
