//! ESP32 LEDC channel adapter.
//!
//! Implements [`ChannelPort`] with GPIO numbers as channel identifiers.
//! `configure_output()` binds the GPIO to the next free LEDC channel on the
//! shared 1 kHz / 8-bit timer; writes then go to that channel's duty
//! register.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the LEDC peripheral via hw_init.
//! On host/test: the hw_init calls are no-ops and only the in-memory duty
//! shadow changes.

use heapless::Vec;
use log::{error, trace, warn};

use crate::app::ports::ChannelPort;
use crate::drivers::hw_init::{self, HwInitError};
use crate::pins;

#[derive(Debug, Clone, Copy)]
struct Binding {
    gpio: i32,
    ledc: u32,
    duty: u8,
}

pub struct LedcChannels {
    bindings: Vec<Binding, { pins::LEDC_CHANNEL_COUNT }>,
}

impl Default for LedcChannels {
    fn default() -> Self {
        Self::new()
    }
}

impl LedcChannels {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind `gpio` to a LEDC channel, reusing an existing binding.
    /// Returns the LEDC channel number.
    pub fn bind(&mut self, gpio: i32) -> Result<u32, HwInitError> {
        if let Some(b) = self.find(gpio) {
            return Ok(b.ledc);
        }
        let ledc = self.bindings.len() as u32;
        if self.bindings.push(Binding { gpio, ledc, duty: 0 }).is_err() {
            return Err(HwInitError::LedcChannelsExhausted);
        }
        if let Err(e) = hw_init::ledc_bind(gpio, ledc) {
            self.bindings.truncate(ledc as usize);
            return Err(e);
        }
        Ok(ledc)
    }

    /// Last duty written to `gpio`, if it is bound.
    pub fn duty(&self, gpio: i32) -> Option<u8> {
        self.find(gpio).map(|b| b.duty)
    }

    pub fn ledc_channel(&self, gpio: i32) -> Option<u32> {
        self.find(gpio).map(|b| b.ledc)
    }

    fn find(&self, gpio: i32) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.gpio == gpio)
    }

    fn set_duty(&mut self, gpio: i32, duty: u8) {
        let Some(binding) = self.bindings.iter_mut().find(|b| b.gpio == gpio) else {
            warn!("ledc: GPIO{} not configured, write dropped", gpio);
            return;
        };
        hw_init::ledc_set(binding.ledc, duty);
        binding.duty = duty;
        trace!("ledc: GPIO{} (CH{}) duty={}", gpio, binding.ledc, duty);
    }
}

impl ChannelPort for LedcChannels {
    type Channel = i32;

    fn configure_output(&mut self, gpio: i32) {
        if let Err(e) = self.bind(gpio) {
            error!("ledc: GPIO{} output config failed: {}", gpio, e);
        }
    }

    fn write_level(&mut self, gpio: i32, level: u8) {
        self.set_duty(gpio, level);
    }

    fn write_binary(&mut self, gpio: i32, high: bool) {
        self.set_duty(gpio, if high { u8::MAX } else { 0 });
    }
}
