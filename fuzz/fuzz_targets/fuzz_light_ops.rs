//! Fuzz target: arbitrary `RgbLight` operation sequences
//!
//! Interprets each input byte as one operation and asserts that stepping
//! never leaves `{0} ∪ [floor, 255]`, that off/on never loses the stored
//! colour, and that the light is lit after every lighting operation.
//!
//! cargo fuzz run fuzz_light_ops

#![no_main]

use libfuzzer_sys::fuzz_target;
use rgb_light::adapters::sim::SimChannels;
use rgb_light::adapters::time::VirtualClock;
use rgb_light::{LightState, RgbLight};

fuzz_target!(|data: &[u8]| {
    let mut light = RgbLight::new(SimChannels::new(), VirtualClock::new(), 0, 1, 2);
    let floor = light.config().brightness_floor;

    for &byte in data {
        let before = light.colour();
        match byte % 8 {
            0 => light.increase_brightness(),
            1 => light.decrease_brightness(),
            2 => light.turn_on(),
            3 => light.turn_off(),
            4 => light.set_colour_index(byte >> 3),
            5 => light.strobe_once(),
            6 => light.cycle_rgb_once(),
            _ => {
                let v = byte >> 3;
                light.set_colour(v.wrapping_mul(8), v, 255 - v);
            }
        }

        if matches!(byte % 8, 0 | 1) {
            for (old, new) in [
                (before.0, light.colour().0),
                (before.1, light.colour().1),
                (before.2, light.colour().2),
            ] {
                assert_eq!(old == 0, new == 0, "stepping changed a channel's on/off");
                assert!(new == 0 || new >= floor.min(old), "stepped below floor");
            }
        }
        if byte % 8 == 3 {
            assert_eq!(light.colour(), before, "turn_off changed stored colour");
            assert_eq!(light.state(), LightState::Dark);
        }
    }
});
