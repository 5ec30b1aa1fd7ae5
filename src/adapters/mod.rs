//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter | Implements  | Connects to                          |
//! |---------|-------------|--------------------------------------|
//! | `ledc`  | ChannelPort | ESP32 LEDC PWM, keyed by GPIO number |
//! | `pwm`   | ChannelPort | Any embedded-hal `SetDutyCycle` trio |
//! | `sim`   | ChannelPort | In-memory channel bank (host)        |
//! | `time`  | DelayNs     | FreeRTOS / std sleep, virtual clock  |

pub mod ledc;
pub mod pwm;
pub mod sim;
pub mod time;
