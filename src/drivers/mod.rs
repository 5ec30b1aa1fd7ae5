//! The RGB light model, its effects, and peripheral bring-up.

pub mod effects;
pub mod hw_init;
pub mod rgb_light;
