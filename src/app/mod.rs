//! Application boundary: the port traits the light model is written
//! against.

pub mod ports;
