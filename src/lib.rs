#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[cfg(test)]
mod debug_utils;
pub mod record;
pub mod scd40;
pub mod sensirion;

pub use scd40::{Measurement, Scd40};
pub use sensirion::{Error, crc};
