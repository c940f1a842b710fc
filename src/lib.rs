//! This is a platform-agnostic Rust driver for the TMP117 high-accuracy
//! temperature sensor based on the [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//!
//! For further details of the device architecture and operation, please refer
//! to the official [`Datasheet`].
//!
//! [`Datasheet`]: https://www.ti.com/lit/gpn/tmp117

#![doc(html_root_url = "https://docs.rs/tmp117/latest")]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

mod registers;
pub use registers::*;

mod temperature;
pub use temperature::*;

mod status;
pub(crate) use status::StatusTracker;

#[cfg(feature = "async")]
pub mod asynchronous;

pub mod blocking;

/// Contents of the device ID register of a TMP117.
pub const DEVICE_ID: u16 = 0x0117;

/// ADD0 pin logic level representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Add0 {
    /// ADD0 tied to GND (default).
    Gnd,
    /// ADD0 tied to V+.
    Vplus,
    /// ADD0 tied to SDA.
    Sda,
    /// ADD0 tied to SCL.
    Scl,
}

impl Default for Add0 {
    fn default() -> Self {
        Self::Gnd
    }
}

impl From<Add0> for u8 {
    fn from(connection: Add0) -> Self {
        match connection {
            Add0::Gnd => 0b100_1000,
            Add0::Vplus => 0b100_1001,
            Add0::Sda => 0b100_1010,
            Add0::Scl => 0b100_1011,
        }
    }
}

/// State of the high and low alert flags.
///
/// In alert mode both flags are cleared by the read that produced this
/// value. In therm mode they follow the comparator and only clear once the
/// temperature is back inside the limits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertStatus {
    /// Temperature rose above the high limit.
    pub high_alert: bool,

    /// Temperature fell below the low limit.
    pub low_alert: bool,
}

impl core::ops::BitOr for AlertStatus {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            high_alert: self.high_alert || rhs.high_alert,
            low_alert: self.low_alert || rhs.low_alert,
        }
    }
}
