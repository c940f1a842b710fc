//! Conversion between raw register contents and degrees Celsius.
//!
//! The temperature result, limit and offset registers all hold a two's
//! complement value with a resolution of 7.8125 m°C per bit.
//!
//! Temperatures are `f32` rather than `f64`, the type behind
//! `embedded-sensors-hal`'s `DegreesCelsius`. Every raw value times 2^-7
//! fits in the 24-bit significand, so decoding is exact and encoding a
//! decoded value gives back the same raw value.

use num_traits::float::FloatCore;

/// Degrees Celsius represented by one LSB.
pub const CELSIUS_PER_BIT: f32 = 0.007_812_5;

/// Highest value accepted for limits and offset.
pub const TEMPERATURE_MAX: f32 = 255.992_187_5;

/// Lowest value accepted for limits and offset.
pub const TEMPERATURE_MIN: f32 = -256.0;

/// A physical value outside of [`TEMPERATURE_MIN`]..=[`TEMPERATURE_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange;

/// Convert a raw register value to degrees Celsius as `f32`. Exact for
/// every `raw`, so nothing is gained from `f64`.
#[must_use]
pub fn decode_temperature(raw: i16) -> f32 {
    f32::from(raw) * CELSIUS_PER_BIT
}

/// Convert degrees Celsius, given as `f32`, to a raw register value.
///
/// Rounds half away from zero and saturates at the `i16` bounds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode_temperature(celsius: f32) -> i16 {
    FloatCore::round(celsius / CELSIUS_PER_BIT) as i16
}

/// Range-check `celsius` and convert it to a raw register value.
///
/// # Errors
///
/// [`OutOfRange`] when `celsius` is NaN or outside of
/// [`TEMPERATURE_MIN`]..=[`TEMPERATURE_MAX`].
pub fn encode_limit(celsius: f32) -> Result<i16, OutOfRange> {
    if (TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&celsius) {
        Ok(encode_temperature(celsius))
    } else {
        Err(OutOfRange)
    }
}
