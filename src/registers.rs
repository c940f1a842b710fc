#![allow(missing_docs)]
use bilge::prelude::*;

use crate::AlertStatus;

/// Register addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Temperature result register address.
    Temperature,

    /// Configuration register address.
    Configuration,

    /// Temperature high limit register address.
    HighLimit,

    /// Temperature low limit register address.
    LowLimit,

    /// EEPROM unlock register address.
    EepromUnlock,

    /// General purpose EEPROM word 1.
    Eeprom1,

    /// General purpose EEPROM word 2.
    Eeprom2,

    /// Temperature offset register address.
    TemperatureOffset,

    /// General purpose EEPROM word 3.
    Eeprom3,

    /// Device ID register address.
    DeviceId,
}

impl Register {
    /// Whether a write to this register programs EEPROM while the EEPROM
    /// is unlocked.
    #[must_use]
    pub fn is_eeprom_backed(self) -> bool {
        matches!(
            self,
            Self::Configuration
                | Self::HighLimit
                | Self::LowLimit
                | Self::Eeprom1
                | Self::Eeprom2
                | Self::TemperatureOffset
                | Self::Eeprom3
        )
    }

    /// Bus frame writing `value` to this register.
    pub(crate) fn frame(self, value: [u8; 2]) -> [u8; 3] {
        [self.into(), value[0], value[1]]
    }
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        match reg {
            Register::Temperature => 0x00,
            Register::Configuration => 0x01,
            Register::HighLimit => 0x02,
            Register::LowLimit => 0x03,
            Register::EepromUnlock => 0x04,
            Register::Eeprom1 => 0x05,
            Register::Eeprom2 => 0x06,
            Register::TemperatureOffset => 0x07,
            Register::Eeprom3 => 0x08,
            Register::DeviceId => 0x0f,
        }
    }
}

/// General purpose EEPROM words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EepromSlot {
    Eeprom1,
    Eeprom2,
    Eeprom3,
}

impl From<EepromSlot> for Register {
    fn from(slot: EepromSlot) -> Self {
        match slot {
            EepromSlot::Eeprom1 => Register::Eeprom1,
            EepromSlot::Eeprom2 => Register::Eeprom2,
            EepromSlot::Eeprom3 => Register::Eeprom3,
        }
    }
}

/// Configuration register.
///
/// The flag bits (high_alert, low_alert, data_ready, eeprom_busy) are read
/// only; the device ignores whatever is written to them. Reading this
/// register clears data_ready and, in alert mode, both alert flags.
#[bitsize(16)]
#[derive(Clone, Copy, DebugBits, FromBits, PartialEq)]
pub struct Configuration {
    reserved0: bool,

    /// Soft reset, self clearing.
    pub soft_reset: bool,

    /// ALERT pin function (the data-ready interrupt enable).
    pub alert_pin_select: AlertPinSelect,

    /// ALERT pin polarity.
    pub polarity: Polarity,

    /// Alert or therm mode.
    pub alert_mode: AlertMode,

    /// Conversion averaging.
    pub averaging: Averaging,

    /// Conversion cycle.
    pub conversion_cycle: ConversionCycle,

    /// Conversion mode.
    pub mode: ConversionMode,

    /// EEPROM busy flag.
    pub eeprom_busy: bool,

    /// Data ready flag.
    pub data_ready: bool,

    /// Low alert flag.
    pub low_alert: bool,

    /// High alert flag.
    pub high_alert: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::from(0x0220)
    }
}

impl Configuration {
    /// Configure soft reset.
    #[must_use]
    pub fn with_soft_reset(mut self, reset: bool) -> Self {
        self.set_soft_reset(reset);
        self
    }

    /// Configure ALERT pin function.
    #[must_use]
    pub fn with_alert_pin_select(mut self, select: AlertPinSelect) -> Self {
        self.set_alert_pin_select(select);
        self
    }

    /// Configure ALERT pin polarity.
    #[must_use]
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.set_polarity(polarity);
        self
    }

    /// Configure alert mode.
    #[must_use]
    pub fn with_alert_mode(mut self, mode: AlertMode) -> Self {
        self.set_alert_mode(mode);
        self
    }

    /// Configure averaging.
    #[must_use]
    pub fn with_averaging(mut self, averaging: Averaging) -> Self {
        self.set_averaging(averaging);
        self
    }

    /// Configure conversion cycle.
    #[must_use]
    pub fn with_conversion_cycle(mut self, cycle: ConversionCycle) -> Self {
        self.set_conversion_cycle(cycle);
        self
    }

    /// Configure conversion mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ConversionMode) -> Self {
        self.set_mode(mode);
        self
    }

    /// High and low alert flags carried by this register value.
    #[must_use]
    pub fn alert_status(&self) -> AlertStatus {
        AlertStatus {
            high_alert: self.high_alert(),
            low_alert: self.low_alert(),
        }
    }

    /// Minimum time between conversions for the configured cycle and
    /// averaging, in microseconds.
    #[must_use]
    pub fn cycle_time_us(&self) -> u32 {
        self.conversion_cycle().cycle_time_us(self.averaging())
    }
}

/// EEPROM unlock register.
#[bitsize(16)]
#[derive(Clone, Copy, DebugBits, FromBits, PartialEq)]
pub struct EepromUnlock {
    reserved0_13: u14,

    /// Mirror of the configuration register EEPROM busy flag.
    pub busy: bool,

    /// Register writes are programmed into EEPROM.
    pub unlocked: bool,
}

impl EepromUnlock {
    /// Register value that sets or clears the unlock bit.
    #[must_use]
    pub fn with_unlocked(unlocked: bool) -> Self {
        let mut reg = Self::from(0);
        reg.set_unlocked(unlocked);
        reg
    }
}

/// Conversion mode.
#[bitsize(2)]
#[derive(Debug, Clone, Copy, FromBits, PartialEq, Eq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionMode {
    /// Continuous conversion at the configured cycle time (default).
    Continuous = 0b00,

    /// Shutdown all device circuitry other than the serial interface.
    Shutdown = 0b01,

    /// Same as `Continuous`. The device reads it back as `Continuous`.
    ContinuousAlias = 0b10,

    /// Perform a single conversion, then return to shutdown.
    OneShot = 0b11,
}

impl ConversionMode {
    /// Whether the device free-runs in this mode.
    #[must_use]
    pub fn is_continuous(self) -> bool {
        matches!(self, Self::Continuous | Self::ContinuousAlias)
    }
}

/// Conversion cycle. Variants are named after the cycle time without
/// averaging; see [`ConversionCycle::cycle_time_us`] for the effective time.
#[bitsize(3)]
#[derive(Debug, Clone, Copy, FromBits, PartialEq, Eq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionCycle {
    Ms15_5,
    Ms125,
    Ms250,
    Ms500,
    Ms1000,
    Ms4000,
    Ms8000,
    Ms16000,
}

impl ConversionCycle {
    /// Minimum time between conversions with the given averaging, in
    /// microseconds.
    ///
    /// | CONV | AVG=00  | AVG=01 | AVG=10 | AVG=11 |
    /// |------|---------|--------|--------|--------|
    /// | 000  | 15.5 ms | 125 ms | 500 ms | 1 s    |
    /// | 001  | 125 ms  | 125 ms | 500 ms | 1 s    |
    /// | 010  | 250 ms  | 250 ms | 500 ms | 1 s    |
    /// | 011  | 500 ms  | 500 ms | 500 ms | 1 s    |
    /// | 100  | 1 s     | 1 s    | 1 s    | 1 s    |
    /// | 101  | 4 s     | 4 s    | 4 s    | 4 s    |
    /// | 110  | 8 s     | 8 s    | 8 s    | 8 s    |
    /// | 111  | 16 s    | 16 s   | 16 s   | 16 s   |
    #[must_use]
    pub fn cycle_time_us(self, averaging: Averaging) -> u32 {
        let base = match self {
            Self::Ms15_5 => 15_500,
            Self::Ms125 => 125_000,
            Self::Ms250 => 250_000,
            Self::Ms500 => 500_000,
            Self::Ms1000 => 1_000_000,
            Self::Ms4000 => 4_000_000,
            Self::Ms8000 => 8_000_000,
            Self::Ms16000 => 16_000_000,
        };

        base.max(averaging.conversion_time_us())
    }
}

/// Conversion averaging. The average is accumulated, not running.
#[bitsize(2)]
#[derive(Debug, Clone, Copy, FromBits, PartialEq, Eq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Averaging {
    /// No averaging
    NoAverage,

    /// 8 averaged conversions (default).
    Average8,

    /// 32 averaged conversions.
    Average32,

    /// 64 averaged conversions.
    Average64,
}

impl Averaging {
    /// Time taken by one (averaged) conversion, in microseconds.
    #[must_use]
    pub fn conversion_time_us(self) -> u32 {
        match self {
            Self::NoAverage => 15_500,
            Self::Average8 => 125_000,
            Self::Average32 => 500_000,
            Self::Average64 => 1_000_000,
        }
    }
}

/// Alert mode.
#[bitsize(1)]
#[derive(Debug, Clone, Copy, FromBits, PartialEq, Eq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertMode {
    /// Alert flags latch and clear when the configuration register is read.
    Alert,

    /// Alert flags follow the comparator, using the low limit as hysteresis.
    Therm,
}

/// ALERT pin polarity.
#[bitsize(1)]
#[derive(Debug, Clone, Copy, FromBits, PartialEq, Eq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Active low (default).
    ActiveLow,

    /// Active high.
    ActiveHigh,
}

/// ALERT pin function.
#[bitsize(1)]
#[derive(Debug, Clone, Copy, FromBits, PartialEq, Eq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertPinSelect {
    /// ALERT pin reflects the alert flags (default).
    Alert,

    /// ALERT pin reflects the data ready flag.
    DataReady,
}
