//! Tmp117 Blocking API

#[cfg(feature = "embedded-sensors-hal")]
use embedded_sensors_hal::sensor;
#[cfg(feature = "embedded-sensors-hal")]
use embedded_sensors_hal::temperature::{DegreesCelsius, TemperatureSensor};

use super::{
    decode_temperature, encode_limit, Add0, AlertMode, AlertPinSelect, AlertStatus, Averaging, Configuration,
    ConversionCycle, ConversionMode, EepromSlot, EepromUnlock, OutOfRange, Polarity, Register, StatusTracker,
    DEVICE_ID,
};

/// TMP117 blocking device driver
pub struct Tmp117<I2C: embedded_hal::i2c::I2c, DELAY: embedded_hal::delay::DelayNs> {
    /// The concrete I2C bus implementation
    i2c: I2C,

    /// The concrete [`embedded_hal::delay::DelayNs`] implementation
    delay: DELAY,

    /// The I2C address.
    pub(crate) addr: u8,

    /// Flags seen by configuration register reads.
    status: StatusTracker,

    /// Writes to EEPROM-backed registers are being programmed.
    eeprom_unlocked: bool,
}

impl<I2C: embedded_hal::i2c::I2c, DELAY: embedded_hal::delay::DelayNs> Tmp117<I2C, DELAY> {
    const RESET_TIME_MS: u32 = 2;
    const SETTLE_TIME_MS: u32 = 1000;
    const POLL_INTERVAL_MS: u32 = 1;
    const EEPROM_POLL_ATTEMPTS: u32 = 10;
    const DATA_READY_POLL_ATTEMPTS: u32 = 10;

    /// Create a new TMP117 instance after checking the device ID.
    ///
    /// # Errors
    ///
    /// `Error::DeviceNotFound` when the device ID does not match a TMP117,
    /// `Error::Bus` when the I2C transaction fails
    pub fn new_blocking(i2c: I2C, delay: DELAY, add0: Add0) -> Result<Self, Error<I2C::Error>> {
        let mut tmp = Self {
            i2c,
            delay,
            addr: add0.into(),
            status: StatusTracker::default(),
            eeprom_unlocked: false,
        };

        let id = u16::from_be_bytes(tmp.read(Register::DeviceId)?);
        if id != DEVICE_ID {
            warn!("no TMP117 at {:#x}: device ID {:#x}", tmp.addr, id);
            return Err(Error::DeviceNotFound(id));
        }

        debug!("TMP117 found at {:#x}", tmp.addr);
        Ok(tmp)
    }

    /// Create a new TMP117 instance with ADD0 tied to GND, resulting in an
    /// instance responding to address `0x48`.
    ///
    /// # Errors
    ///
    /// See [`Tmp117::new_blocking`]
    pub fn new_blocking_with_add0_gnd(i2c: I2C, delay: DELAY) -> Result<Self, Error<I2C::Error>> {
        Self::new_blocking(i2c, delay, Add0::Gnd)
    }

    /// Create a new TMP117 instance with ADD0 tied to V+, resulting in an
    /// instance responding to address `0x49`.
    ///
    /// # Errors
    ///
    /// See [`Tmp117::new_blocking`]
    pub fn new_blocking_with_add0_vplus(i2c: I2C, delay: DELAY) -> Result<Self, Error<I2C::Error>> {
        Self::new_blocking(i2c, delay, Add0::Vplus)
    }

    /// Create a new TMP117 instance with ADD0 tied to SDA, resulting in an
    /// instance responding to address `0x4a`.
    ///
    /// # Errors
    ///
    /// See [`Tmp117::new_blocking`]
    pub fn new_blocking_with_add0_sda(i2c: I2C, delay: DELAY) -> Result<Self, Error<I2C::Error>> {
        Self::new_blocking(i2c, delay, Add0::Sda)
    }

    /// Create a new TMP117 instance with ADD0 tied to SCL, resulting in an
    /// instance responding to address `0x4b`.
    ///
    /// # Errors
    ///
    /// See [`Tmp117::new_blocking`]
    pub fn new_blocking_with_add0_scl(i2c: I2C, delay: DELAY) -> Result<Self, Error<I2C::Error>> {
        Self::new_blocking(i2c, delay, Add0::Scl)
    }

    /// Destroy the driver instance, return the I2C bus instance.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Read configuration register. This clears the data ready flag and, in
    /// alert mode, the alert flags on the device.
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn configuration(&mut self) -> Result<Configuration, Error<I2C::Error>> {
        let data = self.read(Register::Configuration)?;
        Ok(Configuration::from(u16::from_be_bytes(data)))
    }

    /// Set configuration register
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails, `Error::EepromBusy` when
    /// the EEPROM is unlocked and stays busy
    pub fn set_configuration(&mut self, config: Configuration) -> Result<(), Error<I2C::Error>> {
        let value: u16 = config.into();
        self.write(Register::Configuration, value.to_be_bytes())
    }

    /// Read temperature register
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn temperature(&mut self) -> Result<f32, Error<I2C::Error>> {
        self.read_celsius(Register::Temperature)
    }

    /// Wait for the conversion cycle dictated by the [`Configuration`]
    /// register, then read the temperature.
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn wait_for_temperature(&mut self) -> Result<f32, Error<I2C::Error>> {
        let config = self.configuration()?;
        self.delay.delay_us(config.cycle_time_us());
        self.temperature()
    }

    /// Trigger a one-shot conversion and return its result once the data
    /// ready flag is set.
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails, `Error::NotReady` when
    /// the conversion does not complete in time
    pub fn measure_one_shot(&mut self) -> Result<f32, Error<I2C::Error>> {
        let config = self.configuration()?;
        self.set_configuration(config.with_mode(ConversionMode::OneShot))?;
        self.delay.delay_us(config.averaging().conversion_time_us());

        for _ in 0..Self::DATA_READY_POLL_ATTEMPTS {
            let config = self.configuration()?;
            if self.status.poll(&config) {
                return self.temperature();
            }
            self.delay.delay_ms(Self::POLL_INTERVAL_MS);
        }

        Err(Error::NotReady)
    }

    /// Read the high and low alert flags and latch the data ready flag.
    ///
    /// In alert mode this read clears both alert flags on the device. Flags
    /// cleared while [`Tmp117::measure_one_shot`] polled for data ready are
    /// reported here as well.
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn alert_status(&mut self) -> Result<AlertStatus, Error<I2C::Error>> {
        let config = self.configuration()?;
        Ok(self.status.report(&config))
    }

    /// Data ready flag as seen by the last [`Tmp117::alert_status`] call or
    /// [`Tmp117::measure_one_shot`] poll.
    pub fn data_ready(&self) -> bool {
        self.status.data_ready()
    }

    /// Read temperature high limit register
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn high_limit(&mut self) -> Result<f32, Error<I2C::Error>> {
        self.read_celsius(Register::HighLimit)
    }

    /// Set temperature high limit register
    ///
    /// # Errors
    ///
    /// `Error::OutOfRange` when `limit` is outside of -256..=255.9921875 ℃,
    /// `Error::Bus` when the I2C transaction fails
    pub fn set_high_limit(&mut self, limit: f32) -> Result<(), Error<I2C::Error>> {
        self.write_celsius(Register::HighLimit, limit)
    }

    /// Read temperature low limit register
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn low_limit(&mut self) -> Result<f32, Error<I2C::Error>> {
        self.read_celsius(Register::LowLimit)
    }

    /// Set temperature low limit register
    ///
    /// # Errors
    ///
    /// `Error::OutOfRange` when `limit` is outside of -256..=255.9921875 ℃,
    /// `Error::Bus` when the I2C transaction fails
    pub fn set_low_limit(&mut self, limit: f32) -> Result<(), Error<I2C::Error>> {
        self.write_celsius(Register::LowLimit, limit)
    }

    /// Read temperature offset register
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn temperature_offset(&mut self) -> Result<f32, Error<I2C::Error>> {
        self.read_celsius(Register::TemperatureOffset)
    }

    /// Set temperature offset register. The device adds the offset to every
    /// conversion result.
    ///
    /// # Errors
    ///
    /// `Error::OutOfRange` when `offset` is outside of -256..=255.9921875 ℃,
    /// `Error::Bus` when the I2C transaction fails
    pub fn set_temperature_offset(&mut self, offset: f32) -> Result<(), Error<I2C::Error>> {
        self.write_celsius(Register::TemperatureOffset, offset)
    }

    /// Read conversion mode
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn mode(&mut self) -> Result<ConversionMode, Error<I2C::Error>> {
        Ok(self.configuration()?.mode())
    }

    /// Set conversion mode
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn set_mode(&mut self, mode: ConversionMode) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_mode(mode))
    }

    /// Read conversion averaging
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn averaging(&mut self) -> Result<Averaging, Error<I2C::Error>> {
        Ok(self.configuration()?.averaging())
    }

    /// Set conversion averaging
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn set_averaging(&mut self, averaging: Averaging) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_averaging(averaging))
    }

    /// Read conversion cycle
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn conversion_cycle(&mut self) -> Result<ConversionCycle, Error<I2C::Error>> {
        Ok(self.configuration()?.conversion_cycle())
    }

    /// Set conversion cycle
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn set_conversion_cycle(&mut self, cycle: ConversionCycle) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_conversion_cycle(cycle))
    }

    /// Select alert or therm mode
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn set_alert_mode(&mut self, mode: AlertMode) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_alert_mode(mode))
    }

    /// Set ALERT pin polarity
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn set_polarity(&mut self, polarity: Polarity) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_polarity(polarity))
    }

    /// Select what the ALERT pin reports
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn set_alert_pin_select(&mut self, select: AlertPinSelect) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_alert_pin_select(select))
    }

    /// Trigger a soft reset and wait for it to complete. All registers
    /// reload their power-on values from EEPROM.
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn reset(&mut self) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_soft_reset(true))?;
        self.delay.delay_ms(Self::RESET_TIME_MS);

        self.status.clear();
        self.eeprom_unlocked = false;
        debug!("soft reset");
        Ok(())
    }

    /// Wait long enough for the first conversion with default settings to
    /// complete, then clear the latched data ready flag.
    pub fn initialize(&mut self) {
        self.delay.delay_ms(Self::SETTLE_TIME_MS);
        self.status.clear_data_ready();
    }

    /// Read the EEPROM busy flag
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn eeprom_busy(&mut self) -> Result<bool, Error<I2C::Error>> {
        let data = self.read(Register::EepromUnlock)?;
        Ok(EepromUnlock::from(u16::from_be_bytes(data)).busy())
    }

    /// Unlock the EEPROM. Until [`Tmp117::lock_eeprom`] is called, writes
    /// to configuration, limit, offset and EEPROM registers are programmed
    /// into EEPROM and survive a reset.
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn unlock_eeprom(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_eeprom_unlock(true)
    }

    /// Lock the EEPROM
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn lock_eeprom(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_eeprom_unlock(false)
    }

    /// Read a general purpose EEPROM word
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub fn eeprom(&mut self, slot: EepromSlot) -> Result<u16, Error<I2C::Error>> {
        Ok(u16::from_be_bytes(self.read(slot.into())?))
    }

    /// Program a general purpose EEPROM word. The EEPROM is left in the lock
    /// state it was found in, also when programming fails.
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails, `Error::EepromBusy` when
    /// programming does not complete in time
    pub fn program_eeprom(&mut self, slot: EepromSlot, value: u16) -> Result<(), Error<I2C::Error>> {
        let was_unlocked = self.eeprom_unlocked;
        if !was_unlocked {
            self.unlock_eeprom()?;
        }

        let result = self
            .write(slot.into(), value.to_be_bytes())
            .and_then(|()| self.wait_eeprom_ready());

        if !was_unlocked {
            let locked = self.lock_eeprom();
            return result.and(locked);
        }
        result
    }

    fn modify_configuration<F>(&mut self, f: F) -> Result<(), Error<I2C::Error>>
    where
        F: FnOnce(Configuration) -> Configuration,
    {
        let config = self.configuration()?;
        self.set_configuration(f(config))
    }

    fn write_eeprom_unlock(&mut self, unlocked: bool) -> Result<(), Error<I2C::Error>> {
        let value: u16 = EepromUnlock::with_unlocked(unlocked).into();
        self.write(Register::EepromUnlock, value.to_be_bytes())?;
        self.eeprom_unlocked = unlocked;
        debug!("EEPROM unlocked: {}", unlocked);
        Ok(())
    }

    fn wait_eeprom_ready(&mut self) -> Result<(), Error<I2C::Error>> {
        for _ in 0..Self::EEPROM_POLL_ATTEMPTS {
            if !self.eeprom_busy()? {
                return Ok(());
            }
            self.delay.delay_ms(Self::POLL_INTERVAL_MS);
        }

        warn!("EEPROM still busy after {} polls", Self::EEPROM_POLL_ATTEMPTS);
        Err(Error::EepromBusy)
    }

    fn read_celsius(&mut self, reg: Register) -> Result<f32, Error<I2C::Error>> {
        let raw = self.read(reg)?;
        Ok(decode_temperature(i16::from_be_bytes(raw)))
    }

    fn write_celsius(&mut self, reg: Register, celsius: f32) -> Result<(), Error<I2C::Error>> {
        let raw = encode_limit(celsius)?;
        self.write(reg, raw.to_be_bytes())
    }

    fn read(&mut self, reg: Register) -> Result<[u8; 2], Error<I2C::Error>> {
        let mut bytes = [0; 2];
        self.i2c
            .write_read(self.addr, &[reg.into()], &mut bytes)
            .map_err(Error::Bus)?;
        trace!("read {:#x}: {:#x}", u8::from(reg), u16::from_be_bytes(bytes));
        Ok(bytes)
    }

    fn write(&mut self, reg: Register, value: [u8; 2]) -> Result<(), Error<I2C::Error>> {
        if self.eeprom_unlocked && reg.is_eeprom_backed() {
            self.wait_eeprom_ready()?;
        }

        let data = reg.frame(value);
        trace!("write {:#x}: {:#x}", data[0], u16::from_be_bytes(value));
        self.i2c.write(self.addr, &data).map_err(Error::Bus)
    }
}

/// Tmp117 Errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E: embedded_hal::i2c::Error> {
    /// I2C Bus Error
    Bus(E),
    /// Device ID register held the contained value instead of `0x0117`
    DeviceNotFound(u16),
    /// Temperature argument outside of the representable range
    OutOfRange,
    /// EEPROM stayed busy
    EepromBusy,
    /// One-shot conversion did not complete
    NotReady,
}

impl<E: embedded_hal::i2c::Error> From<OutOfRange> for Error<E> {
    fn from(_: OutOfRange) -> Self {
        Self::OutOfRange
    }
}

#[cfg(feature = "embedded-sensors-hal")]
impl<E: embedded_hal::i2c::Error> sensor::Error for Error<E> {
    fn kind(&self) -> sensor::ErrorKind {
        match *self {
            Self::Bus(_) | Self::DeviceNotFound(_) | Self::EepromBusy | Self::NotReady => sensor::ErrorKind::Peripheral,
            Self::OutOfRange => sensor::ErrorKind::InvalidInput,
        }
    }
}

#[cfg(feature = "embedded-sensors-hal")]
impl<I2C: embedded_hal::i2c::I2c, DELAY: embedded_hal::delay::DelayNs> sensor::ErrorType for Tmp117<I2C, DELAY> {
    type Error = Error<I2C::Error>;
}

#[cfg(feature = "embedded-sensors-hal")]
impl<I2C: embedded_hal::i2c::I2c, DELAY: embedded_hal::delay::DelayNs> TemperatureSensor for Tmp117<I2C, DELAY> {
    fn temperature(&mut self) -> Result<DegreesCelsius, Self::Error> {
        Tmp117::temperature(self)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    use super::*;

    fn read_device_id(addr: u8) -> Transaction {
        Transaction::write_read(addr, vec![0x0f], vec![0x01, 0x17])
    }

    fn open(transactions: &[Transaction]) -> Tmp117<Mock, NoopDelay> {
        let mut expectations = vec![read_device_id(0x48)];
        expectations.extend_from_slice(transactions);

        let mock = Mock::new(&expectations);
        let result = Tmp117::new_blocking_with_add0_gnd(mock, NoopDelay::new());
        assert!(result.is_ok());
        result.unwrap()
    }

    fn close(tmp: Tmp117<Mock, NoopDelay>) {
        let mut mock = tmp.destroy();
        mock.done();
    }

    #[test]
    fn handle_add0_pin_accordingly() {
        let mock = Mock::new(&[read_device_id(0x48)]);
        let tmp = Tmp117::new_blocking_with_add0_gnd(mock, NoopDelay::new()).unwrap();
        assert_eq!(tmp.addr, 0x48);
        close(tmp);

        let mock = Mock::new(&[read_device_id(0x49)]);
        let tmp = Tmp117::new_blocking_with_add0_vplus(mock, NoopDelay::new()).unwrap();
        assert_eq!(tmp.addr, 0x49);
        close(tmp);

        let mock = Mock::new(&[read_device_id(0x4a)]);
        let tmp = Tmp117::new_blocking_with_add0_sda(mock, NoopDelay::new()).unwrap();
        assert_eq!(tmp.addr, 0x4a);
        close(tmp);

        let mock = Mock::new(&[read_device_id(0x4b)]);
        let tmp = Tmp117::new_blocking_with_add0_scl(mock, NoopDelay::new()).unwrap();
        assert_eq!(tmp.addr, 0x4b);
        close(tmp);
    }

    #[test]
    fn reject_unknown_device_id() {
        let expectations = [Transaction::write_read(0x48, vec![0x0f], vec![0x01, 0x18])];
        let mut mock = Mock::new(&expectations);

        let result = Tmp117::new_blocking_with_add0_gnd(mock.clone(), NoopDelay::new());
        assert!(matches!(result, Err(Error::DeviceNotFound(0x0118))));

        mock.done();
    }

    #[test]
    fn propagate_bus_errors() {
        let expectations = [Transaction::write_read(0x48, vec![0x0f], vec![0x00, 0x00]).with_error(ErrorKind::Other)];
        let mut mock = Mock::new(&expectations);

        let result = Tmp117::new_blocking_with_add0_gnd(mock.clone(), NoopDelay::new());
        assert!(matches!(result, Err(Error::Bus(ErrorKind::Other))));

        mock.done();
    }

    #[test]
    fn read_temperature_default_address() {
        let readings = [
            ([0x7f, 0xff], 255.992_187_5),
            ([0x0c, 0x80], 25.0),
            ([0x01, 0x90], 3.125),
            ([0x00, 0x01], 0.007_812_5),
            ([0x00, 0x00], 0.0),
            ([0xff, 0x80], -1.0),
            ([0xf3, 0x80], -25.0),
            ([0x80, 0x00], -256.0),
        ];

        for (raw, celsius) in readings {
            let mut tmp = open(&[Transaction::write_read(0x48, vec![0x00], raw.to_vec())]);
            let result = tmp.temperature();
            assert!(result.is_ok());
            assert_approx_eq!(result.unwrap(), celsius, 1e-6);
            close(tmp);
        }
    }

    #[test]
    fn read_write_limits() {
        let mut tmp = open(&[
            Transaction::write(0x48, vec![0x02, 0x7f, 0x80]),
            Transaction::write_read(0x48, vec![0x02], vec![0x7f, 0x80]),
            Transaction::write(0x48, vec![0x03, 0x05, 0x00]),
            Transaction::write_read(0x48, vec![0x03], vec![0x05, 0x00]),
        ]);

        assert!(tmp.set_high_limit(255.0).is_ok());
        assert_approx_eq!(tmp.high_limit().unwrap(), 255.0, 0.007_812_5);

        assert!(tmp.set_low_limit(10.0).is_ok());
        assert_approx_eq!(tmp.low_limit().unwrap(), 10.0, 0.007_812_5);

        close(tmp);
    }

    #[test]
    fn reject_out_of_range_limits_without_bus_traffic() {
        let mut tmp = open(&[]);

        assert!(matches!(tmp.set_high_limit(256.0), Err(Error::OutOfRange)));
        assert!(matches!(tmp.set_high_limit(-256.1), Err(Error::OutOfRange)));
        assert!(matches!(tmp.set_low_limit(f32::NAN), Err(Error::OutOfRange)));
        assert!(matches!(tmp.set_temperature_offset(300.0), Err(Error::OutOfRange)));

        close(tmp);
    }

    #[test]
    fn read_write_temperature_offset() {
        let mut tmp = open(&[
            Transaction::write(0x48, vec![0x07, 0xff, 0x40]),
            Transaction::write_read(0x48, vec![0x07], vec![0xff, 0x40]),
        ]);

        assert!(tmp.set_temperature_offset(-1.5).is_ok());
        assert_approx_eq!(tmp.temperature_offset().unwrap(), -1.5, 1e-6);

        close(tmp);
    }

    #[test]
    fn read_write_configuration_register() {
        let mut tmp = open(&[
            Transaction::write_read(0x48, vec![0x01], vec![0x02, 0x20]),
            Transaction::write(0x48, vec![0x01, 0x06, 0xdc]),
        ]);

        let cfg = tmp.configuration().unwrap();
        assert_eq!(cfg, Configuration::default());

        let cfg = cfg
            .with_mode(ConversionMode::Shutdown)
            .with_conversion_cycle(ConversionCycle::Ms4000)
            .with_averaging(Averaging::Average32)
            .with_alert_mode(AlertMode::Therm)
            .with_polarity(Polarity::ActiveHigh)
            .with_alert_pin_select(AlertPinSelect::DataReady);

        assert!(tmp.set_configuration(cfg).is_ok());

        close(tmp);
    }

    #[test]
    fn averaging_leaves_other_fields_untouched() {
        let mut tmp = open(&[
            Transaction::write_read(0x48, vec![0x01], vec![0xee, 0x20]),
            Transaction::write(0x48, vec![0x01, 0xee, 0x60]),
            Transaction::write_read(0x48, vec![0x01], vec![0x0e, 0x60]),
        ]);

        assert!(tmp.set_averaging(Averaging::Average64).is_ok());

        let cfg = tmp.configuration().unwrap();
        assert_eq!(cfg.averaging(), Averaging::Average64);
        assert_eq!(cfg.mode(), ConversionMode::OneShot);
        assert_eq!(cfg.conversion_cycle(), ConversionCycle::Ms1000);

        close(tmp);
    }

    #[test]
    fn read_write_mode_and_cycle() {
        let mut tmp = open(&[
            Transaction::write_read(0x48, vec![0x01], vec![0x02, 0x20]),
            Transaction::write(0x48, vec![0x01, 0x06, 0x20]),
            Transaction::write_read(0x48, vec![0x01], vec![0x06, 0x20]),
            Transaction::write_read(0x48, vec![0x01], vec![0x06, 0x20]),
            Transaction::write(0x48, vec![0x01, 0x04, 0xa0]),
            Transaction::write_read(0x48, vec![0x01], vec![0x04, 0xa0]),
            Transaction::write_read(0x48, vec![0x01], vec![0x04, 0xa0]),
        ]);

        assert!(tmp.set_mode(ConversionMode::Shutdown).is_ok());
        assert_eq!(tmp.mode().unwrap(), ConversionMode::Shutdown);

        assert!(tmp.set_conversion_cycle(ConversionCycle::Ms125).is_ok());
        assert_eq!(tmp.conversion_cycle().unwrap(), ConversionCycle::Ms125);
        assert_eq!(tmp.averaging().unwrap(), Averaging::Average8);

        close(tmp);
    }

    #[test]
    fn decompose_alert_status() {
        let mut tmp = open(&[
            Transaction::write_read(0x48, vec![0x01], vec![0xa2, 0x20]),
            Transaction::write_read(0x48, vec![0x01], vec![0x42, 0x20]),
        ]);

        assert!(!tmp.data_ready());

        let status = tmp.alert_status().unwrap();
        assert_eq!(
            status,
            AlertStatus {
                high_alert: true,
                low_alert: false
            }
        );
        assert!(tmp.data_ready());

        let status = tmp.alert_status().unwrap();
        assert_eq!(
            status,
            AlertStatus {
                high_alert: false,
                low_alert: true
            }
        );
        assert!(!tmp.data_ready());

        close(tmp);
    }

    #[test]
    fn reset_and_initialize() {
        let mut tmp = open(&[
            Transaction::write_read(0x48, vec![0x01], vec![0x22, 0x20]),
            Transaction::write(0x48, vec![0x01, 0x22, 0x22]),
            Transaction::write_read(0x48, vec![0x01], vec![0x22, 0x20]),
        ]);

        assert!(tmp.reset().is_ok());

        assert!(tmp.alert_status().is_ok());
        assert!(tmp.data_ready());

        tmp.initialize();
        assert!(!tmp.data_ready());

        close(tmp);
    }

    #[test]
    fn wait_for_temperature_reads_after_cycle() {
        let mut tmp = open(&[
            Transaction::write_read(0x48, vec![0x01], vec![0x02, 0x20]),
            Transaction::write_read(0x48, vec![0x00], vec![0x0c, 0x80]),
        ]);

        assert_approx_eq!(tmp.wait_for_temperature().unwrap(), 25.0, 1e-6);

        close(tmp);
    }

    #[test]
    fn one_shot_measurement() {
        let mut tmp = open(&[
            Transaction::write_read(0x48, vec![0x01], vec![0x06, 0x20]),
            Transaction::write(0x48, vec![0x01, 0x0e, 0x20]),
            Transaction::write_read(0x48, vec![0x01], vec![0x0e, 0x20]),
            Transaction::write_read(0x48, vec![0x01], vec![0x26, 0x20]),
            Transaction::write_read(0x48, vec![0x00], vec![0x01, 0x90]),
        ]);

        assert_approx_eq!(tmp.measure_one_shot().unwrap(), 3.125, 1e-6);

        close(tmp);
    }

    #[test]
    fn one_shot_measurement_times_out() {
        let mut expectations = vec![
            Transaction::write_read(0x48, vec![0x01], vec![0x06, 0x20]),
            Transaction::write(0x48, vec![0x01, 0x0e, 0x20]),
        ];
        for _ in 0..10 {
            expectations.push(Transaction::write_read(0x48, vec![0x01], vec![0x0e, 0x20]));
        }
        let mut tmp = open(&expectations);

        assert!(matches!(tmp.measure_one_shot(), Err(Error::NotReady)));

        close(tmp);
    }

    #[test]
    fn one_shot_poll_keeps_alert_flags() {
        let mut tmp = open(&[
            Transaction::write_read(0x48, vec![0x01], vec![0x06, 0x20]),
            Transaction::write(0x48, vec![0x01, 0x0e, 0x20]),
            Transaction::write_read(0x48, vec![0x01], vec![0xae, 0x20]),
            Transaction::write_read(0x48, vec![0x00], vec![0x28, 0x80]),
            Transaction::write_read(0x48, vec![0x01], vec![0x0e, 0x20]),
            Transaction::write_read(0x48, vec![0x01], vec![0x0e, 0x20]),
        ]);

        assert_approx_eq!(tmp.measure_one_shot().unwrap(), 81.0, 1e-6);

        let status = tmp.alert_status().unwrap();
        assert!(status.high_alert);
        assert!(!status.low_alert);
        assert!(!tmp.data_ready());

        assert_eq!(tmp.alert_status().unwrap(), AlertStatus::default());

        close(tmp);
    }

    #[test]
    fn program_general_purpose_eeprom() {
        let mut tmp = open(&[
            Transaction::write(0x48, vec![0x04, 0x80, 0x00]),
            Transaction::write_read(0x48, vec![0x04], vec![0x80, 0x00]),
            Transaction::write(0x48, vec![0x05, 0xbe, 0xef]),
            Transaction::write_read(0x48, vec![0x04], vec![0xc0, 0x00]),
            Transaction::write_read(0x48, vec![0x04], vec![0x80, 0x00]),
            Transaction::write(0x48, vec![0x04, 0x00, 0x00]),
            Transaction::write_read(0x48, vec![0x05], vec![0xbe, 0xef]),
        ]);

        assert!(tmp.program_eeprom(EepromSlot::Eeprom1, 0xbeef).is_ok());
        assert_eq!(tmp.eeprom(EepromSlot::Eeprom1).unwrap(), 0xbeef);

        close(tmp);
    }

    #[test]
    fn unlocked_writes_wait_for_eeprom() {
        let mut tmp = open(&[
            Transaction::write(0x48, vec![0x04, 0x80, 0x00]),
            Transaction::write_read(0x48, vec![0x04], vec![0xc0, 0x00]),
            Transaction::write_read(0x48, vec![0x04], vec![0x80, 0x00]),
            Transaction::write(0x48, vec![0x02, 0x0f, 0x00]),
            Transaction::write(0x48, vec![0x04, 0x00, 0x00]),
            Transaction::write(0x48, vec![0x03, 0x05, 0x00]),
        ]);

        assert!(tmp.unlock_eeprom().is_ok());
        assert!(tmp.set_high_limit(30.0).is_ok());
        assert!(tmp.lock_eeprom().is_ok());
        assert!(tmp.set_low_limit(10.0).is_ok());

        close(tmp);
    }

    #[test]
    fn failed_eeprom_program_relocks() {
        let mut tmp = open(&[
            Transaction::write(0x48, vec![0x04, 0x80, 0x00]),
            Transaction::write_read(0x48, vec![0x04], vec![0x80, 0x00]),
            Transaction::write(0x48, vec![0x06, 0x12, 0x34]).with_error(ErrorKind::Other),
            Transaction::write(0x48, vec![0x04, 0x00, 0x00]),
            Transaction::write(0x48, vec![0x03, 0x05, 0x00]),
        ]);

        assert!(matches!(
            tmp.program_eeprom(EepromSlot::Eeprom2, 0x1234),
            Err(Error::Bus(ErrorKind::Other))
        ));
        assert!(!tmp.eeprom_unlocked);
        assert!(tmp.set_low_limit(10.0).is_ok());

        close(tmp);
    }

    #[test]
    fn eeprom_busy_timeout() {
        let mut expectations = vec![Transaction::write(0x48, vec![0x04, 0x80, 0x00])];
        for _ in 0..10 {
            expectations.push(Transaction::write_read(0x48, vec![0x04], vec![0xc0, 0x00]));
        }
        let mut tmp = open(&expectations);

        assert!(tmp.unlock_eeprom().is_ok());
        assert!(matches!(tmp.set_low_limit(10.0), Err(Error::EepromBusy)));

        close(tmp);
    }

    #[cfg(feature = "embedded-sensors-hal")]
    #[test]
    fn sensor_error_kinds() {
        use embedded_sensors_hal::sensor::{Error as _, ErrorKind as SensorErrorKind};

        assert!(matches!(
            Error::Bus(ErrorKind::Other).kind(),
            SensorErrorKind::Peripheral
        ));
        assert!(matches!(
            Error::<ErrorKind>::DeviceNotFound(0x0118).kind(),
            SensorErrorKind::Peripheral
        ));
        assert!(matches!(
            Error::<ErrorKind>::NotReady.kind(),
            SensorErrorKind::Peripheral
        ));
        assert!(matches!(
            Error::<ErrorKind>::OutOfRange.kind(),
            SensorErrorKind::InvalidInput
        ));
    }
}
