//! Tmp117 Async API

#[cfg(feature = "embedded-sensors-hal-async")]
use embedded_sensors_hal_async::sensor;
#[cfg(feature = "embedded-sensors-hal-async")]
use embedded_sensors_hal_async::temperature::{
    DegreesCelsius, TemperatureSensor, TemperatureThresholdSet, TemperatureThresholdWait,
};

use super::{
    decode_temperature, encode_limit, Add0, AlertMode, AlertPinSelect, AlertStatus, Averaging, Configuration,
    ConversionCycle, ConversionMode, EepromSlot, EepromUnlock, OutOfRange, Polarity, Register, StatusTracker,
    DEVICE_ID,
};

/// TMP117 asynchronous device driver
pub struct Tmp117<I2C: embedded_hal_async::i2c::I2c, DELAY: embedded_hal_async::delay::DelayNs> {
    /// The concrete I2C bus implementation
    i2c: I2C,

    /// The concrete [`embedded_hal_async::delay::DelayNs`] implementation
    delay: DELAY,

    /// The I2C address.
    pub(crate) addr: u8,

    /// A local cache of the sensor configuration.
    config: Configuration,

    /// Flags seen by configuration register reads.
    status: StatusTracker,

    /// Writes to EEPROM-backed registers are being programmed.
    eeprom_unlocked: bool,
}

impl<I2C: embedded_hal_async::i2c::I2c, DELAY: embedded_hal_async::delay::DelayNs> Tmp117<I2C, DELAY> {
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
    pub async fn new_async(i2c: I2C, delay: DELAY, add0: Add0) -> Result<Self, Error<I2C::Error>> {
        let mut tmp = Self {
            i2c,
            delay,
            addr: add0.into(),
            config: Configuration::default(),
            status: StatusTracker::default(),
            eeprom_unlocked: false,
        };

        let id = u16::from_be_bytes(tmp.read(Register::DeviceId).await?);
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
    /// See [`Tmp117::new_async`]
    pub async fn new_async_with_add0_gnd(i2c: I2C, delay: DELAY) -> Result<Self, Error<I2C::Error>> {
        Self::new_async(i2c, delay, Add0::Gnd).await
    }

    /// Create a new TMP117 instance with ADD0 tied to V+, resulting in an
    /// instance responding to address `0x49`.
    ///
    /// # Errors
    ///
    /// See [`Tmp117::new_async`]
    pub async fn new_async_with_add0_vplus(i2c: I2C, delay: DELAY) -> Result<Self, Error<I2C::Error>> {
        Self::new_async(i2c, delay, Add0::Vplus).await
    }

    /// Create a new TMP117 instance with ADD0 tied to SDA, resulting in an
    /// instance responding to address `0x4a`.
    ///
    /// # Errors
    ///
    /// See [`Tmp117::new_async`]
    pub async fn new_async_with_add0_sda(i2c: I2C, delay: DELAY) -> Result<Self, Error<I2C::Error>> {
        Self::new_async(i2c, delay, Add0::Sda).await
    }

    /// Create a new TMP117 instance with ADD0 tied to SCL, resulting in an
    /// instance responding to address `0x4b`.
    ///
    /// # Errors
    ///
    /// See [`Tmp117::new_async`]
    pub async fn new_async_with_add0_scl(i2c: I2C, delay: DELAY) -> Result<Self, Error<I2C::Error>> {
        Self::new_async(i2c, delay, Add0::Scl).await
    }

    /// Create a new [`AlertTmp117`] instance by consuming the original TMP117 instance.
    /// The configuration is read back so that the ALERT pin is waited on
    /// the way the device drives it.
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn into_alert<ALERT: embedded_hal_async::digital::Wait + embedded_hal::digital::InputPin>(
        mut self,
        alert: ALERT,
    ) -> Result<AlertTmp117<I2C, DELAY, ALERT>, Error<I2C::Error>> {
        self.configuration().await?;
        Ok(AlertTmp117 { tmp117: self, alert })
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
    pub async fn configuration(&mut self) -> Result<Configuration, Error<I2C::Error>> {
        let data = self.read(Register::Configuration).await?;
        self.config = Configuration::from(u16::from_be_bytes(data));
        Ok(self.config)
    }

    /// Set configuration register
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails, `Error::EepromBusy` when
    /// the EEPROM is unlocked and stays busy
    pub async fn set_configuration(&mut self, config: Configuration) -> Result<(), Error<I2C::Error>> {
        let value: u16 = config.into();
        self.write(Register::Configuration, value.to_be_bytes()).await?;

        // Only cache config after successful write
        self.config = config;
        Ok(())
    }

    /// Read temperature register
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn temperature(&mut self) -> Result<f32, Error<I2C::Error>> {
        self.read_celsius(Register::Temperature).await
    }

    /// Wait for the conversion cycle dictated by the [`Configuration`]
    /// register, then read the temperature.
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn wait_for_temperature(&mut self) -> Result<f32, Error<I2C::Error>> {
        let config = self.configuration().await?;
        self.delay.delay_us(config.cycle_time_us()).await;
        self.temperature().await
    }

    /// Trigger a one-shot conversion and return its result once the data
    /// ready flag is set.
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails, `Error::NotReady` when
    /// the conversion does not complete in time
    pub async fn measure_one_shot(&mut self) -> Result<f32, Error<I2C::Error>> {
        let config = self.configuration().await?;
        self.set_configuration(config.with_mode(ConversionMode::OneShot)).await?;
        self.delay.delay_us(config.averaging().conversion_time_us()).await;

        for _ in 0..Self::DATA_READY_POLL_ATTEMPTS {
            let config = self.configuration().await?;
            if self.status.poll(&config) {
                return self.temperature().await;
            }
            self.delay.delay_ms(Self::POLL_INTERVAL_MS).await;
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
    pub async fn alert_status(&mut self) -> Result<AlertStatus, Error<I2C::Error>> {
        let config = self.configuration().await?;
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
    pub async fn high_limit(&mut self) -> Result<f32, Error<I2C::Error>> {
        self.read_celsius(Register::HighLimit).await
    }

    /// Set temperature high limit register
    ///
    /// # Errors
    ///
    /// `Error::OutOfRange` when `limit` is outside of -256..=255.9921875 ℃,
    /// `Error::Bus` when the I2C transaction fails
    pub async fn set_high_limit(&mut self, limit: f32) -> Result<(), Error<I2C::Error>> {
        self.write_celsius(Register::HighLimit, limit).await
    }

    /// Read temperature low limit register
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn low_limit(&mut self) -> Result<f32, Error<I2C::Error>> {
        self.read_celsius(Register::LowLimit).await
    }

    /// Set temperature low limit register
    ///
    /// # Errors
    ///
    /// `Error::OutOfRange` when `limit` is outside of -256..=255.9921875 ℃,
    /// `Error::Bus` when the I2C transaction fails
    pub async fn set_low_limit(&mut self, limit: f32) -> Result<(), Error<I2C::Error>> {
        self.write_celsius(Register::LowLimit, limit).await
    }

    /// Read temperature offset register
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn temperature_offset(&mut self) -> Result<f32, Error<I2C::Error>> {
        self.read_celsius(Register::TemperatureOffset).await
    }

    /// Set temperature offset register
    ///
    /// # Errors
    ///
    /// `Error::OutOfRange` when `offset` is outside of -256..=255.9921875 ℃,
    /// `Error::Bus` when the I2C transaction fails
    pub async fn set_temperature_offset(&mut self, offset: f32) -> Result<(), Error<I2C::Error>> {
        self.write_celsius(Register::TemperatureOffset, offset).await
    }

    /// Read conversion mode
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn mode(&mut self) -> Result<ConversionMode, Error<I2C::Error>> {
        Ok(self.configuration().await?.mode())
    }

    /// Set conversion mode
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn set_mode(&mut self, mode: ConversionMode) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_mode(mode)).await
    }

    /// Read conversion averaging
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn averaging(&mut self) -> Result<Averaging, Error<I2C::Error>> {
        Ok(self.configuration().await?.averaging())
    }

    /// Set conversion averaging
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn set_averaging(&mut self, averaging: Averaging) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_averaging(averaging)).await
    }

    /// Read conversion cycle
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn conversion_cycle(&mut self) -> Result<ConversionCycle, Error<I2C::Error>> {
        Ok(self.configuration().await?.conversion_cycle())
    }

    /// Set conversion cycle
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn set_conversion_cycle(&mut self, cycle: ConversionCycle) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_conversion_cycle(cycle)).await
    }

    /// Select alert or therm mode
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn set_alert_mode(&mut self, mode: AlertMode) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_alert_mode(mode)).await
    }

    /// Set ALERT pin polarity
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn set_polarity(&mut self, polarity: Polarity) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_polarity(polarity)).await
    }

    /// Select what the ALERT pin reports
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn set_alert_pin_select(&mut self, select: AlertPinSelect) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_alert_pin_select(select)).await
    }

    /// Trigger a soft reset and wait for it to complete, then reload the
    /// cached configuration, which now holds the power-on value from EEPROM.
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn reset(&mut self) -> Result<(), Error<I2C::Error>> {
        self.modify_configuration(|config| config.with_soft_reset(true)).await?;
        self.delay.delay_ms(Self::RESET_TIME_MS).await;

        self.status.clear();
        self.eeprom_unlocked = false;
        self.configuration().await?;
        debug!("soft reset");
        Ok(())
    }

    /// Wait long enough for the first conversion with default settings to
    /// complete, then clear the latched data ready flag.
    pub async fn initialize(&mut self) {
        self.delay.delay_ms(Self::SETTLE_TIME_MS).await;
        self.status.clear_data_ready();
    }

    /// Read the EEPROM busy flag
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn eeprom_busy(&mut self) -> Result<bool, Error<I2C::Error>> {
        let data = self.read(Register::EepromUnlock).await?;
        Ok(EepromUnlock::from(u16::from_be_bytes(data)).busy())
    }

    /// Unlock the EEPROM. Until [`Tmp117::lock_eeprom`] is called, writes
    /// to configuration, limit, offset and EEPROM registers are programmed
    /// into EEPROM.
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn unlock_eeprom(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_eeprom_unlock(true).await
    }

    /// Lock the EEPROM
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn lock_eeprom(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_eeprom_unlock(false).await
    }

    /// Read a general purpose EEPROM word
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails
    pub async fn eeprom(&mut self, slot: EepromSlot) -> Result<u16, Error<I2C::Error>> {
        Ok(u16::from_be_bytes(self.read(slot.into()).await?))
    }

    /// Program a general purpose EEPROM word. The EEPROM is left in the lock
    /// state it was found in, also when programming fails.
    ///
    /// # Errors
    ///
    /// `Error::Bus` when the I2C transaction fails, `Error::EepromBusy` when
    /// programming does not complete in time
    pub async fn program_eeprom(&mut self, slot: EepromSlot, value: u16) -> Result<(), Error<I2C::Error>> {
        let was_unlocked = self.eeprom_unlocked;
        if !was_unlocked {
            self.unlock_eeprom().await?;
        }

        let result = match self.write(slot.into(), value.to_be_bytes()).await {
            Ok(()) => self.wait_eeprom_ready().await,
            Err(e) => Err(e),
        };

        if !was_unlocked {
            let locked = self.lock_eeprom().await;
            return result.and(locked);
        }
        result
    }

    async fn modify_configuration<F>(&mut self, f: F) -> Result<(), Error<I2C::Error>>
    where
        F: FnOnce(Configuration) -> Configuration,
    {
        let config = self.configuration().await?;
        self.set_configuration(f(config)).await
    }

    async fn write_eeprom_unlock(&mut self, unlocked: bool) -> Result<(), Error<I2C::Error>> {
        let value: u16 = EepromUnlock::with_unlocked(unlocked).into();
        self.write(Register::EepromUnlock, value.to_be_bytes()).await?;
        self.eeprom_unlocked = unlocked;
        debug!("EEPROM unlocked: {}", unlocked);
        Ok(())
    }

    async fn wait_eeprom_ready(&mut self) -> Result<(), Error<I2C::Error>> {
        for _ in 0..Self::EEPROM_POLL_ATTEMPTS {
            if !self.eeprom_busy().await? {
                return Ok(());
            }
            self.delay.delay_ms(Self::POLL_INTERVAL_MS).await;
        }

        warn!("EEPROM still busy after {} polls", Self::EEPROM_POLL_ATTEMPTS);
        Err(Error::EepromBusy)
    }

    async fn read_celsius(&mut self, reg: Register) -> Result<f32, Error<I2C::Error>> {
        let raw = self.read(reg).await?;
        Ok(decode_temperature(i16::from_be_bytes(raw)))
    }

    async fn write_celsius(&mut self, reg: Register, celsius: f32) -> Result<(), Error<I2C::Error>> {
        let raw = encode_limit(celsius)?;
        self.write(reg, raw.to_be_bytes()).await
    }

    async fn read(&mut self, reg: Register) -> Result<[u8; 2], Error<I2C::Error>> {
        let mut bytes = [0; 2];
        self.i2c
            .write_read(self.addr, &[reg.into()], &mut bytes)
            .await
            .map_err(Error::Bus)?;
        trace!("read {:#x}: {:#x}", u8::from(reg), u16::from_be_bytes(bytes));
        Ok(bytes)
    }

    async fn write(&mut self, reg: Register, value: [u8; 2]) -> Result<(), Error<I2C::Error>> {
        if self.eeprom_unlocked && reg.is_eeprom_backed() {
            self.wait_eeprom_ready().await?;
        }

        let data = reg.frame(value);
        trace!("write {:#x}: {:#x}", data[0], u16::from_be_bytes(value));
        self.i2c.write(self.addr, &data).await.map_err(Error::Bus)
    }
}

/// Tmp117 Errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E: embedded_hal_async::i2c::Error> {
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
    /// ALERT pin error
    Other,
}

impl<E: embedded_hal_async::i2c::Error> From<OutOfRange> for Error<E> {
    fn from(_: OutOfRange) -> Self {
        Self::OutOfRange
    }
}

#[cfg(feature = "embedded-sensors-hal-async")]
impl<E: embedded_hal_async::i2c::Error> sensor::Error for Error<E> {
    fn kind(&self) -> sensor::ErrorKind {
        match *self {
            Self::Bus(_) | Self::DeviceNotFound(_) | Self::EepromBusy | Self::NotReady => sensor::ErrorKind::Peripheral,
            Self::OutOfRange => sensor::ErrorKind::InvalidInput,
            Self::Other => sensor::ErrorKind::Other,
        }
    }
}

#[cfg(feature = "embedded-sensors-hal-async")]
impl<I2C: embedded_hal_async::i2c::I2c, DELAY: embedded_hal_async::delay::DelayNs> sensor::ErrorType
    for Tmp117<I2C, DELAY>
{
    type Error = Error<I2C::Error>;
}

#[cfg(feature = "embedded-sensors-hal-async")]
impl<I2C: embedded_hal_async::i2c::I2c, DELAY: embedded_hal_async::delay::DelayNs> TemperatureSensor
    for Tmp117<I2C, DELAY>
{
    async fn temperature(&mut self) -> Result<DegreesCelsius, Self::Error> {
        Tmp117::temperature(self).await
    }
}

#[cfg(feature = "embedded-sensors-hal-async")]
impl<I2C: embedded_hal_async::i2c::I2c, DELAY: embedded_hal_async::delay::DelayNs> TemperatureThresholdSet
    for Tmp117<I2C, DELAY>
{
    async fn set_temperature_threshold_low(&mut self, threshold: DegreesCelsius) -> Result<(), Self::Error> {
        self.set_low_limit(threshold).await
    }

    async fn set_temperature_threshold_high(&mut self, threshold: DegreesCelsius) -> Result<(), Self::Error> {
        self.set_high_limit(threshold).await
    }
}

/// TMP117 asynchronous device driver (with alert pin)
pub struct AlertTmp117<
    I2C: embedded_hal_async::i2c::I2c,
    DELAY: embedded_hal_async::delay::DelayNs,
    ALERT: embedded_hal_async::digital::Wait + embedded_hal::digital::InputPin,
> {
    /// Underlying TMP117 sensor.
    pub tmp117: Tmp117<I2C, DELAY>,
    alert: ALERT,
}

impl<
        I2C: embedded_hal_async::i2c::I2c,
        DELAY: embedded_hal_async::delay::DelayNs,
        ALERT: embedded_hal_async::digital::Wait + embedded_hal::digital::InputPin,
    > AlertTmp117<I2C, DELAY, ALERT>
{
    /// Create a new ALERTTMP117 instance and load the device configuration.
    ///
    /// # Errors
    ///
    /// See [`Tmp117::new_async`]
    pub async fn new_async(i2c: I2C, delay: DELAY, add0: Add0, alert: ALERT) -> Result<Self, Error<I2C::Error>> {
        Tmp117::new_async(i2c, delay, add0).await?.into_alert(alert).await
    }

    /// Create a new ALERTTMP117 instance with ADD0 tied to GND, resulting in an
    /// instance responding to address `0x48`.
    ///
    /// # Errors
    ///
    /// See [`Tmp117::new_async`]
    pub async fn new_async_with_add0_gnd(i2c: I2C, delay: DELAY, alert: ALERT) -> Result<Self, Error<I2C::Error>> {
        Self::new_async(i2c, delay, Add0::Gnd, alert).await
    }

    /// Destroy the driver instance, return the I2C bus instance and ALERT pin instance.
    pub fn destroy(self) -> (I2C, ALERT) {
        (self.tmp117.destroy(), self.alert)
    }

    /// Wait for the ALERT pin to signal a crossed limit, then return the
    /// alert flags and the temperature at the time of the trigger.
    ///
    /// Assumes the ALERT pin reports alert flags, not data ready.
    ///
    /// # Errors
    ///
    /// `Error::Other` when waiting on the pin fails, `Error::Bus` when the
    /// I2C transaction fails
    pub async fn wait_for_alert(&mut self) -> Result<(AlertStatus, f32), Error<I2C::Error>> {
        match (self.tmp117.config.alert_mode(), self.tmp117.config.polarity()) {
            // In therm mode the pin stays active until the temperature is back
            // below the high limit (or above the low limit).
            (AlertMode::Therm, Polarity::ActiveLow) => {
                self.alert.wait_for_low().await.map_err(|_| Error::Other)?;
            }
            (AlertMode::Therm, Polarity::ActiveHigh) => {
                self.alert.wait_for_high().await.map_err(|_| Error::Other)?;
            }

            // In alert mode the pin is released by the status read below.
            (AlertMode::Alert, Polarity::ActiveLow) => {
                self.alert.wait_for_falling_edge().await.map_err(|_| Error::Other)?;
            }
            (AlertMode::Alert, Polarity::ActiveHigh) => {
                self.alert.wait_for_rising_edge().await.map_err(|_| Error::Other)?;
            }
        }

        let status = self.tmp117.alert_status().await?;
        let temperature = self.tmp117.temperature().await?;
        Ok((status, temperature))
    }
}

#[cfg(feature = "embedded-sensors-hal-async")]
impl<
        I2C: embedded_hal_async::i2c::I2c,
        DELAY: embedded_hal_async::delay::DelayNs,
        ALERT: embedded_hal_async::digital::Wait + embedded_hal::digital::InputPin,
    > sensor::ErrorType for AlertTmp117<I2C, DELAY, ALERT>
{
    type Error = Error<I2C::Error>;
}

#[cfg(feature = "embedded-sensors-hal-async")]
impl<
        I2C: embedded_hal_async::i2c::I2c,
        DELAY: embedded_hal_async::delay::DelayNs,
        ALERT: embedded_hal_async::digital::Wait + embedded_hal::digital::InputPin,
    > TemperatureSensor for AlertTmp117<I2C, DELAY, ALERT>
{
    async fn temperature(&mut self) -> Result<DegreesCelsius, Self::Error> {
        self.tmp117.temperature().await
    }
}

#[cfg(feature = "embedded-sensors-hal-async")]
impl<
        I2C: embedded_hal_async::i2c::I2c,
        DELAY: embedded_hal_async::delay::DelayNs,
        ALERT: embedded_hal_async::digital::Wait + embedded_hal::digital::InputPin,
    > TemperatureThresholdSet for AlertTmp117<I2C, DELAY, ALERT>
{
    async fn set_temperature_threshold_low(&mut self, threshold: DegreesCelsius) -> Result<(), Self::Error> {
        self.tmp117.set_low_limit(threshold).await
    }

    async fn set_temperature_threshold_high(&mut self, threshold: DegreesCelsius) -> Result<(), Self::Error> {
        self.tmp117.set_high_limit(threshold).await
    }
}

#[cfg(feature = "embedded-sensors-hal-async")]
impl<
        I2C: embedded_hal_async::i2c::I2c,
        DELAY: embedded_hal_async::delay::DelayNs,
        ALERT: embedded_hal_async::digital::Wait + embedded_hal::digital::InputPin,
    > TemperatureThresholdWait for AlertTmp117<I2C, DELAY, ALERT>
{
    async fn wait_for_temperature_threshold(&mut self) -> Result<DegreesCelsius, Self::Error> {
        let (_, temperature) = self.wait_for_alert().await?;
        Ok(temperature)
    }
}
