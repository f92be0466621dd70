//! FXAS21002C 3-axis gyroscope driver.

use embedded_hal_async::i2c::I2c;

use crate::config::GyroConfig;
use crate::data::{GyroRaw, TemperatureRaw};
use crate::device::DeviceCore;
use crate::error::Error;
use crate::interface::{GyroAddress, I2cInterface, Interface};
use crate::register::fxas21002c::{Register, ctrl_reg1, dr_status, who_am_i};

/// FXAS21002C gyroscope driver.
pub struct Fxas21002c<I> {
    core: DeviceCore<I>,
    config: GyroConfig,
}

/// I2C type alias for the FXAS21002C driver.
pub type Fxas21002cI2c<I2C> = Fxas21002c<I2cInterface<I2C>>;

impl<I2C> Fxas21002c<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Creates a driver at the given address with the default configuration.
    pub fn new(i2c: I2C, address: GyroAddress) -> Self {
        Self::with_config(i2c, address.addr(), GyroConfig::default())
    }

    /// Creates a driver at a raw 7-bit address with a custom configuration.
    pub fn with_config(i2c: I2C, address: u8, config: GyroConfig) -> Self {
        Self::from_interface(I2cInterface::new(i2c, address), config)
    }

    /// Returns the 7-bit I2C address in use.
    pub const fn address(&self) -> u8 {
        self.core.i2c_address()
    }

    /// Updates the I2C address used by the interface.
    pub fn set_address(&mut self, address: u8) {
        self.core.set_i2c_address(address);
    }

    /// Releases the I2C bus, consuming the driver.
    pub fn release(self) -> I2C {
        self.core.release().release()
    }
}

impl<I> Fxas21002c<I>
where
    I: Interface,
{
    pub(crate) const fn from_interface(interface: I, config: GyroConfig) -> Self {
        Self {
            core: DeviceCore::new(interface),
            config,
        }
    }

    /// Returns the configuration applied by [`init`](Self::init).
    pub const fn config(&self) -> GyroConfig {
        self.config
    }

    /// Replaces the configuration; takes effect on the next [`init`](Self::init).
    pub fn set_config(&mut self, config: GyroConfig) {
        self.config = config;
    }

    /// Writes a single register.
    ///
    /// Most registers are only writable in standby; this is not checked.
    pub async fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error> {
        self.core.write_reg(reg.addr(), value).await
    }

    /// Reads a single register.
    pub async fn read_register(&mut self, reg: Register) -> Result<u8, Error> {
        self.core.read_reg(reg.addr()).await
    }

    /// Reads consecutive registers starting at `reg` in one transaction.
    pub async fn read_registers(&mut self, reg: Register, buffer: &mut [u8]) -> Result<(), Error> {
        self.core.read_regs(reg.addr(), buffer).await
    }

    /// Verifies the WHO_AM_I register.
    pub async fn verify_device(&mut self) -> Result<(), Error> {
        self.core
            .verify_who_am_i(Register::WhoAmI.addr(), who_am_i::EXPECTED)
            .await
    }

    /// Enters standby by clearing the ACTIVE and READY bits of CTRL_REG1.
    pub async fn standby(&mut self) -> Result<(), Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("FXAS21002C: standby");
        self.core
            .modify_reg(Register::CtrlReg1.addr(), ctrl_reg1::MODE_MASK, 0)
            .await?;
        Ok(())
    }

    /// Enters active mode.
    ///
    /// Writes CTRL_REG1 twice: first with both mode bits cleared (standby),
    /// then with ACTIVE set. READY is never left set.
    pub async fn active(&mut self) -> Result<(), Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("FXAS21002C: active");
        let reg = Register::CtrlReg1.addr();
        let cleared = self.core.read_reg(reg).await? & !ctrl_reg1::MODE_MASK;
        self.core.write_reg(reg, cleared).await?;
        self.core.write_reg(reg, cleared | ctrl_reg1::ACTIVE).await
    }

    /// Applies the configuration and starts sampling.
    ///
    /// Order: standby, CTRL_REG0 (range), CTRL_REG1 (data rate), CTRL_REG2
    /// (interrupts), RT_CFG / RT_THS / RT_COUNT, then active.
    pub async fn init(&mut self) -> Result<(), Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "FXAS21002C: init range={} odr={}",
            self.config.range,
            self.config.odr
        );
        self.standby().await?;

        let config = self.config;
        self.write_register(Register::CtrlReg0, config.ctrl_reg0_value())
            .await?;
        self.write_register(Register::CtrlReg1, config.ctrl_reg1_value())
            .await?;
        self.write_register(Register::CtrlReg2, config.interrupts.ctrl_reg2_value())
            .await?;
        self.write_register(Register::RtCfg, config.rate_threshold.rt_cfg_value())
            .await?;
        self.write_register(Register::RtThs, config.rate_threshold.rt_ths_value())
            .await?;
        self.write_register(Register::RtCount, config.rate_threshold.rt_count_value())
            .await?;

        self.active().await?;
        #[cfg(feature = "defmt")]
        defmt::info!("FXAS21002C: initialized");
        Ok(())
    }

    /// Returns true when a new X/Y/Z sample is available.
    pub async fn data_ready(&mut self) -> Result<bool, Error> {
        let status = self.read_register(Register::DrStatus).await?;
        Ok((status & dr_status::ZYXDR) != 0)
    }

    /// Reads the angular rate registers as 14-bit counts.
    pub async fn read_gyro_raw(&mut self) -> Result<GyroRaw, Error> {
        let bytes = self.core.read_axis_block(Register::OutXMsb.addr()).await?;
        Ok(GyroRaw::from_bytes(bytes))
    }

    /// Reads the die temperature (1 degC/LSB).
    pub async fn read_temperature_raw(&mut self) -> Result<TemperatureRaw, Error> {
        let value = self.read_register(Register::Temp).await?;
        Ok(TemperatureRaw::from_byte(value))
    }

    /// Returns deg/s per count for the configured range.
    pub const fn resolution(&self) -> f32 {
        self.config.range.resolution()
    }
}
