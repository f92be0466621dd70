//! FXOS8700CQ 3-axis accelerometer + 3-axis magnetometer driver.

use embedded_hal_async::i2c::I2c;

use crate::config::{AccelMagConfig, MAG_RESOLUTION};
use crate::data::{AccelRaw, MagRaw, TemperatureRaw};
use crate::device::DeviceCore;
use crate::error::Error;
use crate::interface::{AccelMagAddress, I2cInterface, Interface};
use crate::register::fxos8700cq::{Register, ctrl_reg1, status, who_am_i};

/// FXOS8700CQ accelerometer/magnetometer driver.
pub struct Fxos8700cq<I> {
    core: DeviceCore<I>,
    config: AccelMagConfig,
}

/// I2C type alias for the FXOS8700CQ driver.
pub type Fxos8700cqI2c<I2C> = Fxos8700cq<I2cInterface<I2C>>;

impl<I2C> Fxos8700cq<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Creates a driver at the given address with the default configuration.
    pub fn new(i2c: I2C, address: AccelMagAddress) -> Self {
        Self::with_config(i2c, address.addr(), AccelMagConfig::default())
    }

    /// Creates a driver at a raw 7-bit address with a custom configuration.
    pub fn with_config(i2c: I2C, address: u8, config: AccelMagConfig) -> Self {
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

impl<I> Fxos8700cq<I>
where
    I: Interface,
{
    pub(crate) const fn from_interface(interface: I, config: AccelMagConfig) -> Self {
        Self {
            core: DeviceCore::new(interface),
            config,
        }
    }

    /// Returns the configuration applied by [`init`](Self::init).
    pub const fn config(&self) -> AccelMagConfig {
        self.config
    }

    /// Replaces the configuration; takes effect on the next [`init`](Self::init).
    pub fn set_config(&mut self, config: AccelMagConfig) {
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

    /// Enters standby by clearing CTRL_REG1.ACTIVE.
    pub async fn standby(&mut self) -> Result<(), Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("FXOS8700CQ: standby");
        self.core
            .modify_reg(Register::CtrlReg1.addr(), ctrl_reg1::ACTIVE, 0)
            .await?;
        Ok(())
    }

    /// Enters active mode by setting CTRL_REG1.ACTIVE.
    pub async fn active(&mut self) -> Result<(), Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("FXOS8700CQ: active");
        self.core
            .modify_reg(Register::CtrlReg1.addr(), 0, ctrl_reg1::ACTIVE)
            .await?;
        Ok(())
    }

    /// Applies the configuration and starts sampling.
    ///
    /// Order: standby, XYZ_DATA_CFG (range), CTRL_REG1 data rate field,
    /// M_CTRL_REG1 (auto-calibration, oversampling, sensor mode), then active.
    pub async fn init(&mut self) -> Result<(), Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "FXOS8700CQ: init range={} odr={} mode={}",
            self.config.range,
            self.config.odr,
            self.config.mode
        );
        self.standby().await?;

        let config = self.config;
        self.write_register(Register::XyzDataCfg, config.xyz_data_cfg_value())
            .await?;
        let ctrl_reg1 = self.read_register(Register::CtrlReg1).await?;
        self.write_register(Register::CtrlReg1, config.ctrl_reg1_value(ctrl_reg1))
            .await?;
        self.write_register(Register::MCtrlReg1, config.m_ctrl_reg1_value())
            .await?;

        self.active().await?;
        #[cfg(feature = "defmt")]
        defmt::info!("FXOS8700CQ: initialized");
        Ok(())
    }

    /// Returns true when a new accelerometer sample is available.
    pub async fn accel_data_ready(&mut self) -> Result<bool, Error> {
        let value = self.read_register(Register::Status).await?;
        Ok((value & status::ZYXDR) != 0)
    }

    /// Returns true when a new magnetometer sample is available.
    pub async fn mag_data_ready(&mut self) -> Result<bool, Error> {
        let value = self.read_register(Register::MDrStatus).await?;
        Ok((value & status::ZYXDR) != 0)
    }

    /// Reads the acceleration registers as 14-bit counts.
    pub async fn read_accel_raw(&mut self) -> Result<AccelRaw, Error> {
        let bytes = self.core.read_axis_block(Register::OutXMsb.addr()).await?;
        Ok(AccelRaw::from_bytes(bytes))
    }

    /// Reads the magnetic field registers.
    pub async fn read_mag_raw(&mut self) -> Result<MagRaw, Error> {
        let bytes = self.core.read_axis_block(Register::MOutXMsb.addr()).await?;
        Ok(MagRaw::from_bytes(bytes))
    }

    /// Reads the die temperature (0.96 degC/LSB).
    pub async fn read_temperature_raw(&mut self) -> Result<TemperatureRaw, Error> {
        let value = self.read_register(Register::Temp).await?;
        Ok(TemperatureRaw::from_byte(value))
    }

    /// Returns g per count for the configured range.
    pub const fn accel_resolution(&self) -> f32 {
        self.config.range.resolution()
    }

    /// Returns uT per count.
    pub const fn mag_resolution(&self) -> f32 {
        MAG_RESOLUTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccelOutputDataRate, AccelRange, MagSensorMode};
    use crate::testing::{MockInterface, Transaction};
    use futures::executor::block_on;

    const CTRL_REG1: u8 = Register::CtrlReg1.addr();

    fn driver(interface: MockInterface) -> Fxos8700cq<MockInterface> {
        Fxos8700cq::from_interface(interface, AccelMagConfig::DEFAULT)
    }

    fn mock(device: &Fxos8700cq<MockInterface>) -> &MockInterface {
        device.core.interface()
    }

    #[test]
    fn standby_and_active_toggle_bit_zero() {
        let mut device = driver(MockInterface::default().with_reg(CTRL_REG1, 0b0001_0101));
        block_on(device.standby()).expect("standby");
        assert_eq!(mock(&device).reg(CTRL_REG1), 0b0001_0100);
        block_on(device.active()).expect("active");
        assert_eq!(mock(&device).reg(CTRL_REG1), 0b0001_0101);
    }

    #[test]
    fn init_writes_in_order_with_standby_first() {
        let mut device = driver(MockInterface::default().with_reg(CTRL_REG1, 0b0010_0001));
        block_on(device.init()).expect("init");

        let expected = [
            (CTRL_REG1, 0b0010_0000),
            (Register::XyzDataCfg.addr(), 0b00),
            (CTRL_REG1, 0b0001_0000),
            (Register::MCtrlReg1.addr(), 0x80 | (5 << 2) | 0x03),
            (CTRL_REG1, 0b0001_0001),
        ];
        assert_eq!(mock(&device).writes(), expected);
    }

    #[test]
    fn init_first_write_is_mode_clear() {
        let mut device = driver(MockInterface::default().with_reg(CTRL_REG1, 0xFF));
        block_on(device.init()).expect("init");
        let first_write = mock(&device)
            .transactions()
            .iter()
            .find(|t| matches!(t, Transaction::Write { .. }))
            .copied();
        assert_eq!(
            first_write,
            Some(Transaction::Write {
                reg: CTRL_REG1,
                value: 0xFE
            })
        );
    }

    #[test]
    fn init_applies_custom_config() {
        let mut device = driver(MockInterface::default());
        device.set_config(
            AccelMagConfig::new(AccelRange::G8, AccelOutputDataRate::Hz50)
                .with_mode(MagSensorMode::AccelOnly)
                .with_mag_auto_calibration(false),
        );
        block_on(device.init()).expect("init");
        let writes = mock(&device).writes();
        assert_eq!(writes[1], (Register::XyzDataCfg.addr(), 0b10));
        assert_eq!(writes[2], (CTRL_REG1, 0b0010_0000));
        assert_eq!(writes[3], (Register::MCtrlReg1.addr(), 5 << 2));
        assert_eq!(device.accel_resolution(), 8.0 / 8192.0);
    }

    #[test]
    fn read_accel_and_mag_blocks() {
        let interface = MockInterface::default()
            .with_block(Register::OutXMsb.addr(), &[0x40, 0x00, 0xF0, 0x00, 0x00, 0x04])
            .with_block(Register::MOutXMsb.addr(), &[0x00, 0x08, 0x00, 0x00, 0xFF, 0xFC]);
        let mut device = driver(interface);
        assert_eq!(
            block_on(device.read_accel_raw()),
            Ok(AccelRaw { x: 4096, y: -1024, z: 1 })
        );
        assert_eq!(
            block_on(device.read_mag_raw()),
            Ok(MagRaw { x: 2, y: 0, z: -1 })
        );
    }

    #[test]
    fn resolutions() {
        let device = driver(MockInterface::default());
        assert_eq!(device.accel_resolution(), 2.0 / 8192.0);
        assert_eq!(device.mag_resolution(), 10.0 / 32768.0);
    }

    #[test]
    fn status_and_temperature() {
        let interface = MockInterface::default()
            .with_reg(Register::Status.addr(), status::ZYXDR)
            .with_reg(Register::Temp.addr(), 0x1E);
        let mut device = driver(interface);
        assert_eq!(block_on(device.accel_data_ready()), Ok(true));
        assert_eq!(block_on(device.mag_data_ready()), Ok(false));
        assert_eq!(block_on(device.read_temperature_raw()).map(|t| t.value), Ok(30));
    }

    #[test]
    fn verify_device_checks_who_am_i() {
        let mut device = driver(MockInterface::default().with_reg(Register::WhoAmI.addr(), 0xC7));
        assert_eq!(block_on(device.verify_device()), Ok(()));
    }

    #[test]
    fn bus_error_during_sample_read_propagates() {
        let mut interface = MockInterface::default();
        interface.fail_next(Error::Bus);
        let mut device = driver(interface);
        assert_eq!(block_on(device.read_mag_raw()), Err(Error::Bus));
    }
}
