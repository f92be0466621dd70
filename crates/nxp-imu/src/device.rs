//! Register-level core shared by both chip drivers.

use crate::error::Error;
use crate::interface::{I2cInterface, Interface};
use crate::register::AXIS_BLOCK_LEN;

pub(crate) struct DeviceCore<I> {
    interface: I,
}

impl<I> DeviceCore<I>
where
    I: Interface,
{
    pub(crate) const fn new(interface: I) -> Self {
        Self { interface }
    }

    pub(crate) async fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        self.interface.read_reg(reg).await
    }

    pub(crate) async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        self.interface.read_regs(reg, buffer).await
    }

    pub(crate) async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        self.interface.write_reg(reg, value).await
    }

    /// Reads one X/Y/Z output block starting at the X MSB register.
    pub(crate) async fn read_axis_block(&mut self, reg: u8) -> Result<[u8; AXIS_BLOCK_LEN], Error> {
        let mut buffer = [0u8; AXIS_BLOCK_LEN];
        self.read_regs(reg, &mut buffer).await?;
        Ok(buffer)
    }

    /// Read-modify-write: clears `clear`, then sets `set`. Returns the value read.
    pub(crate) async fn modify_reg(&mut self, reg: u8, clear: u8, set: u8) -> Result<u8, Error> {
        let current = self.read_reg(reg).await?;
        self.write_reg(reg, (current & !clear) | set).await?;
        Ok(current)
    }

    pub(crate) async fn verify_who_am_i(&mut self, reg: u8, expected: u8) -> Result<(), Error> {
        let who = self.read_reg(reg).await?;
        if who != expected {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "WHO_AM_I mismatch: expected {=u8:#x}, read {=u8:#x}",
                expected,
                who
            );
            return Err(Error::WrongDevice);
        }
        Ok(())
    }

    pub(crate) fn release(self) -> I {
        self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface(&self) -> &I {
        &self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }
}

impl<I2C> DeviceCore<I2cInterface<I2C>> {
    pub(crate) const fn i2c_address(&self) -> u8 {
        self.interface.address()
    }

    pub(crate) fn set_i2c_address(&mut self, address: u8) {
        self.interface.set_address(address);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockInterface;
    use futures::executor::block_on;

    #[test]
    fn write_then_read_round_trips() {
        let mut core = DeviceCore::new(MockInterface::default());
        block_on(core.write_reg(0x13, 0x5A)).expect("write");
        assert_eq!(block_on(core.read_reg(0x13)), Ok(0x5A));
    }

    #[test]
    fn modify_reg_clears_then_sets() {
        let mut core = DeviceCore::new(MockInterface::default().with_reg(0x2A, 0b1111_0000));
        let previous = block_on(core.modify_reg(0x2A, 0b0011_0000, 0b0000_0001)).expect("modify");
        assert_eq!(previous, 0b1111_0000);
        assert_eq!(core.interface().writes(), [(0x2A, 0b1100_0001)]);
    }

    #[test]
    fn axis_block_reads_six_consecutive_registers() {
        let mut core = DeviceCore::new(
            MockInterface::default().with_block(0x01, &[1, 2, 3, 4, 5, 6]),
        );
        assert_eq!(block_on(core.read_axis_block(0x01)), Ok([1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn short_read_is_reported() {
        let mut core = DeviceCore::new(MockInterface::default());
        core.interface_mut().truncate_next_read(4);
        assert_eq!(block_on(core.read_axis_block(0x01)), Err(Error::PartialRead));
    }

    #[test]
    fn who_am_i_mismatch_is_wrong_device() {
        let mut core = DeviceCore::new(MockInterface::default().with_reg(0x0C, 0xC7));
        assert_eq!(block_on(core.verify_who_am_i(0x0C, 0xD7)), Err(Error::WrongDevice));
        assert_eq!(block_on(core.verify_who_am_i(0x0C, 0xC7)), Ok(()));
    }
}
