//! I2C interface adapter.

use embedded_hal_async::i2c::{Error as _, I2c};

use super::{Interface, sealed};
use crate::error::Error;

/// I2C register interface bound to one device address.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new I2C interface with the given bus and 7-bit address.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the 7-bit I2C address.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Changes the 7-bit I2C address.
    pub fn set_address(&mut self, address: u8) {
        self.address = address;
    }

    /// Releases the underlying I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    async fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        let mut buffer = [0u8];
        self.read_regs(reg, &mut buffer).await?;
        Ok(buffer[0])
    }

    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.is_empty() {
            return Ok(());
        }
        // write_read keeps the bus with a repeated start between phases.
        self.i2c
            .write_read(self.address, &[reg], buffer)
            .await
            .map_err(|err| Error::from_bus_kind(err.kind()))
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        let buffer = [reg, value];
        self.i2c
            .write(self.address, &buffer)
            .await
            .map_err(|err| Error::from_bus_kind(err.kind()))
    }
}

impl<I2C> sealed::Sealed for I2cInterface<I2C> {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use embedded_hal_async::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};
    use futures::executor::block_on;

    use super::*;

    #[derive(Debug)]
    struct BusError(ErrorKind);

    impl embedded_hal_async::i2c::Error for BusError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    /// Records raw bus traffic as (address, bytes written, bytes read).
    #[derive(Default)]
    struct RecordingBus {
        frames: Vec<(u8, Vec<u8>, usize)>,
        response: Vec<u8>,
        fail: Option<ErrorKind>,
    }

    impl ErrorType for RecordingBus {
        type Error = BusError;
    }

    impl I2c for RecordingBus {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if let Some(kind) = self.fail {
                return Err(BusError(kind));
            }
            let mut written = Vec::new();
            let mut read_len = 0;
            for op in operations.iter_mut() {
                match op {
                    Operation::Write(bytes) => written.extend_from_slice(bytes),
                    Operation::Read(buffer) => {
                        for (slot, value) in buffer.iter_mut().zip(self.response.iter()) {
                            *slot = *value;
                        }
                        read_len += buffer.len();
                    }
                }
            }
            self.frames.push((address, written, read_len));
            Ok(())
        }
    }

    #[test]
    fn write_reg_sends_register_then_value() {
        let mut iface = I2cInterface::new(RecordingBus::default(), 0x20);
        block_on(iface.write_reg(0x13, 0x0A)).expect("write");
        let bus = iface.release();
        assert_eq!(bus.frames, [(0x20, std::vec![0x13, 0x0A], 0)]);
    }

    #[test]
    fn read_regs_uses_single_write_read_transaction() {
        let bus = RecordingBus {
            response: std::vec![1, 2, 3, 4, 5, 6],
            ..RecordingBus::default()
        };
        let mut iface = I2cInterface::new(bus, 0x21);
        let mut buffer = [0u8; 6];
        block_on(iface.read_regs(0x01, &mut buffer)).expect("read");
        assert_eq!(buffer, [1, 2, 3, 4, 5, 6]);
        let bus = iface.release();
        assert_eq!(bus.frames, [(0x21, std::vec![0x01], 6)]);
    }

    #[test]
    fn empty_read_skips_the_bus() {
        let mut iface = I2cInterface::new(RecordingBus::default(), 0x20);
        block_on(iface.read_regs(0x01, &mut [])).expect("read");
        assert!(iface.release().frames.is_empty());
    }

    #[test]
    fn nack_is_reported_as_no_acknowledge() {
        let bus = RecordingBus {
            fail: Some(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)),
            ..RecordingBus::default()
        };
        let mut iface = I2cInterface::new(bus, 0x20);
        assert_eq!(block_on(iface.read_reg(0x0C)), Err(Error::NoAcknowledge));
    }

    #[test]
    fn arbitration_loss_is_reported_as_bus() {
        let bus = RecordingBus {
            fail: Some(ErrorKind::ArbitrationLoss),
            ..RecordingBus::default()
        };
        let mut iface = I2cInterface::new(bus, 0x20);
        assert_eq!(block_on(iface.write_reg(0x13, 0)), Err(Error::Bus));
    }
}
