//! Interface abstraction for register I/O.

pub(crate) mod address;
pub(crate) mod i2c;

pub use address::{AccelMagAddress, GyroAddress};
pub use i2c::I2cInterface;

use crate::error::Error;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Minimal async register I/O for the device core.
///
/// Every call is one complete bus transaction. Implementations must either
/// fill the whole read buffer or fail; a short read is [`Error::PartialRead`],
/// never a partially updated buffer.
#[allow(async_fn_in_trait)]
pub trait Interface: sealed::Sealed {
    /// Reads a single register.
    async fn read_reg(&mut self, reg: u8) -> Result<u8, Error>;
    /// Reads a contiguous block of registers into `buffer` (repeated start).
    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error>;
    /// Writes a single register.
    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error>;
}
