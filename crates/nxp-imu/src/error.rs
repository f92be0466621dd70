//! Error type for the FXAS21002C / FXOS8700CQ drivers.

use core::fmt;

use embedded_hal_async::i2c::ErrorKind;

/// Error type for driver operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus fault (arbitration loss, overrun, or an unspecified bus error).
    Bus,
    /// The device did not acknowledge its address or a data byte.
    NoAcknowledge,
    /// Fewer bytes arrived than the read requested.
    PartialRead,
    /// A configuration code does not map to any register bit pattern.
    InvalidConfig,
    /// WHO_AM_I did not match the expected chip.
    WrongDevice,
}

impl Error {
    /// Maps an `embedded-hal` bus error kind onto the driver error.
    pub(crate) fn from_bus_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(_) => Self::NoAcknowledge,
            _ => Self::Bus,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Bus => "bus error",
            Self::NoAcknowledge => "device did not acknowledge",
            Self::PartialRead => "short register read",
            Self::InvalidConfig => "unrecognized configuration code",
            Self::WrongDevice => "unexpected WHO_AM_I value",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for Error {}
