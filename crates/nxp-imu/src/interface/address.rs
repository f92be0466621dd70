//! I2C address definitions.

/// FXAS21002C I2C addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroAddress {
    /// 0x20 (SA0 = low).
    Primary,
    /// 0x21 (SA0 = high).
    Secondary,
}

impl GyroAddress {
    /// Returns the 7-bit I2C address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Primary => 0x20,
            Self::Secondary => 0x21,
        }
    }
}

/// FXOS8700CQ I2C addresses, selected by the SA1:SA0 strap pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelMagAddress {
    /// 0x1C (SA1 = 0, SA0 = 0).
    Sa00,
    /// 0x1D (SA1 = 0, SA0 = 1).
    Sa01,
    /// 0x1E (SA1 = 1, SA0 = 0).
    Sa10,
    /// 0x1F (SA1 = 1, SA0 = 1).
    Sa11,
}

impl AccelMagAddress {
    /// Returns the 7-bit I2C address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Sa00 => 0x1C,
            Self::Sa01 => 0x1D,
            Self::Sa10 => 0x1E,
            Self::Sa11 => 0x1F,
        }
    }
}
