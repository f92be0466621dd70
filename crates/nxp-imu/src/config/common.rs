use crate::error::Error;

/// Gyroscope full-scale range selection (CTRL_REG0.FS).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GyroRange {
    /// 2000 deg/s nominal range.
    Dps2000 = 0b00,
    /// 1000 deg/s nominal range.
    Dps1000 = 0b01,
    /// 500 deg/s nominal range.
    Dps500 = 0b10,
    /// 250 deg/s nominal range.
    Dps250 = 0b11,
}

impl GyroRange {
    /// Returns the CTRL_REG0 range bits.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the resolution in deg/s per count of a 14-bit sample.
    ///
    /// Counts are taken over 8192 with spans of 1600/800/400/200 deg/s, the
    /// table the board firmware shipped with, not the nominal range names.
    pub const fn resolution(self) -> f32 {
        match self {
            Self::Dps2000 => 1600.0 / 8192.0,
            Self::Dps1000 => 800.0 / 8192.0,
            Self::Dps500 => 400.0 / 8192.0,
            Self::Dps250 => 200.0 / 8192.0,
        }
    }
}

impl TryFrom<u8> for GyroRange {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0b00 => Ok(Self::Dps2000),
            0b01 => Ok(Self::Dps1000),
            0b10 => Ok(Self::Dps500),
            0b11 => Ok(Self::Dps250),
            _ => Err(Error::InvalidConfig),
        }
    }
}

/// Gyroscope output data rate selection (CTRL_REG1.DR).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GyroOutputDataRate {
    /// 800 Hz.
    Hz800 = 0b000,
    /// 400 Hz.
    Hz400 = 0b001,
    /// 200 Hz.
    Hz200 = 0b010,
    /// 100 Hz.
    Hz100 = 0b011,
    /// 50 Hz.
    Hz50 = 0b100,
    /// 25 Hz.
    Hz25 = 0b101,
    /// 12.5 Hz (0b111 selects the same rate).
    Hz12_5 = 0b110,
}

impl GyroOutputDataRate {
    /// Returns the CTRL_REG1 data rate bits.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the output data rate in milli-hertz.
    pub const fn hz_milli(self) -> u32 {
        match self {
            Self::Hz800 => 800_000,
            Self::Hz400 => 400_000,
            Self::Hz200 => 200_000,
            Self::Hz100 => 100_000,
            Self::Hz50 => 50_000,
            Self::Hz25 => 25_000,
            Self::Hz12_5 => 12_500,
        }
    }
}

impl TryFrom<u8> for GyroOutputDataRate {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0b000 => Ok(Self::Hz800),
            0b001 => Ok(Self::Hz400),
            0b010 => Ok(Self::Hz200),
            0b011 => Ok(Self::Hz100),
            0b100 => Ok(Self::Hz50),
            0b101 => Ok(Self::Hz25),
            0b110 | 0b111 => Ok(Self::Hz12_5),
            _ => Err(Error::InvalidConfig),
        }
    }
}

/// Accelerometer full-scale range selection (XYZ_DATA_CFG.FS).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelRange {
    /// +/-2 g.
    G2 = 0b00,
    /// +/-4 g.
    G4 = 0b01,
    /// +/-8 g.
    G8 = 0b10,
}

impl AccelRange {
    /// Returns the XYZ_DATA_CFG range bits.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the full-scale range in g.
    pub const fn g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
        }
    }

    /// Returns the resolution in g per count of a 14-bit sample.
    pub const fn resolution(self) -> f32 {
        match self {
            Self::G2 => 2.0 / 8192.0,
            Self::G4 => 4.0 / 8192.0,
            Self::G8 => 8.0 / 8192.0,
        }
    }
}

impl TryFrom<u8> for AccelRange {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0b00 => Ok(Self::G2),
            0b01 => Ok(Self::G4),
            0b10 => Ok(Self::G8),
            _ => Err(Error::InvalidConfig),
        }
    }
}

/// Accelerometer output data rate selection (CTRL_REG1.DR).
///
/// Rates are for a single sensor; in hybrid mode the accelerometer and the
/// magnetometer each run at half the selected rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelOutputDataRate {
    /// 800 Hz.
    Hz800 = 0b000,
    /// 400 Hz.
    Hz400 = 0b001,
    /// 200 Hz.
    Hz200 = 0b010,
    /// 100 Hz.
    Hz100 = 0b011,
    /// 50 Hz.
    Hz50 = 0b100,
    /// 12.5 Hz.
    Hz12_5 = 0b101,
    /// 6.25 Hz.
    Hz6_25 = 0b110,
    /// 1.5625 Hz.
    Hz1_5625 = 0b111,
}

impl AccelOutputDataRate {
    /// Returns the CTRL_REG1 data rate bits.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the single-sensor output data rate in milli-hertz.
    pub const fn hz_milli(self) -> u32 {
        match self {
            Self::Hz800 => 800_000,
            Self::Hz400 => 400_000,
            Self::Hz200 => 200_000,
            Self::Hz100 => 100_000,
            Self::Hz50 => 50_000,
            Self::Hz12_5 => 12_500,
            Self::Hz6_25 => 6_250,
            Self::Hz1_5625 => 1_563,
        }
    }

    /// Returns the per-sensor rate in milli-hertz for the given sensor mode.
    pub const fn effective_hz_milli(self, mode: MagSensorMode) -> u32 {
        match mode {
            MagSensorMode::Hybrid => self.hz_milli() / 2,
            MagSensorMode::AccelOnly | MagSensorMode::MagOnly => self.hz_milli(),
        }
    }
}

impl TryFrom<u8> for AccelOutputDataRate {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0b000 => Ok(Self::Hz800),
            0b001 => Ok(Self::Hz400),
            0b010 => Ok(Self::Hz200),
            0b011 => Ok(Self::Hz100),
            0b100 => Ok(Self::Hz50),
            0b101 => Ok(Self::Hz12_5),
            0b110 => Ok(Self::Hz6_25),
            0b111 => Ok(Self::Hz1_5625),
            _ => Err(Error::InvalidConfig),
        }
    }
}

/// Magnetometer oversample ratio code (M_CTRL_REG1.M_OS).
///
/// The effective ratio depends on the output data rate; higher codes trade
/// current for lower noise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MagOversampleRatio {
    /// Code 0.
    Osr0 = 0,
    /// Code 1.
    Osr1 = 1,
    /// Code 2.
    Osr2 = 2,
    /// Code 3.
    Osr3 = 3,
    /// Code 4.
    Osr4 = 4,
    /// Code 5.
    Osr5 = 5,
    /// Code 6.
    Osr6 = 6,
    /// Code 7.
    Osr7 = 7,
}

impl MagOversampleRatio {
    /// Returns the M_CTRL_REG1 oversample bits.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for MagOversampleRatio {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0 => Ok(Self::Osr0),
            1 => Ok(Self::Osr1),
            2 => Ok(Self::Osr2),
            3 => Ok(Self::Osr3),
            4 => Ok(Self::Osr4),
            5 => Ok(Self::Osr5),
            6 => Ok(Self::Osr6),
            7 => Ok(Self::Osr7),
            _ => Err(Error::InvalidConfig),
        }
    }
}

/// Accelerometer / magnetometer sensor selection (M_CTRL_REG1.M_HMS).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MagSensorMode {
    /// Accelerometer only.
    AccelOnly = 0b00,
    /// Magnetometer only.
    MagOnly = 0b01,
    /// Accelerometer and magnetometer (hybrid mode).
    Hybrid = 0b11,
}

impl MagSensorMode {
    /// Returns the M_CTRL_REG1 sensor mode bits.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for MagSensorMode {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0b00 => Ok(Self::AccelOnly),
            0b01 => Ok(Self::MagOnly),
            0b11 => Ok(Self::Hybrid),
            _ => Err(Error::InvalidConfig),
        }
    }
}

/// Magnetometer resolution in microtesla per count.
///
/// Fixed by the chip: 10 uT over 32768 counts.
pub const MAG_RESOLUTION: f32 = 10.0 / 32768.0;
