//! Fixed-point conversion helpers.

use super::scale::{accel_mg_per_lsb, gyro_mdps_per_lsb, mag_nanotesla_per_lsb};
use super::{AccelRaw, GyroRaw, MagRaw, ScaleFactor};
use crate::config::common::{AccelRange, GyroRange};

/// Fixed-point number type used for sensor conversions (I32F32).
pub type Fixed = crate::fixed_crate::types::I32F32;

/// Fixed-point gyroscope sample in dps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GyroFixed {
    /// X-axis angular rate in dps.
    pub x: Fixed,
    /// Y-axis angular rate in dps.
    pub y: Fixed,
    /// Z-axis angular rate in dps.
    pub z: Fixed,
}

/// Fixed-point accelerometer sample in g.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccelFixed {
    /// X-axis acceleration in g.
    pub x: Fixed,
    /// Y-axis acceleration in g.
    pub y: Fixed,
    /// Z-axis acceleration in g.
    pub z: Fixed,
}

/// Fixed-point magnetometer sample in uT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MagFixed {
    /// X-axis field in uT.
    pub x: Fixed,
    /// Y-axis field in uT.
    pub y: Fixed,
    /// Z-axis field in uT.
    pub z: Fixed,
}

// Ratios are in milli-units. Divide first so the product stays inside I32F32.
fn scale(raw: i16, ratio: ScaleFactor) -> Fixed {
    Fixed::from_num(raw) / Fixed::from_num(ratio.denominator) * Fixed::from_num(ratio.numerator)
        / Fixed::from_num(1000)
}

/// Converts gyroscope raw counts to dps.
pub fn gyro_to_dps(raw: GyroRaw, range: GyroRange) -> GyroFixed {
    let ratio = gyro_mdps_per_lsb(range);
    GyroFixed {
        x: scale(raw.x, ratio),
        y: scale(raw.y, ratio),
        z: scale(raw.z, ratio),
    }
}

/// Converts accelerometer raw counts to g.
pub fn accel_to_g(raw: AccelRaw, range: AccelRange) -> AccelFixed {
    let ratio = accel_mg_per_lsb(range);
    AccelFixed {
        x: scale(raw.x, ratio),
        y: scale(raw.y, ratio),
        z: scale(raw.z, ratio),
    }
}

/// Converts magnetometer raw counts to uT.
pub fn mag_to_microtesla(raw: MagRaw) -> MagFixed {
    let ratio = mag_nanotesla_per_lsb();
    MagFixed {
        x: scale(raw.x, ratio),
        y: scale(raw.y, ratio),
        z: scale(raw.z, ratio),
    }
}
