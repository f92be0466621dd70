//! Sensor data readout helpers.

#[cfg(feature = "fixed")]
pub(crate) mod fixed;
pub(crate) mod scale;

pub use scale::{ScaleFactor, accel_mg_per_lsb, gyro_mdps_per_lsb, mag_nanotesla_per_lsb};

use crate::register::AXIS_BLOCK_LEN;

/// Decodes one 14-bit, left-justified, big-endian axis value.
///
/// The shift is arithmetic, so a negative high byte stays negative.
pub(crate) const fn decode_axis(msb: u8, lsb: u8) -> i16 {
    i16::from_be_bytes([msb, lsb]) >> 2
}

const fn decode_xyz(bytes: [u8; AXIS_BLOCK_LEN]) -> (i16, i16, i16) {
    (
        decode_axis(bytes[0], bytes[1]),
        decode_axis(bytes[2], bytes[3]),
        decode_axis(bytes[4], bytes[5]),
    )
}

/// Raw gyroscope sample (14-bit counts).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroRaw {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl GyroRaw {
    pub(crate) const fn from_bytes(bytes: [u8; AXIS_BLOCK_LEN]) -> Self {
        let (x, y, z) = decode_xyz(bytes);
        Self { x, y, z }
    }
}

/// Raw accelerometer sample (14-bit counts).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelRaw {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl AccelRaw {
    pub(crate) const fn from_bytes(bytes: [u8; AXIS_BLOCK_LEN]) -> Self {
        let (x, y, z) = decode_xyz(bytes);
        Self { x, y, z }
    }
}

/// Raw magnetometer sample.
///
/// Decoded with the same two-bit shift as the other sensors, which keeps the
/// counts consistent with [`MAG_RESOLUTION`](crate::MAG_RESOLUTION).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagRaw {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl MagRaw {
    pub(crate) const fn from_bytes(bytes: [u8; AXIS_BLOCK_LEN]) -> Self {
        let (x, y, z) = decode_xyz(bytes);
        Self { x, y, z }
    }
}

/// Raw die temperature (signed 8-bit register).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureRaw {
    /// Raw temperature count.
    pub value: i8,
}

impl TemperatureRaw {
    pub(crate) const fn from_byte(byte: u8) -> Self {
        Self {
            value: byte as i8,
        }
    }
}
