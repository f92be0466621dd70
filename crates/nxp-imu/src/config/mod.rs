//! Configuration helpers for the FXAS21002C and FXOS8700CQ.

pub(crate) mod common;

pub use common::{
    AccelOutputDataRate, AccelRange, MAG_RESOLUTION, MagOversampleRatio, MagSensorMode,
};
pub use common::{GyroOutputDataRate, GyroRange};

use crate::interrupt::GyroInterruptConfig;
use crate::register::{fxas21002c, fxos8700cq};
use crate::threshold::RateThresholdConfig;

/// FXAS21002C configuration applied by `init`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Full-scale range.
    pub range: GyroRange,
    /// Output data rate.
    pub odr: GyroOutputDataRate,
    /// Interrupt enable and routing.
    pub interrupts: GyroInterruptConfig,
    /// Rate-threshold detection.
    pub rate_threshold: RateThresholdConfig,
}

impl GyroConfig {
    /// Default gyroscope configuration (250 dps, 200 Hz).
    pub const DEFAULT: Self = Self {
        range: GyroRange::Dps250,
        odr: GyroOutputDataRate::Hz200,
        interrupts: GyroInterruptConfig::DEFAULT,
        rate_threshold: RateThresholdConfig::DEFAULT,
    };

    /// Creates a new gyroscope configuration with default interrupt settings.
    pub const fn new(range: GyroRange, odr: GyroOutputDataRate) -> Self {
        Self {
            range,
            odr,
            ..Self::DEFAULT
        }
    }

    /// Returns a new configuration with the provided range.
    #[must_use]
    pub const fn with_range(self, range: GyroRange) -> Self {
        Self { range, ..self }
    }

    /// Returns a new configuration with the provided output data rate.
    #[must_use]
    pub const fn with_odr(self, odr: GyroOutputDataRate) -> Self {
        Self { odr, ..self }
    }

    /// Returns a new configuration with the provided interrupt routing.
    #[must_use]
    pub const fn with_interrupts(self, interrupts: GyroInterruptConfig) -> Self {
        Self { interrupts, ..self }
    }

    /// Returns a new configuration with the provided rate-threshold detection.
    #[must_use]
    pub const fn with_rate_threshold(self, rate_threshold: RateThresholdConfig) -> Self {
        Self {
            rate_threshold,
            ..self
        }
    }

    pub(crate) const fn ctrl_reg0_value(self) -> u8 {
        self.range.bits() & fxas21002c::ctrl_reg0::FS_MASK
    }

    /// CTRL_REG1 in standby with only the data rate field set.
    pub(crate) const fn ctrl_reg1_value(self) -> u8 {
        (self.odr.bits() << fxas21002c::ctrl_reg1::DR_SHIFT) & fxas21002c::ctrl_reg1::DR_MASK
    }
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// FXOS8700CQ configuration applied by `init`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelMagConfig {
    /// Accelerometer full-scale range.
    pub range: AccelRange,
    /// Output data rate (halved per sensor in hybrid mode).
    pub odr: AccelOutputDataRate,
    /// Magnetometer oversample ratio.
    pub mag_oversample: MagOversampleRatio,
    /// Accelerometer / magnetometer selection.
    pub mode: MagSensorMode,
    /// Magnetometer hard-iron auto-calibration.
    pub mag_auto_calibration: bool,
}

impl AccelMagConfig {
    /// Default configuration (2 g, 200 Hz, OSR code 5, hybrid, auto-calibration).
    pub const DEFAULT: Self = Self {
        range: AccelRange::G2,
        odr: AccelOutputDataRate::Hz200,
        mag_oversample: MagOversampleRatio::Osr5,
        mode: MagSensorMode::Hybrid,
        mag_auto_calibration: true,
    };

    /// Creates a new configuration with default magnetometer settings.
    pub const fn new(range: AccelRange, odr: AccelOutputDataRate) -> Self {
        Self {
            range,
            odr,
            ..Self::DEFAULT
        }
    }

    /// Returns a new configuration with the provided range.
    #[must_use]
    pub const fn with_range(self, range: AccelRange) -> Self {
        Self { range, ..self }
    }

    /// Returns a new configuration with the provided output data rate.
    #[must_use]
    pub const fn with_odr(self, odr: AccelOutputDataRate) -> Self {
        Self { odr, ..self }
    }

    /// Returns a new configuration with the provided oversample ratio.
    #[must_use]
    pub const fn with_mag_oversample(self, mag_oversample: MagOversampleRatio) -> Self {
        Self {
            mag_oversample,
            ..self
        }
    }

    /// Returns a new configuration with the provided sensor mode.
    #[must_use]
    pub const fn with_mode(self, mode: MagSensorMode) -> Self {
        Self { mode, ..self }
    }

    /// Enables or disables magnetometer auto-calibration.
    #[must_use]
    pub const fn with_mag_auto_calibration(self, enable: bool) -> Self {
        Self {
            mag_auto_calibration: enable,
            ..self
        }
    }

    pub(crate) const fn xyz_data_cfg_value(self) -> u8 {
        self.range.bits() & fxos8700cq::xyz_data_cfg::FS_MASK
    }

    /// Merges the data rate field into an existing CTRL_REG1 value.
    pub(crate) const fn ctrl_reg1_value(self, current: u8) -> u8 {
        use fxos8700cq::ctrl_reg1::{DR_MASK, DR_SHIFT};
        (current & !DR_MASK) | ((self.odr.bits() << DR_SHIFT) & DR_MASK)
    }

    pub(crate) const fn m_ctrl_reg1_value(self) -> u8 {
        use fxos8700cq::m_ctrl_reg1::{M_ACAL, M_HMS_MASK, M_OS_MASK, M_OS_SHIFT};
        let mut value = ((self.mag_oversample.bits() << M_OS_SHIFT) & M_OS_MASK)
            | (self.mode.bits() & M_HMS_MASK);
        if self.mag_auto_calibration {
            value |= M_ACAL;
        }
        value
    }
}

impl Default for AccelMagConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gyro_ctrl_reg1_places_rate_at_bits_4_2() {
        let config = GyroConfig::new(GyroRange::Dps500, GyroOutputDataRate::Hz12_5);
        assert_eq!(config.ctrl_reg1_value(), 0b0001_1000);
        assert_eq!(config.ctrl_reg0_value(), 0b10);
    }

    #[test]
    fn gyro_default_ctrl_values() {
        let config = GyroConfig::DEFAULT;
        assert_eq!(config.ctrl_reg0_value(), 0b11);
        assert_eq!(config.ctrl_reg1_value(), 0b0000_1000);
    }

    #[test]
    fn accel_ctrl_reg1_replaces_only_rate_field() {
        let config = AccelMagConfig::DEFAULT.with_odr(AccelOutputDataRate::Hz1_5625);
        // LNOISE and ACTIVE survive, a stale rate does not.
        assert_eq!(config.ctrl_reg1_value(0b0001_0101), 0b0011_1101);
    }

    #[test]
    fn default_m_ctrl_reg1_is_acal_osr5_hybrid() {
        assert_eq!(AccelMagConfig::DEFAULT.m_ctrl_reg1_value(), 0x80 | (5 << 2) | 0x03);
    }

    #[test]
    fn m_ctrl_reg1_without_auto_calibration() {
        let config = AccelMagConfig::DEFAULT
            .with_mag_auto_calibration(false)
            .with_mode(MagSensorMode::AccelOnly)
            .with_mag_oversample(MagOversampleRatio::Osr7);
        assert_eq!(config.m_ctrl_reg1_value(), 7 << 2);
    }
}
