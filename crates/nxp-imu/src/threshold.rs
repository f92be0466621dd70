//! Gyroscope rate-threshold detection (RT_CFG / RT_THS / RT_COUNT).

use crate::register::fxas21002c::{rt_cfg, rt_ths};

/// Debounce counter behaviour when the rate drops below the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceMode {
    /// Clear the counter.
    Clear,
    /// Decrement the counter.
    Decrement,
}

/// Rate-threshold detection configuration.
///
/// The threshold is `threshold * FSR / 128`; an event fires once the rate has
/// stayed above it for `debounce_count` consecutive samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RateThresholdConfig {
    /// Detect on the X axis.
    pub x: bool,
    /// Detect on the Y axis.
    pub y: bool,
    /// Detect on the Z axis.
    pub z: bool,
    /// Latch events until RT_SRC is read.
    pub latch: bool,
    /// Unsigned 7-bit threshold (0..127).
    pub threshold: u8,
    /// Debounce counter behaviour.
    pub debounce_mode: DebounceMode,
    /// Debounce sample count.
    pub debounce_count: u8,
}

impl RateThresholdConfig {
    /// Default configuration: all axes, roughly one tenth of FSR, 4 samples.
    pub const DEFAULT: Self = Self {
        x: true,
        y: true,
        z: true,
        latch: false,
        threshold: 0x0D,
        debounce_mode: DebounceMode::Clear,
        debounce_count: 4,
    };

    /// Creates a configuration with the given threshold on all axes.
    pub const fn new(threshold: u8) -> Self {
        Self {
            threshold,
            ..Self::DEFAULT
        }
    }

    /// Selects which axes take part in detection.
    #[must_use]
    pub const fn with_axes(mut self, x: bool, y: bool, z: bool) -> Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Enables or disables event latching.
    #[must_use]
    pub const fn with_latch(mut self, enable: bool) -> Self {
        self.latch = enable;
        self
    }

    /// Sets the 7-bit threshold; the top bit is ignored.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the debounce counter mode and count.
    #[must_use]
    pub const fn with_debounce(mut self, mode: DebounceMode, count: u8) -> Self {
        self.debounce_mode = mode;
        self.debounce_count = count;
        self
    }

    pub(crate) const fn rt_cfg_value(self) -> u8 {
        let mut value = 0;
        if self.latch {
            value |= rt_cfg::ELE;
        }
        if self.z {
            value |= rt_cfg::ZTEFE;
        }
        if self.y {
            value |= rt_cfg::YTEFE;
        }
        if self.x {
            value |= rt_cfg::XTEFE;
        }
        value
    }

    pub(crate) const fn rt_ths_value(self) -> u8 {
        let mode = match self.debounce_mode {
            DebounceMode::Clear => 0,
            DebounceMode::Decrement => rt_ths::DBCNTM,
        };
        mode | (self.threshold & rt_ths::THS_MASK)
    }

    pub(crate) const fn rt_count_value(self) -> u8 {
        self.debounce_count
    }
}

impl Default for RateThresholdConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_register_values() {
        let config = RateThresholdConfig::DEFAULT;
        assert_eq!(config.rt_cfg_value(), 0x07);
        assert_eq!(config.rt_ths_value(), 0x0D);
        assert_eq!(config.rt_count_value(), 0x04);
    }

    #[test]
    fn threshold_is_masked_to_seven_bits() {
        let config = RateThresholdConfig::new(0xFF).with_debounce(DebounceMode::Clear, 1);
        assert_eq!(config.rt_ths_value(), 0x7F);
    }

    #[test]
    fn latch_and_decrement_set_their_bits() {
        let config = RateThresholdConfig::new(0x10)
            .with_axes(false, false, true)
            .with_latch(true)
            .with_debounce(DebounceMode::Decrement, 8);
        assert_eq!(config.rt_cfg_value(), rt_cfg::ELE | rt_cfg::ZTEFE);
        assert_eq!(config.rt_ths_value(), rt_ths::DBCNTM | 0x10);
        assert_eq!(config.rt_count_value(), 8);
    }
}
