//! Gyroscope interrupt routing (CTRL_REG2).

use crate::register::fxas21002c::ctrl_reg2;

/// Interrupt pin selection (device pins).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptPin {
    /// Interrupt pin 1.
    Int1,
    /// Interrupt pin 2.
    Int2,
}

/// Interrupt pin polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptPolarity {
    /// Asserted low.
    ActiveLow,
    /// Asserted high.
    ActiveHigh,
}

/// Interrupt pin output driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptDrive {
    /// Push-pull output.
    PushPull,
    /// Open-drain output.
    OpenDrain,
}

/// FXAS21002C interrupt enable and routing configuration (CTRL_REG2).
///
/// The default routes FIFO and rate-threshold interrupts to INT2 with both
/// disabled, enables data-ready on INT1, active high, push-pull (0x0E).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroInterruptConfig {
    /// Enable the FIFO interrupt.
    pub fifo: bool,
    /// Pin the FIFO interrupt is routed to.
    pub fifo_pin: InterruptPin,
    /// Enable the rate-threshold interrupt.
    pub rate_threshold: bool,
    /// Pin the rate-threshold interrupt is routed to.
    pub rate_threshold_pin: InterruptPin,
    /// Enable the data-ready interrupt.
    pub data_ready: bool,
    /// Pin the data-ready interrupt is routed to.
    pub data_ready_pin: InterruptPin,
    /// Pin polarity.
    pub polarity: InterruptPolarity,
    /// Pin output driver.
    pub drive: InterruptDrive,
}

impl GyroInterruptConfig {
    /// Default interrupt configuration.
    pub const DEFAULT: Self = Self {
        fifo: false,
        fifo_pin: InterruptPin::Int2,
        rate_threshold: false,
        rate_threshold_pin: InterruptPin::Int2,
        data_ready: true,
        data_ready_pin: InterruptPin::Int1,
        polarity: InterruptPolarity::ActiveHigh,
        drive: InterruptDrive::PushPull,
    };

    /// Creates a new interrupt configuration.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Enables or disables the FIFO interrupt on the given pin.
    #[must_use]
    pub const fn with_fifo(mut self, enable: bool, pin: InterruptPin) -> Self {
        self.fifo = enable;
        self.fifo_pin = pin;
        self
    }

    /// Enables or disables the rate-threshold interrupt on the given pin.
    #[must_use]
    pub const fn with_rate_threshold(mut self, enable: bool, pin: InterruptPin) -> Self {
        self.rate_threshold = enable;
        self.rate_threshold_pin = pin;
        self
    }

    /// Enables or disables the data-ready interrupt on the given pin.
    #[must_use]
    pub const fn with_data_ready(mut self, enable: bool, pin: InterruptPin) -> Self {
        self.data_ready = enable;
        self.data_ready_pin = pin;
        self
    }

    /// Sets the pin polarity.
    #[must_use]
    pub const fn with_polarity(mut self, polarity: InterruptPolarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Sets the pin output driver.
    #[must_use]
    pub const fn with_drive(mut self, drive: InterruptDrive) -> Self {
        self.drive = drive;
        self
    }

    pub(crate) const fn ctrl_reg2_value(self) -> u8 {
        let mut value = 0;
        if matches!(self.fifo_pin, InterruptPin::Int1) {
            value |= ctrl_reg2::INT_CFG_FIFO;
        }
        if self.fifo {
            value |= ctrl_reg2::INT_EN_FIFO;
        }
        if matches!(self.rate_threshold_pin, InterruptPin::Int1) {
            value |= ctrl_reg2::INT_CFG_RT;
        }
        if self.rate_threshold {
            value |= ctrl_reg2::INT_EN_RT;
        }
        if matches!(self.data_ready_pin, InterruptPin::Int1) {
            value |= ctrl_reg2::INT_CFG_DRDY;
        }
        if self.data_ready {
            value |= ctrl_reg2::INT_EN_DRDY;
        }
        if matches!(self.polarity, InterruptPolarity::ActiveHigh) {
            value |= ctrl_reg2::IPOL;
        }
        if matches!(self.drive, InterruptDrive::OpenDrain) {
            value |= ctrl_reg2::PP_OD;
        }
        value
    }
}

impl Default for GyroInterruptConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_board_routing() {
        assert_eq!(GyroInterruptConfig::DEFAULT.ctrl_reg2_value(), 0x0E);
    }

    #[test]
    fn rate_threshold_on_int1_open_drain() {
        let config = GyroInterruptConfig::new()
            .with_data_ready(false, InterruptPin::Int2)
            .with_rate_threshold(true, InterruptPin::Int1)
            .with_polarity(InterruptPolarity::ActiveLow)
            .with_drive(InterruptDrive::OpenDrain);
        assert_eq!(
            config.ctrl_reg2_value(),
            ctrl_reg2::INT_CFG_RT | ctrl_reg2::INT_EN_RT | ctrl_reg2::PP_OD
        );
    }
}
