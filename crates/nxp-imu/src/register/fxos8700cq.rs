//! FXOS8700CQ register definitions.

#![allow(dead_code)] // Full register map; not every entry is used.

/// FXOS8700CQ register addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Accelerometer data-ready status (FIFO disabled).
    Status = 0x00,
    /// X-axis acceleration MSB.
    OutXMsb = 0x01,
    /// X-axis acceleration LSB.
    OutXLsb = 0x02,
    /// Y-axis acceleration MSB.
    OutYMsb = 0x03,
    /// Y-axis acceleration LSB.
    OutYLsb = 0x04,
    /// Z-axis acceleration MSB.
    OutZMsb = 0x05,
    /// Z-axis acceleration LSB.
    OutZLsb = 0x06,
    /// FIFO setup.
    FSetup = 0x09,
    /// FIFO trigger configuration.
    TrigCfg = 0x0A,
    /// Current system mode.
    Sysmod = 0x0B,
    /// Interrupt source.
    IntSource = 0x0C,
    /// Device identifier.
    WhoAmI = 0x0D,
    /// Accelerometer full-scale range and high-pass output.
    XyzDataCfg = 0x0E,
    /// High-pass filter cutoff.
    HpFilterCutoff = 0x0F,
    /// Data rate, low-noise, fast-read and active mode.
    CtrlReg1 = 0x2A,
    /// Self-test, reset and oversampling modes.
    CtrlReg2 = 0x2B,
    /// Wake sources and interrupt pin electrical config.
    CtrlReg3 = 0x2C,
    /// Interrupt enables.
    CtrlReg4 = 0x2D,
    /// Interrupt routing.
    CtrlReg5 = 0x2E,
    /// Accelerometer X offset.
    OffX = 0x2F,
    /// Accelerometer Y offset.
    OffY = 0x30,
    /// Accelerometer Z offset.
    OffZ = 0x31,
    /// Magnetometer data-ready status.
    MDrStatus = 0x32,
    /// X-axis magnetic field MSB.
    MOutXMsb = 0x33,
    /// X-axis magnetic field LSB.
    MOutXLsb = 0x34,
    /// Y-axis magnetic field MSB.
    MOutYMsb = 0x35,
    /// Y-axis magnetic field LSB.
    MOutYLsb = 0x36,
    /// Z-axis magnetic field MSB.
    MOutZMsb = 0x37,
    /// Z-axis magnetic field LSB.
    MOutZLsb = 0x38,
    /// Die temperature (signed, 0.96 degC/LSB).
    Temp = 0x51,
    /// Magnetometer control 1 (auto-cal, oversampling, hybrid mode).
    MCtrlReg1 = 0x5B,
    /// Magnetometer control 2 (hybrid auto-increment, reset cadence).
    MCtrlReg2 = 0x5C,
    /// Magnetometer control 3.
    MCtrlReg3 = 0x5D,
}

impl Register {
    /// Returns the register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Expected WHO_AM_I value.
pub mod who_am_i {
    /// FXOS8700CQ device identifier.
    pub const EXPECTED: u8 = 0xC7;
}

/// STATUS / M_DR_STATUS register bits.
pub mod status {
    /// X, Y, Z overwrite.
    pub const ZYXOW: u8 = 0b1000_0000;
    /// New X, Y, Z data ready.
    pub const ZYXDR: u8 = 0b0000_1000;
}

/// XYZ_DATA_CFG register bits.
pub mod xyz_data_cfg {
    /// High-pass filtered output enable.
    pub const HPF_OUT: u8 = 0b0001_0000;
    /// Full-scale range mask.
    pub const FS_MASK: u8 = 0b0000_0011;
}

/// CTRL_REG1 register bits.
pub mod ctrl_reg1 {
    /// Auto-wake sample frequency mask.
    pub const ASLP_RATE_MASK: u8 = 0b1100_0000;
    /// Output data rate mask.
    pub const DR_MASK: u8 = 0b0011_1000;
    /// Output data rate shift.
    pub const DR_SHIFT: u8 = 3;
    /// Reduced noise mode.
    pub const LNOISE: u8 = 0b0000_0100;
    /// Fast read (8-bit samples).
    pub const F_READ: u8 = 0b0000_0010;
    /// Active mode.
    pub const ACTIVE: u8 = 0b0000_0001;
}

/// M_CTRL_REG1 register bits.
pub mod m_ctrl_reg1 {
    /// Magnetometer hard-iron auto-calibration.
    pub const M_ACAL: u8 = 0b1000_0000;
    /// One-shot magnetic reset.
    pub const M_RST: u8 = 0b0100_0000;
    /// One-shot measurement trigger.
    pub const M_OST: u8 = 0b0010_0000;
    /// Oversample ratio mask.
    pub const M_OS_MASK: u8 = 0b0001_1100;
    /// Oversample ratio shift.
    pub const M_OS_SHIFT: u8 = 2;
    /// Sensor mode mask (accel only, mag only, hybrid).
    pub const M_HMS_MASK: u8 = 0b0000_0011;
}
