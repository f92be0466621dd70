//! FXAS21002C register definitions.
//!
//! Full register map from the datasheet plus the bit fields the driver
//! touches.

#![allow(dead_code)] // Full register map; not every entry is used.

/// FXAS21002C register addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Alias for DR_STATUS or F_STATUS depending on FIFO mode.
    Status = 0x00,
    /// X-axis angular rate MSB.
    OutXMsb = 0x01,
    /// X-axis angular rate LSB.
    OutXLsb = 0x02,
    /// Y-axis angular rate MSB.
    OutYMsb = 0x03,
    /// Y-axis angular rate LSB.
    OutYLsb = 0x04,
    /// Z-axis angular rate MSB.
    OutZMsb = 0x05,
    /// Z-axis angular rate LSB.
    OutZLsb = 0x06,
    /// Data-ready status.
    DrStatus = 0x07,
    /// FIFO status.
    FStatus = 0x08,
    /// FIFO setup.
    FSetup = 0x09,
    /// FIFO event.
    FEvent = 0x0A,
    /// Interrupt source flags.
    IntSrcFlag = 0x0B,
    /// Device identifier.
    WhoAmI = 0x0C,
    /// Bandwidth, high-pass filter and full-scale range.
    CtrlReg0 = 0x0D,
    /// Rate threshold configuration.
    RtCfg = 0x0E,
    /// Rate threshold event source.
    RtSrc = 0x0F,
    /// Rate threshold value.
    RtThs = 0x10,
    /// Rate threshold debounce counter.
    RtCount = 0x11,
    /// Die temperature (signed, 1 degC/LSB).
    Temp = 0x12,
    /// Operating mode and output data rate.
    CtrlReg1 = 0x13,
    /// Interrupt enable, routing and pin electrical config.
    CtrlReg2 = 0x14,
    /// Auto-increment and external power control.
    CtrlReg3 = 0x15,
}

impl Register {
    /// Returns the register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Expected WHO_AM_I value.
pub mod who_am_i {
    /// FXAS21002C device identifier.
    pub const EXPECTED: u8 = 0xD7;
}

/// DR_STATUS register bits.
pub mod dr_status {
    /// X, Y, Z overwrite.
    pub const ZYXOW: u8 = 0b1000_0000;
    /// New X, Y, Z data ready.
    pub const ZYXDR: u8 = 0b0000_1000;
}

/// CTRL_REG0 register bits.
pub mod ctrl_reg0 {
    /// Low-pass filter bandwidth mask.
    pub const BW_MASK: u8 = 0b1100_0000;
    /// High-pass filter enable.
    pub const HPF_EN: u8 = 0b0000_0100;
    /// Full-scale range mask.
    pub const FS_MASK: u8 = 0b0000_0011;
}

/// CTRL_REG1 register bits.
pub mod ctrl_reg1 {
    /// Software reset.
    pub const RST: u8 = 0b0100_0000;
    /// Self-test enable.
    pub const ST: u8 = 0b0010_0000;
    /// Output data rate mask.
    pub const DR_MASK: u8 = 0b0001_1100;
    /// Output data rate shift.
    pub const DR_SHIFT: u8 = 2;
    /// Active mode.
    pub const ACTIVE: u8 = 0b0000_0010;
    /// Ready mode.
    pub const READY: u8 = 0b0000_0001;
    /// Bits cleared to enter standby.
    pub const MODE_MASK: u8 = ACTIVE | READY;
}

/// CTRL_REG2 register bits.
pub mod ctrl_reg2 {
    /// Route FIFO interrupt to INT1 (INT2 when clear).
    pub const INT_CFG_FIFO: u8 = 0b1000_0000;
    /// FIFO interrupt enable.
    pub const INT_EN_FIFO: u8 = 0b0100_0000;
    /// Route rate-threshold interrupt to INT1 (INT2 when clear).
    pub const INT_CFG_RT: u8 = 0b0010_0000;
    /// Rate-threshold interrupt enable.
    pub const INT_EN_RT: u8 = 0b0001_0000;
    /// Route data-ready interrupt to INT1 (INT2 when clear).
    pub const INT_CFG_DRDY: u8 = 0b0000_1000;
    /// Data-ready interrupt enable.
    pub const INT_EN_DRDY: u8 = 0b0000_0100;
    /// Interrupt polarity (1 = active high).
    pub const IPOL: u8 = 0b0000_0010;
    /// Output driver (1 = open drain, 0 = push-pull).
    pub const PP_OD: u8 = 0b0000_0001;
}

/// RT_CFG register bits.
pub mod rt_cfg {
    /// Latch rate-threshold events until RT_SRC is read.
    pub const ELE: u8 = 0b0000_1000;
    /// Z-axis rate-threshold event enable.
    pub const ZTEFE: u8 = 0b0000_0100;
    /// Y-axis rate-threshold event enable.
    pub const YTEFE: u8 = 0b0000_0010;
    /// X-axis rate-threshold event enable.
    pub const XTEFE: u8 = 0b0000_0001;
}

/// RT_THS register bits.
pub mod rt_ths {
    /// Debounce counter mode (1 = decrement, 0 = clear on sub-threshold).
    pub const DBCNTM: u8 = 0b1000_0000;
    /// Unsigned 7-bit threshold mask (THS * FSR / 128).
    pub const THS_MASK: u8 = 0b0111_1111;
}
