//! Register maps for the FXAS21002C and FXOS8700CQ.
//!
//! Each chip gets its own address enum plus per-register bit modules, so the
//! driver never writes a magic number.

pub(crate) mod fxas21002c;
pub(crate) mod fxos8700cq;

/// Length of one big-endian X/Y/Z output block (MSB, LSB per axis).
pub(crate) const AXIS_BLOCK_LEN: usize = 6;
