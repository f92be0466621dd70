//! Async `#![no_std]` drivers for the NXP
//! [FXAS21002C](https://www.nxp.com/part/FXAS21002C) 3-axis gyroscope and the
//! [FXOS8700CQ](https://www.nxp.com/part/FXOS8700CQ) 3-axis accelerometer +
//! magnetometer.
//!
//! Both chips share one register-access shape: a 7-bit I2C address, single
//! register writes, and auto-incrementing block reads with a repeated start.
//! The drivers sit on `embedded-hal-async` and avoid any core-ports
//! dependencies so they can be reused in adapter or BSP layers.
//!
//! # Quick start (I2C)
//!
//! ```rust,no_run
//! use ph_nxp_imu::{AccelMagAddress, Fxas21002cI2c, Fxos8700cqI2c, GyroAddress};
//! # use embedded_hal_async::i2c::I2c;
//! #
//! # async fn example<I2C: I2c>(gyro_bus: I2C, accel_bus: I2C) -> Result<(), ph_nxp_imu::Error> {
//! let mut gyro: Fxas21002cI2c<I2C> = Fxas21002cI2c::new(gyro_bus, GyroAddress::Primary);
//! gyro.init().await?;
//! let rate = gyro.read_gyro_raw().await?;
//! let z_dps = f32::from(rate.z) * gyro.resolution();
//!
//! let mut accel_mag: Fxos8700cqI2c<I2C> = Fxos8700cqI2c::new(accel_bus, AccelMagAddress::Sa00);
//! accel_mag.init().await?;
//! let accel = accel_mag.read_accel_raw().await?;
//! let mag = accel_mag.read_mag_raw().await?;
//! # let _ = (z_dps, accel, mag);
//! # Ok(())
//! # }
//! ```
//!
//! # Standby and active
//!
//! Configuration registers only take writes in standby. `init` always drops
//! to standby first, applies the configuration, then activates the chip; the
//! `standby`/`active` pair is also public for callers that reconfigure single
//! registers through `write_register`.
//!
//! # Scaling helpers
//!
//! Use [`gyro_mdps_per_lsb`], [`accel_mg_per_lsb`], and
//! [`mag_nanotesla_per_lsb`] to convert raw counts to milli-units without
//! floating-point math, or the drivers' `resolution` accessors for `f32`.
//!
//! # Fixed-point conversions
//!
//! Enable the `fixed` feature to access fixed-point helpers that convert raw
//! readings into dps, g, and uT using `I32F32` integer math.

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports
)]

#[cfg(feature = "fixed")]
extern crate fixed as fixed_crate;

mod accel_mag;
mod config;
mod data;
mod device;
mod error;
mod gyro;
mod interface;
mod interrupt;
mod register;
mod threshold;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::I2cInterface;
pub use interface::{AccelMagAddress, GyroAddress};

// Configuration
pub use config::{
    AccelMagConfig, AccelOutputDataRate, AccelRange, MagOversampleRatio, MagSensorMode,
};
pub use config::{GyroConfig, GyroOutputDataRate, GyroRange, MAG_RESOLUTION};

// Drivers
pub use accel_mag::{Fxos8700cq, Fxos8700cqI2c};
pub use gyro::{Fxas21002c, Fxas21002cI2c};

// Register maps
pub use register::fxas21002c::Register as GyroRegister;
pub use register::fxos8700cq::Register as AccelMagRegister;

// Data types
pub use data::{AccelRaw, GyroRaw, MagRaw, TemperatureRaw};
pub use data::{ScaleFactor, accel_mg_per_lsb, gyro_mdps_per_lsb, mag_nanotesla_per_lsb};

// Features
pub use error::Error;
pub use interrupt::{GyroInterruptConfig, InterruptDrive, InterruptPin, InterruptPolarity};
pub use threshold::{DebounceMode, RateThresholdConfig};

// Fixed-point conversions (feature-gated)
#[cfg(feature = "fixed")]
pub use data::fixed::{
    AccelFixed, Fixed, GyroFixed, MagFixed, accel_to_g, gyro_to_dps, mag_to_microtesla,
};
