//! Integer scaling helpers for raw sensor data.

use crate::config::common::{AccelRange, GyroRange};

/// Ratio representing a scale factor without floating-point math.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleFactor {
    /// Scale numerator.
    pub numerator: i32,
    /// Scale denominator.
    pub denominator: i32,
}

impl ScaleFactor {
    /// Creates a new scale ratio.
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Scales a raw count, truncating toward zero.
    ///
    /// The product is taken in `i64`; gyro numerators reach 1_600_000, which
    /// overflows `i32` for counts above 1342.
    pub const fn apply(self, raw: i16) -> i32 {
        (raw as i64 * self.numerator as i64 / self.denominator as i64) as i32
    }
}

/// Counts spanned by the positive half of a 14-bit sample.
const COUNTS_14_BIT: i32 = 8192;
/// Counts spanned by the positive half of a 16-bit sample.
const COUNTS_16_BIT: i32 = 32768;

/// Returns the gyroscope scale in milli-deg/s per LSB as a ratio.
pub const fn gyro_mdps_per_lsb(range: GyroRange) -> ScaleFactor {
    let span_dps = match range {
        GyroRange::Dps2000 => 1600,
        GyroRange::Dps1000 => 800,
        GyroRange::Dps500 => 400,
        GyroRange::Dps250 => 200,
    };
    ScaleFactor::new(span_dps * 1000, COUNTS_14_BIT)
}

/// Returns the accelerometer scale in milli-g per LSB as a ratio.
pub const fn accel_mg_per_lsb(range: AccelRange) -> ScaleFactor {
    ScaleFactor::new(range.g() as i32 * 1000, COUNTS_14_BIT)
}

/// Returns the magnetometer scale in nanotesla per LSB as a ratio.
pub const fn mag_nanotesla_per_lsb() -> ScaleFactor {
    ScaleFactor::new(10_000, COUNTS_16_BIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gyro_ratio_matches_float_resolution() {
        for range in [
            GyroRange::Dps2000,
            GyroRange::Dps1000,
            GyroRange::Dps500,
            GyroRange::Dps250,
        ] {
            let ratio = gyro_mdps_per_lsb(range);
            let float = ratio.numerator as f32 / ratio.denominator as f32 / 1000.0;
            assert_eq!(float, range.resolution());
        }
    }

    #[test]
    fn gyro_apply_handles_full_scale_counts() {
        let cases = [
            (GyroRange::Dps2000, 1_599_804),
            (GyroRange::Dps1000, 799_902),
            (GyroRange::Dps500, 399_951),
            (GyroRange::Dps250, 199_975),
        ];
        for (range, expected) in cases {
            let ratio = gyro_mdps_per_lsb(range);
            assert_eq!(ratio.apply(8191), expected);
            assert_eq!(ratio.apply(-8191), -expected);
        }
        assert_eq!(gyro_mdps_per_lsb(GyroRange::Dps500).apply(6000), 292_968);
        assert_eq!(gyro_mdps_per_lsb(GyroRange::Dps2000).apply(i16::MIN), -6_400_000);
    }

    #[test]
    fn accel_apply_converts_full_positive_span() {
        assert_eq!(accel_mg_per_lsb(AccelRange::G2).apply(8192), 2000);
        assert_eq!(accel_mg_per_lsb(AccelRange::G8).apply(-4096), -4000);
    }

    #[test]
    fn mag_ratio_values() {
        assert_eq!(mag_nanotesla_per_lsb(), ScaleFactor::new(10_000, 32_768));
        assert_eq!(mag_nanotesla_per_lsb().apply(32_767), 9_999);
    }
}
