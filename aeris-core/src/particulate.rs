//! Particulate mass concentration from duty-cycle ratios
//!
//! Converts a channel's low-time ratio into a calibrated mass
//! concentration via the manufacturer's cubic response curve. Pure
//! arithmetic; the accumulation that produces the ratio lives in
//! [`crate::pulse`].

use crate::constants::curves::{
    PM_CURVE_CUBIC, PM_CURVE_LINEAR, PM_CURVE_OFFSET, PM_CURVE_QUADRATIC,
};
use crate::constants::sampling::{CHANNEL_PM10, CHANNEL_PM25, PULSE_CHANNELS};

/// Mass concentrations derived from one closed sampling window
///
/// Stale-but-valid between windows: the values hold until the next window
/// closes, they are not recomputed every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConcentrationReading {
    /// Fine particulate matter (PM2.5) in µg/m³
    pub pm25: f32,
    /// Coarse particulate matter (PM10) in µg/m³
    pub pm10: f32,
}

impl ConcentrationReading {
    /// Derive concentrations from the ratio pair a window close produced
    pub fn from_ratios(ratios: [f32; PULSE_CHANNELS]) -> Self {
        Self {
            pm25: estimate(ratios[CHANNEL_PM25]),
            pm10: estimate(ratios[CHANNEL_PM10]),
        }
    }
}

/// Convert a low-time ratio into mass concentration (µg/m³)
///
/// Evaluates the empirical cubic `1.1·r³ − 3.8·r² + 520·r + 0.62`. The
/// curve is only characterized on [0, 1], so out-of-range ratios
/// (numerical noise from a late window close) are clamped to that domain
/// before evaluation; the result is therefore always finite and
/// non-negative.
pub fn estimate(ratio: f32) -> f32 {
    let r = ratio.clamp(0.0, 1.0);
    ((PM_CURVE_CUBIC * r + PM_CURVE_QUADRATIC) * r + PM_CURVE_LINEAR) * r + PM_CURVE_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_air_floor_at_zero_ratio() {
        assert!((estimate(0.0) - 0.62).abs() < 1e-6);
    }

    #[test]
    fn half_ratio_matches_curve() {
        // 1.1·0.125 − 3.8·0.25 + 520·0.5 + 0.62
        let expected = 1.1 * 0.125 - 3.8 * 0.25 + 520.0 * 0.5 + 0.62;
        assert!((estimate(0.5) - expected).abs() < 1e-4);
    }

    #[test]
    fn out_of_range_ratios_clamp() {
        assert_eq!(estimate(-0.3), estimate(0.0));
        assert_eq!(estimate(1.7), estimate(1.0));
    }

    #[test]
    fn reading_maps_channels() {
        let reading = ConcentrationReading::from_ratios([0.5, 0.1]);
        assert!((reading.pm25 - estimate(0.5)).abs() < 1e-6);
        assert!((reading.pm10 - estimate(0.1)).abs() < 1e-6);
    }
}
