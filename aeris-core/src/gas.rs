//! Gas Concentration Estimation from Resistance Ratios
//!
//! MQ-type gas sensors are a heated element whose resistance `Rs` drops in
//! the presence of target gases. Concentration is read off datasheet
//! power-law curves against the ratio `Rs/Ro`, where `Ro` is the element's
//! resistance in clean air — captured once at startup and held for the
//! process lifetime ([`GasBaseline`]).
//!
//! Two estimates are produced:
//!
//! ```text
//! CO  = 605.18 · (Rs/Ro)^−3.937        (climate-corrected Rs)
//! NH3 = 2.5    · (Rs/Ro)^−2.8
//! ```
//!
//! The element also responds to temperature and humidity; when a valid
//! climate reading is available the measured resistance is divided by the
//! standard correction factor before entering the CO curve. With no valid
//! climate the raw resistance is used as-is.
//!
//! All functions here are pure: same inputs, same outputs, no hidden
//! state. Degenerate ratios (zero or negative resistance from ADC
//! saturation) are clamped to [`MIN_RESISTANCE_RATIO`] and the outputs
//! saturate at the ceilings in [`crate::constants::limits`], so the
//! estimates are always finite and non-negative.

use libm::powf;

use crate::climate::ClimateReading;
use crate::constants::curves::{
    CO_CURVE_EXPONENT, CO_CURVE_FLOOR_PPM, CO_CURVE_SCALE, GAS_CORRECTION_A, GAS_CORRECTION_B,
    GAS_CORRECTION_C, GAS_CORRECTION_D, MIN_RESISTANCE_RATIO, NH3_CURVE_EXPONENT, NH3_CURVE_SCALE,
};
use crate::constants::limits::{CO_MAX_PPM, NH3_MAX_PPM};

/// Clean-air baseline resistance (Ro), captured once at startup
///
/// The startup calibration assumes ambient air at boot is clean; the
/// baseline is never revisited afterwards. Drift of the element over the
/// device lifetime is an accepted limitation, not a runtime error.
#[derive(Debug, Clone, Copy)]
pub struct GasBaseline {
    ro_ohms: f32,
}

impl GasBaseline {
    /// Capture the baseline from a clean-air resistance sample
    ///
    /// A degenerate sample (zero, negative, or non-finite) is clamped to a
    /// small positive floor so later ratio math stays finite.
    pub fn calibrate(rs_ohms: f32) -> Self {
        let ro_ohms = if rs_ohms.is_finite() {
            rs_ohms.max(MIN_RESISTANCE_RATIO)
        } else {
            MIN_RESISTANCE_RATIO
        };
        Self { ro_ohms }
    }

    /// Baseline resistance in ohms
    pub fn ro_ohms(&self) -> f32 {
        self.ro_ohms
    }
}

/// Gas estimates derived from one resistance sample
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GasReading {
    /// Carbon monoxide estimate in ppm
    pub co_ppm: f32,
    /// Ammonia estimate in ppm
    pub nh3_ppm: f32,
}

impl GasReading {
    /// Derive both estimates from a resistance sample, correcting the CO
    /// curve for climate when a valid reading is available
    pub fn from_resistance(rs_ohms: f32, baseline: &GasBaseline, climate: &ClimateReading) -> Self {
        Self {
            co_ppm: corrected_co(rs_ohms, baseline, climate),
            nh3_ppm: nh3(rs_ohms, baseline),
        }
    }
}

/// Carbon monoxide estimate (ppm), climate-corrected when possible
///
/// Applies the correction factor to the measured resistance only if
/// `climate.valid`; a degraded climate cycle falls back to the uncorrected
/// resistance rather than correcting with stale values of unknown age.
pub fn corrected_co(rs_ohms: f32, baseline: &GasBaseline, climate: &ClimateReading) -> f32 {
    let rs = if climate.valid {
        let factor = correction_factor(climate.temperature_c, climate.humidity_pct);
        if factor > f32::EPSILON {
            rs_ohms / factor
        } else {
            rs_ohms
        }
    } else {
        rs_ohms
    };

    let ratio = resistance_ratio(rs, baseline);
    let ppm = CO_CURVE_SCALE * powf(ratio, CO_CURVE_EXPONENT) + CO_CURVE_FLOOR_PPM;
    ppm.clamp(0.0, CO_MAX_PPM)
}

/// Ammonia estimate (ppm) from the uncorrected resistance ratio
pub fn nh3(rs_ohms: f32, baseline: &GasBaseline) -> f32 {
    let ratio = resistance_ratio(rs_ohms, baseline);
    let ppm = NH3_CURVE_SCALE * powf(ratio, NH3_CURVE_EXPONENT);
    ppm.clamp(0.0, NH3_MAX_PPM)
}

/// Sensing-element resistance from a raw ADC sample across a voltage
/// divider
///
/// `Rs = RL · (counts_max − counts) / counts`; a zero or saturated sample
/// yields the clamped extremes rather than a division by zero.
pub fn resistance_from_adc(counts: u16, counts_max: u16, load_ohms: f32) -> f32 {
    let counts = counts.min(counts_max);
    if counts == 0 {
        // Open circuit: effectively infinite, cap at something huge but
        // finite
        return load_ohms * counts_max as f32;
    }
    load_ohms * (counts_max - counts) as f32 / counts as f32
}

/// `Rs/Ro` with the degenerate-input guard applied
fn resistance_ratio(rs_ohms: f32, baseline: &GasBaseline) -> f32 {
    if !rs_ohms.is_finite() {
        return MIN_RESISTANCE_RATIO;
    }
    (rs_ohms / baseline.ro_ohms).max(MIN_RESISTANCE_RATIO)
}

/// Temperature/humidity correction factor for the heated element
fn correction_factor(temperature_c: f32, humidity_pct: f32) -> f32 {
    GAS_CORRECTION_A * temperature_c * temperature_c - GAS_CORRECTION_B * temperature_c
        + GAS_CORRECTION_C
        - (humidity_pct - 33.0) * GAS_CORRECTION_D
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_climate() -> ClimateReading {
        ClimateReading::default()
    }

    fn valid_climate(t: f32, h: f32) -> ClimateReading {
        ClimateReading {
            temperature_c: t,
            humidity_pct: h,
            valid: true,
        }
    }

    #[test]
    fn clean_air_co_is_near_curve_scale() {
        // Rs == Ro, no correction: ratio 1, CO = 605.18 ppm
        let baseline = GasBaseline::calibrate(10_000.0);
        let ppm = corrected_co(10_000.0, &baseline, &invalid_climate());
        assert!((ppm - 605.18).abs() < 1e-2);
    }

    #[test]
    fn higher_resistance_means_less_co() {
        let baseline = GasBaseline::calibrate(10_000.0);
        let low = corrected_co(40_000.0, &baseline, &invalid_climate());
        let high = corrected_co(12_000.0, &baseline, &invalid_climate());
        assert!(low < high);
    }

    #[test]
    fn zero_resistance_saturates_at_ceiling() {
        let baseline = GasBaseline::calibrate(10_000.0);
        let co = corrected_co(0.0, &baseline, &invalid_climate());
        let ammonia = nh3(0.0, &baseline);
        assert_eq!(co, CO_MAX_PPM);
        assert_eq!(ammonia, NH3_MAX_PPM);
        assert!(co.is_finite() && ammonia.is_finite());
    }

    #[test]
    fn negative_resistance_saturates_at_ceiling() {
        let baseline = GasBaseline::calibrate(10_000.0);
        assert_eq!(nh3(-5.0, &baseline), NH3_MAX_PPM);
    }

    #[test]
    fn nh3_is_idempotent() {
        let baseline = GasBaseline::calibrate(8_200.0);
        let first = nh3(5_000.0, &baseline);
        let second = nh3(5_000.0, &baseline);
        assert_eq!(first, second);
    }

    #[test]
    fn climate_correction_changes_co_estimate() {
        let baseline = GasBaseline::calibrate(10_000.0);
        let uncorrected = corrected_co(20_000.0, &baseline, &invalid_climate());
        // Cold, dry air: factor > 1, corrected Rs drops, CO rises
        let corrected = corrected_co(20_000.0, &baseline, &valid_climate(-10.0, 20.0));
        assert!(corrected > uncorrected);
    }

    #[test]
    fn degenerate_baseline_is_clamped() {
        let baseline = GasBaseline::calibrate(0.0);
        assert!(baseline.ro_ohms() > 0.0);
        let baseline = GasBaseline::calibrate(f32::NAN);
        assert!(baseline.ro_ohms() > 0.0);
    }

    #[test]
    fn adc_conversion_handles_extremes() {
        // Mid-scale on a 12-bit ADC with a 10k load
        let mid = resistance_from_adc(2048, 4095, 10_000.0);
        assert!((mid - 10_000.0 * 2047.0 / 2048.0).abs() < 1.0);

        // Saturated and zero samples stay finite
        assert_eq!(resistance_from_adc(4095, 4095, 10_000.0), 0.0);
        assert!(resistance_from_adc(0, 4095, 10_000.0).is_finite());
    }
}
