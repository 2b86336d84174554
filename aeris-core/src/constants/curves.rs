//! Empirical Sensor Response Curves
//!
//! Coefficients for converting raw sensor quantities (duty-cycle ratios,
//! resistance ratios) into concentrations. All values are empirical fits
//! from manufacturer datasheets; none of them claim laboratory-grade
//! accuracy.

// ===== OPTICAL PARTICULATE SENSOR (duty-cycle type) =====

/// Cubic coefficient of the particulate response curve.
///
/// The sensor datasheet fits mass concentration (µg/m³) against the
/// low-time ratio `r` of a sampling window as a cubic:
///
/// ```text
/// c = 1.1·r³ − 3.8·r² + 520·r + 0.62
/// ```
///
/// Source: manufacturer characterization curve for low-pulse-occupancy
/// dust sensors.
pub const PM_CURVE_CUBIC: f32 = 1.1;

/// Quadratic coefficient of the particulate response curve (see
/// [`PM_CURVE_CUBIC`]).
pub const PM_CURVE_QUADRATIC: f32 = -3.8;

/// Linear coefficient of the particulate response curve; dominates the
/// response over the nominal ratio domain.
pub const PM_CURVE_LINEAR: f32 = 520.0;

/// Constant offset of the particulate response curve; the sensor's
/// clean-air floor in µg/m³.
pub const PM_CURVE_OFFSET: f32 = 0.62;

// ===== RESISTIVE GAS SENSOR (MQ-type) =====

/// Scale factor `a` of the carbon monoxide power law `CO = a·(Rs/Ro)^b`.
///
/// Source: MQ-135 datasheet log-log characterization, CO trace.
pub const CO_CURVE_SCALE: f32 = 605.18;

/// Exponent `b` of the carbon monoxide power law (see [`CO_CURVE_SCALE`]).
pub const CO_CURVE_EXPONENT: f32 = -3.937;

/// Additive floor `c` of the carbon monoxide estimate, in ppm.
///
/// Kept explicit even though it is zero for this sensor: the formula shape
/// `a·(Rs/Ro)^b + c` is shared across MQ-family curve fits.
pub const CO_CURVE_FLOOR_PPM: f32 = 0.0;

/// Scale factor of the ammonia power law `NH3 = 2.5·(Rs/Ro)^(−2.8)`.
///
/// Source: MQ-135 datasheet log-log characterization, NH3 trace.
pub const NH3_CURVE_SCALE: f32 = 2.5;

/// Exponent of the ammonia power law (see [`NH3_CURVE_SCALE`]).
pub const NH3_CURVE_EXPONENT: f32 = -2.8;

/// Smallest resistance ratio fed into the power laws.
///
/// A ratio of zero (ADC saturation, shorted element) would hit the
/// negative-exponent singularity and produce an infinity. Ratios at or
/// below zero are clamped here; the resulting estimates then saturate at
/// the ceilings in [`crate::constants::limits`].
pub const MIN_RESISTANCE_RATIO: f32 = 1e-4;

// ===== CLIMATE CORRECTION OF THE GAS CURVES =====
//
// MQ-type elements read high in cold or humid air. The standard correction
// divides the measured resistance by a factor fitted against temperature
// and humidity:
//
//   f(t, h) = A·t² − B·t + C − (h − 33)·D

/// Quadratic temperature term `A` of the gas correction factor.
pub const GAS_CORRECTION_A: f32 = 0.00035;

/// Linear temperature term `B` of the gas correction factor.
pub const GAS_CORRECTION_B: f32 = 0.02718;

/// Constant term `C` of the gas correction factor.
pub const GAS_CORRECTION_C: f32 = 1.39538;

/// Humidity slope `D` of the gas correction factor, anchored at 33 %RH.
pub const GAS_CORRECTION_D: f32 = 0.0018;
