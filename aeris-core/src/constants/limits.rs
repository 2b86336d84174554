//! Sensor Operating Ranges and Output Ceilings
//!
//! Plausibility bounds for raw readings and saturation ceilings for
//! derived estimates. The downstream ingest service enforces the same
//! ranges; keeping them aligned means every line the device emits is
//! accepted.

// ===== CLIMATE SENSOR OPERATING RANGE =====

/// Minimum temperature the climate sensor can report reliably (°C).
///
/// Source: DHT-class capacitive sensor datasheets (-40 °C lower bound).
pub const TEMP_MIN_C: f32 = -40.0;

/// Maximum temperature the climate sensor can report reliably (°C).
pub const TEMP_MAX_C: f32 = 85.0;

/// Minimum relative humidity (%). Physical lower limit.
pub const HUMIDITY_MIN_PCT: f32 = 0.0;

/// Maximum relative humidity (%). Physical upper limit.
pub const HUMIDITY_MAX_PCT: f32 = 100.0;

// ===== DERIVED ESTIMATE CEILINGS =====

/// Ceiling for the carbon monoxide estimate (ppm).
///
/// Matches the upper bound of the published CO curve; beyond it the
/// power-law fit has no support and the ingest service rejects the value.
pub const CO_MAX_PPM: f32 = 1000.0;

/// Ceiling for the ammonia estimate (ppm).
pub const NH3_MAX_PPM: f32 = 500.0;

/// Ceiling for particulate mass concentration (µg/m³), either channel.
pub const PM_MAX_UG_M3: f32 = 1000.0;

/// Maximum Air Quality Index value. Concentrations above the last
/// breakpoint saturate here rather than extrapolate.
pub const AQI_MAX: u16 = 500;
