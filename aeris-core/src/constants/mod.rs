//! Constants for the Aeris sampling engine
//!
//! Centralized, documented numeric values used throughout the engine.
//! Calibration coefficients come from sensor datasheets and the published
//! EPA breakpoint tables; cadences come from the deployed firmware's
//! timing budget.
//!
//! ## Organization
//!
//! - **Curves**: empirical response-curve coefficients for the particulate
//!   and gas sensors
//! - **Sampling**: windows, cadences, and retry budgets for the scheduler
//! - **Limits**: plausible sensor operating ranges and output ceilings
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Reference the datasheet or standard a value comes from
//! 3. Use descriptive names that include units

/// Empirical response-curve coefficients for particulate and gas sensors.
pub mod curves;

/// Sampling windows, cadences, and retry budgets.
pub mod sampling;

/// Sensor operating ranges and output ceilings.
pub mod limits;

// Re-export commonly used constants for convenience
pub use curves::{
    CO_CURVE_EXPONENT, CO_CURVE_SCALE, MIN_RESISTANCE_RATIO, NH3_CURVE_EXPONENT, NH3_CURVE_SCALE,
};

pub use sampling::{
    CHANNEL_PM10, CHANNEL_PM25, CLIMATE_INTERVAL_MS, CLIMATE_RETRY_ATTEMPTS,
    CLIMATE_RETRY_DELAY_MS, PULSE_CHANNELS, SAMPLING_WINDOW_MS, TELEMETRY_INTERVAL_MS,
};

pub use limits::{
    AQI_MAX, CO_MAX_PPM, HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT, NH3_MAX_PPM, TEMP_MAX_C, TEMP_MIN_C,
};
