//! Temperature/Humidity Acquisition with Bounded Retries
//!
//! Capacitive climate sensors fail reads routinely: checksum errors on the
//! single-wire bus, not-ready windows after a previous read, occasional
//! garbage values. The reader in this module absorbs all of that so the
//! rest of the engine always sees a real number:
//!
//! - up to [`CLIMATE_RETRY_ATTEMPTS`] read attempts per cycle, with a
//!   fixed [`CLIMATE_RETRY_DELAY_MS`] pause between failures — the one
//!   intentionally blocking path in the engine, bounded well under 300 ms
//!   and entered only on the 2 s climate cadence, never per tick;
//! - a last-known-good cache substituted when every attempt fails, with
//!   `valid = false` as the advisory flag;
//! - plausibility validation (finite, within the sensor's operating
//!   range) so a decoded-but-absurd sample counts as a failure too.
//!
//! A returned [`ClimateReading`] never contains NaN or infinity.

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

use crate::constants::limits::{HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT, TEMP_MAX_C, TEMP_MIN_C};
use crate::constants::sampling::{CLIMATE_RETRY_ATTEMPTS, CLIMATE_RETRY_DELAY_MS};
use crate::traits::{ClimateSensor, DelayProvider, RawClimate};

/// A validated temperature/humidity reading
///
/// `valid = false` means the sensor could not be read this cycle and the
/// values are the last ones that did validate. Before the first successful
/// read the cache holds 0.0 / 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    /// Temperature in degrees Celsius
    pub temperature_c: f32,
    /// Relative humidity in percent
    pub humidity_pct: f32,
    /// Whether this cycle's read succeeded (false = cached fallback)
    pub valid: bool,
}

impl Default for ClimateReading {
    fn default() -> Self {
        Self {
            temperature_c: 0.0,
            humidity_pct: 0.0,
            valid: false,
        }
    }
}

/// Reads the climate sensor with bounded retries and a last-known-good
/// fallback
#[derive(Debug, Clone)]
pub struct ClimateReader {
    last_good: ClimateReading,
    retry_attempts: u32,
    retry_delay_ms: u32,
}

impl Default for ClimateReader {
    fn default() -> Self {
        Self {
            last_good: ClimateReading::default(),
            retry_attempts: CLIMATE_RETRY_ATTEMPTS,
            retry_delay_ms: CLIMATE_RETRY_DELAY_MS,
        }
    }
}

impl ClimateReader {
    /// Create a reader with the default retry budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with a custom retry budget (tests and bring-up)
    pub fn with_retries(retry_attempts: u32, retry_delay_ms: u32) -> Self {
        Self {
            last_good: ClimateReading::default(),
            retry_attempts: retry_attempts.max(1),
            retry_delay_ms,
        }
    }

    /// Attempt one climate read cycle
    ///
    /// On success the cache is updated and the fresh values returned with
    /// `valid = true`. If every attempt fails, the cached values come back
    /// with `valid = false` — never an error, never a non-finite number.
    pub fn read<S, D>(&mut self, sensor: &mut S, delay: &mut D) -> ClimateReading
    where
        S: ClimateSensor,
        D: DelayProvider,
    {
        for attempt in 0..self.retry_attempts {
            match sensor.measure() {
                Ok(raw) if plausible(&raw) => {
                    self.last_good = ClimateReading {
                        temperature_c: raw.temperature_c,
                        humidity_pct: raw.humidity_pct,
                        valid: true,
                    };
                    return self.last_good;
                }
                // Implausible sample, hard error, or not-ready: all count
                // as a failed attempt
                _ => {
                    if attempt + 1 < self.retry_attempts {
                        delay.delay_ms(self.retry_delay_ms);
                    }
                }
            }
        }

        log_warn!(
            "climate read failed after {} attempts, using cached {:.1}C / {:.1}%",
            self.retry_attempts,
            self.last_good.temperature_c,
            self.last_good.humidity_pct,
        );

        ClimateReading {
            valid: false,
            ..self.last_good
        }
    }

    /// The most recent reading that validated
    pub fn last_good(&self) -> ClimateReading {
        self.last_good
    }
}

/// Whether a raw sample is worth trusting: finite and inside the sensor's
/// operating range
fn plausible(raw: &RawClimate) -> bool {
    raw.temperature_c.is_finite()
        && raw.humidity_pct.is_finite()
        && (TEMP_MIN_C..=TEMP_MAX_C).contains(&raw.temperature_c)
        && (HUMIDITY_MIN_PCT..=HUMIDITY_MAX_PCT).contains(&raw.humidity_pct)
}
