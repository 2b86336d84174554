//! Hardware seams for the sampling engine
//!
//! The engine never touches pins, buses, or UARTs directly. Everything it
//! needs from the board comes through the small traits in this module, so
//! the same engine runs against real drivers on device and against scripted
//! mocks in tests.
//!
//! Seams:
//! - [`PulseInput`]: raw signal level of the optical particulate channels
//! - [`ClimateSensor`]: non-blocking temperature/humidity measurement
//! - [`GasSensor`]: present resistance of the gas sensing element
//! - [`TelemetrySink`]: byte sink for the serial telemetry stream
//! - [`DelayProvider`]: the one bounded blocking delay the engine uses

use crate::errors::ClimateError;

/// Raw signal levels of the optical particulate sensor channels
///
/// Called once per channel on every scheduler tick (target >= 100 Hz), so
/// implementations must be a plain pin read with no waiting.
pub trait PulseInput {
    /// Whether `channel`'s output signal is currently low
    ///
    /// Low output corresponds to particles in the optical chamber; the
    /// accumulated low time per window is proportional to particle density.
    fn is_low(&mut self, channel: usize) -> bool;
}

/// One raw temperature/humidity sample as reported by the driver
///
/// Values are unvalidated: the driver hands over whatever it decoded, and
/// [`crate::ClimateReader`] decides whether to trust it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawClimate {
    /// Temperature in degrees Celsius
    pub temperature_c: f32,
    /// Relative humidity in percent
    pub humidity_pct: f32,
}

/// Non-blocking temperature/humidity measurement
///
/// Uses the `nb` convention: `WouldBlock` means the sensor has no fresh
/// sample yet. The retry loop in [`crate::ClimateReader`] counts both
/// `WouldBlock` and hard errors as failed attempts.
pub trait ClimateSensor {
    /// Attempt to read one sample
    fn measure(&mut self) -> nb::Result<RawClimate, ClimateError>;
}

/// Present resistance of the resistive gas sensing element
pub trait GasSensor {
    /// Sensing-element resistance in ohms, derived from the ADC voltage
    /// divider (see [`crate::gas::resistance_from_adc`])
    fn resistance_ohms(&mut self) -> f32;
}

/// Byte sink for the line-oriented telemetry stream
///
/// Written only from the scheduler tick, so implementations need no
/// internal synchronization.
pub trait TelemetrySink {
    /// Write one complete, newline-terminated telemetry line
    fn write_line(&mut self, line: &str) -> Result<(), crate::errors::TelemetryError>;
}

/// Bounded blocking delay
///
/// The engine calls this only from the climate retry path, never from the
/// per-tick hot path, and never for more than
/// [`crate::constants::sampling::CLIMATE_RETRY_DELAY_MS`] at a time.
pub trait DelayProvider {
    /// Block the caller for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// Thread-sleep delay (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct ThreadDelay;

#[cfg(feature = "std")]
impl DelayProvider for ThreadDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(ms as u64));
    }
}
