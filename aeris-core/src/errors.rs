//! Error Types for Sensor Acquisition Faults
//!
//! ## Design Philosophy
//!
//! Aeris errors follow the embedded conventions used throughout the crate:
//!
//! 1. **Small Size**: Variants carry at most an inline `&'static str` or a
//!    couple of machine words, so errors are cheap to return from hot paths.
//!
//! 2. **No Heap Allocation**: No `String`, no boxing. Deterministic memory
//!    usage on devices with a few KB of RAM.
//!
//! 3. **Copy Semantics**: Errors implement `Copy` for efficient return
//!    without move semantics complications.
//!
//! 4. **Seam-Local**: Errors exist only at the hardware seams (the climate
//!    driver and the telemetry sink). The engine itself never escalates an
//!    error out of the tick: every fault resolves to a best-effort reading
//!    plus an advisory flag. See [`crate::climate`] for the recovery path.

use thiserror_no_std::Error;

/// Result type for telemetry emission
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Faults reported by a climate (temperature/humidity) driver
///
/// Every variant is treated the same way by [`crate::ClimateReader`]: the
/// attempt counts as failed and the bounded retry loop decides what happens
/// next. The distinction exists for logging and driver diagnostics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateError {
    /// Sensor produced a value that is not a number (failed checksum,
    /// truncated transfer)
    #[error("sensor returned an invalid value")]
    InvalidValue,

    /// Value decoded fine but lies outside the sensor's operating range
    #[error("reading outside sensor operating range")]
    OutOfRange,

    /// Communication with the sensor failed
    #[error("sensor bus error: {reason}")]
    Bus {
        /// Driver-specific description of the bus fault
        reason: &'static str,
    },
}

/// Faults reported when emitting a telemetry line
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryError {
    /// Formatted line did not fit the fixed-capacity buffer
    #[error("telemetry line exceeds {capacity} byte buffer")]
    LineOverflow {
        /// Capacity of the line buffer in bytes
        capacity: usize,
    },

    /// The byte sink rejected the write
    #[error("telemetry sink error: {reason}")]
    Sink {
        /// Sink-specific description of the fault
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ClimateError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidValue => defmt::write!(fmt, "invalid value"),
            Self::OutOfRange => defmt::write!(fmt, "out of range"),
            Self::Bus { reason } => defmt::write!(fmt, "bus error: {}", reason),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TelemetryError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::LineOverflow { capacity } => {
                defmt::write!(fmt, "line exceeds {} bytes", capacity)
            }
            Self::Sink { reason } => defmt::write!(fmt, "sink error: {}", reason),
        }
    }
}
