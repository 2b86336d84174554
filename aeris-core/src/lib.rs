//! Core sampling engine for Aeris
//!
//! Turns raw sensor signals (a duty-cycle particulate sensor, a flaky
//! temperature/humidity sensor, a resistive gas sensor) into calibrated
//! concentrations and a standardized Air Quality Index, on hardware with
//! no operating system.
//!
//! Key constraints:
//! - Single-threaded cooperative tick, no blocking in the hot path
//! - No heap allocation while sampling
//! - The control loop must stay responsive for display and telemetry
//!
//! ```no_run
//! use aeris_core::{aqi, particulate};
//!
//! // A channel low for half the sampling window
//! let concentration = particulate::estimate(0.5);
//! let index = aqi::pm25_aqi(concentration);
//! assert!(index > 300);
//! ```
//!
//! The engine never stops producing a number: sensor glitches degrade to
//! last-known-good values and an advisory flag, never to a halted loop.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod aqi;
pub mod climate;
pub mod constants;
pub mod errors;
pub mod gas;
pub mod particulate;
pub mod pulse;
pub mod scheduler;
pub mod telemetry;
pub mod time;
pub mod traits;

// Public API
pub use aqi::{pm25_aqi, AqiCategory};
pub use climate::{ClimateReader, ClimateReading};
pub use errors::{ClimateError, TelemetryError, TelemetryResult};
pub use gas::{GasBaseline, GasReading};
pub use particulate::ConcentrationReading;
pub use pulse::PulseDutyAccumulator;
pub use scheduler::{Cadence, SampleScheduler, Snapshot};
pub use telemetry::TelemetryRecord;
pub use time::{TimeSource, Timestamp};
pub use traits::{ClimateSensor, DelayProvider, GasSensor, PulseInput, RawClimate, TelemetrySink};

/// Crate version string, from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
