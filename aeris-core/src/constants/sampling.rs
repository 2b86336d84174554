//! Sampling Cadences and Retry Budgets
//!
//! The scheduler runs four periodic activities off one non-blocking tick;
//! these constants define their intervals and the one bounded blocking
//! budget the engine allows itself.

/// Number of optical particulate channels sampled per tick.
pub const PULSE_CHANNELS: usize = 2;

/// Channel index carrying the fine-particle (PM2.5) signal.
pub const CHANNEL_PM25: usize = 0;

/// Channel index carrying the coarse-particle (PM10) signal.
pub const CHANNEL_PM10: usize = 1;

/// Duration of one particulate sampling window in milliseconds.
///
/// Low-signal time is accumulated per channel over this window; the
/// duty-cycle ratio (and from it the concentration) is derived once per
/// window close. 30 s is the sensor manufacturer's recommended integration
/// time for a stable reading.
pub const SAMPLING_WINDOW_MS: u64 = 30_000;

/// Interval between climate reads and gas re-estimates, in milliseconds.
pub const CLIMATE_INTERVAL_MS: u64 = 2_000;

/// Interval between telemetry emissions, in milliseconds.
///
/// Deliberately a separate constant from [`CLIMATE_INTERVAL_MS`] even
/// though both default to 2 s: the two cadences are independently gated.
pub const TELEMETRY_INTERVAL_MS: u64 = 2_000;

/// Maximum read attempts per climate sampling cycle.
pub const CLIMATE_RETRY_ATTEMPTS: u32 = 3;

/// Delay between failed climate read attempts, in milliseconds.
///
/// The one intentionally blocking path in the engine. Worst case per
/// cycle: `(CLIMATE_RETRY_ATTEMPTS - 1) × CLIMATE_RETRY_DELAY_MS`, well
/// under the 300 ms budget, and only on the 2 s climate cadence.
pub const CLIMATE_RETRY_DELAY_MS: u32 = 100;
