//! Cooperative Sample Scheduling
//!
//! One non-blocking `tick` drives four periodic activities, each gated by
//! its own elapsed-time check against its own interval:
//!
//! 1. **pulse poll** — every tick, unconditional;
//! 2. **window close** — every tick, fires when the 30 s sampling window
//!    has elapsed; recomputes concentrations and AQI from the fresh
//!    ratios;
//! 3. **climate + gas** — every 2 s: climate read (the one bounded
//!    blocking path), gas re-estimate, snapshot refresh for the display;
//! 4. **telemetry** — every 2 s on its own independent timer.
//!
//! The ordering within a tick is exactly that list, so a consumer never
//! observes an AQI computed from a concentration newer than the pulse
//! data it was derived from.
//!
//! There are no sleeps anywhere in the tick: the caller's main loop calls
//! `tick(now)` as fast as it likes (target >= 100 Hz for usable edge
//! detection) and everything else is timestamp comparison. There is no
//! terminal state; the loop runs until power loss.

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

use crate::aqi::pm25_aqi;
use crate::climate::{ClimateReader, ClimateReading};
use crate::constants::sampling::{CLIMATE_INTERVAL_MS, PULSE_CHANNELS, TELEMETRY_INTERVAL_MS};
use crate::gas::{GasBaseline, GasReading};
use crate::particulate::ConcentrationReading;
use crate::pulse::PulseDutyAccumulator;
use crate::telemetry::{self, TelemetryRecord};
use crate::time::Timestamp;
use crate::traits::{ClimateSensor, DelayProvider, GasSensor, PulseInput, TelemetrySink};

/// Elapsed-time gate for one periodic activity
///
/// Fires on the first check after construction, then every `interval_ms`.
/// When it fires it rebases to the firing instant, so a stalled loop
/// produces one catch-up run, not a burst.
#[derive(Debug, Clone)]
pub struct Cadence {
    interval_ms: u64,
    last_run: Option<Timestamp>,
}

impl Cadence {
    /// Create a gate with the given interval
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_run: None,
        }
    }

    /// Whether the activity is due at `now`; rebases the gate when it is
    pub fn due(&mut self, now: Timestamp) -> bool {
        let fire = match self.last_run {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.interval_ms,
        };
        if fire {
            self.last_run = Some(now);
        }
        fire
    }

    /// Configured interval in milliseconds
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

/// Latest computed values, for the display renderer and status endpoint
///
/// Each field reflects its own most-recently-computed value; the snapshot
/// is not a synchronized sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct Snapshot {
    /// Last climate cycle's reading (cached fallback if degraded)
    pub climate: ClimateReading,
    /// Concentrations from the last closed sampling window
    pub concentrations: ConcentrationReading,
    /// Gas estimates from the last climate cycle
    pub gas: GasReading,
    /// AQI derived from the last closed window's PM2.5
    pub aqi: u16,
}

impl Snapshot {
    /// Assemble the telemetry record for the current values
    pub fn to_record(&self) -> TelemetryRecord {
        TelemetryRecord {
            temperature_c: self.climate.temperature_c,
            humidity_pct: self.climate.humidity_pct,
            pm25: self.concentrations.pm25,
            pm10: self.concentrations.pm10,
            co_ppm: self.gas.co_ppm,
            nh3_ppm: self.gas.nh3_ppm,
            aqi: self.aqi,
            dht_error: !self.climate.valid,
        }
    }
}

/// The control loop's orchestrator: owns the sensors, the accumulators,
/// and the cadence gates
///
/// Generic over the hardware seams so the same scheduler runs on device
/// and against scripted mocks. All state lives here; nothing is global.
pub struct SampleScheduler<P, C, G, D, K>
where
    P: PulseInput,
    C: ClimateSensor,
    G: GasSensor,
    D: DelayProvider,
    K: TelemetrySink,
{
    pulse_input: P,
    climate_sensor: C,
    gas_sensor: G,
    delay: D,
    sink: K,

    pulses: PulseDutyAccumulator,
    climate_reader: ClimateReader,
    baseline: GasBaseline,
    climate_cadence: Cadence,
    telemetry_cadence: Cadence,
    snapshot: Snapshot,
}

impl<P, C, G, D, K> SampleScheduler<P, C, G, D, K>
where
    P: PulseInput,
    C: ClimateSensor,
    G: GasSensor,
    D: DelayProvider,
    K: TelemetrySink,
{
    /// Build a scheduler around calibrated hardware, with the default
    /// cadences and window
    ///
    /// `baseline` comes from the one-shot startup calibration
    /// ([`GasBaseline::calibrate`] on a clean-air resistance sample);
    /// `now` timestamps the first sampling window.
    pub fn new(
        pulse_input: P,
        climate_sensor: C,
        gas_sensor: G,
        delay: D,
        sink: K,
        baseline: GasBaseline,
        now: Timestamp,
    ) -> Self {
        Self {
            pulse_input,
            climate_sensor,
            gas_sensor,
            delay,
            sink,
            pulses: PulseDutyAccumulator::new(now),
            climate_reader: ClimateReader::new(),
            baseline,
            climate_cadence: Cadence::new(CLIMATE_INTERVAL_MS),
            telemetry_cadence: Cadence::new(TELEMETRY_INTERVAL_MS),
            snapshot: Snapshot::default(),
        }
    }

    /// Override the sampling window duration (tests and bring-up)
    pub fn with_window(mut self, window_ms: u64, now: Timestamp) -> Self {
        self.pulses = PulseDutyAccumulator::with_window(window_ms, now);
        self
    }

    /// Override the climate and telemetry cadences (tests and bring-up)
    pub fn with_cadences(mut self, climate_ms: u64, telemetry_ms: u64) -> Self {
        self.climate_cadence = Cadence::new(climate_ms);
        self.telemetry_cadence = Cadence::new(telemetry_ms);
        self
    }

    /// Run one scheduler tick at `now`
    ///
    /// Non-blocking except for the bounded climate retry path, which is
    /// entered at most once per climate interval. Nothing here returns an
    /// error: faults degrade to cached values and advisory flags.
    pub fn tick(&mut self, now: Timestamp) {
        // 1. Pulse poll, every tick
        for channel in 0..PULSE_CHANNELS {
            let low = self.pulse_input.is_low(channel);
            self.pulses.sample(channel, low, now);
        }

        // 2. Window close: fresh ratios -> concentrations -> AQI
        if let Some(ratios) = self.pulses.close_window_if_due(now) {
            self.snapshot.concentrations = ConcentrationReading::from_ratios(ratios);
            self.snapshot.aqi = pm25_aqi(self.snapshot.concentrations.pm25);
            log_debug!(
                "window closed: pm25={:.1} pm10={:.1} aqi={}",
                self.snapshot.concentrations.pm25,
                self.snapshot.concentrations.pm10,
                self.snapshot.aqi,
            );
        }

        // 3. Climate read + gas re-estimate
        if self.climate_cadence.due(now) {
            self.snapshot.climate = self
                .climate_reader
                .read(&mut self.climate_sensor, &mut self.delay);
            let rs = self.gas_sensor.resistance_ohms();
            self.snapshot.gas =
                GasReading::from_resistance(rs, &self.baseline, &self.snapshot.climate);
        }

        // 4. Telemetry emission, independent timer
        if self.telemetry_cadence.due(now) {
            let record = self.snapshot.to_record();
            if let Err(_e) = telemetry::emit(&record, &mut self.sink) {
                // A refused line is dropped; the next cadence retries with
                // fresher data anyway
                log_debug!("telemetry emission failed: {:?}", _e);
            }
        }
    }

    /// Latest computed values, for the display and status endpoint
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The startup gas baseline this scheduler was built with
    pub fn baseline(&self) -> &GasBaseline {
        &self.baseline
    }
}
