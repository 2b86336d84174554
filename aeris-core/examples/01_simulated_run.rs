//! Simulated engine run
//!
//! Drives the full scheduler against simulated hardware at 100 Hz for two
//! simulated minutes, printing every telemetry line. Shows the startup
//! calibration step and the wiring a real board's main loop would do.
//!
//! Run with: cargo run --example 01_simulated_run

use aeris_core::errors::{ClimateError, TelemetryError};
use aeris_core::traits::{
    ClimateSensor, DelayProvider, GasSensor, PulseInput, RawClimate, TelemetrySink,
};
use aeris_core::time::{FixedTime, TimeSource};
use aeris_core::{GasBaseline, SampleScheduler};

/// Pulse input simulating a moderately dusty room: channel 1 low ~20% of
/// the time, channel 2 low ~10%, on slow square waves
struct SimulatedPulse {
    polls: u64,
}

impl PulseInput for SimulatedPulse {
    fn is_low(&mut self, channel: usize) -> bool {
        // Two polls per 10 ms tick, one per channel
        let now_ms = (self.polls / 2) * 10;
        self.polls += 1;
        let low_ms = match channel {
            0 => 200,
            _ => 100,
        };
        now_ms % 1_000 < low_ms
    }
}

/// Climate sensor that fails every fifth read, like a real DHT on a long
/// cable
struct SimulatedClimate {
    reads: u32,
}

impl ClimateSensor for SimulatedClimate {
    fn measure(&mut self) -> nb::Result<RawClimate, ClimateError> {
        self.reads += 1;
        if self.reads % 5 == 0 {
            return Err(nb::Error::Other(ClimateError::InvalidValue));
        }
        Ok(RawClimate {
            temperature_c: 22.0 + (self.reads % 7) as f32 * 0.1,
            humidity_pct: 45.0 + (self.reads % 11) as f32 * 0.2,
        })
    }
}

/// Gas sensor drifting slowly below its clean-air resistance
struct SimulatedGas {
    samples: u32,
}

impl GasSensor for SimulatedGas {
    fn resistance_ohms(&mut self) -> f32 {
        self.samples += 1;
        9_000.0 - (self.samples % 50) as f32 * 10.0
    }
}

/// Sink printing each line to stdout, like the device's serial port
struct StdoutSink;

impl TelemetrySink for StdoutSink {
    fn write_line(&mut self, line: &str) -> Result<(), TelemetryError> {
        print!("{line}");
        Ok(())
    }
}

/// No-op delay: simulated time does not need to actually block
struct NoDelay;

impl DelayProvider for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

fn main() {
    // Startup calibration: one gas read in (assumed) clean air
    let mut gas = SimulatedGas { samples: 0 };
    let baseline = GasBaseline::calibrate(gas.resistance_ohms());
    println!("calibrated gas baseline: {:.0} ohms", baseline.ro_ohms());

    let mut scheduler = SampleScheduler::new(
        SimulatedPulse { polls: 0 },
        SimulatedClimate { reads: 0 },
        gas,
        NoDelay,
        StdoutSink,
        baseline,
        0,
    );

    // Two simulated minutes at 100 Hz
    let mut clock = FixedTime::new(0);
    while clock.now() < 120_000 {
        scheduler.tick(clock.now());
        clock.advance(10);
    }

    let snapshot = scheduler.snapshot();
    println!(
        "final snapshot: pm25={:.1} ug/m3, aqi={} ({})",
        snapshot.concentrations.pm25,
        snapshot.aqi,
        aeris_core::AqiCategory::from_index(snapshot.aqi).label(),
    );
}
