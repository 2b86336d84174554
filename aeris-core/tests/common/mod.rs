//! Shared mock hardware for integration tests
//!
//! The scheduler owns its hardware seams, so these mocks hand the test an
//! `Rc<RefCell<..>>` handle to poke signal levels, fault injection, and
//! captured output from outside while the scheduler runs.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use aeris_core::constants::sampling::PULSE_CHANNELS;
use aeris_core::errors::{ClimateError, TelemetryError};
use aeris_core::traits::{
    ClimateSensor, DelayProvider, GasSensor, PulseInput, RawClimate, TelemetrySink,
};

/// Shared mutable handle between the test body and a mock the scheduler owns
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in a shared handle
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Pulse input whose per-channel levels the test sets directly
pub struct SimPulse {
    levels: Shared<[bool; PULSE_CHANNELS]>,
}

impl SimPulse {
    /// Returns the mock and the handle controlling its levels
    pub fn new() -> (Self, Shared<[bool; PULSE_CHANNELS]>) {
        let levels = shared([false; PULSE_CHANNELS]);
        (
            Self {
                levels: levels.clone(),
            },
            levels,
        )
    }
}

impl PulseInput for SimPulse {
    fn is_low(&mut self, channel: usize) -> bool {
        self.levels.borrow()[channel]
    }
}

/// Climate sensor returning a settable result and counting read attempts
pub struct SimClimate {
    sample: Shared<nb::Result<RawClimate, ClimateError>>,
    reads: Shared<u32>,
}

impl SimClimate {
    /// Returns the mock, the handle to the next result, and the attempt counter
    pub fn new(
        initial: nb::Result<RawClimate, ClimateError>,
    ) -> (
        Self,
        Shared<nb::Result<RawClimate, ClimateError>>,
        Shared<u32>,
    ) {
        let sample = shared(initial);
        let reads = shared(0);
        (
            Self {
                sample: sample.clone(),
                reads: reads.clone(),
            },
            sample,
            reads,
        )
    }
}

impl ClimateSensor for SimClimate {
    fn measure(&mut self) -> nb::Result<RawClimate, ClimateError> {
        *self.reads.borrow_mut() += 1;
        *self.sample.borrow()
    }
}

/// Gas sensor with a settable element resistance
pub struct SimGas {
    rs_ohms: Shared<f32>,
}

impl SimGas {
    /// Returns the mock and the handle controlling its resistance
    pub fn new(rs_ohms: f32) -> (Self, Shared<f32>) {
        let handle = shared(rs_ohms);
        (
            Self {
                rs_ohms: handle.clone(),
            },
            handle,
        )
    }
}

impl GasSensor for SimGas {
    fn resistance_ohms(&mut self) -> f32 {
        *self.rs_ohms.borrow()
    }
}

/// Sink capturing every emitted line
pub struct VecSink {
    lines: Shared<Vec<String>>,
}

impl VecSink {
    /// Returns the sink and the handle to the captured lines
    pub fn new() -> (Self, Shared<Vec<String>>) {
        let lines = shared(Vec::new());
        (
            Self {
                lines: lines.clone(),
            },
            lines,
        )
    }
}

impl TelemetrySink for VecSink {
    fn write_line(&mut self, line: &str) -> Result<(), TelemetryError> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

/// Delay that records instead of sleeping
#[derive(Default)]
pub struct RecordingDelay {
    /// Total milliseconds the engine would have blocked
    pub total_ms: u32,
}

impl DelayProvider for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += ms;
    }
}

/// A clean valid climate sample
pub fn valid_sample(t: f32, h: f32) -> nb::Result<RawClimate, ClimateError> {
    Ok(RawClimate {
        temperature_c: t,
        humidity_pct: h,
    })
}
