//! Duty-Cycle Accumulation for Optical Particulate Sensors
//!
//! ## Motivation
//!
//! Duty-cycle dust sensors report particle density as the fraction of time
//! their output signal is held low over an integration window. The obvious
//! way to measure that is a blocking pulse-width primitive, but blocking
//! for the length of a pulse (tens to hundreds of milliseconds) would
//! starve the display and telemetry activities sharing the control loop.
//!
//! This module measures the same quantity without blocking: the scheduler
//! polls the raw signal level every tick and [`PulseDutyAccumulator`] does
//! edge detection and duration accounting on the timestamps it is handed.
//! Each channel is a two-state machine:
//!
//! ```text
//!            signal goes low (record start)
//!   [idle] ----------------------------------> [low]
//!   [idle] <---------------------------------- [low]
//!            signal goes high (add elapsed segment)
//! ```
//!
//! At a window boundary an in-progress low segment is flushed with a
//! synthetic edge at the boundary instant and immediately re-opened in the
//! new window, so a signal that stays low across the boundary contributes
//! correctly to both windows with nothing lost or double-counted.
//!
//! Polling at the scheduler's tick rate (target >= 100 Hz) bounds the edge
//! detection error to one tick period per edge, which is noise next to the
//! 30 s window.

use crate::constants::sampling::{PULSE_CHANNELS, SAMPLING_WINDOW_MS};
use crate::time::Timestamp;

/// Per-channel pulse tracking state
#[derive(Debug, Clone, Copy, Default)]
struct ChannelPulseState {
    /// Whether the signal is currently in a low segment
    currently_low: bool,
    /// Start of the open low segment, valid only while `currently_low`
    low_since: Timestamp,
    /// Closed low-segment time accumulated this window, in milliseconds
    accumulated_low_ms: u64,
}

impl ChannelPulseState {
    /// Record a signal level observed at `now`, updating edge state
    fn observe(&mut self, signal_is_low: bool, now: Timestamp) {
        match (self.currently_low, signal_is_low) {
            // Rising low edge: open a segment
            (false, true) => {
                self.currently_low = true;
                self.low_since = now;
            }
            // Falling low edge: close the segment
            (true, false) => {
                self.currently_low = false;
                self.accumulated_low_ms += now.saturating_sub(self.low_since);
            }
            // No edge
            _ => {}
        }
    }

    /// Flush an open low segment at the window boundary and re-open it in
    /// the new window. Returns the channel's total low time for the closed
    /// window.
    fn flush(&mut self, boundary: Timestamp) -> u64 {
        if self.currently_low {
            self.accumulated_low_ms += boundary.saturating_sub(self.low_since);
            self.low_since = boundary;
        }
        let total = self.accumulated_low_ms;
        self.accumulated_low_ms = 0;
        total
    }
}

/// Tracks cumulative low-signal time per channel over fixed sampling
/// windows
///
/// Owned by the scheduler and driven entirely by its tick; never blocks,
/// never sleeps, never fails. An always-idle channel simply yields
/// ratio 0.
#[derive(Debug, Clone)]
pub struct PulseDutyAccumulator {
    channels: [ChannelPulseState; PULSE_CHANNELS],
    window_ms: u64,
    window_start: Timestamp,
}

impl PulseDutyAccumulator {
    /// Create an accumulator with the default 30 s window, starting at
    /// `now`
    pub fn new(now: Timestamp) -> Self {
        Self::with_window(SAMPLING_WINDOW_MS, now)
    }

    /// Create an accumulator with a custom window duration (tests and
    /// bring-up)
    pub fn with_window(window_ms: u64, now: Timestamp) -> Self {
        Self {
            channels: [ChannelPulseState::default(); PULSE_CHANNELS],
            window_ms,
            window_start: now,
        }
    }

    /// Record one polled signal level for `channel` at `now`
    ///
    /// Edge detection and duration accounting only; O(1), non-blocking.
    /// A channel index out of range is a no-op.
    pub fn sample(&mut self, channel: usize, signal_is_low: bool, now: Timestamp) {
        if let Some(state) = self.channels.get_mut(channel) {
            state.observe(signal_is_low, now);
        }
    }

    /// Close the window if its duration has elapsed, returning per-channel
    /// low-time ratios
    ///
    /// Returns `None` while the window is still open. On close, open low
    /// segments are flushed with a synthetic edge at `now`, accumulators
    /// reset, and the window rebased to `now`. Ratios are computed against
    /// the actual elapsed time (which may slightly exceed the nominal
    /// window if the closing tick lands late), so they always lie in
    /// [0, 1].
    pub fn close_window_if_due(&mut self, now: Timestamp) -> Option<[f32; PULSE_CHANNELS]> {
        let elapsed = now.saturating_sub(self.window_start);
        if elapsed < self.window_ms || elapsed == 0 {
            return None;
        }

        let mut ratios = [0.0f32; PULSE_CHANNELS];
        for (state, ratio) in self.channels.iter_mut().zip(ratios.iter_mut()) {
            let low_ms = state.flush(now);
            *ratio = (low_ms as f32 / elapsed as f32).min(1.0);
        }

        self.window_start = now;
        Some(ratios)
    }

    /// Nominal window duration in milliseconds
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u64 = 30_000;

    fn accumulator() -> PulseDutyAccumulator {
        PulseDutyAccumulator::with_window(WINDOW, 0)
    }

    #[test]
    fn always_idle_channel_yields_zero() {
        let mut acc = accumulator();
        for t in (0..=WINDOW).step_by(10) {
            acc.sample(0, false, t);
        }
        let ratios = acc.close_window_if_due(WINDOW).unwrap();
        assert_eq!(ratios[0], 0.0);
        assert_eq!(ratios[1], 0.0);
    }

    #[test]
    fn continuously_low_channel_yields_one() {
        let mut acc = accumulator();
        for t in (0..=WINDOW).step_by(10) {
            acc.sample(0, true, t);
        }
        let ratios = acc.close_window_if_due(WINDOW).unwrap();
        assert!((ratios[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn half_low_window_yields_half_ratio() {
        let mut acc = accumulator();
        // Low for the first half, high for the second
        acc.sample(0, true, 0);
        acc.sample(0, false, 15_000);
        let ratios = acc.close_window_if_due(WINDOW).unwrap();
        assert!((ratios[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn window_not_due_returns_none() {
        let mut acc = accumulator();
        acc.sample(0, true, 0);
        assert!(acc.close_window_if_due(WINDOW - 1).is_none());
        assert!(acc.close_window_if_due(WINDOW).is_some());
    }

    #[test]
    fn low_segment_straddling_boundary_splits_without_loss() {
        let mut acc = accumulator();
        // Goes low 5 s before the boundary and stays low 5 s into the
        // next window
        acc.sample(0, true, 25_000);

        let ratios = acc.close_window_if_due(WINDOW).unwrap();
        assert!((ratios[0] - 5_000.0 / 30_000.0).abs() < 1e-6);

        // Still low in the new window; goes high 5 s in
        acc.sample(0, false, 35_000);
        let ratios = acc.close_window_if_due(2 * WINDOW).unwrap();
        assert!((ratios[0] - 5_000.0 / 30_000.0).abs() < 1e-6);
    }

    #[test]
    fn multiple_segments_accumulate() {
        let mut acc = accumulator();
        // Three 5 s low segments
        for start in [0u64, 10_000, 20_000] {
            acc.sample(0, true, start);
            acc.sample(0, false, start + 5_000);
        }
        let ratios = acc.close_window_if_due(WINDOW).unwrap();
        assert!((ratios[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn channels_are_independent() {
        let mut acc = accumulator();
        acc.sample(0, true, 0);
        acc.sample(0, false, 6_000);
        acc.sample(1, true, 0);
        acc.sample(1, false, 3_000);
        let ratios = acc.close_window_if_due(WINDOW).unwrap();
        assert!((ratios[0] - 0.2).abs() < 1e-6);
        assert!((ratios[1] - 0.1).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_channel_is_a_no_op() {
        let mut acc = accumulator();
        acc.sample(PULSE_CHANNELS, true, 0);
        let ratios = acc.close_window_if_due(WINDOW).unwrap();
        assert_eq!(ratios, [0.0; PULSE_CHANNELS]);
    }

    #[test]
    fn late_close_keeps_ratio_in_bounds() {
        let mut acc = accumulator();
        acc.sample(0, true, 0);
        // Closing tick lands 500 ms after the nominal boundary
        let ratios = acc.close_window_if_due(WINDOW + 500).unwrap();
        assert!(ratios[0] <= 1.0);
        assert!((ratios[0] - 1.0).abs() < 1e-6);
    }
}
