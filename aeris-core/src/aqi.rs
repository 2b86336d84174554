//! Air Quality Index Computation
//!
//! Maps a PM2.5 mass concentration onto the standardized 0–500 AQI scale
//! using EPA-style piecewise-linear interpolation over fixed breakpoint
//! bands:
//!
//! ```text
//! concentration (µg/m³)   index
//! 0     .. 12.1           0   .. 50     Good
//! 12.1  .. 35.5           50  .. 100    Moderate
//! 35.5  .. 55.5           100 .. 150    Unhealthy for Sensitive Groups
//! 55.5  .. 150.5          150 .. 200    Unhealthy
//! 150.5 .. 250.5          200 .. 300    Very Unhealthy
//! 250.5 .. 500.5          300 .. 500    Hazardous
//! ```
//!
//! Within a band the index is linear between the band's endpoints and
//! rounded to the nearest integer (`libm::roundf`). Adjacent bands share
//! their boundary concentration, so the mapping is continuous: a boundary
//! value produces the same index whichever band evaluates it.
//! Concentrations above 500.5 saturate at 500, negative inputs clamp
//! to 0.
//!
//! [`AqiCategory`] implements the matching six-tier severity banding used
//! by the downstream gauge; index and category are derived from the same
//! boundaries and cannot disagree.

use libm::roundf;

use crate::constants::limits::AQI_MAX;

/// One breakpoint band: concentration interval and its index endpoints
struct Band {
    conc_lo: f32,
    conc_hi: f32,
    index_lo: f32,
    index_hi: f32,
}

const BANDS: [Band; 6] = [
    Band { conc_lo: 0.0, conc_hi: 12.1, index_lo: 0.0, index_hi: 50.0 },
    Band { conc_lo: 12.1, conc_hi: 35.5, index_lo: 50.0, index_hi: 100.0 },
    Band { conc_lo: 35.5, conc_hi: 55.5, index_lo: 100.0, index_hi: 150.0 },
    Band { conc_lo: 55.5, conc_hi: 150.5, index_lo: 150.0, index_hi: 200.0 },
    Band { conc_lo: 150.5, conc_hi: 250.5, index_lo: 200.0, index_hi: 300.0 },
    Band { conc_lo: 250.5, conc_hi: 500.5, index_lo: 300.0, index_hi: 500.0 },
];

/// Air Quality Index for a PM2.5 concentration in µg/m³
///
/// Deterministic, pure, always in `[0, 500]`. Non-finite input (which the
/// estimators upstream never produce) maps to 0.
pub fn pm25_aqi(concentration: f32) -> u16 {
    if !concentration.is_finite() || concentration <= 0.0 {
        return 0;
    }

    for band in &BANDS {
        if concentration <= band.conc_hi {
            let span = band.conc_hi - band.conc_lo;
            let fraction = (concentration - band.conc_lo) / span;
            let index = band.index_lo + fraction * (band.index_hi - band.index_lo);
            return roundf(index) as u16;
        }
    }

    AQI_MAX
}

/// Six-tier severity banding of an AQI value
///
/// Tier boundaries match the downstream dashboard's color bands exactly;
/// labels match the status endpoint's strings exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiCategory {
    /// AQI 0–50
    Good,
    /// AQI 51–100
    Moderate,
    /// AQI 101–150
    UnhealthyForSensitiveGroups,
    /// AQI 151–200
    Unhealthy,
    /// AQI 201–300
    VeryUnhealthy,
    /// AQI above 300
    Hazardous,
}

impl AqiCategory {
    /// Categorize an AQI value
    pub fn from_index(index: u16) -> Self {
        match index {
            0..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=150 => Self::UnhealthyForSensitiveGroups,
            151..=200 => Self::Unhealthy,
            201..=300 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }

    /// Human-readable label, matching the status endpoint strings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}
