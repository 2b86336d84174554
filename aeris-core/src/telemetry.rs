//! Line-Oriented Telemetry Encoding
//!
//! One newline-terminated JSON object per emission, fixed key set, fixed
//! key order:
//!
//! ```text
//! {"temp":22.50,"hum":45.00,"PM25":12.40,"PM10":18.90,"CO":4.20,"NH3":0.80,"AQI":52,"dht_error":false}
//! ```
//!
//! The backend parses each line with a stock JSON parser, so the line must
//! be valid JSON; the device side, however, formats through `core::fmt`
//! into a fixed-capacity [`heapless::String`] — no allocator, no
//! serializer machinery in the tick path. Floats are rendered with two
//! decimal places, matching what the downstream ingest has always
//! received.
//!
//! Each field reflects its own most-recently-computed value: the record is
//! a snapshot of independent cadences (30 s particulate window, 2 s
//! climate cycle), not a single synchronized sample.

use core::fmt::Write;

use heapless::String;

use crate::errors::{TelemetryError, TelemetryResult};
use crate::traits::TelemetrySink;

/// Capacity of the telemetry line buffer in bytes
///
/// Worst case line with every float at its ceiling is under 120 bytes;
/// the headroom covers format drift without costing real memory.
pub const TELEMETRY_LINE_CAP: usize = 192;

/// The externally visible snapshot emitted on the telemetry cadence
///
/// Serde field names match the wire keys so std-side consumers and tests
/// can round-trip a line directly into this struct.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetryRecord {
    /// Temperature in degrees Celsius
    #[cfg_attr(feature = "serde", serde(rename = "temp"))]
    pub temperature_c: f32,
    /// Relative humidity in percent
    #[cfg_attr(feature = "serde", serde(rename = "hum"))]
    pub humidity_pct: f32,
    /// Fine particulate matter in µg/m³
    #[cfg_attr(feature = "serde", serde(rename = "PM25"))]
    pub pm25: f32,
    /// Coarse particulate matter in µg/m³
    #[cfg_attr(feature = "serde", serde(rename = "PM10"))]
    pub pm10: f32,
    /// Carbon monoxide estimate in ppm
    #[cfg_attr(feature = "serde", serde(rename = "CO"))]
    pub co_ppm: f32,
    /// Ammonia estimate in ppm
    #[cfg_attr(feature = "serde", serde(rename = "NH3"))]
    pub nh3_ppm: f32,
    /// Air Quality Index, 0–500
    #[cfg_attr(feature = "serde", serde(rename = "AQI"))]
    pub aqi: u16,
    /// Whether the last climate cycle fell back to cached values
    #[cfg_attr(feature = "serde", serde(rename = "dht_error"))]
    pub dht_error: bool,
}

/// Format a record as one newline-terminated telemetry line
///
/// Fails only if the line outgrows the fixed buffer, which a well-formed
/// record cannot do.
pub fn format_line(record: &TelemetryRecord) -> TelemetryResult<String<TELEMETRY_LINE_CAP>> {
    let mut line: String<TELEMETRY_LINE_CAP> = String::new();
    write!(
        line,
        "{{\"temp\":{:.2},\"hum\":{:.2},\"PM25\":{:.2},\"PM10\":{:.2},\"CO\":{:.2},\"NH3\":{:.2},\"AQI\":{},\"dht_error\":{}}}\n",
        record.temperature_c,
        record.humidity_pct,
        record.pm25,
        record.pm10,
        record.co_ppm,
        record.nh3_ppm,
        record.aqi,
        record.dht_error,
    )
    .map_err(|_| TelemetryError::LineOverflow {
        capacity: TELEMETRY_LINE_CAP,
    })?;
    Ok(line)
}

/// Format and write one record to the sink
pub fn emit<S: TelemetrySink>(record: &TelemetryRecord, sink: &mut S) -> TelemetryResult<()> {
    let line = format_line(record)?;
    sink.write_line(&line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TelemetryRecord {
        TelemetryRecord {
            temperature_c: 22.5,
            humidity_pct: 45.0,
            pm25: 12.4,
            pm10: 18.9,
            co_ppm: 4.2,
            nh3_ppm: 0.8,
            aqi: 52,
            dht_error: false,
        }
    }

    #[test]
    fn line_is_newline_terminated_json() {
        let line = format_line(&record()).unwrap();
        assert!(line.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        let object = value.as_object().unwrap();
        for key in ["temp", "hum", "PM25", "PM10", "CO", "NH3", "AQI", "dht_error"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 8);
    }

    #[test]
    fn line_round_trips_into_record() {
        let line = format_line(&record()).unwrap();
        let parsed: TelemetryRecord = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed.aqi, 52);
        assert!(!parsed.dht_error);
        assert!((parsed.temperature_c - 22.5).abs() < 0.01);
        assert!((parsed.pm25 - 12.4).abs() < 0.01);
    }

    #[test]
    fn floats_use_two_decimal_places() {
        let line = format_line(&record()).unwrap();
        assert!(line.contains("\"temp\":22.50"));
        assert!(line.contains("\"NH3\":0.80"));
    }

    #[test]
    fn worst_case_line_fits_buffer() {
        let worst = TelemetryRecord {
            temperature_c: -40.0,
            humidity_pct: 100.0,
            pm25: 1000.0,
            pm10: 1000.0,
            co_ppm: 1000.0,
            nh3_ppm: 500.0,
            aqi: 500,
            dht_error: true,
        };
        let line = format_line(&worst).unwrap();
        assert!(line.len() < TELEMETRY_LINE_CAP);
    }

    #[test]
    fn degraded_flag_serializes_as_json_bool() {
        let mut r = record();
        r.dht_error = true;
        let line = format_line(&r).unwrap();
        assert!(line.contains("\"dht_error\":true"));
    }
}
