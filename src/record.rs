//! Line format of the measurement log file.
//!
//! The file starts with [`LOG_HEADER`] and gets one [`write_record`] line per
//! measurement cycle. Opening, truncating and appending to the file is left to
//! the caller.

use core::fmt;

use crate::scd40::Measurement;

pub const LOG_HEADER: &str =
    "YYYY/MM/DD HH/MM/SS,CO2[rpm],Temperature[degree],Humidity[%RH],Pressure[hPa]\n";

/// Local wall-clock time of a record, printed as `YYYY/MM/DD HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Reading from the companion pressure/humidity sensor sharing the bus.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AmbientReading {
    pub temp_celsius: f64,
    pub humidity_percent: f64,
    pub pressure_hpa: f64,
}

/// Writes one log line. CO2 comes from the SCD40 sample; temperature,
/// humidity and pressure come from the companion sensor.
pub fn write_record<W: fmt::Write>(
    out: &mut W,
    timestamp: &Timestamp,
    sample: &Measurement,
    ambient: &AmbientReading,
) -> fmt::Result {
    writeln!(
        out,
        "{},{},{:.2},{:.2},{:.2}",
        timestamp,
        sample.co2_ppm,
        ambient.temp_celsius,
        ambient.humidity_percent,
        ambient.pressure_hpa
    )
}
