use core::fmt;
use embedded_hal::i2c::I2c;

use crate::sensirion::*;

pub mod commands;
mod config;
mod cycle;
mod recovery;

pub use config::{Config, DEFAULT_ADDR};

/// Where the sensor is in its measurement lifecycle, as last commanded by this driver.
///
/// Purely informational: no operation is refused because of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Ready,
    PeriodicMeasurement,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    pub co2_ppm: u16,
    pub temp_celsius: f64,
    pub humidity_percent: f64,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ppm CO2, {:.1}°C, {:.1}% RH",
            self.co2_ppm, self.temp_celsius, self.humidity_percent
        )
    }
}

impl Measurement {
    pub fn from_raw(words: [u16; 3]) -> Self {
        Self {
            co2_ppm: words[0],
            temp_celsius: temperature_from_raw(words[1]),
            humidity_percent: humidity_from_raw(words[2]),
        }
    }
}

pub fn temperature_from_raw(raw: u16) -> f64 {
    175.0 * (f64::from(raw) / 65535.0) - 45.0
}

pub fn humidity_from_raw(raw: u16) -> f64 {
    100.0 * (f64::from(raw) / 65535.0)
}

/// Converts an offset in °C to the device word, rounding to the nearest step.
/// The device only stores non-negative offsets; anything below zero saturates to 0.
pub fn encode_temperature_offset(offset_celsius: f32) -> u16 {
    let scaled = f64::from(offset_celsius) * 65536.0 / 175.0;
    // `as` saturates, and truncation of a non-negative value + 0.5 rounds half up.
    (scaled + 0.5) as u16
}

/// Converts a device word back to °C. The device reports with 0.1 °C resolution,
/// so the result is rounded to one decimal place.
pub fn decode_temperature_offset(raw: u16) -> f32 {
    let celsius = 175.0 * (f64::from(raw) / 65536.0);
    let tenths = (celsius * 10.0 + 0.5) as u32;
    tenths as f32 / 10.0
}

#[derive(Debug)]
pub struct Scd40<I2C> {
    sensor: Sensor<I2C>,
    config: Config,
    state: State,
}

impl<I2C> Scd40<I2C> {
    pub fn state(&self) -> State {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gives the bus back, ending the session.
    pub fn release(self) -> I2C {
        self.sensor.release()
    }
}

impl<I2C: I2c> Scd40<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self::with_config(i2c, Config::default())
    }

    pub fn with_config(i2c: I2C, config: Config) -> Self {
        Self {
            sensor: Sensor::new(i2c, config.address),
            config,
            state: State::Ready,
        }
    }

    /// Reading out the serial number can be used to identify the chip and to verify the presence of the sensor.
    pub fn get_serial_number(&mut self) -> Result<u64, Error<I2C::Error>> {
        let words = self
            .sensor
            .command_response::<3>(&commands::GET_SERIAL_NUMBER)?;

        let serial = (words[0] as u64) << 32 | (words[1] as u64) << 16 | (words[2] as u64);
        log::info!("serial number: {}", serial);

        Ok(serial)
    }

    /// Starts the periodic measurement mode. The signal update interval is 5 seconds.
    pub fn start_periodic_measurement(&mut self) -> Result<(), Error<I2C::Error>> {
        self.sensor
            .send_command(&commands::START_PERIODIC_MEASUREMENT)?;
        self.state = State::PeriodicMeasurement;
        Ok(())
    }

    /// Command returns a sensor running in periodic measurement mode back to
    /// the idle state, e.g. to then allow changing the sensor configuration.
    /// Note that the sensor will only respond to other commands 500 ms after the
    /// stop_periodic_measurement command has been issued.
    pub fn stop_periodic_measurement(&mut self) -> Result<(), Error<I2C::Error>> {
        self.sensor
            .send_command(&commands::STOP_PERIODIC_MEASUREMENT)?;
        self.state = State::Ready;
        Ok(())
    }

    /// Reads the sensor output. The measurement data can only be read out once
    /// per signal update interval as the buffer is emptied upon read-out.
    /// The command is issued whatever the current state; reading before the
    /// first update interval has elapsed yields whatever the device returns.
    pub fn read_measurement(&mut self) -> Result<Measurement, Error<I2C::Error>> {
        let response = self
            .sensor
            .command_response::<3>(&commands::READ_MEASUREMENT)?;

        Ok(Measurement::from_raw(response))
    }

    /// Writes the temperature offset. Only takes effect in the idle state.
    pub fn set_temperature_offset(&mut self, offset_celsius: f32) -> Result<(), Error<I2C::Error>> {
        let raw = encode_temperature_offset(offset_celsius);
        if offset_celsius < 0.0 {
            log::warn!("negative temperature offset {} clamped to 0", offset_celsius);
        }

        self.sensor
            .send_command_with_word(&commands::SET_TEMPERATURE_OFFSET, raw)
    }

    pub fn get_temperature_offset(&mut self) -> Result<f32, Error<I2C::Error>> {
        let [raw] = self
            .sensor
            .command_write_read::<1>(&commands::GET_TEMPERATURE_OFFSET)?;

        Ok(decode_temperature_offset(raw))
    }
}
