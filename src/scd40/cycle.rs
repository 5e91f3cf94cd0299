use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::{Measurement, Scd40};
use crate::sensirion::Error;

impl<I2C: I2c> Scd40<I2C> {
    /// Replaces the device's temperature offset, returning the one it held before.
    pub fn apply_temperature_offset<D: DelayNs>(
        &mut self,
        delay: &mut D,
        offset_celsius: f32,
    ) -> Result<f32, Error<I2C::Error>> {
        let previous = self.get_temperature_offset()?;
        log::info!("stored temperature offset is {:.1}°C", previous);

        log::info!("set temperature offset: {:.1}°C", offset_celsius);
        self.set_temperature_offset(offset_celsius)?;
        delay.delay_ms(self.config.command_gap_ms);

        Ok(previous)
    }

    /// Runs one start, wait, read, stop round and returns the sample.
    ///
    /// Blocks for the configured sample interval. The sensor is left idle on
    /// success; on failure it is left wherever the failing step put it.
    pub fn measure_cycle<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<Measurement, Error<I2C::Error>> {
        self.start_periodic_measurement()?;
        delay.delay_ms(self.config.sample_interval_ms);

        let measurement = self.read_measurement()?;
        log::info!("{}", measurement);

        delay.delay_ms(self.config.command_gap_ms);
        self.stop_periodic_measurement()?;

        Ok(measurement)
    }
}
