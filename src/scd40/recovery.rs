use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::Scd40;
use crate::sensirion::Error;

impl<I2C: I2c> Scd40<I2C> {
    /// Verifies the sensor answers on the bus by reading its serial number.
    ///
    /// A sensor left in periodic measurement mode by an earlier session ignores
    /// the serial number command. On a first failure the sensor is stopped and
    /// asked once more, with the stop settle interval on both sides of the stop.
    /// A second failure is returned as is; there is no third attempt.
    pub fn check_identity<D: DelayNs>(&mut self, delay: &mut D) -> Result<u64, Error<I2C::Error>> {
        match self.get_serial_number() {
            Ok(serial) => Ok(serial),
            Err(err) => {
                log::warn!(
                    "serial number read failed ({:?}), stopping measurement and retrying",
                    err
                );

                delay.delay_ms(self.config.stop_settle_ms);
                self.stop_periodic_measurement()?;
                delay.delay_ms(self.config.stop_settle_ms);

                self.get_serial_number().inspect_err(|err| {
                    log::error!("sensor did not identify after stop: {:?}", err);
                })
            }
        }
    }
}
