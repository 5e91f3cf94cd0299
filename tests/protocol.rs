use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

use scd40::record::{AmbientReading, LOG_HEADER, Timestamp, write_record};
use scd40::scd40::{DEFAULT_ADDR, State, encode_temperature_offset};
use scd40::sensirion::encode_word;
use scd40::{Error, Scd40};

const SAMPLE_FRAME: [u8; 9] = [0x01, 0xf4, 0x33, 0x66, 0x67, 0xa2, 0x5e, 0xb9, 0x3c];

#[test]
fn read_is_issued_without_start() {
    let expectations = [
        I2cTransaction::write(DEFAULT_ADDR, vec![0xec, 0x05]),
        I2cTransaction::read(DEFAULT_ADDR, SAMPLE_FRAME.to_vec()),
    ];
    let mut sensor = Scd40::new(I2cMock::new(&expectations));

    let m = sensor.read_measurement().unwrap();
    assert_eq!(m.co2_ppm, 500);
    assert_eq!(sensor.state(), State::Ready);

    sensor.release().done();
}

#[test]
fn read_failure_is_not_retried() {
    let expectations = [
        I2cTransaction::write(DEFAULT_ADDR, vec![0xec, 0x05]),
        I2cTransaction::read(DEFAULT_ADDR, SAMPLE_FRAME.to_vec()).with_error(ErrorKind::Other),
    ];
    let mut sensor = Scd40::new(I2cMock::new(&expectations));

    assert_eq!(
        sensor.read_measurement(),
        Err(Error::Transport(ErrorKind::Other))
    );

    sensor.release().done();
}

#[test]
fn offset_set_then_get_reads_back_to_a_tenth() {
    let raw = encode_temperature_offset(4.0);
    let word = encode_word(raw);
    let expectations = [
        I2cTransaction::write(
            DEFAULT_ADDR,
            vec![0x24, 0x1d, word[0], word[1], word[2]],
        ),
        I2cTransaction::write_read(DEFAULT_ADDR, vec![0x23, 0x18], word.to_vec()),
    ];
    let mut sensor = Scd40::new(I2cMock::new(&expectations));

    sensor.set_temperature_offset(4.0).unwrap();
    let read_back = sensor.get_temperature_offset().unwrap();
    let encodable = 175.0 * f32::from(raw) / 65536.0;
    assert!((read_back - encodable).abs() <= 0.1);

    sensor.release().done();
}

#[test]
fn startup_and_one_logged_cycle() {
    let expectations = [
        // identify
        I2cTransaction::write(DEFAULT_ADDR, vec![0x36, 0x82]),
        I2cTransaction::read(
            DEFAULT_ADDR,
            vec![0xf8, 0x96, 0x31, 0x9f, 0x07, 0xc2, 0x3b, 0xbe, 0x89],
        ),
        // calibrate
        I2cTransaction::write_read(DEFAULT_ADDR, vec![0x23, 0x18], vec![0x05, 0xda, 0x29]),
        I2cTransaction::write(DEFAULT_ADDR, vec![0x24, 0x1d, 0x00, 0x00, 0x81]),
        // measure
        I2cTransaction::write(DEFAULT_ADDR, vec![0x21, 0xb1]),
        I2cTransaction::write(DEFAULT_ADDR, vec![0xec, 0x05]),
        I2cTransaction::read(DEFAULT_ADDR, SAMPLE_FRAME.to_vec()),
        I2cTransaction::write(DEFAULT_ADDR, vec![0x3f, 0x86]),
    ];
    let mut sensor = Scd40::new(I2cMock::new(&expectations));
    let mut delay = NoopDelay::new();

    sensor.check_identity(&mut delay).unwrap();
    assert_eq!(sensor.apply_temperature_offset(&mut delay, 0.0), Ok(4.0));
    let sample = sensor.measure_cycle(&mut delay).unwrap();

    let mut log = String::from(LOG_HEADER);
    let ts = Timestamp {
        year: 2024,
        month: 5,
        day: 1,
        hour: 12,
        minute: 0,
        second: 5,
    };
    let ambient = AmbientReading {
        temp_celsius: 24.5,
        humidity_percent: 38.25,
        pressure_hpa: 1008.0,
    };
    write_record(&mut log, &ts, &sample, &ambient).unwrap();

    assert_eq!(
        log.lines().nth(1),
        Some("2024/05/01 12:00:05,500,24.50,38.25,1008.00")
    );

    sensor.release().done();
}
