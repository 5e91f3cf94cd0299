use crate::sensirion::Command;

// Basic commands
pub const START_PERIODIC_MEASUREMENT: Command = Command::new([0x21, 0xb1], 0, 0);
pub const READ_MEASUREMENT: Command = Command::new([0xec, 0x05], 0, 3);
pub const STOP_PERIODIC_MEASUREMENT: Command = Command::new([0x3f, 0x86], 0, 0);

// On-chip output signal compensation
pub const SET_TEMPERATURE_OFFSET: Command = Command::new([0x24, 0x1d], 1, 0);
pub const GET_TEMPERATURE_OFFSET: Command = Command::new([0x23, 0x18], 0, 1);

// Advanced features
pub const GET_SERIAL_NUMBER: Command = Command::new([0x36, 0x82], 0, 3);

/// Every command the driver issues.
pub const ALL: [Command; 6] = [
    GET_SERIAL_NUMBER,
    START_PERIODIC_MEASUREMENT,
    STOP_PERIODIC_MEASUREMENT,
    READ_MEASUREMENT,
    SET_TEMPERATURE_OFFSET,
    GET_TEMPERATURE_OFFSET,
];
