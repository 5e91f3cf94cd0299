/// Default 7-bit bus address of the SCD40.
pub const DEFAULT_ADDR: u8 = 0x62;

/// Timing and addressing knobs for the driver's multi-step routines.
///
/// Single protocol operations never wait on their own; these intervals only
/// apply to [`check_identity`](super::Scd40::check_identity),
/// [`apply_temperature_offset`](super::Scd40::apply_temperature_offset) and
/// [`measure_cycle`](super::Scd40::measure_cycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub address: u8,
    /// The sensor ignores commands for 500 ms after a stop.
    pub stop_settle_ms: u32,
    /// Signal update interval of periodic measurement mode.
    pub sample_interval_ms: u32,
    pub command_gap_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDR,
            stop_settle_ms: 500,
            sample_interval_ms: 5000,
            command_gap_ms: 5,
        }
    }
}
