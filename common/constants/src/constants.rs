#![no_std]

pub const USD_TICKER: &[u8] = b"USD";

/// Fixed-point scale of every stored rate, 1.0 == 10^9
pub const RATE_ONE: u64 = 1_000_000_000;

/// Relayed resolve times are in seconds, stored last updates in microseconds
pub const MICROSECONDS_PER_SECOND: u64 = 1_000_000;
