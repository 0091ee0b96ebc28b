#![no_std]

use common_constants::{MICROSECONDS_PER_SECOND, RATE_ONE};
use common_errors::{ERROR_RATE_OVERFLOW, ERROR_RESOLVE_TIME_OUT_OF_RANGE, ERROR_ZERO_QUOTE_RATE};

multiversx_sc::imports!();

const U64_BYTES: usize = 8;

#[multiversx_sc::module]
pub trait SharedMathModule {
    /// Rate of `base` expressed in `quote`, both legs and the result scaled by `RATE_ONE`.
    /// Floor division, the remainder is dropped.
    fn cross_rate(&self, base_rate: u64, quote_rate: u64) -> u64 {
        let rate = self.scaled_div(base_rate, quote_rate, &BigUint::from(RATE_ONE));

        self.to_u64_or_fail(&rate)
    }

    /// Same cross rate at double precision (`RATE_ONE^2`), `base * ONE * ONE / quote`.
    /// Unbounded, since the result does not fit in 64 bits for most pairs.
    fn cross_rate_e18(&self, base_rate: u64, quote_rate: u64) -> BigUint {
        let one = BigUint::from(RATE_ONE);

        self.scaled_div(base_rate, quote_rate, &(&one * &one))
    }

    fn scaled_div(&self, base_rate: u64, quote_rate: u64, scale: &BigUint) -> BigUint {
        require!(quote_rate != 0, ERROR_ZERO_QUOTE_RATE);

        let numerator = BigUint::from(u128::from(base_rate)) * scale;
        numerator / BigUint::from(u128::from(quote_rate))
    }

    /// Full unsigned 64-bit range, `BigUint::to_u64` stops at `i64::MAX`.
    fn to_u64_or_fail(&self, value: &BigUint) -> u64 {
        let bytes = value.to_bytes_be();
        let len = bytes.len();
        require!(len <= U64_BYTES, ERROR_RATE_OVERFLOW);

        let mut padded = [0u8; U64_BYTES];
        padded[U64_BYTES - len..].copy_from_slice(bytes.as_slice());
        u64::from_be_bytes(padded)
    }

    fn seconds_to_micros(&self, seconds: u64) -> u64 {
        seconds
            .checked_mul(MICROSECONDS_PER_SECOND)
            .unwrap_or_else(|| sc_panic!(ERROR_RESOLVE_TIME_OUT_OF_RANGE))
    }
}
