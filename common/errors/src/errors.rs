#![no_std]

pub static ERROR_REF_DATA_NOT_AVAILABLE: &[u8] = b"Reference data not available.";

pub static ERROR_NOT_AUTHORIZED: &[u8] = b"Caller is not the authorized relayer.";

pub static ERROR_ZERO_QUOTE_RATE: &[u8] = b"Quote rate is zero.";

pub static ERROR_RATE_OVERFLOW: &[u8] = b"Cross rate does not fit in 64 bits.";

pub static ERROR_RESOLVE_TIME_OUT_OF_RANGE: &[u8] = b"Resolve time out of range.";
