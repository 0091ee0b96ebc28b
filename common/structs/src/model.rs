#![no_std]

use common_constants::RATE_ONE;
use multiversx_sc::derive_imports::*;
use multiversx_sc::imports::*;

/// Stored reference of a single symbol, quoted against USD.
/// `rate` is scaled by `RATE_ONE`, `last_update` is a microsecond unix timestamp.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct RefData {
    pub rate: u64,
    pub last_update: u64,
}

impl RefData {
    pub fn new(rate: u64, last_update: u64) -> Self {
        RefData { rate, last_update }
    }

    /// USD is the quote of every stored rate, so it is always worth exactly one.
    pub fn usd(now_micros: u64) -> Self {
        RefData {
            rate: RATE_ONE,
            last_update: now_micros,
        }
    }
}

/// Rate of `base` expressed in `quote`, together with the freshness of both legs.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct ReferenceData {
    pub rate: u64,
    pub last_update_base: u64,
    pub last_update_quote: u64,
}

/// A single relayed update; `resolve_time` is in seconds.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct RelayData<M: ManagedTypeApi> {
    pub symbol: ManagedBuffer<M>,
    pub rate: u64,
    pub resolve_time: u64,
}

impl<M: ManagedTypeApi> RelayData<M> {
    pub fn new(symbol: ManagedBuffer<M>, rate: u64, resolve_time: u64) -> Self {
        RelayData {
            symbol,
            rate,
            resolve_time,
        }
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct Pair<M: ManagedTypeApi> {
    pub base: ManagedBuffer<M>,
    pub quote: ManagedBuffer<M>,
}

impl<M: ManagedTypeApi> Pair<M> {
    pub fn new(base: ManagedBuffer<M>, quote: ManagedBuffer<M>) -> Self {
        Pair { base, quote }
    }
}

/// Cross rate at double precision, `RATE_ONE^2`.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct ReferenceDataE18<M: ManagedTypeApi> {
    pub rate: BigUint<M>,
    pub last_update_base: u64,
    pub last_update_quote: u64,
}
