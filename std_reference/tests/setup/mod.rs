use crate::constants::*;

use multiversx_sc::{
    imports::OptionalValue,
    types::{
        CodeMetadata, ManagedAddress, ManagedBuffer, MultiValueEncoded,
        ReturnsNewManagedAddress, ReturnsResult, TestAddress,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, ReturnsLogs},
    ScenarioTxRun, ScenarioWorld,
};
use std_reference::{
    std_reference_proxy::StdReferenceProxy, Pair, RefData, ReferenceData, ReferenceDataE18,
    RelayData,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(STD_REFERENCE_PATH, std_reference::ContractBuilder);

    blockchain
}

pub fn error_message(error: &[u8]) -> &str {
    core::str::from_utf8(error).unwrap()
}

/// Indexed `u64` topics are top-encoded: big endian, leading zeros dropped.
pub fn indexed_u64(value: u64) -> Vec<u8> {
    value
        .to_be_bytes()
        .into_iter()
        .skip_while(|byte| *byte == 0)
        .collect()
}

pub fn usd_rate(price_in_dollars: u64) -> u64 {
    price_in_dollars * RATE_ONE
}

pub struct StdReferenceTestState {
    pub world: ScenarioWorld,
    pub std_reference_sc: ManagedAddress<StaticApi>,
}

impl StdReferenceTestState {
    /// Deploys with a dedicated relayer.
    pub fn new() -> Self {
        Self::deploy(OptionalValue::Some(RELAYER_ADDRESS.to_managed_address()))
    }

    /// Deploys without a relayer argument, so the owner relays.
    pub fn new_owner_relayed() -> Self {
        Self::deploy(OptionalValue::None)
    }

    fn deploy(relayer: OptionalValue<ManagedAddress<StaticApi>>) -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(GENESIS_TIMESTAMP);

        let std_reference_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(StdReferenceProxy)
            .init(relayer)
            .code(STD_REFERENCE_PATH)
            .code_metadata(CodeMetadata::UPGRADEABLE)
            .new_address(STD_REFERENCE_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        Self {
            world,
            std_reference_sc,
        }
    }

    pub fn relay(&mut self, from: TestAddress, updates: &[(&[u8], u64, u64)]) {
        self.world
            .tx()
            .from(from)
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .relay(relay_batch(updates))
            .run();
    }

    pub fn relay_error(&mut self, from: TestAddress, updates: &[(&[u8], u64, u64)], error: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .relay(relay_batch(updates))
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    /// Relays and returns the topics of every emitted log, in emission order.
    pub fn relay_logs(
        &mut self,
        from: TestAddress,
        updates: &[(&[u8], u64, u64)],
    ) -> Vec<Vec<Vec<u8>>> {
        let logs = self
            .world
            .tx()
            .from(from)
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .relay(relay_batch(updates))
            .returns(ReturnsLogs)
            .run();

        logs.into_iter().map(|log| log.topics).collect()
    }

    /// Relays every symbol of the default book at `RESOLVE_TIME`.
    pub fn relay_default_prices(&mut self) {
        self.relay(
            RELAYER_ADDRESS,
            &[
                (BTC_TICKER, usd_rate(BTC_PRICE_IN_DOLLARS), RESOLVE_TIME),
                (ETH_TICKER, usd_rate(ETH_PRICE_IN_DOLLARS), RESOLVE_TIME),
                (EGLD_TICKER, usd_rate(EGLD_PRICE_IN_DOLLARS), RESOLVE_TIME),
            ],
        );
    }

    pub fn get_ref_data(&mut self, symbol: &[u8]) -> RefData {
        self.world
            .query()
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .get_ref_data(ManagedBuffer::<StaticApi>::from(symbol))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_ref_data_error(&mut self, symbol: &[u8], error: &[u8]) {
        self.world
            .tx()
            .from(STRANGER_ADDRESS)
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .get_ref_data(ManagedBuffer::<StaticApi>::from(symbol))
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn get_reference_data(&mut self, base: &[u8], quote: &[u8]) -> ReferenceData {
        self.world
            .query()
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .get_reference_data(
                ManagedBuffer::<StaticApi>::from(base),
                ManagedBuffer::<StaticApi>::from(quote),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_reference_data_error(&mut self, base: &[u8], quote: &[u8], error: &[u8]) {
        self.world
            .tx()
            .from(STRANGER_ADDRESS)
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .get_reference_data(
                ManagedBuffer::<StaticApi>::from(base),
                ManagedBuffer::<StaticApi>::from(quote),
            )
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn get_reference_data_bulk(&mut self, pairs: &[(&[u8], &[u8])]) -> Vec<ReferenceData> {
        let result = self
            .world
            .query()
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .get_reference_data_bulk(pair_batch(pairs))
            .returns(ReturnsResult)
            .run();

        result.into_iter().collect()
    }

    pub fn get_reference_data_bulk_error(&mut self, pairs: &[(&[u8], &[u8])], error: &[u8]) {
        self.world
            .tx()
            .from(STRANGER_ADDRESS)
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .get_reference_data_bulk(pair_batch(pairs))
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn get_reference_data_e18(
        &mut self,
        base: &[u8],
        quote: &[u8],
    ) -> ReferenceDataE18<StaticApi> {
        self.world
            .query()
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .get_reference_data_e18(
                ManagedBuffer::<StaticApi>::from(base),
                ManagedBuffer::<StaticApi>::from(quote),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_symbols(&mut self) -> Vec<ManagedBuffer<StaticApi>> {
        let result = self
            .world
            .query()
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .get_symbols()
            .returns(ReturnsResult)
            .run();

        result.into_iter().collect()
    }

    pub fn relayer(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .relayer()
            .returns(ReturnsResult)
            .run()
    }

    pub fn set_relayer(&mut self, from: TestAddress, relayer: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .set_relayer(relayer.to_managed_address())
            .run();
    }

    pub fn set_relayer_error(&mut self, from: TestAddress, relayer: TestAddress, error: &str) {
        self.world
            .tx()
            .from(from)
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .set_relayer(relayer.to_managed_address())
            .returns(ExpectMessage(error))
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .unpause_endpoint()
            .run();
    }

    pub fn is_paused(&mut self) -> bool {
        self.world
            .query()
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .paused_status()
            .returns(ReturnsResult)
            .run()
    }

    pub fn upgrade(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.std_reference_sc)
            .typed(StdReferenceProxy)
            .upgrade()
            .code(STD_REFERENCE_PATH)
            .run();
    }

    pub fn set_block_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world.account(RELAYER_ADDRESS).nonce(1);
    world.account(NEW_RELAYER_ADDRESS).nonce(1);
    world.account(STRANGER_ADDRESS).nonce(1);
}

pub fn relay_batch(
    updates: &[(&[u8], u64, u64)],
) -> MultiValueEncoded<StaticApi, RelayData<StaticApi>> {
    let mut batch = MultiValueEncoded::new();
    for (symbol, rate, resolve_time) in updates {
        batch.push(RelayData::new(ManagedBuffer::from(*symbol), *rate, *resolve_time));
    }
    batch
}

pub fn pair_batch(pairs: &[(&[u8], &[u8])]) -> MultiValueEncoded<StaticApi, Pair<StaticApi>> {
    let mut batch = MultiValueEncoded::new();
    for (base, quote) in pairs {
        batch.push(Pair::new(ManagedBuffer::from(*base), ManagedBuffer::from(*quote)));
    }
    batch
}
