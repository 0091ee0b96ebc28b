mod cli;
mod config;

use clap::Parser;
use cli::{Cli, Command, PairArg, RelayArg};
use config::Config;
use multiversx_sc_snippets::imports::*;
use serde::{Deserialize, Serialize};
use std::{
    io::{Read, Write},
    path::Path,
};
use std_reference::{std_reference_proxy::StdReferenceProxy, Pair, RelayData};

const STATE_FILE: &str = "state.toml";
const CONTRACT_CODE: &str = "mxsc:../output/std-reference.mxsc.json";
const GAS_LIMIT: u64 = 30_000_000;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let mut interact = ContractInteract::new().await;
    match cli.command {
        Command::Deploy { relayer } => interact.deploy(relayer).await,
        Command::Upgrade => interact.upgrade().await,
        Command::Relay { updates } => interact.relay(updates).await,
        Command::SetRelayer { relayer } => interact.set_relayer(relayer).await,
        Command::Pause => interact.pause_endpoint().await,
        Command::Unpause => interact.unpause_endpoint().await,
        Command::IsPaused => interact.paused_status().await,
        Command::GetRelayer => interact.relayer().await,
        Command::GetSymbols => interact.get_symbols().await,
        Command::GetRefData { symbol } => interact.get_ref_data(symbol).await,
        Command::GetReferenceData { base, quote } => {
            interact.get_reference_data(base, quote).await
        }
        Command::GetReferenceDataE18 { base, quote } => {
            interact.get_reference_data_e18(base, quote).await
        }
        Command::GetReferenceDataBulk { pairs } => interact.get_reference_data_bulk(pairs).await,
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct State {
    contract_address: Option<Bech32Address>,
}

impl State {
    // Deserializes state from file
    pub fn load_state() -> Self {
        if Path::new(STATE_FILE).exists() {
            let mut file = std::fs::File::open(STATE_FILE).expect("state.toml is not readable");
            let mut content = String::new();
            file.read_to_string(&mut content).expect("state.toml is not readable");
            toml::from_str(&content).expect("state.toml is malformed")
        } else {
            Self::default()
        }
    }

    /// Sets the contract address
    pub fn set_address(&mut self, address: Bech32Address) {
        self.contract_address = Some(address);
    }

    /// Returns the contract address
    pub fn current_address(&self) -> &Bech32Address {
        self.contract_address
            .as_ref()
            .expect("no known contract, deploy first")
    }
}

impl Drop for State {
    // Serializes state to file
    fn drop(&mut self) {
        let content = toml::to_string(self).expect("state is not serializable");
        match std::fs::File::create(STATE_FILE) {
            Ok(mut file) => {
                if let Err(err) = file.write_all(content.as_bytes()) {
                    eprintln!("failed to write {STATE_FILE}: {err}");
                }
            }
            Err(err) => eprintln!("failed to create {STATE_FILE}: {err}"),
        }
    }
}

fn managed_address(bech32: &str) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(Bech32Address::from_bech32_string(bech32.to_owned()).to_address())
}

struct ContractInteract {
    interactor: Interactor,
    wallet_address: Address,
    contract_code: BytesValue,
    state: State,
}

impl ContractInteract {
    async fn new() -> Self {
        let config = Config::new();
        let mut interactor = Interactor::new(config.gateway_uri())
            .await
            .use_chain_simulator(config.use_chain_simulator());
        interactor.set_current_dir_from_workspace("std_reference/interactor");

        let wallet_address = interactor.register_wallet(test_wallets::alice()).await;

        let contract_code =
            BytesValue::interpret_from(CONTRACT_CODE, &InterpreterContext::default());

        ContractInteract {
            interactor,
            wallet_address,
            contract_code,
            state: State::load_state(),
        }
    }

    async fn deploy(&mut self, relayer: Option<String>) {
        let relayer: OptionalValue<ManagedAddress<StaticApi>> =
            relayer.map(|relayer| managed_address(&relayer)).into();

        let new_address = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .gas(GAS_LIMIT)
            .typed(StdReferenceProxy)
            .init(relayer)
            .code(&self.contract_code)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewBech32Address)
            .run()
            .await;

        println!("new address: {new_address}");
        self.state.set_address(new_address);
    }

    async fn upgrade(&mut self) {
        let response = self
            .interactor
            .tx()
            .to(self.state.current_address())
            .from(&self.wallet_address)
            .gas(GAS_LIMIT)
            .typed(StdReferenceProxy)
            .upgrade()
            .code(&self.contract_code)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Result: {response:?}");
    }

    async fn relay(&mut self, updates: Vec<RelayArg>) {
        let mut batch = MultiValueEncoded::<StaticApi, RelayData<StaticApi>>::new();
        for update in &updates {
            batch.push(RelayData::new(
                ManagedBuffer::from(update.symbol.as_str()),
                update.rate,
                update.resolve_time,
            ));
        }

        let response = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(StdReferenceProxy)
            .relay(batch)
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Relayed {} update(s): {response:?}", updates.len());
    }

    async fn set_relayer(&mut self, relayer: String) {
        let response = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(StdReferenceProxy)
            .set_relayer(managed_address(&relayer))
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Result: {response:?}");
    }

    async fn pause_endpoint(&mut self) {
        let response = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(StdReferenceProxy)
            .pause_endpoint()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Result: {response:?}");
    }

    async fn unpause_endpoint(&mut self) {
        let response = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address())
            .gas(GAS_LIMIT)
            .typed(StdReferenceProxy)
            .unpause_endpoint()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Result: {response:?}");
    }

    async fn paused_status(&mut self) {
        let result_value = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(StdReferenceProxy)
            .paused_status()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Result: {result_value:?}");
    }

    async fn relayer(&mut self) {
        let result_value = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(StdReferenceProxy)
            .relayer()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Relayer: {result_value:?}");
    }

    async fn get_symbols(&mut self) {
        let result_value = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(StdReferenceProxy)
            .get_symbols()
            .returns(ReturnsResult)
            .run()
            .await;

        for symbol in result_value {
            println!("{}", String::from_utf8_lossy(symbol.to_boxed_bytes().as_slice()));
        }
    }

    async fn get_ref_data(&mut self, symbol: String) {
        let result_value = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(StdReferenceProxy)
            .get_ref_data(ManagedBuffer::<StaticApi>::from(symbol.as_str()))
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Result: {result_value:?}");
    }

    async fn get_reference_data(&mut self, base: String, quote: String) {
        let result_value = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(StdReferenceProxy)
            .get_reference_data(
                ManagedBuffer::<StaticApi>::from(base.as_str()),
                ManagedBuffer::<StaticApi>::from(quote.as_str()),
            )
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("Result: {result_value:?}");
    }

    async fn get_reference_data_e18(&mut self, base: String, quote: String) {
        let result_value = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(StdReferenceProxy)
            .get_reference_data_e18(
                ManagedBuffer::<StaticApi>::from(base.as_str()),
                ManagedBuffer::<StaticApi>::from(quote.as_str()),
            )
            .returns(ReturnsResult)
            .run()
            .await;

        println!("Result: {result_value:?}");
    }

    async fn get_reference_data_bulk(&mut self, pairs: Vec<PairArg>) {
        let mut batch = MultiValueEncoded::<StaticApi, Pair<StaticApi>>::new();
        for pair in &pairs {
            batch.push(Pair::new(
                ManagedBuffer::from(pair.base.as_str()),
                ManagedBuffer::from(pair.quote.as_str()),
            ));
        }

        let result_value = self
            .interactor
            .query()
            .to(self.state.current_address())
            .typed(StdReferenceProxy)
            .get_reference_data_bulk(batch)
            .returns(ReturnsResult)
            .run()
            .await;

        for (pair, reference) in pairs.iter().zip(result_value) {
            println!("{}/{}: {reference:?}", pair.base, pair.quote);
        }
    }
}
