multiversx_sc::imports!();

use common_structs::RefData;

#[multiversx_sc::module]
pub trait StorageModule {
    /// Last relayed reference of a symbol. USD is never read from here.
    #[storage_mapper("refs")]
    fn refs(&self, symbol: &ManagedBuffer) -> SingleValueMapper<RefData>;

    #[storage_mapper("symbols")]
    fn symbols(&self) -> UnorderedSetMapper<ManagedBuffer>;

    #[view(getRelayer)]
    #[storage_mapper("relayer")]
    fn relayer(&self) -> SingleValueMapper<ManagedAddress>;
}
