multiversx_sc::imports!();

use common_constants::USD_TICKER;
use common_errors::{ERROR_NOT_AUTHORIZED, ERROR_REF_DATA_NOT_AVAILABLE};
use common_structs::{RefData, ReferenceData, RelayData};

#[multiversx_sc::module]
pub trait UtilsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + common_math::SharedMathModule
{
    fn require_is_relayer(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.relayer().get(), ERROR_NOT_AUTHORIZED);
    }

    fn set_ref_data(&self, update: RelayData<Self::Api>) {
        let last_update = self.seconds_to_micros(update.resolve_time);

        self.refs(&update.symbol).set(RefData::new(update.rate, last_update));
        self.symbols().insert(update.symbol.clone());

        self.ref_data_update_event(&update.symbol, update.rate, update.resolve_time);
    }

    /// USD is synthetic: always one, always fresh.
    fn get_ref_data_or_fail(&self, symbol: &ManagedBuffer) -> RefData {
        if *symbol == ManagedBuffer::new_from_bytes(USD_TICKER) {
            return RefData::usd(self.current_time_micros());
        }

        let ref_mapper = self.refs(symbol);
        require!(!ref_mapper.is_empty(), ERROR_REF_DATA_NOT_AVAILABLE);

        ref_mapper.get()
    }

    fn get_reference_data_or_fail(
        &self,
        base: &ManagedBuffer,
        quote: &ManagedBuffer,
    ) -> ReferenceData {
        let ref_base = self.get_ref_data_or_fail(base);
        let ref_quote = self.get_ref_data_or_fail(quote);

        ReferenceData {
            rate: self.cross_rate(ref_base.rate, ref_quote.rate),
            last_update_base: ref_base.last_update,
            last_update_quote: ref_quote.last_update,
        }
    }

    fn current_time_micros(&self) -> u64 {
        self.seconds_to_micros(self.blockchain().get_block_timestamp())
    }
}
