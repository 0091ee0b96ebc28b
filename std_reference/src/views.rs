multiversx_sc::imports!();

use common_structs::{Pair, RefData, ReferenceData, ReferenceDataE18};

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::utils::UtilsModule
    + common_math::SharedMathModule
{
    /// Returns the USD rate of a symbol and when it was last updated, in microseconds.
    /// Fails if the symbol was never relayed.
    #[view(getRefData)]
    fn get_ref_data(&self, symbol: ManagedBuffer) -> RefData {
        self.get_ref_data_or_fail(&symbol)
    }

    /// Returns the rate of `base` in `quote` scaled by 10^9, floored.
    #[view(getReferenceData)]
    fn get_reference_data(&self, base: ManagedBuffer, quote: ManagedBuffer) -> ReferenceData {
        self.get_reference_data_or_fail(&base, &quote)
    }

    /// Cross rates for several pairs, in request order.
    /// A single unknown symbol fails the whole query.
    #[view(getReferenceDataBulk)]
    fn get_reference_data_bulk(
        &self,
        pairs: MultiValueEncoded<Pair<Self::Api>>,
    ) -> MultiValueEncoded<ReferenceData> {
        let mut result = MultiValueEncoded::new();
        for pair in pairs {
            result.push(self.get_reference_data_or_fail(&pair.base, &pair.quote));
        }

        result
    }

    /// Same as `getReferenceData`, scaled by 10^18 and without the 64 bit bound.
    #[view(getReferenceDataE18)]
    fn get_reference_data_e18(
        &self,
        base: ManagedBuffer,
        quote: ManagedBuffer,
    ) -> ReferenceDataE18<Self::Api> {
        let ref_base = self.get_ref_data_or_fail(&base);
        let ref_quote = self.get_ref_data_or_fail(&quote);

        ReferenceDataE18 {
            rate: self.cross_rate_e18(ref_base.rate, ref_quote.rate),
            last_update_base: ref_base.last_update,
            last_update_quote: ref_quote.last_update,
        }
    }

    #[view(getSymbols)]
    fn get_symbols(&self) -> MultiValueEncoded<ManagedBuffer> {
        let mut result = MultiValueEncoded::new();
        for symbol in self.symbols().iter() {
            result.push(symbol);
        }
        result
    }
}
