multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait AdminModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// The relayer defaults to the deployer.
    #[init]
    fn init(&self, relayer: OptionalValue<ManagedAddress>) {
        let relayer = relayer
            .into_option()
            .unwrap_or_else(|| self.blockchain().get_caller());

        self.relayer().set(&relayer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setRelayer)]
    fn set_relayer(&self, relayer: ManagedAddress) {
        let previous_relayer = self.relayer().replace(&relayer);

        self.relayer_update_event(&previous_relayer, &relayer);
    }
}
