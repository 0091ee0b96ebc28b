multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("ref_data_update")]
    fn ref_data_update_event(
        &self,
        #[indexed] symbol: &ManagedBuffer,
        #[indexed] rate: u64,
        #[indexed] resolve_time: u64,
    );

    #[event("relayer_update")]
    fn relayer_update_event(
        &self,
        #[indexed] previous_relayer: &ManagedAddress,
        #[indexed] new_relayer: &ManagedAddress,
    );
}
