#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod events;
pub mod std_reference_proxy;
pub mod storage;
pub mod utils;
pub mod views;

pub use common_errors::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait StdReference:
    multiversx_sc_modules::pause::PauseModule
    + common_math::SharedMathModule
    + events::EventsModule
    + storage::StorageModule
    + utils::UtilsModule
    + views::ViewsModule
    + admin::AdminModule
{
    /// Pushes a batch of USD rates from the relayer.
    /// Entries are written in order, a later entry for the same symbol overwrites an earlier one.
    /// Any failing entry reverts the whole batch.
    #[endpoint(relay)]
    fn relay(&self, updates: MultiValueEncoded<RelayData<Self::Api>>) {
        self.require_not_paused();
        self.require_is_relayer();

        for update in updates {
            self.set_ref_data(update);
        }
    }
}
