multiversx_sc::imports!();

use crate::errors::ERR_NOT_OWNER;
use crate::storage;

#[multiversx_sc::module]
pub trait CustodianModule: storage::StorageModule {
    /// Checked before a sweep reads any ledger state.
    /// Returns the owner address so callers can pay out to it.
    fn require_owner(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        let owner = self.owner().get();
        require!(caller == owner, ERR_NOT_OWNER);
        owner
    }
}
