multiversx_sc::imports!();

use crate::{custodian, events, storage};

// ============================================================
// Sweep Executor
// Both endpoints zero every listed contributor, clear the list
// and send the whole EGLD balance to the owner. They differ in
// storage access pattern only. If the transfer fails the VM
// reverts every write made earlier in the same call.
// ============================================================

#[multiversx_sc::module]
pub trait SweepModule:
    storage::StorageModule + custodian::CustodianModule + events::EventsModule
{
    // ========================================================
    // ENDPOINT: withdraw
    // Walks the funders mapper by index, re-reading the length and
    // the entry from storage on every iteration.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        let owner = self.require_owner();

        let mut index = 1;
        while index <= self.funders().len() {
            let funder = self.funders().get(index);
            self.address_to_amount_funded(&funder).clear();
            index += 1;
        }
        let funders_count = index - 1;
        self.funders().clear();

        self.pay_out(&owner, funders_count, false);
    }

    // ========================================================
    // ENDPOINT: cheaperWithdraw
    // Loads the funders list into memory once and works on the copy.
    // ========================================================

    #[endpoint(cheaperWithdraw)]
    fn cheaper_withdraw(&self) {
        let owner = self.require_owner();

        let mut funders_mapper = self.funders();
        let funders = funders_mapper.load_as_vec();

        for funder in funders.iter() {
            self.address_to_amount_funded(&funder).clear();
        }
        funders_mapper.clear();

        self.pay_out(&owner, funders.len(), true);
    }

    // ========================================================
    // INTERNAL: transfer the full custodial balance
    // The balance is read at transfer time, not derived from the
    // cleared entries.
    // ========================================================

    fn pay_out(&self, owner: &ManagedAddress, funders_count: usize, optimized: bool) {
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);

        if balance > 0u64 {
            self.send().direct_egld(owner, &balance);
        }

        self.withdraw_event(owner, &balance, funders_count as u64, optimized);
    }
}
