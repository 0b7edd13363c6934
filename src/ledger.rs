multiversx_sc::imports!();

use crate::errors::ERR_INDEX_OUT_OF_RANGE;
use crate::{events, price_guard, storage};

// ============================================================
// Contribution Ledger
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule:
    storage::StorageModule + price_guard::PriceGuardModule + events::EventsModule
{
    // ========================================================
    // ENDPOINT: fund
    // The price check runs before any storage write, so a
    // rejected contribution leaves the ledger untouched.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(fund)]
    fn fund(&self) {
        let contributor = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        let reference_value = self.require_minimum_contribution(&amount);

        self.address_to_amount_funded(&contributor)
            .update(|funded| *funded += &amount);
        self.funders().push(&contributor);

        self.fund_event(&contributor, &amount, &reference_value);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getAddressToAmountFunded)]
    fn get_address_to_amount_funded(&self, funder: ManagedAddress) -> BigUint {
        self.address_to_amount_funded(&funder).get()
    }

    /// Zero-based, unlike the underlying `VecMapper`.
    #[view(getFunder)]
    fn get_funder(&self, index: usize) -> ManagedAddress {
        let funders = self.funders();
        require!(index < funders.len(), ERR_INDEX_OUT_OF_RANGE);
        funders.get(index + 1)
    }

    #[view(getFundersCount)]
    fn get_funders_count(&self) -> usize {
        self.funders().len()
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getPriceFeed)]
    fn get_price_feed(&self) -> ManagedAddress {
        self.price_feed().get()
    }
}
