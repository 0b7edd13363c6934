#![no_std]

multiversx_sc::imports!();

pub mod custodian;
pub mod errors;
pub mod events;
pub mod fund_me_proxy;
pub mod ledger;
pub mod price_feed_proxy;
pub mod price_guard;
pub mod storage;
pub mod sweep;

use errors::{ERR_INVALID_MAX_PRICE_AGE, ERR_INVALID_MINIMUM, ERR_INVALID_PRICE_FEED};

// ============================================================
// Constants
// ============================================================

/// Oldest feed answer accepted when no age is given at deploy: 1 hour
const DEFAULT_MAX_PRICE_AGE: u64 = 3_600;

// ============================================================
// Contract
// ============================================================

/// Custodial contribution ledger. Contributors fund it with EGLD worth at
/// least a USD floor; the owner fixed at deploy sweeps the whole balance.
#[multiversx_sc::contract]
pub trait FundMe:
    storage::StorageModule
    + events::EventsModule
    + price_guard::PriceGuardModule
    + custodian::CustodianModule
    + ledger::LedgerModule
    + sweep::SweepModule
{
    // ========================================================
    // Init
    // No upgrade endpoint: configuration and owner are fixed for
    // the lifetime of the contract.
    // ========================================================

    #[init]
    fn init(
        &self,
        price_feed: ManagedAddress,
        minimum_usd: BigUint,
        max_price_age: OptionalValue<u64>,
    ) {
        require!(
            !price_feed.is_zero() && self.blockchain().is_smart_contract(&price_feed),
            ERR_INVALID_PRICE_FEED
        );
        require!(minimum_usd > 0u64, ERR_INVALID_MINIMUM);

        let max_price_age = max_price_age
            .into_option()
            .unwrap_or(DEFAULT_MAX_PRICE_AGE);
        require!(max_price_age > 0, ERR_INVALID_MAX_PRICE_AGE);

        // Kept separately from the protocol-level SC owner, which can be
        // reassigned through ChangeOwnerAddress. Without an upgrade
        // endpoint that owner cannot replace the code either.
        let owner = self.blockchain().get_caller();
        self.owner().set(&owner);
        self.price_feed().set(&price_feed);
        self.minimum_usd().set(&minimum_usd);
        self.max_price_age().set(max_price_age);
    }
}
