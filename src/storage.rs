multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration (written once in init) ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("priceFeed")]
    fn price_feed(&self) -> SingleValueMapper<ManagedAddress>;

    /// Reference-currency floor, 18 decimals.
    #[storage_mapper("minimumUsd")]
    fn minimum_usd(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("maxPriceAge")]
    fn max_price_age(&self) -> SingleValueMapper<u64>;

    // ── Ledger state ──

    #[storage_mapper("addressToAmountFunded")]
    fn address_to_amount_funded(&self, funder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// One entry per successful contribution. Repeat contributors appear
    /// more than once; totals live in `address_to_amount_funded`.
    #[storage_mapper("funders")]
    fn funders(&self) -> VecMapper<ManagedAddress>;
}
