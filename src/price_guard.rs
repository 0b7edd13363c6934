multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_CONTRIBUTION, ERR_ORACLE_UNAVAILABLE};
use crate::{price_feed_proxy, storage};

// ============================================================
// Price Guard
// Converts EGLD amounts into USD through the price feed and
// enforces the minimum contribution. Never writes storage.
// ============================================================

#[multiversx_sc::module]
pub trait PriceGuardModule: storage::StorageModule {
    /// USD value (18 decimals) of `amount` EGLD at the current feed rate.
    #[view(getConversionRate)]
    fn get_conversion_rate(&self, amount: BigUint) -> BigUint {
        self.reference_value(&amount)
    }

    #[view(getMinimumUsd)]
    fn get_minimum_usd(&self) -> BigUint {
        self.minimum_usd().get()
    }

    #[view(getMaxPriceAge)]
    fn get_max_price_age(&self) -> u64 {
        self.max_price_age().get()
    }

    /// Fails with `FundMe__InsufficientContribution` below the floor.
    /// Returns the computed USD value for event reporting.
    fn require_minimum_contribution(&self, amount: &BigUint) -> BigUint {
        let reference_value = self.reference_value(amount);
        require!(
            reference_value >= self.minimum_usd().get(),
            ERR_INSUFFICIENT_CONTRIBUTION
        );
        reference_value
    }

    fn reference_value(&self, amount: &BigUint) -> BigUint {
        let (rate, decimals) = self.current_rate();
        let scaling = BigUint::from(10u64).pow(decimals as u32);
        (amount * &rate) / scaling
    }

    /// Latest positive, fresh answer from the feed together with its
    /// decimal precision.
    fn current_rate(&self) -> (BigUint, u8) {
        let price_feed_address = self.price_feed().get();

        let decimals: u8 = self
            .tx()
            .to(&price_feed_address)
            .typed(price_feed_proxy::PriceFeedProxy)
            .decimals()
            .returns(ReturnsResult)
            .sync_call();

        let round_data: MultiValue5<u64, BigInt<Self::Api>, u64, u64, u64> = self
            .tx()
            .to(&price_feed_address)
            .typed(price_feed_proxy::PriceFeedProxy)
            .latest_round_data()
            .returns(ReturnsResult)
            .sync_call();
        let (round_id, answer, _started_at, updated_at, answered_in_round) =
            round_data.into_tuple();

        // ── Freshness ──
        require!(updated_at != 0, ERR_ORACLE_UNAVAILABLE);
        require!(answered_in_round >= round_id, ERR_ORACLE_UNAVAILABLE);
        let now = self.blockchain().get_block_timestamp();
        require!(
            now.saturating_sub(updated_at) <= self.max_price_age().get(),
            ERR_ORACLE_UNAVAILABLE
        );

        // ── Sign ──
        let rate = match answer.into_big_uint().into_option() {
            Some(rate) if rate > 0u64 => rate,
            _ => sc_panic!(ERR_ORACLE_UNAVAILABLE),
        };

        (rate, decimals)
    }
}
