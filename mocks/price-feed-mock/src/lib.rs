#![no_std]

multiversx_sc::imports!();

pub mod price_feed_mock_proxy;

/// Test double for a Chainlink-style aggregator. Every round answers
/// in itself, so `answeredInRound == roundId`.
#[multiversx_sc::contract]
pub trait PriceFeedMock {
    #[init]
    fn init(&self, decimals: u8, initial_answer: BigInt) {
        self.feed_decimals().set(decimals);
        self.update_answer(initial_answer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Opens the next round, stamped with the current block timestamp.
    #[endpoint(updateAnswer)]
    fn update_answer(&self, answer: BigInt) {
        let round_id = self.latest_round().get() + 1;
        let now = self.blockchain().get_block_timestamp();
        self.update_round_data(round_id, answer, now, now);
    }

    #[endpoint(updateRoundData)]
    fn update_round_data(&self, round_id: u64, answer: BigInt, timestamp: u64, started_at: u64) {
        self.latest_round().set(round_id);
        self.latest_answer().set(&answer);
        self.answers(round_id).set(&answer);
        self.timestamps(round_id).set(timestamp);
        self.started_at(round_id).set(started_at);
    }

    #[view(decimals)]
    fn decimals(&self) -> u8 {
        self.feed_decimals().get()
    }

    #[view(latestRoundData)]
    fn latest_round_data(&self) -> MultiValue5<u64, BigInt, u64, u64, u64> {
        let round_id = self.latest_round().get();
        (
            round_id,
            self.answers(round_id).get(),
            self.started_at(round_id).get(),
            self.timestamps(round_id).get(),
            round_id,
        )
            .into()
    }

    #[view(getRoundData)]
    fn get_round_data(&self, round_id: u64) -> MultiValue5<u64, BigInt, u64, u64, u64> {
        (
            round_id,
            self.answers(round_id).get(),
            self.started_at(round_id).get(),
            self.timestamps(round_id).get(),
            round_id,
        )
            .into()
    }

    #[storage_mapper("decimals")]
    fn feed_decimals(&self) -> SingleValueMapper<u8>;

    #[view(latestRound)]
    #[storage_mapper("latestRound")]
    fn latest_round(&self) -> SingleValueMapper<u64>;

    #[view(latestAnswer)]
    #[storage_mapper("latestAnswer")]
    fn latest_answer(&self) -> SingleValueMapper<BigInt>;

    #[storage_mapper("answers")]
    fn answers(&self, round_id: u64) -> SingleValueMapper<BigInt>;

    #[storage_mapper("timestamps")]
    fn timestamps(&self, round_id: u64) -> SingleValueMapper<u64>;

    #[storage_mapper("startedAt")]
    fn started_at(&self, round_id: u64) -> SingleValueMapper<u64>;
}
