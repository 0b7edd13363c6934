use multiversx_sc::proxy_imports::*;

/// Chainlink-style aggregator: `decimals` plus `latestRoundData`.
pub struct PriceFeedProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for PriceFeedProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = PriceFeedProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        PriceFeedProxyMethods { wrapped_tx: tx }
    }
}

pub struct PriceFeedProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> PriceFeedProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn decimals(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u8> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("decimals")
            .original_result()
    }

    /// `(roundId, answer, startedAt, updatedAt, answeredInRound)`
    pub fn latest_round_data(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue5<u64, BigInt<Env::Api>, u64, u64, u64>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("latestRoundData")
            .original_result()
    }
}
