multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("fund")]
    fn fund_event(
        &self,
        #[indexed] contributor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        reference_value: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] funders_count: u64,
        optimized: bool,
    );
}
