// Stable error identities. Every failure surfaces as a user error (code 4)
// carrying one of these messages, so callers match on them directly.

pub const ERR_INSUFFICIENT_CONTRIBUTION: &str = "FundMe__InsufficientContribution";
pub const ERR_ORACLE_UNAVAILABLE: &str = "FundMe__OracleUnavailable";
pub const ERR_NOT_OWNER: &str = "FundMe__NotOwner";
pub const ERR_INDEX_OUT_OF_RANGE: &str = "FundMe__IndexOutOfRange";

// A failed payout has no constant here: `direct_egld` aborts the call with
// the VM's own transfer error and the VM reverts the whole sweep.

// ── Deploy-time validation ──

pub const ERR_INVALID_PRICE_FEED: &str = "FundMe__InvalidPriceFeed";
pub const ERR_INVALID_MINIMUM: &str = "FundMe__InvalidMinimum";
pub const ERR_INVALID_MAX_PRICE_AGE: &str = "FundMe__InvalidMaxPriceAge";
