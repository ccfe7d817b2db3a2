use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("promotion is closed")]
    PromotionClosed,

    #[error("insufficient claimable balance: need {needed}, have {available}")]
    InsufficientClaimableBalance {
        needed: Uint128,
        available: Uint128,
    },

    #[error("promotion is still open (closes at {closes_at})")]
    PromotionStillOpen { closes_at: u64 },

    #[error("must send INJ to fund the promotion")]
    NoFundsSent,

    #[error("rebate base amount must be nonzero")]
    ZeroRebateBase,
}
