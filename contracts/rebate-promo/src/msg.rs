use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128};

use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {
    /// Grove registry (tree NFT) contract address.
    pub registry: String,
    /// Flat rebate per qualifying tree while total entries stay at or
    /// below the flat-rate cap. Must be nonzero.
    pub rebate_base: Uint128,
    /// Mint price floor anchoring the curve-tracking rebate.
    pub mint_floor: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit INJ into the promotion. Anyone can call.
    Fund {},
    /// Claim the cash rebate for every qualifying tree the sender owns.
    Redeem {},
    /// Forgo the cash rebate and convert every qualifying tree into a
    /// drawing entry instead.
    Enter {},
    /// Drain the remaining balance, pot included. Admin only, and only
    /// after the promotion end.
    WithdrawRemainder {},
    /// Rotate the admin. Admin only.
    UpdateConfig { admin: Option<String> },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    /// Promotion window, open flag, balances and counters.
    #[returns(StatusResponse)]
    Status {},
    /// Scan the address's trees against the qualification rules. Errors
    /// while the promotion is closed.
    #[returns(EligibilityResponse)]
    Eligibility { address: String },
    /// Drawing entries attributed to one account.
    #[returns(EntriesResponse)]
    Entries { address: String },
    /// Paginated slice of the ordered entry log.
    #[returns(EntryLogResponse)]
    EntryLog {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Whether a tree's rebate has already been consumed.
    #[returns(bool)]
    Redeemed { token_id: u64 },
}

#[cw_serde]
pub struct StatusResponse {
    pub promotion_start: Timestamp,
    pub promotion_end: Timestamp,
    /// False once the deadline has passed or the solvency guard tripped.
    pub open: bool,
    /// Live INJ balance held by the contract.
    pub funds: Uint128,
    pub pot: Uint128,
    /// `funds - pot`, floored at zero; the ceiling for redeem/enter.
    pub claimable: Uint128,
    pub current_rate: Uint128,
    pub total_entries: u64,
    pub total_rebates_paid: Uint128,
    pub trees_redeemed: u64,
}

#[cw_serde]
pub struct EligibilityResponse {
    /// One slot per owned tree in enumeration order. Qualifying slots hold
    /// the token id, the rest hold 0 (the registry never issues id 0).
    pub trees: Vec<u64>,
    /// Rebate owed if every qualifying tree were redeemed right now.
    pub total_rebate: Uint128,
    pub eligible_count: u32,
}

#[cw_serde]
pub struct EntriesResponse {
    pub address: String,
    pub entries: u64,
    pub total_entries: u64,
}

#[cw_serde]
pub struct LogEntry {
    pub index: u64,
    pub holder: Addr,
}

#[cw_serde]
pub struct EntryLogResponse {
    pub entries: Vec<LogEntry>,
}
