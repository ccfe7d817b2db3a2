use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<Config> = Item::new("config");
pub const POOL: Item<PoolState> = Item::new("pool");

/// Trees whose rebate has been consumed, via either the cash path or the
/// drawing path. Flags are set once and never cleared.
pub const REDEEMED: Map<u64, bool> = Map::new("redeemed");

/// Drawing entries per account. Always sums to `PoolState::total_entries`.
pub const ENTRY_COUNTS: Map<&Addr, u64> = Map::new("entry_counts");

/// Ordered log of granted entries, keyed by entry index `0..total_entries`.
/// One slot per entry; the eventual winner draw samples an index uniformly.
pub const ENTRY_LOG: Map<u64, Addr> = Map::new("entry_log");

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Grove registry (tree NFT) contract consulted for ownership,
    /// lifecycle stage, planting time and mint price.
    pub registry: Addr,
    /// Flat rebate per qualifying tree while total entries stay at or
    /// below the flat-rate cap. Fixed at instantiation.
    pub rebate_base: Uint128,
    /// Mint price floor anchoring the curve-tracking rebate. Fixed at
    /// instantiation.
    pub mint_floor: Uint128,
    pub promotion_start: Timestamp,
}

#[cw_serde]
pub struct PoolState {
    /// Funds earmarked for the eventual drawing payout. Grows with each
    /// entry and is drained only by the post-deadline withdrawal.
    pub pot: Uint128,
    pub total_entries: u64,
    /// Lifetime amount paid out through the cash rebate path.
    pub total_rebates_paid: Uint128,
    /// Trees consumed through the cash rebate path.
    pub trees_redeemed: u64,
}
