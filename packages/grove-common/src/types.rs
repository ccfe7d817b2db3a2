use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Timestamp, Uint128};

/// Lifecycle stage of a grove tree. Trees only move forward; `Flowering`
/// is the terminal stage.
#[cw_serde]
pub enum GrowthStage {
    Seed,
    Sprout,
    Sapling,
    Flowering,
}

/// Read-only query interface of the grove registry contract.
///
/// The registry numbers trees from 1, so a token id of 0 never occurs and
/// can be used as an "empty slot" marker by consumers.
#[cw_serde]
pub enum RegistryQueryMsg {
    /// Number of trees currently owned by this address.
    OwnerTreeCount { owner: String },
    /// Token id of the owner's tree at the given enumeration index.
    /// Errors if `index` is out of range.
    TreeOfOwnerAtIndex { owner: String, index: u64 },
    /// Current lifecycle stage of a tree.
    Stage { token_id: u64 },
    /// Static metadata recorded when the tree was planted.
    TreeInfo { token_id: u64 },
    /// Price to mint the next sapling on the registry's ascending curve.
    MintPrice {},
}

#[cw_serde]
pub struct OwnerTreeCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct TreeOfOwnerAtIndexResponse {
    pub token_id: u64,
}

#[cw_serde]
pub struct StageResponse {
    pub stage: GrowthStage,
}

#[cw_serde]
pub struct TreeInfoResponse {
    pub token_id: u64,
    /// Block time at which the sapling was planted (minted).
    pub planted_at: Timestamp,
    pub species: String,
}

#[cw_serde]
pub struct MintPriceResponse {
    pub price: Uint128,
}
