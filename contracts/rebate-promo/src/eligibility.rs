use cosmwasm_std::{
    to_json_binary, Addr, Deps, Env, QuerierWrapper, QueryRequest, StdResult, Timestamp, Uint128,
    WasmQuery,
};
use serde::de::DeserializeOwned;

use grove_common::types::{
    GrowthStage, MintPriceResponse, OwnerTreeCountResponse, RegistryQueryMsg, StageResponse,
    TreeInfoResponse, TreeOfOwnerAtIndexResponse,
};

use crate::state::{Config, REDEEMED};

/// Hard close of the promotion: 2027-01-01 00:00:00 UTC. Identical for
/// every deployment of this contract.
pub const PROMOTION_END: Timestamp = Timestamp::from_seconds(1_798_761_600);

/// Result of scanning one holder's trees against the qualification rules.
pub struct HolderScan {
    /// One slot per owned tree in enumeration order; qualifying slots hold
    /// the token id, the rest hold 0.
    pub slots: Vec<u64>,
    /// Rebate owed if every qualifying tree were redeemed at the quoted
    /// rate.
    pub total_rebate: Uint128,
    pub eligible_count: u32,
}

/// True once the wall clock has passed [`PROMOTION_END`]. Irreversible.
pub fn past_deadline(now: Timestamp) -> bool {
    now > PROMOTION_END
}

/// Solvency guard: the promotion stops admitting redemptions and entries
/// when the committed pot plus one marginal rebate can no longer be
/// covered, or when funds cannot cover even a single rebate.
pub fn undercollateralized(funds: Uint128, pot: Uint128, rate: Uint128) -> bool {
    pot > funds + rate || rate > funds
}

/// Open/closed predicate gating redeem, enter and eligibility checks.
/// Evaluated fresh on every call; nothing about it is cached.
pub fn promotion_open(now: Timestamp, funds: Uint128, pot: Uint128, rate: Uint128) -> bool {
    !past_deadline(now) && !undercollateralized(funds, pot, rate)
}

/// Live INJ balance held by the contract.
pub fn contract_funds(querier: QuerierWrapper, env: &Env) -> StdResult<Uint128> {
    let balance = querier.query_balance(env.contract.address.to_string(), "inj")?;
    Ok(balance.amount)
}

pub fn current_mint_price(querier: QuerierWrapper, registry: &Addr) -> StdResult<Uint128> {
    let res: MintPriceResponse = query_registry(querier, registry, &RegistryQueryMsg::MintPrice {})?;
    Ok(res.price)
}

/// Scan every tree the holder currently owns, enumeration index 0 through
/// count - 1. A tree qualifies iff its rebate is unconsumed, the registry
/// reports it flowering, and it was planted strictly after the promotion
/// start. Pure read; consumes nothing.
pub fn scan_holder_trees(
    deps: Deps,
    config: &Config,
    holder: &Addr,
    rate: Uint128,
) -> StdResult<HolderScan> {
    let owned: OwnerTreeCountResponse = query_registry(
        deps.querier,
        &config.registry,
        &RegistryQueryMsg::OwnerTreeCount {
            owner: holder.to_string(),
        },
    )?;

    let mut slots = Vec::with_capacity(owned.count as usize);
    let mut total_rebate = Uint128::zero();
    let mut eligible_count: u32 = 0;

    for index in 0..owned.count {
        let at_index: TreeOfOwnerAtIndexResponse = query_registry(
            deps.querier,
            &config.registry,
            &RegistryQueryMsg::TreeOfOwnerAtIndex {
                owner: holder.to_string(),
                index,
            },
        )?;
        let token_id = at_index.token_id;

        if REDEEMED.has(deps.storage, token_id) {
            slots.push(0);
            continue;
        }

        let stage: StageResponse = query_registry(
            deps.querier,
            &config.registry,
            &RegistryQueryMsg::Stage { token_id },
        )?;
        if stage.stage != GrowthStage::Flowering {
            slots.push(0);
            continue;
        }

        let tree: TreeInfoResponse = query_registry(
            deps.querier,
            &config.registry,
            &RegistryQueryMsg::TreeInfo { token_id },
        )?;
        if tree.planted_at <= config.promotion_start {
            slots.push(0);
            continue;
        }

        slots.push(token_id);
        total_rebate += rate;
        eligible_count += 1;
    }

    Ok(HolderScan {
        slots,
        total_rebate,
        eligible_count,
    })
}

fn query_registry<T: DeserializeOwned>(
    querier: QuerierWrapper,
    registry: &Addr,
    msg: &RegistryQueryMsg,
) -> StdResult<T> {
    querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: registry.to_string(),
        msg: to_json_binary(msg)?,
    }))
}
