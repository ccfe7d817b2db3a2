use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use grove_common::rate::rebate_rate;

use crate::eligibility::{
    contract_funds, current_mint_price, past_deadline, promotion_open, scan_holder_trees,
    undercollateralized, PROMOTION_END,
};
use crate::msg::{
    EligibilityResponse, EntriesResponse, EntryLogResponse, LogEntry, StatusResponse,
};
use crate::state::{CONFIG, ENTRY_COUNTS, ENTRY_LOG, POOL, REDEEMED};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_status(deps: Deps, env: Env) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let pool = POOL.load(deps.storage)?;

    let funds = contract_funds(deps.querier, &env)?;
    let price = current_mint_price(deps.querier, &config.registry)?;
    let rate = rebate_rate(
        pool.total_entries,
        price,
        config.rebate_base,
        config.mint_floor,
    );

    to_json_binary(&StatusResponse {
        promotion_start: config.promotion_start,
        promotion_end: PROMOTION_END,
        open: promotion_open(env.block.time, funds, pool.pot, rate),
        funds,
        pot: pool.pot,
        claimable: funds.saturating_sub(pool.pot),
        current_rate: rate,
        total_entries: pool.total_entries,
        total_rebates_paid: pool.total_rebates_paid,
        trees_redeemed: pool.trees_redeemed,
    })
}

pub fn query_eligibility(deps: Deps, env: Env, address: String) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let pool = POOL.load(deps.storage)?;
    let holder = deps.api.addr_validate(&address)?;

    if past_deadline(env.block.time) {
        return Err(StdError::generic_err("promotion is closed"));
    }

    let funds = contract_funds(deps.querier, &env)?;
    let price = current_mint_price(deps.querier, &config.registry)?;
    let rate = rebate_rate(
        pool.total_entries,
        price,
        config.rebate_base,
        config.mint_floor,
    );
    if undercollateralized(funds, pool.pot, rate) {
        return Err(StdError::generic_err("promotion is closed"));
    }

    let scan = scan_holder_trees(deps, &config, &holder, rate)?;
    to_json_binary(&EligibilityResponse {
        trees: scan.slots,
        total_rebate: scan.total_rebate,
        eligible_count: scan.eligible_count,
    })
}

pub fn query_entries(deps: Deps, address: String) -> StdResult<Binary> {
    let holder = deps.api.addr_validate(&address)?;
    let pool = POOL.load(deps.storage)?;
    let entries = ENTRY_COUNTS
        .may_load(deps.storage, &holder)?
        .unwrap_or_default();

    to_json_binary(&EntriesResponse {
        address: holder.to_string(),
        entries,
        total_entries: pool.total_entries,
    })
}

pub fn query_entry_log(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(50).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let entries: Vec<_> = ENTRY_LOG
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(index, holder)| LogEntry { index, holder })
        .collect();

    to_json_binary(&EntryLogResponse { entries })
}

pub fn query_redeemed(deps: Deps, token_id: u64) -> StdResult<Binary> {
    to_json_binary(&REDEEMED.has(deps.storage, token_id))
}
