use cosmwasm_std::{coins, BankMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128};

use grove_common::rate::rebate_rate;

use crate::eligibility::{
    contract_funds, current_mint_price, past_deadline, scan_holder_trees, undercollateralized,
    PROMOTION_END,
};
use crate::error::ContractError;
use crate::state::{CONFIG, ENTRY_COUNTS, ENTRY_LOG, POOL, REDEEMED};

/// Fund the promotion. Anyone can call; the attached INJ simply raises the
/// balance that rebates draw from.
pub fn fund(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let amount = info
        .funds
        .iter()
        .find(|c| c.denom == "inj")
        .map(|c| c.amount)
        .unwrap_or_default();
    if amount.is_zero() {
        return Err(ContractError::NoFundsSent);
    }

    // The deposit is already credited while the handler runs
    let balance = contract_funds(deps.querier, &env)?;

    Ok(Response::new()
        .add_attribute("action", "fund")
        .add_attribute("from", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("grove_promo_funded")
                .add_attribute("from", info.sender.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("new_balance", balance.to_string()),
        ))
}

/// Pay the cash rebate for every qualifying tree the sender owns.
///
/// All-or-nothing: either the claimable balance covers the full scan total
/// or the call fails before touching state. A scan that finds nothing is a
/// valid no-op paying zero.
pub fn redeem(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut pool = POOL.load(deps.storage)?;

    if past_deadline(env.block.time) {
        return Err(ContractError::PromotionClosed);
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
        return Err(ContractError::PromotionClosed);
    }

    let scan = scan_holder_trees(deps.as_ref(), &config, &info.sender, rate)?;

    let claimable = funds.saturating_sub(pool.pot);
    if claimable < scan.total_rebate {
        return Err(ContractError::InsufficientClaimableBalance {
            needed: scan.total_rebate,
            available: claimable,
        });
    }

    for &token_id in scan.slots.iter().filter(|&&id| id != 0) {
        REDEEMED.save(deps.storage, token_id, &true)?;
    }
    pool.total_rebates_paid += scan.total_rebate;
    pool.trees_redeemed += u64::from(scan.eligible_count);
    POOL.save(deps.storage, &pool)?;

    let mut response = Response::new()
        .add_attribute("action", "redeem")
        .add_attribute("holder", info.sender.to_string())
        .add_attribute("trees", scan.eligible_count.to_string())
        .add_attribute("amount", scan.total_rebate.to_string());
    if !scan.total_rebate.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(scan.total_rebate.u128(), "inj"),
        });
    }
    Ok(response.add_event(
        Event::new("grove_rebate_redeemed")
            .add_attribute("holder", info.sender.to_string())
            .add_attribute("trees", scan.eligible_count.to_string())
            .add_attribute("rate", rate.to_string())
            .add_attribute("amount", scan.total_rebate.to_string()),
    ))
}

/// Forgo the cash rebate and convert every qualifying tree into a drawing
/// entry instead.
///
/// For each qualifying tree, in scan order:
/// 1. Mark the tree's rebate consumed (the same flag redeem sets).
/// 2. Increment the aggregate and per-account entry counters.
/// 3. Append the sender to the entry log.
/// 4. Earmark the marginal rebate into the pot.
///
/// No coins leave the contract; the pot only reserves them for the
/// eventual drawing. The marginal rebate is re-evaluated after each
/// counter increment, so a call that pushes the aggregate count past the
/// flat-rate cap earmarks its later entries at the curve-tracking rate.
/// The upfront claimable check quotes the pre-call rate; the solvency
/// guard catches on the next call if a cap-crossing call outran funding.
pub fn enter(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut pool = POOL.load(deps.storage)?;

    if past_deadline(env.block.time) {
        return Err(ContractError::PromotionClosed);
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
        return Err(ContractError::PromotionClosed);
    }

    let scan = scan_holder_trees(deps.as_ref(), &config, &info.sender, rate)?;

    let claimable = funds.saturating_sub(pool.pot);
    let needed = rate * Uint128::from(scan.eligible_count);
    if claimable < needed {
        return Err(ContractError::InsufficientClaimableBalance {
            needed,
            available: claimable,
        });
    }

    let mut holder_entries = ENTRY_COUNTS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    let mut pot_added = Uint128::zero();

    for &token_id in scan.slots.iter().filter(|&&id| id != 0) {
        REDEEMED.save(deps.storage, token_id, &true)?;
        let log_index = pool.total_entries;
        pool.total_entries += 1;
        holder_entries += 1;
        ENTRY_LOG.save(deps.storage, log_index, &info.sender)?;
        let marginal = rebate_rate(
            pool.total_entries,
            price,
            config.rebate_base,
            config.mint_floor,
        );
        pool.pot += marginal;
        pot_added += marginal;
    }

    if scan.eligible_count > 0 {
        ENTRY_COUNTS.save(deps.storage, &info.sender, &holder_entries)?;
    }
    POOL.save(deps.storage, &pool)?;

    Ok(Response::new()
        .add_attribute("action", "enter")
        .add_attribute("holder", info.sender.to_string())
        .add_attribute("entries", scan.eligible_count.to_string())
        .add_attribute("pot_added", pot_added.to_string())
        .add_event(
            Event::new("grove_pot_entered")
                .add_attribute("holder", info.sender.to_string())
                .add_attribute("entries", scan.eligible_count.to_string())
                .add_attribute("pot_added", pot_added.to_string())
                .add_attribute("pot", pool.pot.to_string())
                .add_attribute("total_entries", pool.total_entries.to_string()),
        ))
}

/// Drain everything left in the contract, pot included. The stored pot is
/// zeroed; entry counters and the log stay as an audit trail.
pub fn withdraw_remainder(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only the admin can withdraw the remainder".to_string(),
        });
    }
    if !past_deadline(env.block.time) {
        return Err(ContractError::PromotionStillOpen {
            closes_at: PROMOTION_END.seconds(),
        });
    }

    let funds = contract_funds(deps.querier, &env)?;
    let mut pool = POOL.load(deps.storage)?;
    pool.pot = Uint128::zero();
    POOL.save(deps.storage, &pool)?;

    let mut response = Response::new()
        .add_attribute("action", "withdraw_remainder")
        .add_attribute("to", config.admin.to_string())
        .add_attribute("amount", funds.to_string());
    if !funds.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: config.admin.to_string(),
            amount: coins(funds.u128(), "inj"),
        });
    }
    Ok(response.add_event(
        Event::new("grove_remainder_withdrawn")
            .add_attribute("to", config.admin.to_string())
            .add_attribute("amount", funds.to_string()),
    ))
}

/// Rotate the admin. Admin only.
pub fn update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    admin: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only the admin can update config".to_string(),
        });
    }

    if let Some(admin) = admin {
        config.admin = deps.api.addr_validate(&admin)?;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("admin", config.admin.to_string()))
}
