use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{Config, PoolState, CONFIG, POOL};

const CONTRACT_NAME: &str = "crates.io:grove-rebate-promo";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.rebate_base.is_zero() {
        return Err(ContractError::ZeroRebateBase);
    }

    let config = Config {
        admin: info.sender.clone(),
        registry: deps.api.addr_validate(&msg.registry)?,
        rebate_base: msg.rebate_base,
        mint_floor: msg.mint_floor,
        promotion_start: env.block.time,
    };
    CONFIG.save(deps.storage, &config)?;

    let pool = PoolState {
        pot: Uint128::zero(),
        total_entries: 0,
        total_rebates_paid: Uint128::zero(),
        trees_redeemed: 0,
    };
    POOL.save(deps.storage, &pool)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "rebate-promo")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("registry", config.registry.to_string())
        .add_attribute(
            "promotion_start",
            config.promotion_start.seconds().to_string(),
        ))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Fund {} => execute::fund(deps, env, info),
        ExecuteMsg::Redeem {} => execute::redeem(deps, env, info),
        ExecuteMsg::Enter {} => execute::enter(deps, env, info),
        ExecuteMsg::WithdrawRemainder {} => execute::withdraw_remainder(deps, env, info),
        ExecuteMsg::UpdateConfig { admin } => execute::update_config(deps, env, info, admin),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Status {} => query::query_status(deps, env),
        QueryMsg::Eligibility { address } => query::query_eligibility(deps, env, address),
        QueryMsg::Entries { address } => query::query_entries(deps, address),
        QueryMsg::EntryLog { start_after, limit } => {
            query::query_entry_log(deps, start_after, limit)
        }
        QueryMsg::Redeemed { token_id } => query::query_redeemed(deps, token_id),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "cannot migrate from a different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
