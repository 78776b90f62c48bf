use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};
use raffle_common::{PrizeCatalog, DEFAULT_TOP_N};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, UpdateConfigParams};
use crate::query;
use crate::state::{RaffleConfig, RaffleState, CONFIG, RAFFLE_STATE};

const CONTRACT_NAME: &str = "crates.io:raffle-draw";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let catalog = PrizeCatalog::new(msg.prizes.clone())?;
    let top_n = msg.top_n.unwrap_or(DEFAULT_TOP_N as u32);
    execute::validate_top_n(top_n)?;

    let config = RaffleConfig {
        admin: info.sender.clone(),
        event_name: msg.event_name,
        prizes: msg.prizes,
        top_n,
    };
    CONFIG.save(deps.storage, &config)?;

    RAFFLE_STATE.save(
        deps.storage,
        &RaffleState {
            participant_count: 0,
            total_tickets: 0,
            drawn: false,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "raffle-draw")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("prize_slots", catalog.total_slots().to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterParticipants { rows } => {
            execute::register_participants(deps, env, info, rows)
        }
        ExecuteMsg::Draw { seed } => execute::draw(deps, env, info, seed),
        ExecuteMsg::UpdateConfig {
            admin,
            prizes,
            top_n,
        } => execute::update_config(
            deps,
            env,
            info,
            UpdateConfigParams {
                admin,
                prizes,
                top_n,
            },
        ),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Prizes {} => query::query_prizes(deps),
        QueryMsg::Participants { start_after, limit } => {
            query::query_participants(deps, start_after, limit)
        }
        QueryMsg::Stats {} => query::query_stats(deps),
        QueryMsg::DrawResult {} => query::query_draw_result(deps),
        QueryMsg::Winners { start_after, limit } => {
            query::query_winners(deps, start_after, limit)
        }
        QueryMsg::Announcement {} => query::query_announcement(deps),
        QueryMsg::VerifyDraw { seed, digest } => query::query_verify_draw(deps, seed, digest),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
