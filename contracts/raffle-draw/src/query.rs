use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdResult, Uint64};
use cw_storage_plus::Bound;
use raffle_common::{announcement_order, compute_stats, verify_outcome};

use crate::msg::{
    ParticipantEntry, ParticipantsResponse, PrizesResponse, WinnerEntry, WinnersResponse,
};
use crate::state::{
    load_catalog, load_participant_table, CONFIG, DRAW_RESULT, PARTICIPANTS, WINNERS,
};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_prizes(deps: Deps) -> StdResult<Binary> {
    let catalog = load_catalog(deps.storage)?;
    to_json_binary(&PrizesResponse {
        tiers: catalog.in_draw_order().into_iter().cloned().collect(),
        total_slots: catalog.total_slots(),
    })
}

pub fn query_participants(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(30).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let participants = PARTICIPANTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|r| r.map(|(position, participant)| ParticipantEntry { position, participant }))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&ParticipantsResponse { participants })
}

/// Pure read over the participant table; the draw never touches it.
pub fn query_stats(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let table = load_participant_table(deps.storage)?;
    to_json_binary(&compute_stats(&table, config.top_n as usize))
}

pub fn query_draw_result(deps: Deps) -> StdResult<Binary> {
    let result = DRAW_RESULT.may_load(deps.storage)?;
    to_json_binary(&result)
}

pub fn query_winners(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(30).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let winners = WINNERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|r| r.map(|(position, winner)| WinnerEntry { position, winner }))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&WinnersResponse { winners })
}

pub fn query_announcement(deps: Deps) -> StdResult<Binary> {
    let catalog = load_catalog(deps.storage)?;
    let winners = WINNERS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|r| r.map(|(_, winner)| winner))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&announcement_order(&winners, &catalog))
}

pub fn query_verify_draw(deps: Deps, seed: Uint64, digest: String) -> StdResult<Binary> {
    let table = load_participant_table(deps.storage)?;
    let catalog = load_catalog(deps.storage)?;
    let valid = verify_outcome(&table, &catalog, seed.u64(), &digest);
    to_json_binary(&valid)
}
