use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, Uint64};
use raffle_common::{
    run_draw, ParticipantRow, ParticipantTable, PrizeCatalog, RaffleError, MAX_TOTAL_TICKETS,
};

use crate::error::ContractError;
use crate::msg::UpdateConfigParams;
use crate::state::{
    load_catalog, load_participant_table, DrawResult, CONFIG, DRAW_RESULT, PARTICIPANTS,
    PARTICIPANT_INDEX, RAFFLE_STATE, WINNERS,
};

/// Append a batch of participant rows. Admin only.
///
/// The whole batch is validated before anything is written: one malformed
/// row or a duplicate id (within the batch or against earlier batches)
/// rejects it entirely.
pub fn register_participants(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    rows: Vec<ParticipantRow>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can register participants".to_string(),
        });
    }

    let mut state = RAFFLE_STATE.load(deps.storage)?;
    if state.drawn {
        return Err(ContractError::AlreadyDrawn);
    }
    if rows.is_empty() {
        return Err(ContractError::EmptyBatch);
    }

    let batch = ParticipantTable::from_rows(&rows)?;
    for participant in batch.participants() {
        if PARTICIPANT_INDEX.has(deps.storage, participant.id) {
            return Err(RaffleError::DuplicateParticipant {
                participant_id: participant.id,
            }
            .into());
        }
    }
    // The limit covers every batch so far, not just this one.
    let total_tickets = state.total_tickets.saturating_add(batch.total_tickets());
    if total_tickets > MAX_TOTAL_TICKETS {
        return Err(RaffleError::TooManyTickets {
            total: total_tickets,
            max: MAX_TOTAL_TICKETS,
        }
        .into());
    }

    for participant in batch.participants() {
        let position = state.participant_count;
        PARTICIPANTS.save(deps.storage, position, participant)?;
        PARTICIPANT_INDEX.save(deps.storage, participant.id, &position)?;
        state.participant_count += 1;
    }
    state.total_tickets = total_tickets;
    RAFFLE_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "register_participants")
        .add_attribute("batch_size", batch.len().to_string())
        .add_event(
            Event::new("raffle_participants_registered")
                .add_attribute("batch_size", batch.len().to_string())
                .add_attribute("batch_tickets", batch.total_tickets().to_string())
                .add_attribute("participant_count", state.participant_count.to_string())
                .add_attribute("total_tickets", state.total_tickets.to_string()),
        ))
}

/// Run the draw. Admin only, exactly once.
///
/// 1. Require an explicit seed
/// 2. Reload the participant table and prize catalog
/// 3. Build the ticket pool, shuffle with the seed, allocate tiers
/// 4. Store the winner records in draw order and close the raffle
pub fn draw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    seed: Option<Uint64>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can run the draw".to_string(),
        });
    }

    let mut state = RAFFLE_STATE.load(deps.storage)?;
    if state.drawn {
        return Err(ContractError::AlreadyDrawn);
    }

    let seed = seed.map(|s| s.u64());
    let table = load_participant_table(deps.storage)?;
    let catalog = load_catalog(deps.storage)?;
    let outcome = run_draw(&table, &catalog, seed)?;

    for (position, winner) in outcome.winners.iter().enumerate() {
        WINNERS.save(deps.storage, position as u32, winner)?;
    }

    let result = DrawResult {
        seed: outcome.seed,
        total_tickets: outcome.total_tickets,
        requested_slots: outcome.requested_slots,
        winner_count: outcome.winners.len() as u32,
        unfilled_slots: outcome.unfilled_slots(),
        table_hash: outcome.table_hash.clone(),
        outcome_digest: outcome.digest.clone(),
        drawn_at: env.block.time,
        drawn_by: info.sender.clone(),
    };
    DRAW_RESULT.save(deps.storage, &result)?;

    state.drawn = true;
    RAFFLE_STATE.save(deps.storage, &state)?;

    let winner_events = outcome
        .winners
        .iter()
        .enumerate()
        .map(|(position, winner)| {
            let event = Event::new("raffle_winner")
                .add_attribute("position", position.to_string())
                .add_attribute("participant_id", winner.participant_id.to_string())
                .add_attribute("prize", winner.prize_name.clone());
            // Empty attribute values are rejected by the chain.
            match &winner.display_name {
                Some(name) => event.add_attribute("display_name", name.clone()),
                None => event,
            }
        });

    Ok(Response::new()
        .add_attribute("action", "draw")
        .add_attribute("seed", outcome.seed.to_string())
        .add_attribute("winners", outcome.winners.len().to_string())
        .add_event(
            Event::new("raffle_draw_completed")
                .add_attribute("event_name", config.event_name)
                .add_attribute("seed", outcome.seed.to_string())
                .add_attribute("total_tickets", outcome.total_tickets.to_string())
                .add_attribute("requested_slots", outcome.requested_slots.to_string())
                .add_attribute("winners", outcome.winners.len().to_string())
                .add_attribute("unfilled_slots", outcome.unfilled_slots().to_string())
                .add_attribute("table_hash", outcome.table_hash.clone())
                .add_attribute("outcome_digest", outcome.digest.clone())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        )
        .add_events(winner_events))
}

/// Update configuration. Admin only, and only while the raffle is open.
pub fn update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    params: UpdateConfigParams,
) -> Result<Response, ContractError> {
    let UpdateConfigParams {
        admin,
        prizes,
        top_n,
    } = params;

    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update config".to_string(),
        });
    }

    // The catalog is frozen once a run has happened.
    if RAFFLE_STATE.load(deps.storage)?.drawn {
        return Err(ContractError::AlreadyDrawn);
    }

    if let Some(new_admin) = admin {
        config.admin = deps.api.addr_validate(&new_admin)?;
    }
    if let Some(tiers) = prizes {
        PrizeCatalog::new(tiers.clone())?;
        config.prizes = tiers;
    }
    if let Some(n) = top_n {
        validate_top_n(n)?;
        config.top_n = n;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_event(
            Event::new("raffle_config_updated")
                .add_attribute("admin", config.admin.to_string())
                .add_attribute("prize_tiers", config.prizes.len().to_string())
                .add_attribute("top_n", config.top_n.to_string()),
        ))
}

pub fn validate_top_n(top_n: u32) -> Result<(), ContractError> {
    if top_n == 0 {
        return Err(ContractError::InvalidTopN);
    }
    Ok(())
}
