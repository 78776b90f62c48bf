use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Order, StdError, StdResult, Storage, Timestamp};
use cw_storage_plus::{Item, Map};
use raffle_common::{Participant, ParticipantTable, PrizeCatalog, PrizeTier, WinnerRecord};

pub const CONFIG: Item<RaffleConfig> = Item::new("config");
pub const RAFFLE_STATE: Item<RaffleState> = Item::new("raffle_state");
/// Participant table keyed by submission position, so range order is table order.
pub const PARTICIPANTS: Map<u32, Participant> = Map::new("participants");
/// participant id -> position in PARTICIPANTS
pub const PARTICIPANT_INDEX: Map<u64, u32> = Map::new("participant_index");
pub const DRAW_RESULT: Item<DrawResult> = Item::new("draw_result");
/// Winner records keyed by draw position.
pub const WINNERS: Map<u32, WinnerRecord> = Map::new("winners");

#[cw_serde]
pub struct RaffleConfig {
    pub admin: Addr,
    pub event_name: String,
    /// Declaration order is the tie-break for equal priorities.
    pub prizes: Vec<PrizeTier>,
    /// Leaderboard length for the stats query
    pub top_n: u32,
}

#[cw_serde]
pub struct RaffleState {
    pub participant_count: u32,
    pub total_tickets: u64,
    pub drawn: bool,
}

#[cw_serde]
pub struct DrawResult {
    pub seed: u64,
    pub total_tickets: u64,
    pub requested_slots: u64,
    pub winner_count: u32,
    pub unfilled_slots: u64,
    /// sha256 commitment to the participant table, hex-encoded
    pub table_hash: String,
    /// sha256 over seed, table, catalog and winners, hex-encoded
    pub outcome_digest: String,
    pub drawn_at: Timestamp,
    pub drawn_by: Addr,
}

/// Reload the participant table in submission order.
pub fn load_participant_table(storage: &dyn Storage) -> StdResult<ParticipantTable> {
    let participants = PARTICIPANTS
        .range(storage, None, None, Order::Ascending)
        .map(|r| r.map(|(_, p)| p))
        .collect::<StdResult<Vec<_>>>()?;
    ParticipantTable::from_participants(participants)
        .map_err(|e| StdError::generic_err(e.to_string()))
}

pub fn load_catalog(storage: &dyn Storage) -> StdResult<PrizeCatalog> {
    let config = CONFIG.load(storage)?;
    PrizeCatalog::new(config.prizes).map_err(|e| StdError::generic_err(e.to_string()))
}
