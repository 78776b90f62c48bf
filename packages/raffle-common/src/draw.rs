use cosmwasm_schema::cw_serde;

use crate::allocator::{allocate, WinnerRecord};
use crate::audit::{outcome_digest, table_hash};
use crate::catalog::PrizeCatalog;
use crate::error::RaffleError;
use crate::participant::ParticipantTable;
use crate::pool::TicketPool;
use crate::shuffle::DrawRng;

/// Everything a single run produces.
#[cw_serde]
pub struct DrawOutcome {
    pub seed: u64,
    pub total_tickets: u64,
    pub requested_slots: u64,
    /// In draw order.
    pub winners: Vec<WinnerRecord>,
    /// Hex-encoded [`table_hash`].
    pub table_hash: String,
    /// Hex-encoded [`outcome_digest`].
    pub digest: String,
}

impl DrawOutcome {
    /// Prize slots left empty because the pool ran out.
    pub fn unfilled_slots(&self) -> u64 {
        self.requested_slots
            .saturating_sub(self.winners.len() as u64)
    }
}

/// Parse a seed supplied as text (e.g. read off dice by an operator).
pub fn parse_seed(raw: Option<&str>) -> Result<u64, RaffleError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let raw = raw.ok_or(RaffleError::MissingSeed)?;
    raw.parse::<u64>().map_err(|_| RaffleError::InvalidSeed {
        value: raw.to_string(),
    })
}

/// Build the pool, shuffle it with `seed`, and allocate the catalog.
///
/// Inputs are already validated; the only precondition left is an explicit
/// seed. There is no default.
pub fn run_draw(
    table: &ParticipantTable,
    catalog: &PrizeCatalog,
    seed: Option<u64>,
) -> Result<DrawOutcome, RaffleError> {
    let seed = seed.ok_or(RaffleError::MissingSeed)?;
    Ok(draw_with_seed(table, catalog, seed))
}

pub(crate) fn draw_with_seed(
    table: &ParticipantTable,
    catalog: &PrizeCatalog,
    seed: u64,
) -> DrawOutcome {
    let mut pool = TicketPool::build(table);
    let mut rng = DrawRng::from_seed(seed);
    pool.shuffle(&mut rng);

    let winners = allocate(pool, catalog, table);
    let digest = outcome_digest(seed, table, catalog, &winners);

    DrawOutcome {
        seed,
        total_tickets: table.total_tickets(),
        requested_slots: catalog.total_slots(),
        winners,
        table_hash: hex::encode(table_hash(table)),
        digest: hex::encode(digest),
    }
}
