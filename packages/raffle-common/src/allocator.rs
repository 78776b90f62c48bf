use cosmwasm_schema::cw_serde;

use crate::catalog::PrizeCatalog;
use crate::participant::ParticipantTable;
use crate::pool::TicketPool;

/// One drawn ticket and the prize it won.
#[cw_serde]
pub struct WinnerRecord {
    pub participant_id: u64,
    pub display_name: Option<String>,
    pub prize_name: String,
}

/// Hand out prizes tier by tier, highest priority first, drawing each slot
/// from the end of the (already shuffled) pool.
///
/// Consumes the pool. Once it runs dry every remaining slot, including all
/// lower tiers, is left unfilled. Draws are per ticket, so one participant
/// can win several slots.
pub fn allocate(
    mut pool: TicketPool,
    catalog: &PrizeCatalog,
    table: &ParticipantTable,
) -> Vec<WinnerRecord> {
    let capacity = catalog.total_slots().min(pool.len() as u64) as usize;
    let mut winners = Vec::with_capacity(capacity);

    'tiers: for tier in catalog.in_draw_order() {
        for _ in 0..tier.quantity {
            let Some(participant_id) = pool.draw() else {
                break 'tiers;
            };
            winners.push(WinnerRecord {
                participant_id,
                display_name: table.display_name_of(participant_id).map(str::to_string),
                prize_name: tier.name.clone(),
            });
        }
    }

    winners
}

/// Winners re-ordered for presentation: lowest priority first, draw order
/// kept within a tier.
pub fn announcement_order(winners: &[WinnerRecord], catalog: &PrizeCatalog) -> Vec<WinnerRecord> {
    let mut ordered = winners.to_vec();
    ordered.sort_by_key(|w| catalog.priority_of(&w.prize_name).unwrap_or(0));
    ordered
}
