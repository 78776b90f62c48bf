use cosmwasm_schema::cw_serde;

use crate::participant::{Participant, ParticipantTable};

/// Default length of the leaderboard.
pub const DEFAULT_TOP_N: usize = 5;

/// Aggregate view of the participant table. Independent of any draw.
#[cw_serde]
pub struct ParticipantStats {
    pub total_n_participants: u64,
    pub total_tickets: u64,
    pub top_participants: Vec<Participant>,
}

/// Count entrants and rank the `top_n` largest ticket holders.
/// Equal ticket counts keep their table order.
pub fn compute_stats(table: &ParticipantTable, top_n: usize) -> ParticipantStats {
    let mut ranked: Vec<&Participant> = table.participants().iter().collect();
    ranked.sort_by(|a, b| b.ticket_count.cmp(&a.ticket_count));

    ParticipantStats {
        total_n_participants: table.len() as u64,
        total_tickets: table.total_tickets(),
        top_participants: ranked.into_iter().take(top_n).cloned().collect(),
    }
}
