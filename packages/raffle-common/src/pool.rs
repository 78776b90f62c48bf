use crate::participant::ParticipantTable;
use crate::shuffle::{shuffle, DrawRng};

/// One entry per ticket, holding the owner's id.
///
/// Built in table order, permuted once, then drained from the end by the
/// allocator. Each [`TicketPool::draw`] removes the entry it returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketPool {
    tickets: Vec<u64>,
}

impl TicketPool {
    /// Expand every participant into `ticket_count` copies of its id.
    /// Zero-ticket participants contribute nothing.
    pub fn build(table: &ParticipantTable) -> Self {
        let mut tickets = Vec::with_capacity(table.total_tickets() as usize);
        for participant in table.participants() {
            tickets.extend(
                std::iter::repeat(participant.id).take(participant.ticket_count as usize),
            );
        }
        TicketPool { tickets }
    }

    /// Permute the pool in place with a run-scoped generator.
    pub fn shuffle(&mut self, rng: &mut DrawRng) {
        shuffle(&mut self.tickets, rng);
    }

    /// Take the last remaining ticket, or `None` once the pool is exhausted.
    pub fn draw(&mut self) -> Option<u64> {
        self.tickets.pop()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.tickets
    }
}
