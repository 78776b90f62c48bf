use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;

use crate::error::RaffleError;

/// Upper bound on the tickets a single table may hold. The pool is
/// materialized, so this also bounds the memory a run allocates.
pub const MAX_TOTAL_TICKETS: u64 = 10_000_000;

/// A raw input row, as handed over by whatever loaded the table.
/// Nothing is trusted until it passes [`ParticipantTable::from_rows`].
#[cw_serde]
pub struct ParticipantRow {
    pub id: Option<u64>,
    pub display_name: Option<String>,
    pub ticket_count: i64,
}

/// A validated entrant. Immutable for the duration of a run.
#[cw_serde]
pub struct Participant {
    pub id: u64,
    pub display_name: Option<String>,
    pub ticket_count: u64,
}

/// Entrants in input order, with an id index for name resolution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticipantTable {
    participants: Vec<Participant>,
    index: BTreeMap<u64, usize>,
    total_tickets: u64,
}

impl ParticipantTable {
    /// Validate every row and build the table. The first malformed row
    /// rejects the whole table.
    pub fn from_rows(rows: &[ParticipantRow]) -> Result<Self, RaffleError> {
        let mut table = Self::default();
        for (row, raw) in rows.iter().enumerate() {
            table.push(Participant::try_from_row(row, raw)?)?;
        }
        Ok(table)
    }

    /// Build from already-validated participants (e.g. reloaded from storage).
    pub fn from_participants(
        participants: impl IntoIterator<Item = Participant>,
    ) -> Result<Self, RaffleError> {
        let mut table = Self::default();
        for participant in participants {
            table.push(participant)?;
        }
        Ok(table)
    }

    fn push(&mut self, participant: Participant) -> Result<(), RaffleError> {
        if self.index.contains_key(&participant.id) {
            return Err(RaffleError::DuplicateParticipant {
                participant_id: participant.id,
            });
        }
        let total = self.total_tickets.saturating_add(participant.ticket_count);
        if total > MAX_TOTAL_TICKETS {
            return Err(RaffleError::TooManyTickets {
                total,
                max: MAX_TOTAL_TICKETS,
            });
        }
        self.total_tickets = total;
        self.index.insert(participant.id, self.participants.len());
        self.participants.push(participant);
        Ok(())
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn total_tickets(&self) -> u64 {
        self.total_tickets
    }

    pub fn get(&self, id: u64) -> Option<&Participant> {
        self.index.get(&id).map(|&i| &self.participants[i])
    }

    /// Resolved display name; `None` for unknown ids and for entrants without one.
    pub fn display_name_of(&self, id: u64) -> Option<&str> {
        self.get(id).and_then(|p| p.display_name.as_deref())
    }
}

impl Participant {
    /// Validate a single input row. `row` is the zero-based position, used in errors.
    pub fn try_from_row(row: usize, raw: &ParticipantRow) -> Result<Self, RaffleError> {
        let id = raw.id.ok_or(RaffleError::MissingParticipantId { row })?;
        if raw.ticket_count < 0 {
            return Err(RaffleError::NegativeTicketCount {
                row,
                participant_id: id,
                ticket_count: raw.ticket_count,
            });
        }
        // Blank names are treated as absent.
        let display_name = raw
            .display_name
            .as_ref()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(Participant {
            id,
            display_name,
            ticket_count: raw.ticket_count as u64,
        })
    }
}
