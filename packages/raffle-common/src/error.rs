use thiserror::Error;

/// Precondition failures that abort a run before any ticket is drawn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RaffleError {
    #[error("missing seed: a draw requires an explicit integer seed")]
    MissingSeed,

    #[error("invalid seed {value:?}: expected a non-negative integer")]
    InvalidSeed { value: String },

    #[error("malformed participant row {row}: missing identifier")]
    MissingParticipantId { row: usize },

    #[error(
        "malformed participant row {row}: participant {participant_id} has negative ticket count {ticket_count}"
    )]
    NegativeTicketCount {
        row: usize,
        participant_id: u64,
        ticket_count: i64,
    },

    #[error("duplicate participant identifier {participant_id}")]
    DuplicateParticipant { participant_id: u64 },

    #[error("prize tier {index} has an empty name")]
    EmptyPrizeName { index: usize },

    #[error("prize tier '{name}' must have a positive quantity")]
    ZeroPrizeQuantity { name: String },

    #[error("duplicate prize tier '{name}'")]
    DuplicatePrize { name: String },

    #[error("too many tickets: {total} exceeds the limit of {max}")]
    TooManyTickets { total: u64, max: u64 },
}
