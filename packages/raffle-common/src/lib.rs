pub mod allocator;
pub mod audit;
pub mod catalog;
pub mod draw;
pub mod error;
pub mod participant;
pub mod pool;
pub mod shuffle;
pub mod stats;

pub use allocator::{allocate, announcement_order, WinnerRecord};
pub use audit::{outcome_digest, table_hash, verify_outcome};
pub use catalog::{PrizeCatalog, PrizeTier};
pub use draw::{parse_seed, run_draw, DrawOutcome};
pub use error::RaffleError;
pub use participant::{Participant, ParticipantRow, ParticipantTable, MAX_TOTAL_TICKETS};
pub use pool::TicketPool;
pub use shuffle::{shuffle, DrawRng};
pub use stats::{compute_stats, ParticipantStats, DEFAULT_TOP_N};
