use cosmwasm_std::StdError;
use raffle_common::RaffleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Raffle(#[from] RaffleError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("the draw has already run; the raffle is closed")]
    AlreadyDrawn,

    #[error("participant batch is empty")]
    EmptyBatch,

    #[error("top_n must be at least 1")]
    InvalidTopN,
}
