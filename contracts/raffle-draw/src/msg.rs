use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint64;
use raffle_common::{Participant, ParticipantRow, ParticipantStats, PrizeTier, WinnerRecord};

use crate::state::{DrawResult, RaffleConfig};

#[cw_serde]
pub struct InstantiateMsg {
    pub event_name: String,
    pub prizes: Vec<PrizeTier>,
    /// Defaults to 5
    pub top_n: Option<u32>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Append a batch of participant rows. Admin only, before the draw.
    RegisterParticipants { rows: Vec<ParticipantRow> },
    /// Run the one and only draw. Admin only. The seed is mandatory.
    Draw { seed: Option<Uint64> },
    /// Update configuration. Admin only, before the draw.
    UpdateConfig {
        admin: Option<String>,
        prizes: Option<Vec<PrizeTier>>,
        top_n: Option<u32>,
    },
}

/// Parameters for update_config.
pub struct UpdateConfigParams {
    pub admin: Option<String>,
    pub prizes: Option<Vec<PrizeTier>>,
    pub top_n: Option<u32>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(RaffleConfig)]
    Config {},
    #[returns(PrizesResponse)]
    Prizes {},
    #[returns(ParticipantsResponse)]
    Participants {
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(ParticipantStats)]
    Stats {},
    #[returns(Option<DrawResult>)]
    DrawResult {},
    #[returns(WinnersResponse)]
    Winners {
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    /// Winners ordered lowest prize first, for presentation.
    #[returns(Vec<WinnerRecord>)]
    Announcement {},
    /// Re-run the draw for `seed` over the stored table and compare digests.
    #[returns(bool)]
    VerifyDraw { seed: Uint64, digest: String },
}

#[cw_serde]
pub struct PrizesResponse {
    /// Draw order: priority descending, declaration order on ties.
    pub tiers: Vec<PrizeTier>,
    pub total_slots: u64,
}

#[cw_serde]
pub struct ParticipantEntry {
    pub position: u32,
    pub participant: Participant,
}

#[cw_serde]
pub struct ParticipantsResponse {
    pub participants: Vec<ParticipantEntry>,
}

#[cw_serde]
pub struct WinnerEntry {
    pub position: u32,
    pub winner: WinnerRecord,
}

#[cw_serde]
pub struct WinnersResponse {
    pub winners: Vec<WinnerEntry>,
}
