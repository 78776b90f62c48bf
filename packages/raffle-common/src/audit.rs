use sha2::{Digest, Sha256};

use crate::allocator::WinnerRecord;
use crate::catalog::PrizeCatalog;
use crate::participant::ParticipantTable;

const TABLE_PREFIX: u8 = 0x00;
const OUTCOME_PREFIX: u8 = 0x01;

/// Commitment to the participant table, in table order.
///
/// `sha256( 0x00 || for each participant: id_u64_be || tickets_u64_be || name_len_u32_be || name )`
///
/// Publishing this before the seed is known lets anyone check afterwards
/// that the table was not edited to suit the seed.
pub fn table_hash(table: &ParticipantTable) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([TABLE_PREFIX]);
    for p in table.participants() {
        hasher.update(p.id.to_be_bytes());
        hasher.update(p.ticket_count.to_be_bytes());
        update_str(&mut hasher, p.display_name.as_deref().unwrap_or(""));
    }
    hasher.finalize().into()
}

/// Digest binding a draw's inputs to its winner sequence.
///
/// `sha256( 0x01 || seed_u64_be || table_hash || tiers (declaration order) || winner_count_u64_be || winners (draw order) )`
pub fn outcome_digest(
    seed: u64,
    table: &ParticipantTable,
    catalog: &PrizeCatalog,
    winners: &[WinnerRecord],
) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([OUTCOME_PREFIX]);
    hasher.update(seed.to_be_bytes());
    hasher.update(table_hash(table));
    for tier in catalog.tiers() {
        update_str(&mut hasher, &tier.name);
        hasher.update(tier.quantity.to_be_bytes());
        hasher.update(tier.priority.to_be_bytes());
    }
    hasher.update((winners.len() as u64).to_be_bytes());
    for w in winners {
        hasher.update(w.participant_id.to_be_bytes());
        update_str(&mut hasher, &w.prize_name);
    }
    hasher.finalize().into()
}

/// Re-run the draw for `seed` and compare against a published hex digest.
/// Malformed hex never verifies.
pub fn verify_outcome(
    table: &ParticipantTable,
    catalog: &PrizeCatalog,
    seed: u64,
    digest_hex: &str,
) -> bool {
    let expected = match hex::decode(digest_hex) {
        Ok(v) => v,
        Err(_) => return false,
    };
    if expected.len() != 32 {
        return false;
    }
    let outcome = crate::draw::draw_with_seed(table, catalog, seed);
    hex::encode(expected) == outcome.digest
}

fn update_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u32).to_be_bytes());
    hasher.update(s.as_bytes());
}
