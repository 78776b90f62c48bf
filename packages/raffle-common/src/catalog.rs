use std::collections::BTreeSet;

use cosmwasm_schema::cw_serde;

use crate::error::RaffleError;

/// A named prize handed out `quantity` times. Higher `priority` is drawn first.
#[cw_serde]
pub struct PrizeTier {
    pub name: String,
    pub quantity: u32,
    pub priority: u32,
}

/// Fixed prize list for one event, kept in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrizeCatalog {
    tiers: Vec<PrizeTier>,
}

impl PrizeCatalog {
    /// Validate names (non-empty, unique) and quantities (positive).
    pub fn new(tiers: Vec<PrizeTier>) -> Result<Self, RaffleError> {
        let mut seen = BTreeSet::new();
        for (index, tier) in tiers.iter().enumerate() {
            if tier.name.trim().is_empty() {
                return Err(RaffleError::EmptyPrizeName { index });
            }
            if tier.quantity == 0 {
                return Err(RaffleError::ZeroPrizeQuantity {
                    name: tier.name.clone(),
                });
            }
            if !seen.insert(tier.name.as_str()) {
                return Err(RaffleError::DuplicatePrize {
                    name: tier.name.clone(),
                });
            }
        }
        Ok(Self { tiers })
    }

    /// Tiers in declaration order.
    pub fn tiers(&self) -> &[PrizeTier] {
        &self.tiers
    }

    /// Tiers sorted by priority descending. The sort is stable, so tiers
    /// sharing a priority keep their declaration order.
    pub fn in_draw_order(&self) -> Vec<&PrizeTier> {
        let mut ordered: Vec<&PrizeTier> = self.tiers.iter().collect();
        ordered.sort_by(|a, b| b.priority.cmp(&a.priority));
        ordered
    }

    pub fn total_slots(&self) -> u64 {
        self.tiers.iter().map(|t| u64::from(t.quantity)).sum()
    }

    pub fn priority_of(&self, name: &str) -> Option<u32> {
        self.tiers
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.priority)
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}
