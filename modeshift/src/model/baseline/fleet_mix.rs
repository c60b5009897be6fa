use crate::model::baseline::ValidationError;
use crate::model::{Mode, Powertrain};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// percentage breakdown of a mode's vehicles by powertrain. shares are
/// integer percentages and must total exactly 100; a mix that does not is
/// a user error to surface, never something to silently renormalize.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FleetMix {
    pub shares: HashMap<Powertrain, u32>,
}

impl FleetMix {
    pub fn new(shares: HashMap<Powertrain, u32>) -> FleetMix {
        FleetMix { shares }
    }

    /// a fleet made of a single powertrain
    pub fn single(powertrain: Powertrain) -> FleetMix {
        FleetMix {
            shares: HashMap::from([(powertrain, 100)]),
        }
    }

    pub fn split(shares: &[(Powertrain, u32)]) -> FleetMix {
        FleetMix {
            shares: shares.iter().copied().collect(),
        }
    }

    pub fn share_total(&self) -> u32 {
        self.shares.values().sum()
    }

    /// share of a powertrain as a fraction in [0, 1]
    pub fn fraction(&self, powertrain: &Powertrain) -> f64 {
        self.shares.get(powertrain).copied().unwrap_or(0) as f64 / 100.0
    }

    pub fn validate(&self, mode: &Mode) -> Result<(), ValidationError> {
        let total = self.share_total();
        if total != 100 {
            return Err(ValidationError::InvalidShareSum(*mode, total));
        }
        Ok(())
    }
}
