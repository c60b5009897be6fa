use crate::model::scenario::ScenarioWarning;
use crate::model::Mode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// aggregate emissions in the unit basis output units: CO2 equivalent,
/// final energy, and particulates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub co2: f64,
    pub energy: f64,
    pub particulates: f64,
}

impl Inventory {
    pub fn accumulate(&mut self, other: &Inventory) {
        self.co2 += other.co2;
        self.energy += other.energy;
        self.particulates += other.particulates;
    }
}

/// total emissions plus the per-mode detail behind them
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub total: Inventory,
    pub by_mode: HashMap<Mode, Inventory>,
}

/// the computed scenario. a derived view with no identity of its own:
/// recomputed fresh whenever any input changes, never mutated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// 2050 distance per mode, basis distance unit
    pub distances: HashMap<Mode, f64>,
    /// 2050 mode share percentages (zero for every mode if total is zero)
    pub modal_shares: HashMap<Mode, f64>,
    pub baseline: EmissionBreakdown,
    pub scenario: EmissionBreakdown,
    /// CO2 reduction versus baseline, percent; 0 when the baseline is empty
    pub reduction_pct: f64,
    /// whether `reduction_pct` meets the configured policy target
    pub target_achieved: bool,
    pub warnings: Vec<ScenarioWarning>,
}
