use crate::model::{Mode, UnitBasis};
use serde::{Deserialize, Serialize};

/// SNBC-style policy target: the scenario "achieves" its goal when
/// emissions drop by at least this percentage versus the baseline.
pub const DEFAULT_TARGET_REDUCTION_PCT: f64 = 80.0;

/// computation-wide settings. the included modes, unit basis, and the
/// treatment of electric powertrains under weight reduction all varied
/// across the source material; here they are configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// modes included in this computation, in a fixed order. ordering
    /// makes every aggregation deterministic.
    pub modes: Vec<Mode>,
    pub unit_basis: UnitBasis,
    /// whether the weight-reduction discount also applies to electric
    /// powertrains. most source variants discount thermal only.
    pub weight_reduction_applies_to_electric: bool,
    pub target_reduction_pct: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            modes: Mode::ALL.to_vec(),
            unit_basis: UnitBasis::default(),
            weight_reduction_applies_to_electric: false,
            target_reduction_pct: DEFAULT_TARGET_REDUCTION_PCT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_includes_all_modes() {
        let config = EngineConfig::default();
        assert_eq!(config.modes.len(), Mode::ALL.len());
        assert_eq!(config.target_reduction_pct, 80.0);
        assert!(!config.weight_reduction_applies_to_electric);
    }

    #[test]
    fn test_sparse_toml_uses_defaults() {
        let config: EngineConfig = toml::from_str("unit_basis = \"individual_weekly\"").unwrap();
        assert_eq!(config.unit_basis, UnitBasis::IndividualWeekly);
        assert_eq!(config.target_reduction_pct, 80.0);
    }
}
