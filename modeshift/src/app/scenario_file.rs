use crate::app::AppError;
use crate::model::baseline::BaselineModel;
use crate::model::scenario::{self, EngineConfig, LeverSet, ScenarioResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// a complete scenario on disk: baseline, levers, and engine settings
/// in one TOML document. the `levers` and `engine` tables may be sparse
/// or absent; missing entries take their neutral/default values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioFile {
    pub baseline: BaselineModel,
    pub levers: LeverSet,
    pub engine: EngineConfig,
}

impl ScenarioFile {
    pub fn from_file(path: &Path) -> Result<ScenarioFile, AppError> {
        let contents = std::fs::read_to_string(path)?;
        let file = toml::from_str(&contents)?;
        Ok(file)
    }

    pub fn to_toml_string(&self) -> Result<String, AppError> {
        let contents = toml::to_string_pretty(self)?;
        Ok(contents)
    }

    pub fn compute(&self) -> Result<ScenarioResult, AppError> {
        let result = scenario::compute(&self.baseline, &self.levers, &self.engine)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mode, UnitBasis};

    #[test]
    fn test_parse_sparse_scenario_file() {
        let contents = r#"
            [baseline.demand]
            car = 150.0
            bus = 25.0

            [baseline.factors.car]
            type = "by_powertrain"

            [baseline.factors.car.factors]
            thermal = { co2 = 193.0 }
            electric = { co2 = 103.0 }

            [baseline.factors.bus]
            type = "single"
            factor = { co2 = 103.0 }

            [baseline.fleet]
            car = { thermal = 97, electric = 3 }

            [levers]
            reduction_km = -20.0
            transfers = [{ from = "car", to = "bus", percent = 10.0 }]

            [engine]
            modes = ["car", "bus"]
            unit_basis = "individual_weekly"
        "#;
        let file: ScenarioFile = toml::from_str(contents).unwrap();
        assert_eq!(file.baseline.demand.get(&Mode::Car), 150.0);
        assert_eq!(file.levers.reduction_km, -20.0);
        assert_eq!(file.engine.unit_basis, UnitBasis::IndividualWeekly);
        // untouched levers stay neutral
        assert_eq!(file.levers.weight_reduction, 0.0);
        assert!(file.compute().is_ok());
    }
}
