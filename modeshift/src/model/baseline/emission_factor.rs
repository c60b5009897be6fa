use crate::model::baseline::ValidationError;
use crate::model::{Mode, Powertrain};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// per-km intensities for one vehicle class: life-cycle CO2 equivalent
/// in grams, final energy in kWh, and particulates in grams. reference
/// data the user may edit to reflect their own sourcing choices.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    /// g CO2e per km, life-cycle basis (manufacturing + use phase)
    pub co2: f64,
    /// kWh per km
    #[serde(default)]
    pub energy: f64,
    /// g particulates per km
    #[serde(default)]
    pub particulates: f64,
}

impl EmissionFactor {
    pub fn co2_only(co2: f64) -> EmissionFactor {
        EmissionFactor {
            co2,
            ..Default::default()
        }
    }

    pub fn new(co2: f64, energy: f64, particulates: f64) -> EmissionFactor {
        EmissionFactor {
            co2,
            energy,
            particulates,
        }
    }

    /// multiply every intensity by the same factor. used for both the
    /// weight-reduction discount and fleet-share weighting, since all
    /// three intensities track vehicle consumption.
    pub fn scale(&self, factor: f64) -> EmissionFactor {
        EmissionFactor {
            co2: self.co2 * factor,
            energy: self.energy * factor,
            particulates: self.particulates * factor,
        }
    }

    pub fn accumulate(&mut self, other: &EmissionFactor) {
        self.co2 += other.co2;
        self.energy += other.energy;
        self.particulates += other.particulates;
    }

    pub fn validate(&self, label: &str) -> Result<(), ValidationError> {
        for (metric, value) in [
            ("co2", self.co2),
            ("energy", self.energy),
            ("particulates", self.particulates),
        ] {
            if value < 0.0 {
                return Err(ValidationError::NegativeFactor(
                    label.to_string(),
                    metric.to_string(),
                    value,
                ));
            }
        }
        Ok(())
    }
}

/// emission factors for one mode: either a single vehicle class, or one
/// factor per powertrain for modes whose fleet is a mix.
///
/// # Example
///
/// a (serialized) factor table with a blended car fleet and a single
/// bus class:
///
/// ```toml
/// [car]
/// type = "by_powertrain"
/// factors = { thermal = { co2 = 218.0 }, electric = { co2 = 103.0 } }
///
/// [bus]
/// type = "single"
/// factor = { co2 = 103.0 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModeFactors {
    Single { factor: EmissionFactor },
    ByPowertrain { factors: HashMap<Powertrain, EmissionFactor> },
}

impl ModeFactors {
    pub fn single(factor: EmissionFactor) -> ModeFactors {
        ModeFactors::Single { factor }
    }

    pub fn by_powertrain(factors: &[(Powertrain, EmissionFactor)]) -> ModeFactors {
        ModeFactors::ByPowertrain {
            factors: factors.iter().copied().collect(),
        }
    }

    pub fn get(&self, powertrain: &Powertrain) -> Option<&EmissionFactor> {
        match self {
            ModeFactors::Single { .. } => None,
            ModeFactors::ByPowertrain { factors } => factors.get(powertrain),
        }
    }

    pub fn validate(&self, mode: &Mode) -> Result<(), ValidationError> {
        match self {
            ModeFactors::Single { factor } => factor.validate(mode.as_str()),
            ModeFactors::ByPowertrain { factors } => {
                for (powertrain, factor) in factors {
                    factor.validate(&format!("{mode}/{powertrain}"))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_factor_rejected() {
        let factor = EmissionFactor::co2_only(-5.0);
        assert_eq!(
            factor.validate("car"),
            Err(ValidationError::NegativeFactor(
                "car".to_string(),
                "co2".to_string(),
                -5.0
            ))
        );
    }

    #[test]
    fn test_scale_applies_to_all_intensities() {
        let factor = EmissionFactor::new(200.0, 0.6, 0.05);
        let scaled = factor.scale(0.5);
        assert_eq!(scaled.co2, 100.0);
        assert_eq!(scaled.energy, 0.3);
        assert_eq!(scaled.particulates, 0.025);
    }

    #[test]
    fn test_mode_factors_toml_round_trip() {
        let factors = ModeFactors::by_powertrain(&[
            (Powertrain::Thermal, EmissionFactor::co2_only(218.0)),
            (Powertrain::Electric, EmissionFactor::co2_only(103.0)),
        ]);
        let serialized = toml::to_string(&factors).unwrap();
        let deserialized: ModeFactors = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, factors);
    }
}
