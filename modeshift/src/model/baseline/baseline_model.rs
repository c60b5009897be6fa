use crate::model::baseline::{BaselineDemand, FleetMix, ModeFactors, ValidationError};
use crate::model::Mode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// the complete reference-year picture: travel demand, emission factors,
/// and the current fleet composition and occupancy per mode. pure data;
/// the scenario engine borrows it read-only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselineModel {
    pub demand: BaselineDemand,
    pub factors: HashMap<Mode, ModeFactors>,
    /// reference-year fleet composition for modes with per-powertrain factors
    #[serde(default)]
    pub fleet: HashMap<Mode, FleetMix>,
    /// reference-year persons per vehicle; modes absent here ride at 1.0
    #[serde(default)]
    pub occupancy: HashMap<Mode, f64>,
}

impl BaselineModel {
    pub fn occupancy_rate(&self, mode: &Mode) -> f64 {
        self.occupancy.get(mode).copied().unwrap_or(1.0)
    }

    /// check every included mode before any computation: distances
    /// non-negative, factors present and non-negative, fleet mixes
    /// totalling 100%, occupancy positive.
    pub fn validate(&self, modes: &[Mode]) -> Result<(), ValidationError> {
        self.demand.validate(modes)?;
        for mode in modes {
            let factors = self
                .factors
                .get(mode)
                .ok_or(ValidationError::MissingFactor(*mode))?;
            factors.validate(mode)?;
            if matches!(factors, ModeFactors::ByPowertrain { .. }) {
                let mix = self
                    .fleet
                    .get(mode)
                    .ok_or(ValidationError::MissingFleetMix(*mode))?;
                mix.validate(mode)?;
            }
        }
        for (mode, rate) in &self.occupancy {
            if *rate <= 0.0 {
                return Err(ValidationError::NonPositiveOccupancy(*mode, *rate));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::baseline::EmissionFactor;
    use crate::model::Powertrain;

    fn small_baseline() -> BaselineModel {
        BaselineModel {
            demand: BaselineDemand::new(HashMap::from([(Mode::Car, 100.0), (Mode::Bus, 20.0)])),
            factors: HashMap::from([
                (
                    Mode::Car,
                    ModeFactors::by_powertrain(&[
                        (Powertrain::Thermal, EmissionFactor::co2_only(193.0)),
                        (Powertrain::Electric, EmissionFactor::co2_only(103.0)),
                    ]),
                ),
                (Mode::Bus, ModeFactors::single(EmissionFactor::co2_only(103.0))),
            ]),
            fleet: HashMap::from([(
                Mode::Car,
                FleetMix::split(&[(Powertrain::Thermal, 97), (Powertrain::Electric, 3)]),
            )]),
            occupancy: HashMap::new(),
        }
    }

    #[test]
    fn test_valid_baseline_accepted() {
        let baseline = small_baseline();
        assert!(baseline.validate(&[Mode::Car, Mode::Bus]).is_ok());
    }

    #[test]
    fn test_missing_factor_rejected() {
        let baseline = small_baseline();
        let result = baseline.validate(&[Mode::Car, Mode::Bus, Mode::Train]);
        assert_eq!(result, Err(ValidationError::MissingFactor(Mode::Train)));
    }

    #[test]
    fn test_blended_mode_without_fleet_mix_rejected() {
        let mut baseline = small_baseline();
        baseline.fleet.clear();
        let result = baseline.validate(&[Mode::Car]);
        assert_eq!(result, Err(ValidationError::MissingFleetMix(Mode::Car)));
    }

    #[test]
    fn test_zero_occupancy_rejected() {
        let mut baseline = small_baseline();
        baseline.occupancy.insert(Mode::Car, 0.0);
        let result = baseline.validate(&[Mode::Car, Mode::Bus]);
        assert_eq!(
            result,
            Err(ValidationError::NonPositiveOccupancy(Mode::Car, 0.0))
        );
    }

    #[test]
    fn test_default_occupancy_is_one() {
        let baseline = small_baseline();
        assert_eq!(baseline.occupancy_rate(&Mode::Car), 1.0);
    }
}
