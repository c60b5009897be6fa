use crate::model::baseline::BaselineModel;
use crate::model::scenario::{scenario_ops, EngineConfig, LeverSet, ScenarioError};
use crate::model::Mode;
use serde::{Deserialize, Serialize};

/// an individual policy lever, for attribution purposes
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lever {
    CarElectrification,
    BusElectrification,
    BikeElectrification,
    Sobriety,
    ModalTransfer,
    Occupancy,
    WeightReduction,
}

impl Lever {
    /// the fixed order in which levers are cumulatively enabled. the
    /// decomposition is order-sensitive (see [`decompose`]), so this
    /// order is part of the method's definition.
    pub const ORDER: [Lever; 7] = [
        Lever::CarElectrification,
        Lever::BusElectrification,
        Lever::BikeElectrification,
        Lever::Sobriety,
        Lever::ModalTransfer,
        Lever::Occupancy,
        Lever::WeightReduction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Lever::CarElectrification => "car electrification",
            Lever::BusElectrification => "bus electrification",
            Lever::BikeElectrification => "bike electrification",
            Lever::Sobriety => "sobriety",
            Lever::ModalTransfer => "modal transfer",
            Lever::Occupancy => "occupancy",
            Lever::WeightReduction => "weight reduction",
        }
    }
}

impl std::fmt::Display for Lever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// CO2 attributed to one lever, in the unit basis output unit
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeverContribution {
    pub lever: Lever,
    pub co2_delta: f64,
}

/// attribute the scenario's CO2 reduction to each lever by re-running
/// the engine with levers cumulatively enabled in [`Lever::ORDER`] and
/// taking successive differences (a waterfall decomposition).
///
/// this is a marginal attribution, not a Shapley value: lever effects
/// interact, and each interaction is folded into whichever lever comes
/// later in the fixed sequence. the deltas do sum exactly to the total
/// baseline-to-scenario difference.
pub fn decompose(
    baseline: &BaselineModel,
    levers: &LeverSet,
    config: &EngineConfig,
) -> Result<Vec<LeverContribution>, ScenarioError> {
    let mut applied = LeverSet::default();
    let mut previous = scenario_ops::compute(baseline, &applied, config)?
        .scenario
        .total
        .co2;
    let mut contributions = Vec::with_capacity(Lever::ORDER.len());
    for lever in Lever::ORDER {
        enable(&mut applied, lever, levers);
        let current = scenario_ops::compute(baseline, &applied, config)?
            .scenario
            .total
            .co2;
        contributions.push(LeverContribution {
            lever,
            co2_delta: previous - current,
        });
        previous = current;
    }
    Ok(contributions)
}

fn enable(applied: &mut LeverSet, lever: Lever, target: &LeverSet) {
    match lever {
        Lever::CarElectrification => copy_fleet(applied, target, Mode::Car),
        Lever::BusElectrification => copy_fleet(applied, target, Mode::Bus),
        Lever::BikeElectrification => copy_fleet(applied, target, Mode::Bike),
        Lever::Sobriety => applied.reduction_km = target.reduction_km,
        Lever::ModalTransfer => applied.transfers = target.transfers.clone(),
        Lever::Occupancy => applied.occupancy = target.occupancy.clone(),
        Lever::WeightReduction => applied.weight_reduction = target.weight_reduction,
    }
}

fn copy_fleet(applied: &mut LeverSet, target: &LeverSet, mode: Mode) {
    if let Some(mix) = target.target_fleet.get(&mode) {
        applied.target_fleet.insert(mode, mix.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::baseline::{BaselineDemand, EmissionFactor, FleetMix, ModeFactors};
    use crate::model::scenario::ModalTransfer;
    use crate::model::Powertrain;
    use std::collections::HashMap;

    fn baseline() -> BaselineModel {
        BaselineModel {
            demand: BaselineDemand::new(HashMap::from([
                (Mode::Car, 150.0),
                (Mode::Bus, 25.0),
                (Mode::Bike, 20.0),
            ])),
            factors: HashMap::from([
                (
                    Mode::Car,
                    ModeFactors::by_powertrain(&[
                        (Powertrain::Thermal, EmissionFactor::co2_only(193.0)),
                        (Powertrain::Electric, EmissionFactor::co2_only(103.0)),
                    ]),
                ),
                (Mode::Bus, ModeFactors::single(EmissionFactor::co2_only(103.0))),
                (Mode::Bike, ModeFactors::single(EmissionFactor::co2_only(0.0))),
            ]),
            fleet: HashMap::from([(
                Mode::Car,
                FleetMix::split(&[(Powertrain::Thermal, 97), (Powertrain::Electric, 3)]),
            )]),
            occupancy: HashMap::new(),
        }
    }

    fn config() -> EngineConfig {
        EngineConfig {
            modes: vec![Mode::Car, Mode::Bus, Mode::Bike],
            ..Default::default()
        }
    }

    #[test]
    fn test_deltas_sum_to_total_difference() {
        let baseline = baseline();
        let levers = LeverSet {
            reduction_km: -20.0,
            transfers: vec![ModalTransfer::new(Mode::Car, Mode::Bike, 15.0)],
            target_fleet: HashMap::from([(
                Mode::Car,
                FleetMix::split(&[(Powertrain::Thermal, 40), (Powertrain::Electric, 60)]),
            )]),
            occupancy: HashMap::from([(Mode::Car, 1.8)]),
            weight_reduction: 10.0,
        };
        let config = config();

        let full = scenario_ops::compute(&baseline, &levers, &config).unwrap();
        let contributions = decompose(&baseline, &levers, &config).unwrap();
        let delta_sum: f64 = contributions.iter().map(|c| c.co2_delta).sum();
        let total_difference = full.baseline.total.co2 - full.scenario.total.co2;
        assert!((delta_sum - total_difference).abs() < 1e-9);
    }

    #[test]
    fn test_untouched_levers_contribute_nothing() {
        let baseline = baseline();
        let levers = LeverSet {
            reduction_km: -20.0,
            ..Default::default()
        };
        let contributions = decompose(&baseline, &levers, &config()).unwrap();
        for contribution in contributions {
            if contribution.lever == Lever::Sobriety {
                assert!(contribution.co2_delta > 0.0);
            } else {
                assert_eq!(contribution.co2_delta, 0.0);
            }
        }
    }

    #[test]
    fn test_contributions_follow_fixed_order() {
        let baseline = baseline();
        let contributions = decompose(&baseline, &LeverSet::default(), &config()).unwrap();
        let order: Vec<Lever> = contributions.iter().map(|c| c.lever).collect();
        assert_eq!(order, Lever::ORDER.to_vec());
    }
}
