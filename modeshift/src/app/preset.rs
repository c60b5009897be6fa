use crate::app::ScenarioFile;
use crate::model::baseline::{BaselineDemand, BaselineModel, EmissionFactor, FleetMix, ModeFactors};
use crate::model::scenario::{EngineConfig, LeverSet};
use crate::model::{Mode, Powertrain, UnitBasis};
use std::collections::HashMap;

// teaching defaults drawn from ADEME life-cycle figures (impactco2.fr);
// users are expected to revisit them in class

/// the individual workshop dataset: weekly km of an average Pays Basque
/// resident, with the current 3% electric car fleet. levers start neutral.
pub fn individual_weekly() -> ScenarioFile {
    let modes = vec![Mode::Car, Mode::Bus, Mode::Train, Mode::Bike, Mode::Walk];
    ScenarioFile {
        baseline: BaselineModel {
            demand: BaselineDemand::new(HashMap::from([
                (Mode::Car, 150.0),
                (Mode::Bus, 25.0),
                (Mode::Train, 8.0),
                (Mode::Bike, 20.0),
                (Mode::Walk, 10.0),
            ])),
            factors: HashMap::from([
                (
                    Mode::Car,
                    ModeFactors::by_powertrain(&[
                        (Powertrain::Thermal, EmissionFactor::new(193.0, 0.7, 0.05)),
                        (Powertrain::Electric, EmissionFactor::new(103.0, 0.17, 0.02)),
                    ]),
                ),
                (
                    Mode::Bus,
                    ModeFactors::single(EmissionFactor::new(103.0, 0.15, 0.01)),
                ),
                (
                    Mode::Train,
                    ModeFactors::single(EmissionFactor::new(2.4, 0.05, 0.002)),
                ),
                (Mode::Bike, ModeFactors::single(EmissionFactor::co2_only(0.0))),
                (Mode::Walk, ModeFactors::single(EmissionFactor::co2_only(0.0))),
            ]),
            fleet: HashMap::from([(
                Mode::Car,
                FleetMix::split(&[(Powertrain::Thermal, 97), (Powertrain::Electric, 3)]),
            )]),
            occupancy: HashMap::new(),
        },
        levers: LeverSet::default(),
        engine: EngineConfig {
            modes,
            unit_basis: UnitBasis::IndividualWeekly,
            ..Default::default()
        },
    }
}

/// the territory dataset: annual million-km for a whole territory,
/// including air travel, on a pure-thermal 2025 car fleet.
pub fn territory_annual() -> ScenarioFile {
    ScenarioFile {
        baseline: BaselineModel {
            demand: BaselineDemand::new(HashMap::from([
                (Mode::Car, 1750.0),
                (Mode::Bus, 175.0),
                (Mode::Train, 70.0),
                (Mode::Bike, 140.0),
                (Mode::Plane, 210.0),
                (Mode::Walk, 70.0),
            ])),
            factors: HashMap::from([
                (
                    Mode::Car,
                    ModeFactors::by_powertrain(&[
                        (Powertrain::Thermal, EmissionFactor::new(218.0, 0.7, 0.05)),
                        (Powertrain::Electric, EmissionFactor::new(103.0, 0.17, 0.02)),
                    ]),
                ),
                (
                    Mode::Bus,
                    ModeFactors::single(EmissionFactor::new(103.0, 0.15, 0.01)),
                ),
                (
                    Mode::Train,
                    ModeFactors::single(EmissionFactor::new(2.4, 0.05, 0.002)),
                ),
                (Mode::Bike, ModeFactors::single(EmissionFactor::co2_only(0.0))),
                (
                    Mode::Plane,
                    ModeFactors::single(EmissionFactor::new(230.0, 0.5, 0.01)),
                ),
                (Mode::Walk, ModeFactors::single(EmissionFactor::co2_only(0.0))),
            ]),
            fleet: HashMap::from([(Mode::Car, FleetMix::single(Powertrain::Thermal))]),
            occupancy: HashMap::new(),
        },
        levers: LeverSet::default(),
        engine: EngineConfig::default(),
    }
}
