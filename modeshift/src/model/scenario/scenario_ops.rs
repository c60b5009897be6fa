use crate::model::baseline::{BaselineModel, EmissionFactor, FleetMix, ModeFactors, ValidationError};
use crate::model::scenario::{
    EmissionBreakdown, EngineConfig, Inventory, LeverSet, ModalTransfer, ScenarioError,
    ScenarioResult, ScenarioWarning,
};
use crate::model::{Mode, Powertrain};
use itertools::Itertools;
use std::collections::HashMap;

/// empirical coupling between vehicle mass and consumption: a 10% mass
/// reduction yields a 7% consumption and emission reduction
const WEIGHT_TO_CONSUMPTION: f64 = 0.7;

/// compute a 2050 scenario from the baseline and the lever settings.
///
/// the pipeline order is load-bearing: sobriety scales first, then
/// modal transfers redistribute the post-sobriety distances, then the
/// fleet-blended intensities are applied. transfers before sobriety
/// would change the numbers.
///
/// pure function of its inputs: no I/O, no shared state, identical
/// inputs produce identical outputs.
pub fn compute(
    baseline: &BaselineModel,
    levers: &LeverSet,
    config: &EngineConfig,
) -> Result<ScenarioResult, ScenarioError> {
    baseline.validate(&config.modes)?;
    levers.validate(&config.modes)?;

    // 1. sobriety: every mode scaled by the same demand factor
    let post_sobriety = apply_sobriety(baseline, &config.modes, levers.reduction_km);

    // 2-3. modal transfers from the frozen post-sobriety snapshot;
    // total distance is conserved through this pass
    let (distances, warnings) = apply_transfers(&post_sobriety, &levers.transfers);
    for warning in &warnings {
        log::warn!("{warning}");
    }

    let modal_shares = shares_of(&distances, &config.modes);

    // 4-5. per-passenger-km intensities and aggregation, for both years.
    // the baseline side uses the reference fleet and occupancy with no
    // weight reduction, so neutral levers reproduce it exactly.
    let baseline_distances: HashMap<Mode, f64> = config
        .modes
        .iter()
        .map(|m| (*m, baseline.demand.get(m)))
        .collect();
    let baseline_breakdown = aggregate(
        baseline,
        &baseline_distances,
        &baseline.fleet,
        &baseline.occupancy,
        0.0,
        config,
    )?;
    let scenario_fleet = merged_fleet(baseline, levers);
    let scenario_occupancy = merged_occupancy(baseline, levers);
    let scenario_breakdown = aggregate(
        baseline,
        &distances,
        &scenario_fleet,
        &scenario_occupancy,
        levers.weight_reduction,
        config,
    )?;

    // 6-7. reduction versus baseline and the policy verdict
    let reduction_pct = reduction_percent(
        baseline_breakdown.total.co2,
        scenario_breakdown.total.co2,
    );
    let target_achieved = reduction_pct >= config.target_reduction_pct;

    Ok(ScenarioResult {
        distances,
        modal_shares,
        baseline: baseline_breakdown,
        scenario: scenario_breakdown,
        reduction_pct,
        target_achieved,
        warnings,
    })
}

/// scale every included mode's baseline distance by `1 + reduction_km/100`
pub(crate) fn apply_sobriety(
    baseline: &BaselineModel,
    modes: &[Mode],
    reduction_km: f64,
) -> HashMap<Mode, f64> {
    let factor = 1.0 + reduction_km / 100.0;
    modes
        .iter()
        .map(|m| (*m, baseline.demand.get(m) * factor))
        .collect()
}

/// apply all transfer edges simultaneously against the frozen snapshot:
/// donors are debited and receivers credited using the donor's
/// pre-transfer distance, so edges never cascade into each other.
///
/// a donor whose outgoing edges exceed 100% has them rescaled to exactly
/// 100% (conserving total distance) and retains exactly zero of its own
/// distance; this surfaces as an [`ScenarioWarning::OvercommittedTransfer`].
pub(crate) fn apply_transfers(
    snapshot: &HashMap<Mode, f64>,
    transfers: &[ModalTransfer],
) -> (HashMap<Mode, f64>, Vec<ScenarioWarning>) {
    let mut outgoing: HashMap<Mode, f64> = HashMap::new();
    let mut incoming: HashMap<Mode, f64> = HashMap::new();
    let mut warnings = vec![];

    let by_donor = transfers.iter().into_group_map_by(|t| t.from);
    for (donor, edges) in by_donor.into_iter().sorted_by_key(|(donor, _)| *donor) {
        let total_percent: f64 = edges.iter().map(|t| t.percent).sum();
        if total_percent <= 0.0 {
            continue;
        }
        let scale = if total_percent > 100.0 {
            warnings.push(ScenarioWarning::OvercommittedTransfer {
                mode: donor,
                total_percent,
            });
            100.0 / total_percent
        } else {
            1.0
        };
        let donor_distance = snapshot.get(&donor).copied().unwrap_or(0.0);
        let mut moved = 0.0;
        for edge in edges {
            let amount = donor_distance * edge.percent * scale / 100.0;
            *incoming.entry(edge.to).or_insert(0.0) += amount;
            moved += amount;
        }
        // at >= 100% the donor keeps nothing of its own distance; assign
        // the exact figure rather than a float-rounded difference
        let debited = if total_percent >= 100.0 {
            donor_distance
        } else {
            moved
        };
        outgoing.insert(donor, debited);
    }

    let result = snapshot
        .iter()
        .map(|(mode, distance)| {
            let out = outgoing.get(mode).copied().unwrap_or(0.0);
            let inn = incoming.get(mode).copied().unwrap_or(0.0);
            (*mode, distance - out + inn)
        })
        .collect();
    (result, warnings)
}

/// mode shares of a distance vector, all zero when the total is zero
pub(crate) fn shares_of(distances: &HashMap<Mode, f64>, modes: &[Mode]) -> HashMap<Mode, f64> {
    let total: f64 = modes.iter().map(|m| distances.get(m).copied().unwrap_or(0.0)).sum();
    modes
        .iter()
        .map(|m| {
            let distance = distances.get(m).copied().unwrap_or(0.0);
            let share = if total == 0.0 {
                0.0
            } else {
                distance / total * 100.0
            };
            (*m, share)
        })
        .collect()
}

/// per-passenger-km intensity for one mode: blend the fleet mix with
/// the weight-reduction discount applied to thermal powertrains (and
/// electric ones iff configured), then divide by occupancy.
pub(crate) fn passenger_factor(
    mode: &Mode,
    factors: &ModeFactors,
    mix: Option<&FleetMix>,
    occupancy: f64,
    weight_reduction: f64,
    applies_to_electric: bool,
) -> Result<EmissionFactor, ScenarioError> {
    if occupancy <= 0.0 {
        return Err(ScenarioError::DivisionByZero(format!(
            "occupancy rate for {mode}"
        )));
    }
    let weight_factor = 1.0 - weight_reduction * WEIGHT_TO_CONSUMPTION / 100.0;
    let per_vehicle = match factors {
        ModeFactors::Single { factor } => *factor,
        ModeFactors::ByPowertrain { factors } => {
            let mix = mix.ok_or(ScenarioError::Validation(
                ValidationError::MissingFleetMix(*mode),
            ))?;
            let mut blended = EmissionFactor::default();
            // drive the blend from the mix: every powertrain carrying a
            // share needs a factor row, or the weights would silently sum
            // below 100% and understate the intensity
            for (powertrain, share) in &mix.shares {
                if *share == 0 {
                    continue;
                }
                let factor = factors.get(powertrain).ok_or(ScenarioError::Validation(
                    ValidationError::MissingPowertrainFactor(*mode, *powertrain),
                ))?;
                let discount = match powertrain {
                    Powertrain::Thermal => weight_factor,
                    Powertrain::Electric if applies_to_electric => weight_factor,
                    _ => 1.0,
                };
                let weighted = factor.scale(discount * (*share as f64 / 100.0));
                blended.accumulate(&weighted);
            }
            blended
        }
    };
    Ok(per_vehicle.scale(1.0 / occupancy))
}

/// multiply distances by per-passenger intensities and rescale into the
/// unit basis output units; per-mode detail is kept for display
fn aggregate(
    baseline: &BaselineModel,
    distances: &HashMap<Mode, f64>,
    fleet: &HashMap<Mode, FleetMix>,
    occupancy: &HashMap<Mode, f64>,
    weight_reduction: f64,
    config: &EngineConfig,
) -> Result<EmissionBreakdown, ScenarioError> {
    let basis = config.unit_basis;
    let mut breakdown = EmissionBreakdown::default();
    for mode in &config.modes {
        let factors = baseline.factors.get(mode).ok_or(ScenarioError::Validation(
            ValidationError::MissingFactor(*mode),
        ))?;
        let rate = occupancy.get(mode).copied().unwrap_or(1.0);
        let factor = passenger_factor(
            mode,
            factors,
            fleet.get(mode),
            rate,
            weight_reduction,
            config.weight_reduction_applies_to_electric,
        )?;
        let distance = distances.get(mode).copied().unwrap_or(0.0);
        let inventory = Inventory {
            co2: distance * factor.co2 * basis.co2_scale(),
            energy: distance * factor.energy * basis.energy_scale(),
            particulates: distance * factor.particulates * basis.particulate_scale(),
        };
        breakdown.total.accumulate(&inventory);
        breakdown.by_mode.insert(*mode, inventory);
    }
    Ok(breakdown)
}

/// lever fleet entries override the baseline fleet per mode
fn merged_fleet(baseline: &BaselineModel, levers: &LeverSet) -> HashMap<Mode, FleetMix> {
    let mut fleet = baseline.fleet.clone();
    for (mode, mix) in &levers.target_fleet {
        fleet.insert(*mode, mix.clone());
    }
    fleet
}

fn merged_occupancy(baseline: &BaselineModel, levers: &LeverSet) -> HashMap<Mode, f64> {
    let mut occupancy = baseline.occupancy.clone();
    for (mode, rate) in &levers.occupancy {
        occupancy.insert(*mode, *rate);
    }
    occupancy
}

pub(crate) fn reduction_percent(baseline_co2: f64, scenario_co2: f64) -> f64 {
    if baseline_co2 == 0.0 {
        0.0
    } else {
        (baseline_co2 - scenario_co2) / baseline_co2 * 100.0
    }
}
