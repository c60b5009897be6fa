use crate::model::baseline::{FleetMix, ValidationError};
use crate::model::scenario::ModalTransfer;
use crate::model::Mode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// the scenario's control vector. every field defaults to its neutral
/// value, so an empty lever set reproduces the baseline exactly: fleet
/// and occupancy entries absent here fall back to the baseline values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeverSet {
    /// signed percentage change in total travel demand ("sobriety").
    /// negative means fewer km in 2050 than in the reference year.
    pub reduction_km: f64,
    /// modal-shift edges, each a percentage of the donor's post-sobriety
    /// distance. edges out of one donor are applied simultaneously.
    pub transfers: Vec<ModalTransfer>,
    /// 2050 fleet composition per blended mode
    pub target_fleet: HashMap<Mode, FleetMix>,
    /// 2050 persons per vehicle, per mode
    pub occupancy: HashMap<Mode, f64>,
    /// percentage mass reduction of the vehicle fleet; a 10% lighter
    /// vehicle consumes and emits 7% less (empirical 0.7 coupling)
    pub weight_reduction: f64,
}

impl LeverSet {
    pub fn validate(&self, modes: &[Mode]) -> Result<(), ValidationError> {
        // below -100% the sobriety factor turns negative, and so would
        // every distance
        if self.reduction_km < -100.0 {
            return Err(ValidationError::ReductionOutOfRange(self.reduction_km));
        }
        if !(0.0..=100.0).contains(&self.weight_reduction) {
            return Err(ValidationError::WeightReductionOutOfRange(
                self.weight_reduction,
            ));
        }
        for transfer in &self.transfers {
            transfer.validate(modes)?;
        }
        for (mode, mix) in &self.target_fleet {
            if !modes.contains(mode) {
                return Err(ValidationError::UnknownMode(*mode));
            }
            mix.validate(mode)?;
        }
        for (mode, rate) in &self.occupancy {
            if *rate <= 0.0 {
                return Err(ValidationError::NonPositiveOccupancy(*mode, *rate));
            }
        }
        Ok(())
    }
}
