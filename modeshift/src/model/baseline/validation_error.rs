use crate::model::{Mode, Powertrain};

/// hard input errors. computation is rejected until the user corrects them.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("baseline distance for {0} is negative ({1})")]
    NegativeDistance(Mode, f64),
    #[error("fleet mix for {0} sums to {1}%, expected exactly 100%")]
    InvalidShareSum(Mode, u32),
    #[error("emission factor '{0}' has a negative {1} intensity ({2})")]
    NegativeFactor(String, String, f64),
    #[error("no emission factors configured for {0}")]
    MissingFactor(Mode),
    #[error("no {1} emission factor configured for {0}")]
    MissingPowertrainFactor(Mode, Powertrain),
    #[error("{0} uses per-powertrain emission factors but has no fleet mix")]
    MissingFleetMix(Mode),
    #[error("occupancy rate for {0} must be positive ({1})")]
    NonPositiveOccupancy(Mode, f64),
    #[error("transfer {0} -> {1} has percent {2} outside [0, 100]")]
    TransferOutOfRange(Mode, Mode, f64),
    #[error("km reduction of {0}% is below -100%, which would make distances negative")]
    ReductionOutOfRange(f64),
    #[error("weight reduction {0}% outside [0, 100]")]
    WeightReductionOutOfRange(f64),
    #[error("{0} is not included in this computation")]
    UnknownMode(Mode),
}
