mod baseline_demand;
mod baseline_model;
mod emission_factor;
mod fleet_mix;
mod validation_error;

pub use baseline_demand::BaselineDemand;
pub use baseline_model::BaselineModel;
pub use emission_factor::{EmissionFactor, ModeFactors};
pub use fleet_mix::FleetMix;
pub use validation_error::ValidationError;
