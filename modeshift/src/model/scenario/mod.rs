pub mod contribution;
mod engine_config;
mod lever_set;
mod modal_transfer;
mod scenario_error;
pub mod scenario_ops;
mod scenario_result;
mod scenario_warning;

pub use contribution::{decompose, Lever, LeverContribution};
pub use engine_config::{EngineConfig, DEFAULT_TARGET_REDUCTION_PCT};
pub use lever_set::LeverSet;
pub use modal_transfer::ModalTransfer;
pub use scenario_error::ScenarioError;
pub use scenario_ops::compute;
pub use scenario_result::{EmissionBreakdown, Inventory, ScenarioResult};
pub use scenario_warning::ScenarioWarning;
