use crate::model::Mode;
use serde::{Deserialize, Serialize};

/// soft conditions: the computation completes, but the user should see
/// a caveat alongside the result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioWarning {
    /// transfers out of one donor mode exceeded 100% of its distance;
    /// the edges were rescaled to 100% and the donor clamped to zero
    OvercommittedTransfer { mode: Mode, total_percent: f64 },
}

impl std::fmt::Display for ScenarioWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioWarning::OvercommittedTransfer { mode, total_percent } => write!(
                f,
                "transfers out of {mode} total {total_percent}%, clamped to 100%"
            ),
        }
    }
}
