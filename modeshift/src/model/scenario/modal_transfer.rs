use crate::model::baseline::ValidationError;
use crate::model::Mode;
use serde::{Deserialize, Serialize};

/// one modal-shift edge: `percent` of the donor mode's post-sobriety
/// distance is reallocated to the receiver mode in the scenario year.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModalTransfer {
    pub from: Mode,
    pub to: Mode,
    pub percent: f64,
}

impl ModalTransfer {
    pub fn new(from: Mode, to: Mode, percent: f64) -> ModalTransfer {
        ModalTransfer { from, to, percent }
    }

    pub fn validate(&self, modes: &[Mode]) -> Result<(), ValidationError> {
        if !(0.0..=100.0).contains(&self.percent) {
            return Err(ValidationError::TransferOutOfRange(
                self.from,
                self.to,
                self.percent,
            ));
        }
        for mode in [self.from, self.to] {
            if !modes.contains(&mode) {
                return Err(ValidationError::UnknownMode(mode));
            }
        }
        Ok(())
    }
}
