use crate::model::baseline::ValidationError;
use crate::model::Mode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// reference-year travel demand: distance per mode in the configured
/// unit basis. modes absent from the map traveled zero distance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaselineDemand {
    pub by_mode: HashMap<Mode, f64>,
}

impl BaselineDemand {
    pub fn new(by_mode: HashMap<Mode, f64>) -> BaselineDemand {
        BaselineDemand { by_mode }
    }

    pub fn get(&self, mode: &Mode) -> f64 {
        self.by_mode.get(mode).copied().unwrap_or(0.0)
    }

    /// sum of distances over the included modes, in the basis distance unit
    pub fn total_distance(&self, modes: &[Mode]) -> f64 {
        modes.iter().map(|m| self.get(m)).sum()
    }

    /// each mode's distance as a percentage of the total. when the total
    /// is zero every share is zero (degenerate but defined).
    pub fn modal_shares(&self, modes: &[Mode]) -> HashMap<Mode, f64> {
        let total = self.total_distance(modes);
        modes
            .iter()
            .map(|m| {
                let share = if total == 0.0 {
                    0.0
                } else {
                    self.get(m) / total * 100.0
                };
                (*m, share)
            })
            .collect()
    }

    pub fn validate(&self, modes: &[Mode]) -> Result<(), ValidationError> {
        for mode in modes {
            let distance = self.get(mode);
            if distance < 0.0 {
                return Err(ValidationError::NegativeDistance(*mode, distance));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demand(pairs: &[(Mode, f64)]) -> BaselineDemand {
        BaselineDemand::new(pairs.iter().copied().collect())
    }

    #[test]
    fn test_total_distance() {
        let d = demand(&[(Mode::Car, 150.0), (Mode::Bus, 25.0), (Mode::Walk, 10.0)]);
        let modes = [Mode::Car, Mode::Bus, Mode::Walk];
        assert_eq!(d.total_distance(&modes), 185.0);
    }

    #[test]
    fn test_excluded_modes_ignored() {
        let d = demand(&[(Mode::Car, 100.0), (Mode::Plane, 500.0)]);
        assert_eq!(d.total_distance(&[Mode::Car]), 100.0);
    }

    #[test]
    fn test_modal_shares() {
        let d = demand(&[(Mode::Car, 75.0), (Mode::Bike, 25.0)]);
        let shares = d.modal_shares(&[Mode::Car, Mode::Bike]);
        assert_eq!(shares[&Mode::Car], 75.0);
        assert_eq!(shares[&Mode::Bike], 25.0);
    }

    #[test]
    fn test_zero_total_yields_zero_shares() {
        let d = BaselineDemand::default();
        let shares = d.modal_shares(&[Mode::Car, Mode::Bus]);
        assert!(shares.values().all(|s| *s == 0.0));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let d = demand(&[(Mode::Car, -1.0)]);
        let result = d.validate(&[Mode::Car]);
        assert_eq!(
            result,
            Err(ValidationError::NegativeDistance(Mode::Car, -1.0))
        );
    }
}
