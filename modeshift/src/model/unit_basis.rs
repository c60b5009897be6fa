use serde::{Deserialize, Serialize};

/// unit basis of a computation. the source material mixes weekly
/// per-person accounting with annual territory-scale accounting, so the
/// basis is configuration rather than separate code paths.
///
/// distances are always stored in the basis distance unit; aggregation
/// multiplies gram-per-km (or kWh-per-km) intensities by those distances
/// and rescales into the basis output units below.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitBasis {
    /// km per person per week; outputs kg CO2e/year, kWh/year, g PM/year
    IndividualWeekly,
    /// million km per year; outputs t CO2e/year, GWh/year, t PM/year
    #[default]
    TerritoryAnnual,
}

const WEEKS_PER_YEAR: f64 = 52.0;

impl UnitBasis {
    pub fn distance_unit(&self) -> &'static str {
        match self {
            UnitBasis::IndividualWeekly => "km/week",
            UnitBasis::TerritoryAnnual => "Mkm/year",
        }
    }

    /// factor applied to `distance * g_per_km` to reach the CO2 output unit
    pub fn co2_scale(&self) -> f64 {
        match self {
            // g/week -> kg/year
            UnitBasis::IndividualWeekly => WEEKS_PER_YEAR / 1000.0,
            // g/km * Mkm = 1e6 g = 1 t
            UnitBasis::TerritoryAnnual => 1.0,
        }
    }

    pub fn co2_unit(&self) -> &'static str {
        match self {
            UnitBasis::IndividualWeekly => "kg CO2e/year",
            UnitBasis::TerritoryAnnual => "t CO2e/year",
        }
    }

    /// factor applied to `distance * kWh_per_km` to reach the energy output unit
    pub fn energy_scale(&self) -> f64 {
        match self {
            UnitBasis::IndividualWeekly => WEEKS_PER_YEAR,
            // kWh/km * Mkm = 1e6 kWh = 1 GWh
            UnitBasis::TerritoryAnnual => 1.0,
        }
    }

    pub fn energy_unit(&self) -> &'static str {
        match self {
            UnitBasis::IndividualWeekly => "kWh/year",
            UnitBasis::TerritoryAnnual => "GWh/year",
        }
    }

    /// factor applied to `distance * g_per_km` to reach the particulate output unit
    pub fn particulate_scale(&self) -> f64 {
        match self {
            UnitBasis::IndividualWeekly => WEEKS_PER_YEAR,
            UnitBasis::TerritoryAnnual => 1.0,
        }
    }

    pub fn particulate_unit(&self) -> &'static str {
        match self {
            UnitBasis::IndividualWeekly => "g PM/year",
            UnitBasis::TerritoryAnnual => "t PM/year",
        }
    }
}
