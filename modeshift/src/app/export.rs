use crate::app::{AppError, ScenarioFile};
use crate::model::scenario::{LeverContribution, ScenarioResult};
use itertools::Itertools;

/// human-readable summary of a computed scenario: the figures the
/// original workshop showed as metric panels, as plain text
pub fn text_summary(file: &ScenarioFile, result: &ScenarioResult) -> String {
    let basis = file.engine.unit_basis;
    let baseline_km = file.baseline.demand.total_distance(&file.engine.modes);
    let scenario_km: f64 = file
        .engine
        .modes
        .iter()
        .map(|m| result.distances.get(m).copied().unwrap_or(0.0))
        .sum();

    let mut lines = vec![
        "=== 2050 mobility scenario ===".to_string(),
        String::new(),
        format!(
            "distance   baseline {baseline_km:.1} {unit}, scenario {scenario_km:.1} {unit}",
            unit = basis.distance_unit()
        ),
        format!(
            "co2        baseline {:.1} {unit}, scenario {:.1} {unit}",
            result.baseline.total.co2,
            result.scenario.total.co2,
            unit = basis.co2_unit()
        ),
        format!(
            "energy     baseline {:.1} {unit}, scenario {:.1} {unit}",
            result.baseline.total.energy,
            result.scenario.total.energy,
            unit = basis.energy_unit()
        ),
        format!(
            "particles  baseline {:.2} {unit}, scenario {:.2} {unit}",
            result.baseline.total.particulates,
            result.scenario.total.particulates,
            unit = basis.particulate_unit()
        ),
        String::new(),
        format!("per-mode 2050 distances ({}):", basis.distance_unit()),
    ];
    for mode in &file.engine.modes {
        let distance = result.distances.get(mode).copied().unwrap_or(0.0);
        let share = result.modal_shares.get(mode).copied().unwrap_or(0.0);
        lines.push(format!(
            "  {:<6} {distance:>10.1}  ({share:.1}%)",
            mode.as_str()
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "co2 reduction: {:.1}% (target {:.0}%) -> {}",
        result.reduction_pct,
        file.engine.target_reduction_pct,
        if result.target_achieved {
            "target achieved"
        } else {
            "target NOT achieved"
        }
    ));
    if !result.warnings.is_empty() {
        let caveats = result.warnings.iter().map(|w| w.to_string()).join("; ");
        lines.push(format!("warnings: {caveats}"));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// per-mode breakdown as CSV rows for spreadsheet use
pub fn write_csv<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    file: &ScenarioFile,
    result: &ScenarioResult,
) -> Result<(), AppError> {
    writer.write_record([
        "mode",
        "baseline_distance",
        "scenario_distance",
        "scenario_share_pct",
        "baseline_co2",
        "scenario_co2",
        "baseline_energy",
        "scenario_energy",
        "baseline_particulates",
        "scenario_particulates",
    ])?;
    for mode in &file.engine.modes {
        let baseline_inv = result.baseline.by_mode.get(mode).copied().unwrap_or_default();
        let scenario_inv = result.scenario.by_mode.get(mode).copied().unwrap_or_default();
        writer.write_record([
            mode.as_str().to_string(),
            file.baseline.demand.get(mode).to_string(),
            result.distances.get(mode).copied().unwrap_or(0.0).to_string(),
            result.modal_shares.get(mode).copied().unwrap_or(0.0).to_string(),
            baseline_inv.co2.to_string(),
            scenario_inv.co2.to_string(),
            baseline_inv.energy.to_string(),
            scenario_inv.energy.to_string(),
            baseline_inv.particulates.to_string(),
            scenario_inv.particulates.to_string(),
        ])?;
    }
    writer.flush().map_err(AppError::Io)?;
    Ok(())
}

pub fn to_json(result: &ScenarioResult) -> Result<String, AppError> {
    let json = serde_json::to_string_pretty(result)?;
    Ok(json)
}

/// the lever waterfall as a text table
pub fn contributions_table(file: &ScenarioFile, contributions: &[LeverContribution]) -> String {
    let unit = file.engine.unit_basis.co2_unit();
    let total: f64 = contributions.iter().map(|c| c.co2_delta).sum();
    let mut lines = vec![
        format!("=== co2 reduction by lever ({unit}) ==="),
        "(waterfall attribution; interaction effects fall on later levers)".to_string(),
    ];
    for contribution in contributions {
        lines.push(format!(
            "  {:<22} {:>12.1}",
            contribution.lever.label(),
            contribution.co2_delta
        ));
    }
    lines.push(format!("  {:<22} {total:>12.1}", "total"));
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::preset;
    use crate::model::scenario::{decompose, LeverSet, ModalTransfer};
    use crate::model::Mode;

    fn computed() -> (ScenarioFile, ScenarioResult) {
        let mut file = preset::territory_annual();
        file.levers = LeverSet {
            reduction_km: -30.0,
            transfers: vec![ModalTransfer::new(Mode::Car, Mode::Train, 20.0)],
            ..Default::default()
        };
        let result = file.compute().unwrap();
        (file, result)
    }

    #[test]
    fn test_summary_contains_headline_figures() {
        let (file, result) = computed();
        let summary = text_summary(&file, &result);
        assert!(summary.contains("Mkm/year"));
        assert!(summary.contains("co2 reduction:"));
        assert!(summary.contains("target NOT achieved") || summary.contains("target achieved"));
    }

    #[test]
    fn test_csv_has_row_per_mode_plus_header() {
        let (file, result) = computed();
        let mut writer = csv::Writer::from_writer(vec![]);
        write_csv(&mut writer, &file, &result).unwrap();
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), file.engine.modes.len() + 1);
        assert!(text.starts_with("mode,"));
    }

    #[test]
    fn test_contributions_table_lists_all_levers() {
        let (file, _) = computed();
        let contributions = decompose(&file.baseline, &file.levers, &file.engine).unwrap();
        let table = contributions_table(&file, &contributions);
        assert!(table.contains("sobriety"));
        assert!(table.contains("weight reduction"));
    }

    #[test]
    fn test_json_round_trips() {
        let (_, result) = computed();
        let json = to_json(&result).unwrap();
        let parsed: ScenarioResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
