use crate::app::{export, preset, AppError, ScenarioFile};
use crate::model::scenario::decompose;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// command line tool for building and comparing 2050 mobility
/// transition scenarios
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ScenarioApp {
    #[command(subcommand)]
    pub op: ScenarioOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ScenarioOperation {
    /// compute a scenario file and report the result
    Run {
        /// path to a scenario TOML file (see `init`)
        scenario_file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// attribute the co2 reduction to each lever (waterfall decomposition)
    Contributions {
        scenario_file: PathBuf,
    },
    /// write a preset scenario file to start from
    Init {
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = PresetName::Territory)]
        preset: PresetName,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetName {
    /// weekly km of an average individual
    Individual,
    /// annual million-km of a territory
    Territory,
}

impl std::fmt::Display for PresetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PresetName::Individual => "individual",
            PresetName::Territory => "territory",
        };
        write!(f, "{name}")
    }
}

impl ScenarioOperation {
    pub fn run(self) -> Result<(), AppError> {
        match self {
            ScenarioOperation::Run {
                scenario_file,
                format,
                output,
            } => run_scenario(&scenario_file, format, output.as_deref()),
            ScenarioOperation::Contributions { scenario_file } => {
                let file = ScenarioFile::from_file(&scenario_file)?;
                let contributions = decompose(&file.baseline, &file.levers, &file.engine)
                    .map_err(AppError::Scenario)?;
                print!("{}", export::contributions_table(&file, &contributions));
                Ok(())
            }
            ScenarioOperation::Init { output, preset } => {
                let file = match preset {
                    PresetName::Individual => preset::individual_weekly(),
                    PresetName::Territory => preset::territory_annual(),
                };
                std::fs::write(&output, file.to_toml_string()?)?;
                log::info!("wrote {preset} preset to {output:?}");
                Ok(())
            }
        }
    }
}

fn run_scenario(
    scenario_path: &Path,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), AppError> {
    let file = ScenarioFile::from_file(scenario_path)?;
    let result = file.compute()?;
    match format {
        OutputFormat::Text => emit(output, &export::text_summary(&file, &result)),
        OutputFormat::Json => emit(output, &export::to_json(&result)?),
        OutputFormat::Csv => match output {
            Some(path) => {
                let mut writer = csv::Writer::from_path(path)?;
                export::write_csv(&mut writer, &file, &result)
            }
            None => {
                let mut writer = csv::Writer::from_writer(std::io::stdout());
                export::write_csv(&mut writer, &file, &result)
            }
        },
    }
}

fn emit(output: Option<&Path>, contents: &str) -> Result<(), AppError> {
    match output {
        Some(path) => std::fs::write(path, contents)?,
        None => print!("{contents}"),
    }
    Ok(())
}
