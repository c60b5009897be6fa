mod app_error;
pub mod export;
pub mod preset;
mod scenario_app;
mod scenario_file;

pub use app_error::AppError;
pub use scenario_app::{OutputFormat, PresetName, ScenarioApp, ScenarioOperation};
pub use scenario_file::ScenarioFile;
