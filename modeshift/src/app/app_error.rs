use crate::model::scenario::ScenarioError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("failure parsing scenario file: {0}")]
    TomlRead(#[from] toml::de::Error),
    #[error("failure writing scenario file: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("failure writing csv output: {0}")]
    Csv(#[from] csv::Error),
    #[error("failure serializing result: {0}")]
    Json(#[from] serde_json::Error),
}
