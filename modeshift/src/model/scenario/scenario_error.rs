use crate::model::baseline::ValidationError;

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("division by zero while computing {0}")]
    DivisionByZero(String),
}
