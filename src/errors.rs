use std::result::Result as StdResult;

use thiserror::Error;
use wealthplan_config::ConfigError;
use wealthplan_core::CoreError;

/// Unified error type for the core, storage and config layers.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unsupported ledger document: {0}")]
    UnsupportedSchema(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, PlannerError>;

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        PlannerError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::StorageError(err.to_string())
    }
}

impl From<CoreError> for PlannerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LineItemNotFound(id) => PlannerError::NotFound(format!("line item {id}")),
            CoreError::AssetNotFound(id) => PlannerError::NotFound(format!("asset {id}")),
            CoreError::LiabilityNotFound(id) => PlannerError::NotFound(format!("liability {id}")),
            CoreError::FamilyMemberNotFound(id) => {
                PlannerError::NotFound(format!("family member {id}"))
            }
            CoreError::InvalidMonth(idx) => {
                PlannerError::InvalidInput(format!("month index {idx} is outside 0..12"))
            }
            CoreError::Validation(message) => PlannerError::InvalidInput(message),
            err @ CoreError::UnsupportedSchema { .. } => {
                PlannerError::UnsupportedSchema(err.to_string())
            }
            CoreError::Storage(message) | CoreError::Serde(message) => {
                PlannerError::StorageError(message)
            }
            CoreError::Io(err) => PlannerError::StorageError(err.to_string()),
        }
    }
}

impl From<ConfigError> for PlannerError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => PlannerError::StorageError(io.to_string()),
            ConfigError::Serde(message) | ConfigError::Invalid(message) => {
                PlannerError::ConfigError(message)
            }
        }
    }
}
