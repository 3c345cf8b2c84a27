use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Line item not found: {0}")]
    LineItemNotFound(String),
    #[error("Asset not found: {0}")]
    AssetNotFound(String),
    #[error("Liability not found: {0}")]
    LiabilityNotFound(String),
    #[error("Family member not found: {0}")]
    FamilyMemberNotFound(String),
    #[error("Invalid month index: {0}")]
    InvalidMonth(usize),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Ledger schema v{found} is newer than supported v{supported}")]
    UnsupportedSchema { found: u64, supported: u32 },
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serde(err.to_string())
    }
}
