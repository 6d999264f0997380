use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiskRatingError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown {table} key: '{key}'")]
    UnknownKey { table: &'static str, key: String },

    #[error("Cannot aggregate: missing {} sub-score(s)", .missing.join(", "))]
    IncompleteScoreSet { missing: Vec<&'static str> },

    #[error("Invalid reference table: {table} — {reason}")]
    InvalidTable { table: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RiskRatingError {
    fn from(e: serde_json::Error) -> Self {
        RiskRatingError::SerializationError(e.to_string())
    }
}
