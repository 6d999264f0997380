pub mod error;
pub mod scoring;
pub mod tables;
pub mod types;

pub use error::RiskRatingError;
pub use types::*;

/// Standard result type for all risk-rating operations
pub type RiskRatingResult<T> = Result<T, RiskRatingError>;
