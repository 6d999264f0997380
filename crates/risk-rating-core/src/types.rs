use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bounded risk weights in [0,100]. Wraps Decimal to prevent accidental f64 usage.
pub type Score = Decimal;

/// Monetary magnitudes (transaction amounts, income medians).
pub type Money = Decimal;

/// Weights expressed as decimals (0.4 = 40%). Never as percentages.
pub type Rate = Decimal;

/// Discrete risk classification derived from an aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Fixed advisory message shown alongside the tier.
    pub fn advisory(&self) -> &'static str {
        match self {
            RiskTier::High => {
                "This transaction is suspicious! You are under government surveillance."
            }
            RiskTier::Medium => {
                "You are being monitored for potential risk. Please proceed cautiously."
            }
            RiskTier::Low => "Your activity looks clean and secure. Keep up the good work!",
        }
    }
}

/// Clamp a value to an inclusive range.
pub fn clamp(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
