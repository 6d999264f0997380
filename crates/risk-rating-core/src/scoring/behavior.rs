use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RiskRatingError;
use crate::tables::{BehaviorPattern, ReferenceTables};
use crate::types::Score;
use crate::RiskRatingResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<BehaviorPattern>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorScoreOutput {
    /// 0-100
    pub score: Score,
    pub warnings: Vec<String>,
}

/// Direct lookup of the behavior pattern's score. An absent pattern
/// scores zero and is reported in the warnings.
pub fn score_behavior(
    tables: &ReferenceTables,
    input: &BehaviorInput,
) -> RiskRatingResult<BehaviorScoreOutput> {
    let mut warnings = Vec::new();

    let score = match input.pattern {
        Some(pattern) => tables
            .behavior_score(pattern)
            .ok_or_else(|| RiskRatingError::UnknownKey {
                table: "behaviors",
                key: format!("{:?}", pattern),
            })?,
        None => {
            warnings.push("behavior pattern not selected; contributes zero risk".to_string());
            Decimal::ZERO
        }
    };

    Ok(BehaviorScoreOutput { score, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn pattern_lookup() {
        let tables = ReferenceTables::builtin();
        let input = BehaviorInput {
            pattern: Some(BehaviorPattern::SuspiciousPast),
        };
        let result = score_behavior(&tables, &input).unwrap();
        assert_eq!(result.score, dec!(90));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn unset_pattern_scores_zero_with_warning() {
        let tables = ReferenceTables::builtin();
        let result = score_behavior(&tables, &BehaviorInput::default()).unwrap();
        assert_eq!(result.score, Decimal::ZERO);
        assert_eq!(result.warnings.len(), 1);
    }
}
