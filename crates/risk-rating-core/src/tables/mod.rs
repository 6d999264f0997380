//! Consolidated reference tables for the risk rating engine.
//!
//! One immutable `ReferenceTables` value holds every scoring table:
//! country, occupation, KYC status, income band medians, behavior
//! patterns, and the transaction volume band scores. The builtin data is
//! compiled in; an alternative table set can be deserialised from a
//! structured file and is validated against the same invariants before
//! use. Tables are loaded once and never mutated.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RiskRatingError;
use crate::types::{Money, Score};
use crate::RiskRatingResult;

mod builtin;

// ---------------------------------------------------------------------------
// Key enums
// ---------------------------------------------------------------------------

/// Know Your Customer verification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KycStatus {
    #[serde(rename = "Fully Verified")]
    FullyVerified,
    #[serde(rename = "Partially Verified")]
    PartiallyVerified,
    #[serde(rename = "Not Verified")]
    NotVerified,
}

/// Declared income band. Lakh-denominated, as in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IncomeRange {
    #[serde(rename = "Below 2 Lakhs")]
    Below2Lakhs,
    #[serde(rename = "2 to 5 Lakhs")]
    TwoToFiveLakhs,
    #[serde(rename = "5 to 10 Lakhs")]
    FiveToTenLakhs,
    #[serde(rename = "Above 10 Lakhs")]
    AboveTenLakhs,
}

/// Categorised transaction history of the party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BehaviorPattern {
    #[serde(rename = "Suspicious Past")]
    SuspiciousPast,
    #[serde(rename = "Normal Past")]
    NormalPast,
    #[serde(rename = "Very Good Past")]
    VeryGoodPast,
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Scores for the three transaction volume bands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeBandScores {
    pub low: Score,
    pub medium: Score,
    pub high: Score,
}

/// The full, immutable table set the calculators score against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub countries: BTreeMap<String, Score>,
    pub occupations: BTreeMap<String, Score>,
    pub kyc_statuses: BTreeMap<KycStatus, Score>,
    pub income_medians: BTreeMap<IncomeRange, Money>,
    pub behaviors: BTreeMap<BehaviorPattern, Score>,
    pub volume_bands: VolumeBandScores,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceTables {
    /// The compiled-in table set.
    pub fn builtin() -> Self {
        let countries = builtin::COUNTRY_RISK
            .iter()
            .map(|&(name, score)| (name.to_string(), Decimal::from(score)))
            .collect();
        let occupations = builtin::OCCUPATION_RISK
            .iter()
            .map(|&(name, score)| (name.to_string(), Decimal::from(score)))
            .collect();
        let kyc_statuses = builtin::KYC_RISK
            .iter()
            .map(|&(status, score)| (status, Decimal::from(score)))
            .collect();
        let income_medians = builtin::INCOME_MEDIANS
            .iter()
            .map(|&(range, median)| (range, Decimal::from(median)))
            .collect();
        let behaviors = builtin::BEHAVIOR_RISK
            .iter()
            .map(|&(pattern, score)| (pattern, Decimal::from(score)))
            .collect();
        let (low, medium, high) = builtin::VOLUME_BAND_SCORES;

        ReferenceTables {
            countries,
            occupations,
            kyc_statuses,
            income_medians,
            behaviors,
            volume_bands: VolumeBandScores {
                low: Decimal::from(low),
                medium: Decimal::from(medium),
                high: Decimal::from(high),
            },
        }
    }

    /// Deserialise a table set from JSON and validate it.
    pub fn from_json_str(json: &str) -> RiskRatingResult<Self> {
        let tables: ReferenceTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Check the table invariants: risk weights bounded to [0,100],
    /// medians non-negative, volume band scores ordered, key sets
    /// non-empty.
    pub fn validate(&self) -> RiskRatingResult<()> {
        check_weight_map("countries", &self.countries)?;
        check_weight_map("occupations", &self.occupations)?;

        for (status, score) in &self.kyc_statuses {
            check_weight("kyc_statuses", &format!("{:?}", status), *score)?;
        }
        for (pattern, score) in &self.behaviors {
            check_weight("behaviors", &format!("{:?}", pattern), *score)?;
        }
        for (range, median) in &self.income_medians {
            if *median < Decimal::ZERO {
                return Err(RiskRatingError::InvalidTable {
                    table: "income_medians".to_string(),
                    reason: format!("median {} for {:?} is negative", median, range),
                });
            }
        }

        let bands = &self.volume_bands;
        for (label, score) in [
            ("low", bands.low),
            ("medium", bands.medium),
            ("high", bands.high),
        ] {
            check_weight("volume_bands", label, score)?;
        }
        if bands.low > bands.medium || bands.medium > bands.high {
            return Err(RiskRatingError::InvalidTable {
                table: "volume_bands".to_string(),
                reason: "band scores must satisfy low <= medium <= high".to_string(),
            });
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookups. Exact, case-sensitive match on the defined key set.
    // -----------------------------------------------------------------------

    pub fn country_score(&self, country: &str) -> Option<Score> {
        self.countries.get(country).copied()
    }

    pub fn occupation_score(&self, occupation: &str) -> Option<Score> {
        self.occupations.get(occupation).copied()
    }

    pub fn kyc_score(&self, status: KycStatus) -> Option<Score> {
        self.kyc_statuses.get(&status).copied()
    }

    pub fn income_median(&self, range: IncomeRange) -> Option<Money> {
        self.income_medians.get(&range).copied()
    }

    pub fn behavior_score(&self, pattern: BehaviorPattern) -> Option<Score> {
        self.behaviors.get(&pattern).copied()
    }

    /// Case-insensitive prefix match over country names, for incremental
    /// search. Returns names in alphabetical order, recomputed on every
    /// call. An empty prefix matches nothing.
    pub fn match_countries(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let needle = prefix.to_lowercase();
        self.countries
            .keys()
            .filter(|name| name.to_lowercase().starts_with(&needle))
            .cloned()
            .collect()
    }
}

fn check_weight_map(table: &str, map: &BTreeMap<String, Score>) -> RiskRatingResult<()> {
    if map.is_empty() {
        return Err(RiskRatingError::InvalidTable {
            table: table.to_string(),
            reason: "table is empty".to_string(),
        });
    }
    for (key, score) in map {
        check_weight(table, key, *score)?;
    }
    Ok(())
}

fn check_weight(table: &str, key: &str, score: Score) -> RiskRatingResult<()> {
    if score < Decimal::ZERO || score > Decimal::ONE_HUNDRED {
        return Err(RiskRatingError::InvalidTable {
            table: table.to_string(),
            reason: format!("score {} for '{}' outside [0,100]", score, key),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn builtin_tables_are_valid() {
        let tables = ReferenceTables::builtin();
        tables.validate().unwrap();
        assert!(tables.countries.len() > 140);
        assert_eq!(tables.occupations.len(), 8);
    }

    #[test]
    fn builtin_lookups() {
        let tables = ReferenceTables::builtin();
        assert_eq!(tables.country_score("Germany"), Some(dec!(15)));
        assert_eq!(tables.occupation_score("Engineer"), Some(dec!(10)));
        assert_eq!(tables.kyc_score(KycStatus::FullyVerified), Some(dec!(10)));
        assert_eq!(
            tables.income_median(IncomeRange::Below2Lakhs),
            Some(dec!(100_000))
        );
        assert_eq!(
            tables.behavior_score(BehaviorPattern::NormalPast),
            Some(dec!(50))
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let tables = ReferenceTables::builtin();
        assert_eq!(tables.country_score("germany"), None);
    }

    #[test]
    fn match_countries_prefix() {
        let tables = ReferenceTables::builtin();
        assert_eq!(tables.match_countries("ger"), vec!["Germany".to_string()]);
        // "Gabon", "Gambia", "Georgia", "Germany", "Ghana", "Greece",
        // "Grenada", "Guatemala", "Guinea", "Guyana"
        assert_eq!(tables.match_countries("g").len(), 10);
    }

    #[test]
    fn match_countries_is_case_insensitive_and_ordered() {
        let tables = ReferenceTables::builtin();
        let matched = tables.match_countries("SO");
        assert_eq!(
            matched,
            vec!["Somalia".to_string(), "South Africa".to_string(), "South Korea".to_string()]
        );
    }

    #[test]
    fn match_countries_empty_prefix_matches_nothing() {
        let tables = ReferenceTables::builtin();
        assert!(tables.match_countries("").is_empty());
    }

    #[test]
    fn out_of_range_weight_rejected() {
        let mut tables = ReferenceTables::builtin();
        tables.countries.insert("Atlantis".to_string(), dec!(120));
        let err = tables.validate().unwrap_err();
        assert!(matches!(
            err,
            RiskRatingError::InvalidTable { ref table, .. } if table == "countries"
        ));
    }

    #[test]
    fn unordered_volume_bands_rejected() {
        let mut tables = ReferenceTables::builtin();
        tables.volume_bands.medium = dec!(5);
        assert!(tables.validate().is_err());
    }

    #[test]
    fn tables_round_trip_through_json() {
        let tables = ReferenceTables::builtin();
        let json = serde_json::to_string(&tables).unwrap();
        let loaded = ReferenceTables::from_json_str(&json).unwrap();
        assert_eq!(loaded.country_score("Yemen"), Some(dec!(90)));
        assert_eq!(
            loaded.kyc_score(KycStatus::NotVerified),
            Some(dec!(80))
        );
    }
}
