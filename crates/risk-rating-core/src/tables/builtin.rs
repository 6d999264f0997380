//! Compiled-in reference data. Single source of truth for the default
//! scoring tables; `ReferenceTables::builtin()` materialises these into
//! lookup maps.

use super::{BehaviorPattern, IncomeRange, KycStatus};

/// Country risk weights, 0-100.
pub(super) const COUNTRY_RISK: &[(&str, u32)] = &[
    ("Afghanistan", 80),
    ("Albania", 40),
    ("Algeria", 50),
    ("Andorra", 10),
    ("Angola", 70),
    ("Argentina", 45),
    ("Armenia", 35),
    ("Australia", 10),
    ("Austria", 15),
    ("Azerbaijan", 50),
    ("Bahrain", 20),
    ("Bangladesh", 55),
    ("Barbados", 10),
    ("Belarus", 60),
    ("Belgium", 20),
    ("Belize", 65),
    ("Benin", 50),
    ("Bhutan", 10),
    ("Bolivia", 70),
    ("Botswana", 40),
    ("Brazil", 80),
    ("Brunei", 10),
    ("Bulgaria", 50),
    ("Burkina Faso", 60),
    ("Cambodia", 70),
    ("Cameroon", 65),
    ("Canada", 10),
    ("Chile", 30),
    ("China", 40),
    ("Colombia", 75),
    ("Costa Rica", 40),
    ("Croatia", 30),
    ("Cuba", 50),
    ("Cyprus", 20),
    ("Czech Republic", 20),
    ("Denmark", 5),
    ("Djibouti", 50),
    ("Dominica", 20),
    ("Dominican Republic", 60),
    ("Ecuador", 55),
    ("Egypt", 50),
    ("El Salvador", 85),
    ("Estonia", 10),
    ("Eswatini", 40),
    ("Ethiopia", 60),
    ("Fiji", 30),
    ("Finland", 5),
    ("France", 15),
    ("Gabon", 50),
    ("Gambia", 45),
    ("Georgia", 20),
    ("Germany", 15),
    ("Ghana", 50),
    ("Greece", 25),
    ("Grenada", 15),
    ("Guatemala", 75),
    ("Guinea", 65),
    ("Guyana", 55),
    ("Haiti", 80),
    ("Honduras", 90),
    ("Hungary", 30),
    ("Iceland", 5),
    ("India", 30),
    ("Indonesia", 40),
    ("Iran", 50),
    ("Iraq", 85),
    ("Ireland", 10),
    ("Israel", 20),
    ("Italy", 25),
    ("Jamaica", 75),
    ("Japan", 10),
    ("Jordan", 25),
    ("Kazakhstan", 45),
    ("Kenya", 60),
    ("North Korea", 90),
    ("South Korea", 10),
    ("Kuwait", 15),
    ("Kyrgyzstan", 50),
    ("Laos", 60),
    ("Latvia", 25),
    ("Lebanon", 70),
    ("Lesotho", 60),
    ("Liberia", 70),
    ("Libya", 85),
    ("Lithuania", 40),
    ("Luxembourg", 10),
    ("Madagascar", 60),
    ("Malawi", 55),
    ("Malaysia", 35),
    ("Maldives", 20),
    ("Mali", 65),
    ("Malta", 10),
    ("Mauritania", 60),
    ("Mauritius", 20),
    ("Mexico", 85),
    ("Moldova", 50),
    ("Monaco", 5),
    ("Mongolia", 40),
    ("Montenegro", 30),
    ("Morocco", 25),
    ("Mozambique", 60),
    ("Myanmar", 80),
    ("Namibia", 50),
    ("Nepal", 40),
    ("Netherlands", 15),
    ("New Zealand", 10),
    ("Nicaragua", 65),
    ("Niger", 60),
    ("Nigeria", 85),
    ("Norway", 5),
    ("Oman", 15),
    ("Pakistan", 70),
    ("Panama", 40),
    ("Paraguay", 55),
    ("Peru", 55),
    ("Philippines", 60),
    ("Poland", 25),
    ("Portugal", 15),
    ("Qatar", 10),
    ("Romania", 30),
    ("Russia", 70),
    ("Rwanda", 20),
    ("San Marino", 5),
    ("Saudi Arabia", 20),
    ("Senegal", 50),
    ("Serbia", 40),
    ("Seychelles", 20),
    ("Singapore", 5),
    ("Slovakia", 25),
    ("Slovenia", 15),
    ("Somalia", 90),
    ("South Africa", 80),
    ("Spain", 20),
    ("Sudan", 85),
    ("Suriname", 60),
    ("Sweden", 15),
    ("Switzerland", 5),
    ("Syria", 90),
    ("Taiwan", 10),
    ("Tajikistan", 50),
    ("Tanzania", 60),
    ("Thailand", 50),
    ("Togo", 55),
    ("Tonga", 20),
    ("Tunisia", 40),
    ("Turkey", 45),
    ("Turkmenistan", 50),
    ("Uganda", 65),
    ("Ukraine", 70),
    ("United Arab Emirates", 10),
    ("United Kingdom", 15),
    ("United States", 20),
    ("Uruguay", 15),
    ("Uzbekistan", 50),
    ("Vanuatu", 20),
    ("Venezuela", 85),
    ("Vietnam", 40),
    ("Yemen", 90),
    ("Zambia", 50),
    ("Zimbabwe", 60),
];

/// Occupation risk weights, 0-100.
pub(super) const OCCUPATION_RISK: &[(&str, u32)] = &[
    ("Politically Exposed", 80),
    ("Gambling Industry", 70),
    ("Healthcare Worker", 20),
    ("Engineer", 10),
    ("Teacher", 10),
    ("Entrepreneur", 30),
    ("Lawyer", 40),
    ("Banker", 50),
];

pub(super) const KYC_RISK: &[(KycStatus, u32)] = &[
    (KycStatus::FullyVerified, 10),
    (KycStatus::PartiallyVerified, 50),
    (KycStatus::NotVerified, 80),
];

/// Median monthly income per declared band. Monetary magnitudes, not risk
/// weights; used only to derive transaction comparison thresholds.
pub(super) const INCOME_MEDIANS: &[(IncomeRange, u64)] = &[
    (IncomeRange::Below2Lakhs, 100_000),
    (IncomeRange::TwoToFiveLakhs, 350_000),
    (IncomeRange::FiveToTenLakhs, 750_000),
    (IncomeRange::AboveTenLakhs, 1_500_000),
];

pub(super) const BEHAVIOR_RISK: &[(BehaviorPattern, u32)] = &[
    (BehaviorPattern::SuspiciousPast, 90),
    (BehaviorPattern::NormalPast, 50),
    (BehaviorPattern::VeryGoodPast, 10),
];

/// Scores assigned to the low / medium / high transaction volume bands.
pub(super) const VOLUME_BAND_SCORES: (u32, u32, u32) = (10, 50, 80);
