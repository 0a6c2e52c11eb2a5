//! Authority Risk Scoring
//!
//! Deterministic 0-100 safety score from the three authority/mutability flags
//! of a mint, and the holder concentration ("whale") tag used for reporting.

use serde::{Deserialize, Serialize};

use super::asset::MintInfo;

/// Points deducted while the mint authority is set
pub const MINT_AUTHORITY_PENALTY: u8 = 40;

/// Points deducted while the freeze authority is set
pub const FREEZE_AUTHORITY_PENALTY: u8 = 40;

/// Points deducted while metadata is mutable
pub const MUTABLE_METADATA_PENALTY: u8 = 20;

/// A holder above this share of supply (percent, exclusive) is a whale
pub const WHALE_THRESHOLD_PCT: f64 = 5.0;

/// Safety verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Safe,
    Caution,
    Critical,
    Unknown,
}

impl Verdict {
    /// score > 80 is SAFE, 40 < score <= 80 is CAUTION, anything else CRITICAL
    pub fn from_score(score: u8) -> Self {
        if score > 80 {
            Verdict::Safe
        } else if score > 40 {
            Verdict::Caution
        } else {
            Verdict::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Safe => "SAFE",
            Verdict::Caution => "CAUTION",
            Verdict::Critical => "CRITICAL",
            Verdict::Unknown => "UNKNOWN",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Verdict::Safe => "Authorities revoked and metadata locked",
            Verdict::Caution => "Some privileged control remains on this mint",
            Verdict::Critical => "Creator can still mint or freeze - treat as high risk",
            Verdict::Unknown => "No on-chain mint data available to score",
        }
    }
}

/// One failed check contributing to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    MintAuthorityActive,
    FreezeAuthorityActive,
    MetadataMutable,
}

impl RiskFlag {
    pub fn penalty(&self) -> u8 {
        match self {
            RiskFlag::MintAuthorityActive => MINT_AUTHORITY_PENALTY,
            RiskFlag::FreezeAuthorityActive => FREEZE_AUTHORITY_PENALTY,
            RiskFlag::MetadataMutable => MUTABLE_METADATA_PENALTY,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskFlag::MintAuthorityActive => "Mint authority enabled - supply can be inflated",
            RiskFlag::FreezeAuthorityActive => "Freeze authority enabled - holder accounts can be frozen",
            RiskFlag::MetadataMutable => "Metadata mutable - name, symbol or image can change",
        }
    }
}

/// Score and verdict for one mint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// `None` when the verdict is UNKNOWN
    pub score: Option<u8>,
    pub verdict: Verdict,
    /// Failed checks, in scoring order
    pub flags: Vec<RiskFlag>,
}

impl RiskAssessment {
    pub fn unknown() -> Self {
        Self { score: None, verdict: Verdict::Unknown, flags: Vec::new() }
    }

    /// Score three flags: 100 - 40*mint - 40*freeze - 20*mutable
    pub fn from_flags(mint_authority: bool, freeze_authority: bool, mutable: bool) -> Self {
        let flags: Vec<RiskFlag> = [
            (mint_authority, RiskFlag::MintAuthorityActive),
            (freeze_authority, RiskFlag::FreezeAuthorityActive),
            (mutable, RiskFlag::MetadataMutable),
        ]
        .into_iter()
        .filter_map(|(set, flag)| set.then_some(flag))
        .collect();

        let score = flags.iter().fold(100u8, |acc, flag| acc - flag.penalty());

        Self { score: Some(score), verdict: Verdict::from_score(score), flags }
    }
}

/// Stateless scorer over mint metadata
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    /// Score a mint. UNKNOWN when there is no mint info or it has no
    /// supply/authority section.
    pub fn assess(mint_info: Option<&MintInfo>) -> RiskAssessment {
        let Some(info) = mint_info else {
            return RiskAssessment::unknown();
        };
        let Some(supply) = info.supply.as_ref() else {
            return RiskAssessment::unknown();
        };

        RiskAssessment::from_flags(
            supply.authority.mint_authority_present(),
            supply.authority.freeze_authority_present(),
            info.is_metadata_mutable,
        )
    }
}

/// Percentage of supply held; `None` when supply is unknown or zero
pub fn share_of_supply(ui_amount: f64, ui_supply: Option<f64>) -> Option<f64> {
    match ui_supply {
        Some(supply) if supply > 0.0 => Some(ui_amount / supply * 100.0),
        _ => None,
    }
}

/// Strictly above 5% of supply
pub fn is_whale(ui_amount: f64, ui_supply: Option<f64>) -> bool {
    share_of_supply(ui_amount, ui_supply).is_some_and(|pct| pct > WHALE_THRESHOLD_PCT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::{AuthorityInfo, SupplyInfo};

    fn mint_info(mint: bool, freeze: bool, mutable: bool) -> MintInfo {
        MintInfo {
            mint: "TestMint".to_string(),
            name: None,
            symbol: None,
            interface: Some("FungibleToken".to_string()),
            owner_program: None,
            is_metadata_mutable: mutable,
            supply: Some(SupplyInfo {
                raw_supply: 1_000_000,
                decimals: 6,
                authority: AuthorityInfo::new(
                    mint.then(|| "MintAuth".to_string()),
                    freeze.then(|| "FreezeAuth".to_string()),
                ),
            }),
        }
    }

    #[test]
    fn test_formula_over_all_combinations() {
        for mint in [false, true] {
            for freeze in [false, true] {
                for mutable in [false, true] {
                    let expected = 100 - 40 * mint as u8 - 40 * freeze as u8 - 20 * mutable as u8;
                    let result = RiskScorer::assess(Some(&mint_info(mint, freeze, mutable)));
                    assert_eq!(result.score, Some(expected), "mint={mint} freeze={freeze} mutable={mutable}");
                    assert_eq!(result.verdict, Verdict::from_score(expected));
                }
            }
        }
    }

    #[test]
    fn test_verdict_table() {
        let cases = [
            ((false, false, false), 100, Verdict::Safe),
            ((false, false, true), 80, Verdict::Caution),
            ((true, false, false), 60, Verdict::Caution),
            ((false, true, false), 60, Verdict::Caution),
            ((true, false, true), 40, Verdict::Critical),
            ((false, true, true), 40, Verdict::Critical),
            ((true, true, false), 20, Verdict::Critical),
            ((true, true, true), 0, Verdict::Critical),
        ];
        for ((mint, freeze, mutable), score, verdict) in cases {
            let result = RiskAssessment::from_flags(mint, freeze, mutable);
            assert_eq!(result.score, Some(score));
            assert_eq!(result.verdict, verdict);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(Verdict::from_score(81), Verdict::Safe);
        assert_eq!(Verdict::from_score(80), Verdict::Caution);
        assert_eq!(Verdict::from_score(41), Verdict::Caution);
        assert_eq!(Verdict::from_score(40), Verdict::Critical);
        assert_eq!(Verdict::from_score(0), Verdict::Critical);
    }

    #[test]
    fn test_flags_listed_in_order() {
        let result = RiskAssessment::from_flags(true, false, true);
        assert_eq!(result.flags, vec![RiskFlag::MintAuthorityActive, RiskFlag::MetadataMutable]);
        let total: u8 = result.flags.iter().map(RiskFlag::penalty).sum();
        assert_eq!(100 - total, result.score.unwrap());
    }

    #[test]
    fn test_unknown_without_mint_info() {
        let result = RiskScorer::assess(None);
        assert_eq!(result.verdict, Verdict::Unknown);
        assert!(result.score.is_none());
        assert!(result.flags.is_empty());
    }

    #[test]
    fn test_unknown_without_supply_section() {
        let mut info = mint_info(true, true, true);
        info.supply = None;
        assert_eq!(RiskScorer::assess(Some(&info)), RiskAssessment::unknown());
    }

    #[test]
    fn test_whale_threshold_is_exclusive() {
        assert!(!is_whale(5.0, Some(100.0)));
        assert!(is_whale(5.01, Some(100.0)));
        assert!(!is_whale(4.99, Some(100.0)));
        assert!(!is_whale(0.55, Some(11.0)));
        assert_eq!(share_of_supply(0.55, Some(11.0)), Some(5.0));
    }

    #[test]
    fn test_whale_without_supply() {
        assert!(!is_whale(1_000_000.0, None));
        assert!(!is_whale(1_000_000.0, Some(0.0)));
        assert!(share_of_supply(10.0, Some(0.0)).is_none());
    }

    #[test]
    fn test_verdict_serializes_uppercase() {
        let json = serde_json::to_string(&Verdict::Caution).unwrap();
        assert_eq!(json, "\"CAUTION\"");
    }
}
