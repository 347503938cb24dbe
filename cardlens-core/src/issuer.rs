//! Issuer classification from extractor file names.
//!
//! This is the only keyword table in the workspace. Card badges, the
//! per-issuer distribution and the utilization series all group through
//! [`Issuer::classify`], so their totals always agree.

use serde::{Deserialize, Serialize};

/// Coarse card issuer category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Issuer {
    #[serde(rename = "HDFC")]
    Hdfc,
    #[serde(rename = "ICICI")]
    Icici,
    #[serde(rename = "SBI")]
    Sbi,
    #[serde(rename = "Axis")]
    Axis,
    #[serde(rename = "Kotak")]
    Kotak,
    #[serde(rename = "Canara")]
    Canara,
    #[serde(rename = "Other")]
    Other,
}

impl Issuer {
    /// Keyword-matched issuers in priority order. `Other` is the fallback and
    /// is not listed.
    pub const KEYWORD_ORDER: [Issuer; 6] = [
        Issuer::Hdfc,
        Issuer::Icici,
        Issuer::Sbi,
        Issuer::Axis,
        Issuer::Kotak,
        Issuer::Canara,
    ];

    /// Infer the issuer from a file name. Case-insensitive substring match;
    /// first keyword in [`Issuer::KEYWORD_ORDER`] wins.
    pub fn classify(source: &str) -> Issuer {
        let lower = source.to_lowercase();
        Self::KEYWORD_ORDER
            .into_iter()
            .find(|issuer| issuer.keyword().is_some_and(|kw| lower.contains(kw)))
            .unwrap_or(Issuer::Other)
    }

    /// Lower-case substring that identifies this issuer in a file name
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Issuer::Hdfc => Some("hdfc"),
            Issuer::Icici => Some("icici"),
            Issuer::Sbi => Some("sbi"),
            Issuer::Axis => Some("axis"),
            Issuer::Kotak => Some("kotak"),
            Issuer::Canara => Some("canara"),
            Issuer::Other => None,
        }
    }

    /// Short label used for chart grouping
    pub fn label(&self) -> &'static str {
        match self {
            Issuer::Hdfc => "HDFC",
            Issuer::Icici => "ICICI",
            Issuer::Sbi => "SBI",
            Issuer::Axis => "Axis",
            Issuer::Kotak => "Kotak",
            Issuer::Canara => "Canara",
            Issuer::Other => "Other",
        }
    }

    /// Human-readable issuer name for statement cards
    pub fn display_name(&self) -> &'static str {
        match self {
            Issuer::Hdfc => "HDFC Bank",
            Issuer::Icici => "ICICI Bank",
            Issuer::Sbi => "SBI Card",
            Issuer::Axis => "Axis Bank",
            Issuer::Kotak => "Kotak Mahindra",
            Issuer::Canara => "Canara Bank",
            Issuer::Other => "Credit Card",
        }
    }

    /// Brand color, hex RGB
    pub fn color(&self) -> &'static str {
        match self {
            Issuer::Hdfc => "#004C8F",
            Issuer::Icici => "#F37021",
            Issuer::Sbi => "#22409A",
            Issuer::Axis => "#800000",
            Issuer::Kotak => "#ED232A",
            Issuer::Canara => "#00703C",
            Issuer::Other => "#6c757d",
        }
    }
}

impl std::fmt::Display for Issuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_issuers() {
        assert_eq!(Issuer::classify("HDFC_statement_jan.pdf"), Issuer::Hdfc);
        assert_eq!(Issuer::classify("icici_feb.pdf"), Issuer::Icici);
        assert_eq!(Issuer::classify("sbi-card-mar.pdf"), Issuer::Sbi);
        assert_eq!(Issuer::classify("AxisBank.pdf"), Issuer::Axis);
        assert_eq!(Issuer::classify("kotak_811.pdf"), Issuer::Kotak);
        assert_eq!(Issuer::classify("canara.pdf"), Issuer::Canara);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(Issuer::classify("Hdfc.PDF"), Issuer::Hdfc);
        assert_eq!(Issuer::classify("ICICI.pdf"), Issuer::Icici);
    }

    #[test]
    fn test_unmatched_falls_back_to_other() {
        assert_eq!(Issuer::classify("random.csv"), Issuer::Other);
        assert_eq!(Issuer::classify(""), Issuer::Other);
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // Both keywords present: hdfc is checked before sbi
        assert_eq!(Issuer::classify("sbi_vs_hdfc.pdf"), Issuer::Hdfc);
        assert_eq!(Issuer::classify("kotak_axis.pdf"), Issuer::Axis);
    }

    #[test]
    fn test_metadata_is_distinct_per_issuer() {
        let mut all = Issuer::KEYWORD_ORDER.to_vec();
        all.push(Issuer::Other);
        let colors: std::collections::HashSet<_> = all.iter().map(|i| i.color()).collect();
        assert_eq!(colors.len(), all.len());
        assert_eq!(Issuer::Other.display_name(), "Credit Card");
        assert_eq!(Issuer::Kotak.to_string(), "Kotak");
    }

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Issuer::Icici).unwrap(), "\"ICICI\"");
        assert_eq!(serde_json::to_string(&Issuer::Axis).unwrap(), "\"Axis\"");
    }
}
