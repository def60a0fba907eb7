//! Conventions the text-generation service is instructed to follow but
//! which are never enforced locally. A build that violates them is kept
//! exactly as returned; the findings are only logged.

use std::fmt;

use architect_types::build::{Build, InvestmentPoints};

use crate::presentation::derive::Badge;

/// A convention the build does not follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    InvestmentTotal { total: u64 },
    MissingCategoryTag,
    BracketsInExport,
    CodeFenceInExport,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::InvestmentTotal { total } => write!(
                f,
                "investment points total {total}, expected {}",
                InvestmentPoints::EXPECTED_TOTAL
            ),
            Advisory::MissingCategoryTag => f.write_str("name has no [PVE] or [PVP] tag"),
            Advisory::BracketsInExport => f.write_str("export text contains square brackets"),
            Advisory::CodeFenceInExport => f.write_str("export text is wrapped in a code fence"),
        }
    }
}

/// Check a validated build against the advisory conventions.
pub fn advisories(build: &Build) -> Vec<Advisory> {
    let mut found = Vec::new();

    let total = build.investment_points.total();
    if total != InvestmentPoints::EXPECTED_TOTAL {
        found.push(Advisory::InvestmentTotal { total });
    }
    if Badge::from_name(&build.name) == Badge::Neutral {
        found.push(Advisory::MissingCategoryTag);
    }
    if build.export_summary.contains(['[', ']']) {
        found.push(Advisory::BracketsInExport);
    }
    if build.export_summary.contains("```") {
        found.push(Advisory::CodeFenceInExport);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;
    use crate::test_support::{sample_build, sample_build_json};
    use serde_json::json;

    #[test]
    fn test_conforming_build_has_no_advisories() {
        assert!(advisories(&sample_build()).is_empty());
    }

    #[test]
    fn test_every_convention_reported() {
        let mut build = sample_build();
        build.name = "Unnamed Wanderer".to_string();
        build.investment_points.vitality = 10;
        build.export_summary = "```\n[Hellmode]\n```".to_string();

        let found = advisories(&build);
        assert_eq!(
            found,
            vec![
                Advisory::InvestmentTotal { total: 18 },
                Advisory::MissingCategoryTag,
                Advisory::BracketsInExport,
                Advisory::CodeFenceInExport,
            ]
        );
        assert_eq!(found[0].to_string(), "investment points total 18, expected 12");
    }

    #[test]
    fn test_advisories_do_not_touch_build() {
        let mut build = sample_build();
        build.investment_points.songchant = 9;
        let before = build.clone();
        let _ = advisories(&build);
        assert_eq!(build, before);
    }

    #[test]
    fn test_huge_investment_values_are_reported_not_panicking() {
        let mut doc = sample_build_json();
        doc["investmentPoints"]["vitality"] = json!(4294967295u64);
        doc["investmentPoints"]["erudition"] = json!(1);
        let build = validate(&doc).unwrap();

        let found = advisories(&build);
        assert_eq!(
            found[0],
            Advisory::InvestmentTotal {
                total: 4294967295 + 1 + 2 + 2
            }
        );
    }
}
