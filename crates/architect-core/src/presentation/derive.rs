//! Pure derivations from a build's fields.

use serde::Serialize;

use architect_types::build::{AttunementStat, InvestmentPoints, ProgressionStep, StatBlock};

/// Named accent colors used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Red,
    Orange,
    Emerald,
    Blue,
    Purple,
    Pink,
    Gold,
}

impl Accent {
    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Red => "red",
            Accent::Orange => "orange",
            Accent::Emerald => "emerald",
            Accent::Blue => "blue",
            Accent::Purple => "purple",
            Accent::Pink => "pink",
            Accent::Gold => "gold",
        }
    }
}

/// Category badge derived from the build name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Pve,
    Pvp,
    Neutral,
}

impl Badge {
    /// Case-insensitive tag lookup. `[PVE]` wins when both tags appear.
    pub fn from_name(name: &str) -> Self {
        let upper = name.to_uppercase();
        if upper.contains("[PVE]") {
            Badge::Pve
        } else if upper.contains("[PVP]") {
            Badge::Pvp
        } else {
            Badge::Neutral
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Badge::Pve => Accent::Emerald,
            Badge::Pvp => Accent::Red,
            Badge::Neutral => Accent::Blue,
        }
    }
}

/// First whitespace-delimited token of the name, shown verbatim.
pub fn badge_label(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

/// The name without its leading bracketed tag.
///
/// Everything after the first `]` is kept (later `]` included) and trimmed.
/// A name with no `]` is returned unchanged.
pub fn display_title(name: &str) -> String {
    match name.split_once(']') {
        Some((_, rest)) => rest.trim().to_string(),
        None => name.to_string(),
    }
}

/// One attribute of a stat block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatTile {
    pub abbreviation: &'static str,
    pub label: &'static str,
    pub value: u32,
    pub accent: Accent,
}

/// Six tiles in the export grammar's attribute order.
pub fn stat_tiles(stats: &StatBlock) -> [StatTile; 6] {
    let tile = |abbreviation, label, value, accent| StatTile {
        abbreviation,
        label,
        value,
        accent,
    };
    [
        tile("STR", "Strength", stats.strength, Accent::Red),
        tile("FOR", "Fortitude", stats.fortitude, Accent::Orange),
        tile("AGI", "Agility", stats.agility, Accent::Emerald),
        tile("INT", "Intelligence", stats.intelligence, Accent::Blue),
        tile("WIL", "Willpower", stats.willpower, Accent::Purple),
        tile("CHA", "Charisma", stats.charisma, Accent::Pink),
    ]
}

/// One entry of the leveling timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressionMarker {
    pub heading: String,
    pub action: String,
    pub reason: String,
    pub shrine: bool,
    pub accent: Accent,
}

/// Markers in the order received. Never re-sorted.
pub fn progression_markers(steps: &[ProgressionStep]) -> Vec<ProgressionMarker> {
    steps
        .iter()
        .map(|step| {
            let shrine = step.is_shrine();
            ProgressionMarker {
                heading: if shrine {
                    format!("{} — SHRINE", step.level)
                } else {
                    step.level.clone()
                },
                action: step.action.clone(),
                reason: step.reason.clone(),
                shrine,
                accent: if shrine { Accent::Gold } else { Accent::Blue },
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvestmentTile {
    pub label: &'static str,
    pub value: u32,
}

pub fn investment_tiles(points: &InvestmentPoints) -> [InvestmentTile; 4] {
    [
        InvestmentTile {
            label: "Vitality",
            value: points.vitality,
        },
        InvestmentTile {
            label: "Erudition",
            value: points.erudition,
        },
        InvestmentTile {
            label: "Proficiency",
            value: points.proficiency,
        },
        InvestmentTile {
            label: "Songchant",
            value: points.songchant,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttunementRow {
    pub name: String,
    pub value: i64,
    pub accent: Accent,
}

/// Attunement entries in order. Pre-shrine rows are blue, post-shrine emerald.
pub fn attunement_rows(stats: &[AttunementStat], post_shrine: bool) -> Vec<AttunementRow> {
    let accent = if post_shrine {
        Accent::Emerald
    } else {
        Accent::Blue
    };
    stats
        .iter()
        .map(|stat| AttunementRow {
            name: stat.name.clone(),
            value: stat.value,
            accent,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_is_case_insensitive() {
        for name in ["[pvp] foo", "[PVP] foo", "[Pvp] foo"] {
            assert_eq!(Badge::from_name(name), Badge::Pvp, "{name}");
        }
        assert_eq!(Badge::from_name("[pVe] Hellmode"), Badge::Pve);
        assert_eq!(Badge::from_name("Unnamed Wanderer"), Badge::Neutral);
    }

    #[test]
    fn test_pve_checked_before_pvp() {
        assert_eq!(Badge::from_name("[PVP] then [PVE]"), Badge::Pve);
    }

    #[test]
    fn test_tag_anywhere_in_name() {
        assert_eq!(Badge::from_name("Frostdraw [PVP]"), Badge::Pvp);
    }

    #[test]
    fn test_badge_palette() {
        assert_eq!(Badge::Pve.accent(), Accent::Emerald);
        assert_eq!(Badge::Pvp.accent(), Accent::Red);
        assert_eq!(Badge::Neutral.accent(), Accent::Blue);
    }

    #[test]
    fn test_badge_label_is_first_token() {
        assert_eq!(badge_label("[PVE] Hellmode Shadowcast"), "[PVE]");
        assert_eq!(badge_label("  Unnamed Wanderer"), "Unnamed");
        assert_eq!(badge_label(""), "");
    }

    #[test]
    fn test_display_title() {
        assert_eq!(display_title("[PVE] Hellmode Shadowcast"), "Hellmode Shadowcast");
        assert_eq!(display_title("Unnamed Wanderer"), "Unnamed Wanderer");
        assert_eq!(display_title("[PVP] Gran ]Sudaruska"), "Gran ]Sudaruska");
        assert_eq!(display_title("[PVP]"), "");
    }

    #[test]
    fn test_stat_tiles_fixed_order() {
        let stats = StatBlock {
            strength: 0,
            fortitude: 1,
            agility: 2,
            intelligence: 90,
            willpower: 4_000_000,
            charisma: 5,
        };
        let tiles = stat_tiles(&stats);
        let abbreviations: Vec<_> = tiles.iter().map(|t| t.abbreviation).collect();
        assert_eq!(abbreviations, ["STR", "FOR", "AGI", "INT", "WIL", "CHA"]);
        assert_eq!(tiles[4].value, 4_000_000);
        assert_eq!(tiles[0].label, "Strength");
        assert_eq!(tiles[5].accent, Accent::Pink);
    }

    #[test]
    fn test_stat_tiles_for_zero_block() {
        let tiles = stat_tiles(&StatBlock::default());
        assert_eq!(tiles.len(), 6);
        assert!(tiles.iter().all(|t| t.value == 0));
    }

    #[test]
    fn test_progression_markers_highlight_shrine() {
        let step = |level: &str, shrine: Option<bool>| ProgressionStep {
            level: level.to_string(),
            action: "a".to_string(),
            reason: "r".to_string(),
            is_shrine_point: shrine,
        };
        let markers = progression_markers(&[step("20", None), step("15", Some(true)), step("1", Some(false))]);

        let headings: Vec<_> = markers.iter().map(|m| m.heading.as_str()).collect();
        assert_eq!(headings, ["20", "15 — SHRINE", "1"]);
        assert_eq!(markers[1].accent, Accent::Gold);
        assert_eq!(markers[0].accent, Accent::Blue);
        assert!(!markers[2].shrine);
    }

    #[test]
    fn test_investment_and_attunement_rows() {
        let points = InvestmentPoints {
            vitality: 6,
            erudition: 6,
            proficiency: 0,
            songchant: 0,
        };
        let labels: Vec<_> = investment_tiles(&points).iter().map(|t| t.label).collect();
        assert_eq!(labels, ["Vitality", "Erudition", "Proficiency", "Songchant"]);

        let stats = vec![AttunementStat {
            name: "Frostdraw".to_string(),
            value: 40,
        }];
        assert_eq!(attunement_rows(&stats, false)[0].accent, Accent::Blue);
        assert_eq!(attunement_rows(&stats, true)[0].accent, Accent::Emerald);
    }
}
