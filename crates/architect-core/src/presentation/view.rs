//! The dashboard view model.

use serde::Serialize;

use architect_types::build::{Build, Requirement};

use super::derive::{
    AttunementRow, Badge, InvestmentTile, ProgressionMarker, StatTile, attunement_rows, badge_label,
    display_title, investment_tiles, progression_markers, stat_tiles,
};

/// Everything the dashboard renders for one build, derived once.
///
/// The export text is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildView {
    pub badge: Badge,
    pub badge_label: String,
    pub title: String,
    pub oath: String,
    pub attunement: String,
    pub race: String,
    pub weapon_type: String,
    pub murmur: String,
    pub image_url: Option<String>,
    pub preferable_boons: Vec<String>,
    pub preferable_flaws: Vec<String>,
    pub investment: [InvestmentTile; 4],
    pub pre_shrine_stats: [StatTile; 6],
    pub post_shrine_stats: [StatTile; 6],
    pub pre_shrine_attunement: Vec<AttunementRow>,
    pub post_shrine_attunement: Vec<AttunementRow>,
    pub progression: Vec<ProgressionMarker>,
    pub mantras: Vec<String>,
    pub weapon_requirements: Vec<Requirement>,
    pub oath_requirements: Vec<Requirement>,
    pub recommended_bells: Vec<String>,
    pub description: String,
    pub playstyle: String,
    pub export_summary: String,
}

impl BuildView {
    pub fn from_build(build: &Build) -> Self {
        Self {
            badge: Badge::from_name(&build.name),
            badge_label: badge_label(&build.name).to_string(),
            title: display_title(&build.name),
            oath: build.oath.clone(),
            attunement: build.attunement.clone(),
            race: build.race.clone(),
            weapon_type: build.weapon_type.clone(),
            murmur: build.murmur.clone(),
            image_url: build.image_url.as_ref().map(|image| image.as_str().to_string()),
            preferable_boons: build.preferable_boons.clone(),
            preferable_flaws: build.preferable_flaws.clone(),
            investment: investment_tiles(&build.investment_points),
            pre_shrine_stats: stat_tiles(&build.pre_shrine_stats),
            post_shrine_stats: stat_tiles(&build.post_shrine_stats),
            pre_shrine_attunement: attunement_rows(&build.pre_shrine_attunement_stats, false),
            post_shrine_attunement: attunement_rows(&build.post_shrine_attunement_stats, true),
            progression: progression_markers(&build.progression_order),
            mantras: build.mantras.clone(),
            weapon_requirements: build.weapon_requirements.clone(),
            oath_requirements: build.oath_requirements.clone(),
            recommended_bells: build.recommended_bells.clone(),
            description: build.description.clone(),
            playstyle: build.playstyle.clone(),
            export_summary: build.export_summary.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{SAMPLE_EXPORT, sample_build};
    use architect_types::build::ImageReference;

    #[test]
    fn test_view_derives_header() {
        let view = BuildView::from_build(&sample_build());
        assert_eq!(view.badge, Badge::Pve);
        assert_eq!(view.badge_label, "[PVE]");
        assert_eq!(view.title, "Hellmode Shadowcast");
        assert!(view.image_url.is_none());
    }

    #[test]
    fn test_view_keeps_export_verbatim() {
        let view = BuildView::from_build(&sample_build());
        assert_eq!(view.export_summary, SAMPLE_EXPORT);
    }

    #[test]
    fn test_view_serializes_for_clients() {
        let build = sample_build().with_image(ImageReference::data_uri("image/png", "aGVsbG8="));
        let json = serde_json::to_value(BuildView::from_build(&build)).unwrap();
        assert_eq!(json["badge"], "pve");
        assert_eq!(json["imageUrl"], "data:image/png;base64,aGVsbG8=");
        assert_eq!(json["preShrineStats"][3]["abbreviation"], "INT");
        assert_eq!(json["progression"][1]["heading"], "15 — SHRINE");
        assert_eq!(json["progression"][1]["accent"], "gold");
    }
}
