//! The character build record.
//!
//! A `Build` is produced in two steps: the structured fields come from the
//! text-generation service (after validation), and the illustration is
//! attached afterwards with [`Build::with_image`]. Field names on the wire are
//! camelCase to match the remote schema.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The six core attributes, either before or after the Shrine of Order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub strength: u32,
    pub fortitude: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub willpower: u32,
    pub charisma: u32,
}

/// Investment in one elemental school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttunementStat {
    pub name: String,
    pub value: i64,
}

/// Distribution of investment points.
///
/// The four values are expected to total 12. That rule is given to the
/// remote service and reported as an advisory, never enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPoints {
    pub vitality: u32,
    pub erudition: u32,
    pub proficiency: u32,
    pub songchant: u32,
}

impl InvestmentPoints {
    /// The total every build is expected to spend.
    pub const EXPECTED_TOTAL: u64 = 12;

    /// Sum of all four categories. Widened so no validated input can overflow.
    pub fn total(&self) -> u64 {
        [self.vitality, self.erudition, self.proficiency, self.songchant]
            .into_iter()
            .map(u64::from)
            .sum()
    }
}

/// A prerequisite for a weapon or an oath initiation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub item: String,
    pub stat_requirement: String,
}

/// One step of the leveling roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionStep {
    pub level: String,
    pub action: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_shrine_point: Option<bool>,
}

impl ProgressionStep {
    /// Whether this step is the shrine point. Absent counts as `false`.
    pub fn is_shrine(&self) -> bool {
        self.is_shrine_point.unwrap_or(false)
    }
}

/// Illustration attached to a build: a `data:` URI or an external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ImageReference(String);

impl ImageReference {
    /// Build a `data:` URI from a MIME type and a base64 payload.
    pub fn data_uri(mime_type: &str, base64_data: &str) -> Self {
        Self(format!("data:{mime_type};base64,{base64_data}"))
    }

    /// Wrap an external URL as-is.
    pub fn external(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the reference embeds its bytes.
    pub fn is_data_uri(&self) -> bool {
        self.0.starts_with("data:")
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A complete character build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    /// Conventionally prefixed with `[PVE]` or `[PVP]`.
    pub name: String,
    pub oath: String,
    pub attunement: String,
    pub weapon_type: String,
    pub race: String,
    pub murmur: String,
    pub pre_shrine_stats: StatBlock,
    pub post_shrine_stats: StatBlock,
    pub pre_shrine_attunement_stats: Vec<AttunementStat>,
    pub post_shrine_attunement_stats: Vec<AttunementStat>,
    pub pre_shrine_talents: Vec<String>,
    pub post_shrine_talents: Vec<String>,
    pub mantras: Vec<String>,
    pub weapon_requirements: Vec<Requirement>,
    pub oath_requirements: Vec<Requirement>,
    pub recommended_bells: Vec<String>,
    pub progression_order: Vec<ProgressionStep>,
    pub description: String,
    pub playstyle: String,
    /// Import text for the community planner. Opaque: displayed and copied
    /// byte-for-byte, never parsed or reformatted.
    pub export_summary: String,
    pub builder_json: String,
    pub preferable_boons: Vec<String>,
    pub preferable_flaws: Vec<String>,
    pub investment_points: InvestmentPoints,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<ImageReference>,
}

impl Build {
    /// Attach the generated illustration, consuming the text-only record.
    pub fn with_image(self, image: ImageReference) -> Self {
        Self {
            image_url: Some(image),
            ..self
        }
    }
}
