//! Shared fixtures for unit tests.

use serde_json::{Value, json};

use architect_types::build::Build;

pub(crate) const SAMPLE_EXPORT: &str = concat!(
    "Hellmode Shadowcast\n",
    "=====\n",
    "LVL 20 Khan, Castebreaker, Arcwarder\n",
    "== ATTRIBUTES ==\n",
    "25 STR; 20 FTD; 0 AGL; 75 INT; 40 WLL; 0 CHA\n",
    "=====\n",
    "40 HVY; 0 MED; 0 LHT\n",
    "=====\n",
    "80 SDW; 0 ICE\n",
    "== MANTRAS ==\n",
    "Shadow Gun\n",
    "Shadow Eruption\n",
    "== TALENTS ==\n",
    "Shadow Bind\n",
    "Umbral Overload\n",
    "Exoskeleton\n",
    "Reinforced Armor"
);

pub(crate) fn sample_build_json() -> Value {
    json!({
        "name": "[PVE] Hellmode Shadowcast",
        "oath": "Arcwarder",
        "attunement": "Shadowcast",
        "weaponType": "Heavy",
        "race": "Khan",
        "murmur": "Ardour",
        "preShrineStats": {
            "strength": 40, "fortitude": 30, "agility": 0,
            "intelligence": 50, "willpower": 40, "charisma": 0
        },
        "postShrineStats": {
            "strength": 25, "fortitude": 20, "agility": 0,
            "intelligence": 75, "willpower": 40, "charisma": 0
        },
        "preShrineAttunementStats": [{ "name": "Shadowcast", "value": 60 }],
        "postShrineAttunementStats": [{ "name": "Shadowcast", "value": 80 }],
        "preShrineTalents": ["Shadow Bind"],
        "postShrineTalents": ["Umbral Overload"],
        "mantras": ["Shadow Gun", "Shadow Eruption"],
        "weaponRequirements": [{ "item": "Greathammer", "statRequirement": "40 STR" }],
        "oathRequirements": [{ "item": "Arcwarder", "statRequirement": "25 INT" }],
        "recommendedBells": ["Sinister Symphony"],
        "progressionOrder": [
            { "level": "1-10", "action": "Build Strength", "reason": "Weapon", "isShrinePoint": false },
            { "level": "15", "action": "Use Shrine of Order", "reason": "Rebalance", "isShrinePoint": true },
            { "level": "20", "action": "Finish Intelligence", "reason": "Mantra scaling" }
        ],
        "description": "A hellmode caster.",
        "playstyle": "Stay at range.",
        "exportSummary": SAMPLE_EXPORT,
        "builderJson": "{}",
        "preferableBoons": ["Steadfast"],
        "preferableFlaws": ["Glass Bones"],
        "investmentPoints": {
            "vitality": 4, "erudition": 4, "proficiency": 2, "songchant": 2
        }
    })
}

pub(crate) fn sample_build() -> Build {
    serde_json::from_value(sample_build_json()).expect("fixture decodes")
}
