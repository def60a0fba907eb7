//! Fixed instructions sent to the remote services.

use architect_types::build::Build;

/// System instruction for the structured-build request.
pub const SYSTEM_INSTRUCTION: &str = "\
You are the world-renowned Deepwoken build architect.

CRITICAL: The 'exportSummary' MUST follow this EXACT format for deepwoken.co compatibility:
<Build Name>
=====
LVL 20 <Race>, <Origin>, <Oath>
== ATTRIBUTES ==
<STR value> STR; <FTD value> FTD; <AGL value> AGL; <INT value> INT; <WLL value> WLL; <CHA value> CHA
=====
<HVY value> HVY; <MED value> MED; <LHT value> LHT
=====
<value> <element code (ICE/SDW/FLM/THN/GAL/IRN)>; <value> <element code>
== MANTRAS ==
<Mantra 1>
<Mantra 2>
... (all 8+ mantras)
== TALENTS ==
<Every talent expected for a finished Power 20 build. Provide an exhaustive list of at least 50-80 talents, \
including common meta talents like Exoskeleton, Reinforced Armor, To the Finish, Ghost.>

INVESTMENT POINTS: Distribute a total of 12 points between Vitality, Erudition, Proficiency, and Songchant \
(e.g., 6 Vitality, 6 Erudition for a tanky mage).

Formatting rules for 'exportSummary':
1. No code blocks.
2. Use \"=====\" exactly where shown.
3. No square brackets in the final string.
4. One talent or mantra per line.

SHRINE OF ORDER: Always optimize for Shrine of Order.

Return valid JSON.";

/// Image prompt derived from the build's identity fields only.
/// No user-supplied text reaches the image service.
pub fn image_prompt(build: &Build) -> String {
    format!(
        "Stylized high-quality anime concept art for a Deepwoken Roblox character. \
         Race: {}. Element: {}. Oath: {}. Weapon: {}. \
         Dark, moody atmospheric lighting from the Depths. Dynamic pose. High detail.",
        build.race, build.attunement, build.oath, build.weapon_type
    )
}
