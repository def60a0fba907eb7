//! Fixed prompt presets. Selecting one fills the prompt input; it never submits.

pub const PRESETS: [&str; 5] = [
    "PVE Hellmode Shadowcast Heavy",
    "PVP Gran Sudaruska Frostdraw",
    "PVP Curved Blade Silentheart",
    "PVE Diluvian Mechanism",
    "PVP Railblade Flamecharmer",
];

/// Preset at a zero-based index.
pub fn preset(index: usize) -> Option<&'static str> {
    PRESETS.get(index).copied()
}
