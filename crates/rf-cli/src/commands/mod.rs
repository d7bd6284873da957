pub mod base;
pub mod color;
pub mod conquest;
pub mod gain;
pub mod group;
pub mod honor;
pub mod table;

use std::path::Path;

use colored::{ColoredString, Colorize};
use rf_core::{ContentTier, DifficultyColor, RateConfig, VictimKind};

/// Parse a tier given as a bracket, a name, or a raw id.
///
/// Raw ids go through [`ContentTier::resolve`], so an unsupported id
/// degrades to the lowest tier with a warning instead of failing.
fn parse_tier(s: &str) -> Result<ContentTier, String> {
    if let Ok(id) = s.parse::<u8>() {
        return Ok(ContentTier::resolve(id));
    }
    s.parse::<ContentTier>().map_err(|e| e.to_string())
}

fn parse_kind(s: &str) -> Result<VictimKind, String> {
    match s.to_lowercase().as_str() {
        "normal" => Ok(VictimKind::Normal),
        "totem" => Ok(VictimKind::Totem),
        "pet" => Ok(VictimKind::Pet),
        "critter" => Ok(VictimKind::Critter),
        other => Err(format!("unknown opponent kind: {other}")),
    }
}

/// Load rates from a JSON file, or use neutral defaults.
fn load_rates(path: Option<&Path>) -> Result<RateConfig, String> {
    match path {
        Some(path) => RateConfig::from_file(path)
            .map_err(|e| format!("failed to load rates from {}: {e}", path.display())),
        None => Ok(RateConfig::default()),
    }
}

fn paint(color: DifficultyColor) -> ColoredString {
    let label = color.to_string();
    match color {
        DifficultyColor::Red => label.red(),
        DifficultyColor::Orange => label.truecolor(255, 128, 0),
        DifficultyColor::Yellow => label.yellow(),
        DifficultyColor::Green => label.green(),
        DifficultyColor::Gray => label.dimmed(),
    }
}
