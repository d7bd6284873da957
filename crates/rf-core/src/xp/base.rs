//! Base experience for a single solo kill.
//!
//! Starts from `level * 5 + tier constant` and scales by the level gap:
//! - **Higher opponents**: +5% per level, capped at a gap of 4 (red
//!   opponents give the same as orange)
//! - **Lower opponents**: a linear ramp from full experience at gap 0 down
//!   to nothing at the zero difference, and nothing at or below gray level

use crate::hooks::FormulaHooks;
use crate::xp::gray::gray_level;
use crate::xp::tier::ContentTier;
use crate::xp::zero_diff::zero_difference;

/// Largest level gap that still increases experience.
const MAX_BONUS_GAP: u32 = 4;

/// Experience for killing a `mob_level` opponent in `tier` at `level`,
/// before elite bonuses and rate multipliers.
pub fn base_gain(level: u8, mob_level: u8, tier: ContentTier, hooks: &dyn FormulaHooks) -> u32 {
    let base_xp = u32::from(level) * 5 + tier.base_experience();

    let mut gain = if mob_level == level {
        base_xp
    } else if mob_level > level {
        let gap = u32::from(mob_level - level).min(MAX_BONUS_GAP);
        // base_xp * (1 + 0.05 * gap), kept in integers
        base_xp * (20 + gap) / 20
    } else if mob_level <= gray_level(level, hooks) {
        0
    } else {
        let zd = u32::from(zero_difference(level, hooks));
        let gap = u32::from(level - mob_level);
        if zd == 0 {
            0
        } else {
            base_xp * zd.saturating_sub(gap) / zd
        }
    };

    hooks.on_base_gain(&mut gain, level, mob_level, tier);
    gain
}
