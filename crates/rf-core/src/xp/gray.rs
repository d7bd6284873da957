//! Gray level and difficulty colors.
//!
//! The gray level is the highest opponent level that is trivial for a
//! character. Colors classify an opponent relative to the character:
//! red and orange are dangerous, yellow is an even fight, green is easy,
//! and gray grants no experience.

use serde::{Deserialize, Serialize};

use crate::hooks::FormulaHooks;

/// Difficulty of an opponent relative to a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyColor {
    /// Five or more levels above the character.
    Red,
    /// Three or four levels above the character.
    Orange,
    /// Within two levels below up to two levels above.
    Yellow,
    /// Below yellow but still above the gray level.
    Green,
    /// At or below the gray level; no experience.
    Gray,
}

impl std::fmt::Display for DifficultyColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Orange => write!(f, "orange"),
            Self::Yellow => write!(f, "yellow"),
            Self::Green => write!(f, "green"),
            Self::Gray => write!(f, "gray"),
        }
    }
}

/// Highest opponent level that grants no experience to a `level` character.
pub fn gray_level(level: u8, hooks: &dyn FormulaHooks) -> u8 {
    let mut gray = match level {
        0..=5 => 0,
        6..=39 => (level - 5) - level / 10,
        40..=59 => (level - 1) - level / 5,
        _ => level - 9,
    };

    hooks.on_gray_level(&mut gray, level);
    gray
}

/// Classify an opponent of `mob_level` for a character of `level`.
///
/// Rules are checked from most to least severe; the first match wins.
pub fn color_code(level: u8, mob_level: u8, hooks: &dyn FormulaHooks) -> DifficultyColor {
    let (pl, mob) = (i32::from(level), i32::from(mob_level));

    let mut color = if mob >= pl + 5 {
        DifficultyColor::Red
    } else if mob >= pl + 3 {
        DifficultyColor::Orange
    } else if mob >= pl - 2 {
        DifficultyColor::Yellow
    } else if mob_level > gray_level(level, hooks) {
        DifficultyColor::Green
    } else {
        DifficultyColor::Gray
    };

    hooks.on_color_code(&mut color, level, mob_level);
    color
}
