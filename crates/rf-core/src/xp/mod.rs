//! Experience formulas.
//!
//! - **Gray level**: the opponent level at or below which kills are worthless
//! - **Difficulty color**: five-band classification of an opponent's level
//! - **Zero difference**: the level gap at which experience decays to zero
//! - **Base gain**: tier constant plus level-difference curve
//! - **Gain**: base gain with exemptions, elite bonus, and rate multipliers
//! - **Group rate**: bonus multiplier for shared kills in a party
//!
//! Levels are `u8`. Every formula is total over the whole `u8` range, but
//! results are only meaningful for levels `1..=MAX_LEVEL`.

pub mod base;
pub mod gain;
pub mod gray;
pub mod group;
pub mod tier;
pub mod zero_diff;

pub use base::base_gain;
pub use gain::{Killer, Victim, VictimKind, gain};
pub use gray::{DifficultyColor, color_code, gray_level};
pub use group::group_rate;
pub use tier::ContentTier;
pub use zero_diff::zero_difference;

/// Highest character level supported by the formulas.
pub const MAX_LEVEL: u8 = 90;
