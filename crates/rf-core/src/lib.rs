//! Reward formula engine for persistent RPG game servers.
//!
//! Computes experience for kills, honor for honorable kills, and the
//! conquest currency caps earned from arena and battleground ratings.
//! Every formula is a pure function of its inputs; external logic can
//! observe or override results through an injected [`FormulaHooks`]
//! implementation, and global multipliers come from a [`RateProvider`].

pub mod config;
pub mod currency;
pub mod error;
pub mod honor;
pub mod hooks;
pub mod xp;

pub use config::{RateConfig, RateKey, RateProvider};
pub use currency::{bg_conquest_cap, conquest_cap};
pub use error::{FormulaError, FormulaResult};
pub use honor::{honor_at_level, honor_at_level_f};
pub use hooks::{FormulaHooks, HookChain, NoHooks};
pub use xp::{
    ContentTier, DifficultyColor, Killer, MAX_LEVEL, Victim, VictimKind, base_gain, color_code,
    gain, gray_level, group_rate, zero_difference,
};
