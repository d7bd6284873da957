//! Observer/override hooks for computed rewards.
//!
//! Every public formula hands its result to a [`FormulaHooks`] implementation
//! before returning it. A hook receives the value by mutable reference
//! together with the original inputs and may rewrite it (for example to run
//! a double-experience weekend). All methods default to no-ops, so an
//! implementor only overrides the calculations it cares about.
//!
//! Hooks are called synchronously through `&self`. Implementations that keep
//! state must use interior mutability; the formulas make no assumption that
//! a hook is idempotent or free of side effects.

use crate::xp::{ContentTier, DifficultyColor, Killer, Victim};

/// Callouts invoked at the end of each reward calculation.
#[allow(unused_variables)]
pub trait FormulaHooks {
    /// Called with the honor value before it is rounded up.
    fn on_honor(&self, honor: &mut f32, level: u8, multiplier: f32) {}

    /// Called with the computed gray level.
    fn on_gray_level(&self, gray_level: &mut u8, level: u8) {}

    /// Called with the computed difficulty color.
    fn on_color_code(&self, color: &mut DifficultyColor, level: u8, mob_level: u8) {}

    /// Called with the computed zero difference.
    fn on_zero_difference(&self, diff: &mut u8, level: u8) {}

    /// Called with the base experience before elite and rate multipliers.
    fn on_base_gain(&self, gain: &mut u32, level: u8, mob_level: u8, tier: ContentTier) {}

    /// Called with the final experience for a kill.
    fn on_gain(&self, gain: &mut u32, killer: &Killer, victim: &Victim) {}

    /// Called with the group experience multiplier.
    fn on_group_rate(&self, rate: &mut f32, count: u32, is_raid: bool) {}

    /// Called with the arena conquest cap.
    fn on_conquest_cap(&self, cap: &mut u32, rating: u32) {}

    /// Called with the battleground conquest cap.
    fn on_bg_conquest_cap(&self, cap: &mut u32, rating: u32) {}
}

/// Hooks that leave every value untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl FormulaHooks for NoHooks {}

/// Runs several hook implementations in registration order.
///
/// Each hook sees the value as left by the previous one.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Box<dyn FormulaHooks + Send + Sync>>,
}

impl HookChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook to the chain.
    pub fn with(mut self, hook: impl FormulaHooks + Send + Sync + 'static) -> Self {
        self.push(hook);
        self
    }

    /// Append a hook to the chain.
    pub fn push(&mut self, hook: impl FormulaHooks + Send + Sync + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns true if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl std::fmt::Debug for HookChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookChain")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl FormulaHooks for HookChain {
    fn on_honor(&self, honor: &mut f32, level: u8, multiplier: f32) {
        for hook in &self.hooks {
            hook.on_honor(honor, level, multiplier);
        }
    }

    fn on_gray_level(&self, gray_level: &mut u8, level: u8) {
        for hook in &self.hooks {
            hook.on_gray_level(gray_level, level);
        }
    }

    fn on_color_code(&self, color: &mut DifficultyColor, level: u8, mob_level: u8) {
        for hook in &self.hooks {
            hook.on_color_code(color, level, mob_level);
        }
    }

    fn on_zero_difference(&self, diff: &mut u8, level: u8) {
        for hook in &self.hooks {
            hook.on_zero_difference(diff, level);
        }
    }

    fn on_base_gain(&self, gain: &mut u32, level: u8, mob_level: u8, tier: ContentTier) {
        for hook in &self.hooks {
            hook.on_base_gain(gain, level, mob_level, tier);
        }
    }

    fn on_gain(&self, gain: &mut u32, killer: &Killer, victim: &Victim) {
        for hook in &self.hooks {
            hook.on_gain(gain, killer, victim);
        }
    }

    fn on_group_rate(&self, rate: &mut f32, count: u32, is_raid: bool) {
        for hook in &self.hooks {
            hook.on_group_rate(rate, count, is_raid);
        }
    }

    fn on_conquest_cap(&self, cap: &mut u32, rating: u32) {
        for hook in &self.hooks {
            hook.on_conquest_cap(cap, rating);
        }
    }

    fn on_bg_conquest_cap(&self, cap: &mut u32, rating: u32) {
        for hook in &self.hooks {
            hook.on_bg_conquest_cap(cap, rating);
        }
    }
}
