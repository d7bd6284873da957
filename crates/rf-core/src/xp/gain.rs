//! Final experience for a kill.
//!
//! Wraps [`base_gain`] with the rules that depend on who killed what:
//! exempt opponents, the elite bonus, and world/personal/premium rates.

use serde::{Deserialize, Serialize};

use crate::config::{RateKey, RateProvider};
use crate::hooks::FormulaHooks;
use crate::xp::base::base_gain;
use crate::xp::tier::ContentTier;

/// Elite bonus outside instances.
const ELITE_WORLD_BONUS: f32 = 2.0;
/// Elite bonus inside dungeons and other instances.
const ELITE_INSTANCE_BONUS: f32 = 2.75;

/// The character receiving experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Killer {
    /// Character level.
    pub level: u8,
    /// Personal experience rate chosen by the player, if any.
    ///
    /// `None` and `Some(0.0)` both mean "use the world rate".
    pub personal_rate: Option<f32>,
    /// Whether the account has premium status.
    pub premium: bool,
}

impl Killer {
    /// Create a killer with no personal rate and no premium status.
    pub fn new(level: u8) -> Self {
        Self {
            level,
            personal_rate: None,
            premium: false,
        }
    }

    /// Set a personal experience rate.
    pub fn with_personal_rate(mut self, rate: f32) -> Self {
        self.personal_rate = Some(rate);
        self
    }

    /// Mark the account as premium.
    pub fn with_premium(mut self, premium: bool) -> Self {
        self.premium = premium;
        self
    }

    /// The kill rate for this character: the personal rate when set and
    /// non-zero, otherwise the world rate.
    pub fn kill_rate(&self, rates: &dyn RateProvider) -> f32 {
        match self.personal_rate {
            Some(rate) if rate != 0.0 => rate,
            _ => rates.rate(RateKey::KillExperience),
        }
    }

    /// The premium multiplier for this character.
    pub fn premium_rate(&self, rates: &dyn RateProvider) -> f32 {
        if self.premium {
            rates.rate(RateKey::KillExperiencePremium)
        } else {
            1.0
        }
    }
}

/// What kind of creature was killed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VictimKind {
    /// An ordinary creature or player.
    #[default]
    Normal,
    /// A totem summoned by another unit.
    Totem,
    /// A pet or guardian.
    Pet,
    /// A harmless critter.
    Critter,
}

/// The opponent that was defeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Victim {
    /// Opponent level.
    pub level: u8,
    /// Creature kind.
    pub kind: VictimKind,
    /// Template flag suppressing experience on kill.
    pub no_xp: bool,
    /// Elite opponents grant bonus experience.
    pub elite: bool,
    /// Whether the opponent was inside a dungeon or other instance.
    pub in_instance: bool,
    /// Content tier of the opponent's location.
    pub tier: ContentTier,
}

impl Victim {
    /// Create a normal, non-elite opponent in the open world.
    pub fn new(level: u8, tier: ContentTier) -> Self {
        Self {
            level,
            kind: VictimKind::Normal,
            no_xp: false,
            elite: false,
            in_instance: false,
            tier,
        }
    }

    /// Set the creature kind.
    pub fn with_kind(mut self, kind: VictimKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the no-experience flag.
    pub fn with_no_xp(mut self, no_xp: bool) -> Self {
        self.no_xp = no_xp;
        self
    }

    /// Mark the opponent as elite.
    pub fn with_elite(mut self, elite: bool) -> Self {
        self.elite = elite;
        self
    }

    /// Place the opponent inside an instance.
    pub fn with_instance(mut self, in_instance: bool) -> Self {
        self.in_instance = in_instance;
        self
    }

    /// Returns true if killing this opponent never grants experience.
    pub fn is_exempt(&self) -> bool {
        self.no_xp || self.kind != VictimKind::Normal
    }

    /// Elite multiplier for this opponent, 1.0 for non-elites.
    pub fn elite_bonus(&self) -> f32 {
        match (self.elite, self.in_instance) {
            (false, _) => 1.0,
            (true, false) => ELITE_WORLD_BONUS,
            (true, true) => ELITE_INSTANCE_BONUS,
        }
    }
}

/// Experience granted to `killer` for defeating `victim`.
///
/// The gain hook fires exactly once, also when the victim is exempt.
pub fn gain(
    killer: &Killer,
    victim: &Victim,
    rates: &dyn RateProvider,
    hooks: &dyn FormulaHooks,
) -> u32 {
    let mut gain = if victim.is_exempt() {
        0
    } else {
        let mut gain = base_gain(killer.level, victim.level, victim.tier, hooks);
        if gain != 0 && victim.elite {
            gain = (gain as f32 * victim.elite_bonus()) as u32;
        }
        (gain as f32 * killer.kill_rate(rates) * killer.premium_rate(rates)) as u32
    };

    hooks.on_gain(&mut gain, killer, victim);
    gain
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::config::RateConfig;
    use crate::hooks::NoHooks;

    fn even_fight() -> (Killer, Victim) {
        (
            Killer::new(85),
            Victim::new(85, ContentTier::Cataclysm),
        )
    }

    #[test]
    fn plain_kill_matches_base_gain() {
        let (killer, victim) = even_fight();
        assert_eq!(gain(&killer, &victim, &RateConfig::default(), &NoHooks), 2303);
    }

    #[test]
    fn exempt_victims_give_nothing() {
        let (killer, victim) = even_fight();
        let rates = RateConfig::default().with_kill_rate(5.0);
        for kind in [VictimKind::Totem, VictimKind::Pet, VictimKind::Critter] {
            let v = victim.clone().with_kind(kind);
            assert!(v.is_exempt());
            assert_eq!(gain(&killer, &v, &rates, &NoHooks), 0, "{kind:?}");
        }
        let flagged = victim.with_no_xp(true).with_elite(true);
        assert_eq!(gain(&killer, &flagged, &rates, &NoHooks), 0);
    }

    #[test]
    fn elite_world_and_instance_bonus() {
        let (killer, victim) = even_fight();
        let rates = RateConfig::default();

        let world = victim.clone().with_elite(true);
        assert_eq!(gain(&killer, &world, &rates, &NoHooks), 4606);

        let dungeon = victim.clone().with_elite(true).with_instance(true);
        assert_eq!(gain(&killer, &dungeon, &rates, &NoHooks), 6333);

        // Instance alone is not a bonus.
        let normal_dungeon = victim.with_instance(true);
        assert_eq!(gain(&killer, &normal_dungeon, &rates, &NoHooks), 2303);
    }

    #[test]
    fn gray_elite_still_gives_nothing() {
        let killer = Killer::new(85);
        let victim = Victim::new(70, ContentTier::Outland).with_elite(true);
        assert_eq!(gain(&killer, &victim, &RateConfig::default(), &NoHooks), 0);
    }

    #[test]
    fn world_rate_applies() {
        let (killer, victim) = even_fight();
        let rates = RateConfig::default().with_kill_rate(3.0);
        assert_eq!(gain(&killer, &victim, &rates, &NoHooks), 6909);
    }

    #[test]
    fn personal_rate_replaces_world_rate() {
        let (killer, victim) = even_fight();
        let rates = RateConfig::default().with_kill_rate(3.0);
        let killer = killer.with_personal_rate(0.5);
        assert_eq!(killer.kill_rate(&rates), 0.5);
        assert_eq!(gain(&killer, &victim, &rates, &NoHooks), 1151);
    }

    #[test]
    fn zero_personal_rate_means_unset() {
        let (killer, victim) = even_fight();
        let rates = RateConfig::default().with_kill_rate(2.0);
        let killer = killer.with_personal_rate(0.0);
        assert_eq!(killer.kill_rate(&rates), 2.0);
        assert_eq!(gain(&killer, &victim, &rates, &NoHooks), 4606);
    }

    #[test]
    fn premium_rate_only_for_premium_accounts() {
        let (killer, victim) = even_fight();
        let rates = RateConfig::default()
            .with_kill_rate(2.0)
            .with_premium_rate(1.5);
        assert_eq!(gain(&killer, &victim, &rates, &NoHooks), 4606);

        let premium = killer.with_premium(true);
        assert_eq!(premium.premium_rate(&rates), 1.5);
        assert_eq!(gain(&premium, &victim, &rates, &NoHooks), 6909);
    }

    #[test]
    fn gain_hook_fires_once_on_every_path() {
        #[derive(Default)]
        struct Counter {
            gains: Cell<u32>,
            last: Cell<u32>,
        }
        impl FormulaHooks for Counter {
            fn on_gain(&self, gain: &mut u32, _: &Killer, _: &Victim) {
                self.gains.set(self.gains.get() + 1);
                self.last.set(*gain);
            }
        }

        let (killer, victim) = even_fight();
        let rates = RateConfig::default();
        let counter = Counter::default();

        gain(&killer, &victim, &rates, &counter);
        assert_eq!(counter.gains.get(), 1);
        assert_eq!(counter.last.get(), 2303);

        gain(&killer, &victim.with_kind(VictimKind::Pet), &rates, &counter);
        assert_eq!(counter.gains.get(), 2);
        assert_eq!(counter.last.get(), 0);
    }

    #[test]
    fn gain_hook_can_override_final_value() {
        struct DoubleXpWeekend;
        impl FormulaHooks for DoubleXpWeekend {
            fn on_gain(&self, gain: &mut u32, _: &Killer, _: &Victim) {
                *gain *= 2;
            }
        }

        let (killer, victim) = even_fight();
        assert_eq!(
            gain(&killer, &victim, &RateConfig::default(), &DoubleXpWeekend),
            4606
        );
    }

    #[test]
    fn rates_apply_after_base_gain_hook() {
        struct FlatBase;
        impl FormulaHooks for FlatBase {
            fn on_base_gain(&self, gain: &mut u32, _: u8, _: u8, _: ContentTier) {
                *gain = 100;
            }
        }

        let (killer, victim) = even_fight();
        let rates = RateConfig::default().with_kill_rate(2.0);
        assert_eq!(gain(&killer, &victim.with_elite(true), &rates, &FlatBase), 400);
    }
}
