//! Honor for honorable kills.

use crate::hooks::FormulaHooks;

/// Honor for a kill at `level`, before rounding.
///
/// Every full ten levels are worth 100 honor, scaled by `multiplier`.
/// The honor hook sees this value.
pub fn honor_at_level_f(level: u8, multiplier: f32, hooks: &dyn FormulaHooks) -> f32 {
    let mut honor = multiplier * f32::from(level / 10) * 100.0;
    hooks.on_honor(&mut honor, level, multiplier);
    honor
}

/// Honor for a kill at `level`, rounded up to a whole point.
pub fn honor_at_level(level: u8, multiplier: f32, hooks: &dyn FormulaHooks) -> u32 {
    honor_at_level_f(level, multiplier, hooks).ceil() as u32
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::hooks::NoHooks;

    #[test]
    fn full_decades_only() {
        assert_eq!(honor_at_level(90, 1.0, &NoHooks), 900);
        assert_eq!(honor_at_level(89, 1.0, &NoHooks), 800);
        assert_eq!(honor_at_level(10, 1.0, &NoHooks), 100);
        assert_eq!(honor_at_level(9, 1.0, &NoHooks), 0);
    }

    #[test]
    fn multiplier_scales() {
        assert_eq!(honor_at_level(85, 0.25, &NoHooks), 200);
        assert_eq!(honor_at_level(90, 2.0, &NoHooks), 1800);
        assert_eq!(honor_at_level(90, 0.0, &NoHooks), 0);
    }

    #[test]
    fn rounds_up() {
        // 1.1 * 9 * 100 lands just above 990 in f32
        assert_eq!(honor_at_level(90, 1.1, &NoHooks), 991);
        assert!((honor_at_level_f(90, 0.125, &NoHooks) - 112.5).abs() < f32::EPSILON);
        assert_eq!(honor_at_level(90, 0.125, &NoHooks), 113);
    }

    #[test]
    fn hook_sees_raw_value_once() {
        #[derive(Default)]
        struct Bonus {
            calls: Cell<u32>,
        }
        impl FormulaHooks for Bonus {
            fn on_honor(&self, honor: &mut f32, _: u8, _: f32) {
                self.calls.set(self.calls.get() + 1);
                *honor += 0.5;
            }
        }

        let bonus = Bonus::default();
        assert_eq!(honor_at_level(90, 1.0, &bonus), 901);
        assert_eq!(bonus.calls.get(), 1);
    }
}
