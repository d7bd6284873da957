//! Zero-difference table.

use crate::hooks::FormulaHooks;

/// Level gap at which a lower-level opponent stops granting experience.
pub fn zero_difference(level: u8, hooks: &dyn FormulaHooks) -> u8 {
    let mut diff = match level {
        0..=7 => 5,
        8..=9 => 6,
        10..=11 => 7,
        12..=15 => 8,
        16..=19 => 9,
        20..=29 => 11,
        30..=39 => 12,
        40..=44 => 13,
        45..=49 => 14,
        50..=54 => 15,
        55..=59 => 16,
        _ => 17,
    };

    hooks.on_zero_difference(&mut diff, level);
    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::NoHooks;

    #[test]
    fn band_edges() {
        let cases = [
            (1, 5),
            (7, 5),
            (8, 6),
            (9, 6),
            (10, 7),
            (11, 7),
            (12, 8),
            (15, 8),
            (16, 9),
            (19, 9),
            (20, 11),
            (29, 11),
            (30, 12),
            (39, 12),
            (40, 13),
            (44, 13),
            (45, 14),
            (49, 14),
            (50, 15),
            (54, 15),
            (55, 16),
            (59, 16),
            (60, 17),
            (90, 17),
            (255, 17),
        ];
        for (level, expected) in cases {
            assert_eq!(zero_difference(level, &NoHooks), expected, "level {level}");
        }
    }

    #[test]
    fn never_skips_ten() {
        // The table jumps from 9 to 11 at level 20.
        assert!((1..=90).all(|l| zero_difference(l, &NoHooks) != 10));
    }

    #[test]
    fn hook_can_override() {
        struct Widen;
        impl FormulaHooks for Widen {
            fn on_zero_difference(&self, diff: &mut u8, _: u8) {
                *diff += 3;
            }
        }
        assert_eq!(zero_difference(85, &Widen), 20);
    }
}
