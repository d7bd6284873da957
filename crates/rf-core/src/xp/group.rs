//! Experience multiplier for kills shared by a party.

use crate::hooks::FormulaHooks;

/// Multiplier for a kill shared by `count` party members.
///
/// Raids always get 1.0. The caller applies this rate when splitting a
/// kill across the group; [`gain`](crate::xp::gain) does not.
pub fn group_rate(count: u32, is_raid: bool, hooks: &dyn FormulaHooks) -> f32 {
    let mut rate = if is_raid {
        1.0
    } else {
        match count {
            0..=2 => 1.0,
            3 => 1.166,
            4 => 1.3,
            _ => 1.4,
        }
    };

    hooks.on_group_rate(&mut rate, count, is_raid);
    rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::NoHooks;

    #[test]
    fn party_sizes() {
        assert_eq!(group_rate(0, false, &NoHooks), 1.0);
        assert_eq!(group_rate(1, false, &NoHooks), 1.0);
        assert_eq!(group_rate(2, false, &NoHooks), 1.0);
        assert_eq!(group_rate(3, false, &NoHooks), 1.166);
        assert_eq!(group_rate(4, false, &NoHooks), 1.3);
        assert_eq!(group_rate(5, false, &NoHooks), 1.4);
        assert_eq!(group_rate(6, false, &NoHooks), 1.4);
    }

    #[test]
    fn raids_are_flat() {
        for count in [0, 3, 5, 10, 25, 40] {
            assert_eq!(group_rate(count, true, &NoHooks), 1.0);
        }
    }

    #[test]
    fn hook_can_scale_raid_rate() {
        struct RaidPenalty;
        impl FormulaHooks for RaidPenalty {
            fn on_group_rate(&self, rate: &mut f32, count: u32, is_raid: bool) {
                if is_raid && count > 10 {
                    *rate = 0.5;
                }
            }
        }
        assert_eq!(group_rate(25, true, &RaidPenalty), 0.5);
        assert_eq!(group_rate(5, true, &RaidPenalty), 1.0);
        assert_eq!(group_rate(4, false, &RaidPenalty), 1.3);
    }
}
