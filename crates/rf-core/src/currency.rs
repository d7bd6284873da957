//! Conquest currency caps from arena and battleground ratings.
//!
//! The weekly cap follows a logistic curve of the personal rating:
//! flat at 1800 up to a rating of 1500, then rising steeply and flattening
//! out towards roughly 3650 at the rating ceiling.

use crate::hooks::FormulaHooks;

/// Cap granted at or below [`RATING_FLOOR`].
pub const DEFAULT_CONQUEST_CAP: u32 = 1800;
/// Ratings at or below this value earn [`DEFAULT_CONQUEST_CAP`].
pub const RATING_FLOOR: u32 = 1500;
/// Ratings above this value are clamped to it.
pub const RATING_CEILING: u32 = 3000;
/// Battleground ratings earn this much more than arena ratings.
pub const BG_CAP_BONUS: f32 = 1.222;

/// Weekly conquest cap earned by an arena `rating`.
pub fn conquest_cap(rating: u32, hooks: &dyn FormulaHooks) -> u32 {
    let mut cap = if rating <= RATING_FLOOR {
        DEFAULT_CONQUEST_CAP
    } else {
        let r = f64::from(rating.min(RATING_CEILING));
        (1.4326 * (1511.26 / (1.0 + 1639.28 / (0.00412 * r).exp()) + 1050.15)) as u32
    };

    hooks.on_conquest_cap(&mut cap, rating);
    cap
}

/// Weekly conquest cap earned by a battleground `rating`.
///
/// The arena cap plus 22.2%, rounded to the nearest point.
pub fn bg_conquest_cap(rating: u32, hooks: &dyn FormulaHooks) -> u32 {
    let arena = conquest_cap(rating, hooks);
    let mut cap = (arena as f32 * BG_CAP_BONUS + 0.5) as u32;

    hooks.on_bg_conquest_cap(&mut cap, rating);
    cap
}
