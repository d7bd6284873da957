//! Content tiers and their base experience constants.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormulaError, FormulaResult};

/// Level bracket of the world an opponent lives in.
///
/// Each tier carries exactly one base experience constant. Adding a tier
/// forces every exhaustive `match` below to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentTier {
    /// Levels 1-60.
    Classic,
    /// Levels 61-70.
    Outland,
    /// Levels 71-80.
    Northrend,
    /// Levels 81-85.
    Cataclysm,
    /// Levels 86-90.
    Pandaria,
}

impl ContentTier {
    /// All tiers in ascending level order.
    pub const ALL: [ContentTier; 5] = [
        Self::Classic,
        Self::Outland,
        Self::Northrend,
        Self::Cataclysm,
        Self::Pandaria,
    ];

    /// Base experience added to `level * 5` for kills in this tier.
    pub fn base_experience(self) -> u32 {
        match self {
            Self::Classic => 45,
            Self::Outland => 235,
            Self::Northrend => 580,
            Self::Cataclysm => 1878,
            Self::Pandaria => 7512,
        }
    }

    /// Character levels covered by this tier.
    pub fn level_range(self) -> RangeInclusive<u8> {
        match self {
            Self::Classic => 1..=60,
            Self::Outland => 61..=70,
            Self::Northrend => 71..=80,
            Self::Cataclysm => 81..=85,
            Self::Pandaria => 86..=90,
        }
    }

    /// Raw id used by world data.
    pub fn id(self) -> u8 {
        match self {
            Self::Classic => 0,
            Self::Outland => 1,
            Self::Northrend => 2,
            Self::Cataclysm => 3,
            Self::Pandaria => 4,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Outland => "outland",
            Self::Northrend => "northrend",
            Self::Cataclysm => "cataclysm",
            Self::Pandaria => "pandaria",
        }
    }

    /// Convert a raw id into a tier.
    pub fn from_id(id: u8) -> FormulaResult<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.id() == id)
            .ok_or(FormulaError::UnsupportedTier(id))
    }

    /// Convert a raw id into a tier, falling back to [`ContentTier::Classic`].
    ///
    /// Unsupported ids are logged at warn level.
    pub fn resolve(id: u8) -> Self {
        Self::from_id(id).unwrap_or_else(|err| {
            tracing::warn!(tier = id, "{err}, falling back to {}", Self::Classic);
            Self::Classic
        })
    }
}

impl std::fmt::Display for ContentTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let range = self.level_range();
        write!(f, "{}-{}", range.start(), range.end())
    }
}

impl FromStr for ContentTier {
    type Err = FormulaError;

    /// Parses either the level bracket (`"71-80"`) or the tier name
    /// (`"northrend"`, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.to_string() == needle || tier.name() == needle)
            .ok_or_else(|| FormulaError::UnknownTier(s.to_string()))
    }
}
