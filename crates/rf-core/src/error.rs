//! Error types for the reward formulas.

/// Errors that can occur while preparing formula inputs.
///
/// The formulas themselves never fail; a zero reward is a valid result.
/// These errors cover raw ids and configuration coming from outside.
#[derive(Debug, thiserror::Error)]
pub enum FormulaError {
    /// A raw content tier id does not map to any known tier.
    #[error("unsupported content tier id: {0}")]
    UnsupportedTier(u8),

    /// A content tier name could not be parsed.
    #[error("unknown content tier: {0}")]
    UnknownTier(String),

    /// A rate key name is not recognized.
    #[error("unknown rate key: {0}")]
    UnknownRateKey(String),

    /// A configured rate is not a finite positive number.
    #[error("invalid rate for '{key}': {value}")]
    InvalidRate {
        /// Configuration key of the offending rate.
        key: String,
        /// The rejected value.
        value: f32,
    },

    /// The rate configuration could not be parsed.
    #[error("invalid rate config: {0}")]
    InvalidConfig(String),

    /// The rate configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for formula operations.
pub type FormulaResult<T> = Result<T, FormulaError>;
