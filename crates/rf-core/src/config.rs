//! World-configured rate multipliers.
//!
//! Rates are looked up by [`RateKey`] through the [`RateProvider`] trait so
//! the host server can plug in its own configuration store. [`RateConfig`]
//! is the bundled implementation, loadable from JSON:
//!
//! ```json
//! { "kill-experience-rate": 2.0, "kill-experience-rate-premium": 1.5 }
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormulaError, FormulaResult};

/// Named global multipliers read by the reward formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateKey {
    /// Experience multiplier applied to every kill.
    #[serde(rename = "kill-experience-rate")]
    KillExperience,
    /// Extra experience multiplier for premium accounts.
    #[serde(rename = "kill-experience-rate-premium")]
    KillExperiencePremium,
}

impl RateKey {
    /// All known keys.
    pub const ALL: [RateKey; 2] = [Self::KillExperience, Self::KillExperiencePremium];

    /// The configuration key name.
    pub fn name(self) -> &'static str {
        match self {
            Self::KillExperience => "kill-experience-rate",
            Self::KillExperiencePremium => "kill-experience-rate-premium",
        }
    }
}

impl std::fmt::Display for RateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RateKey {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| FormulaError::UnknownRateKey(s.to_string()))
    }
}

/// Source of global rate multipliers.
pub trait RateProvider {
    /// Returns the multiplier configured for `key`.
    fn rate(&self, key: RateKey) -> f32;
}

/// Rate multipliers with serde support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateConfig {
    /// Experience multiplier applied to every kill.
    #[serde(rename = "kill-experience-rate")]
    pub kill_experience: f32,
    /// Extra multiplier for premium accounts.
    #[serde(rename = "kill-experience-rate-premium")]
    pub kill_experience_premium: f32,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            kill_experience: 1.0,
            kill_experience_premium: 1.0,
        }
    }
}

impl RateConfig {
    /// Set the kill experience rate.
    pub fn with_kill_rate(mut self, rate: f32) -> Self {
        self.kill_experience = rate;
        self
    }

    /// Set the premium kill experience rate.
    pub fn with_premium_rate(mut self, rate: f32) -> Self {
        self.kill_experience_premium = rate;
        self
    }

    /// Parse and validate a JSON rate configuration.
    pub fn from_json(json: &str) -> FormulaResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| FormulaError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON rate configuration file.
    pub fn from_file(path: &Path) -> FormulaResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that every rate is a finite positive number.
    pub fn validate(&self) -> FormulaResult<()> {
        for key in RateKey::ALL {
            let value = self.rate(key);
            if !value.is_finite() || value <= 0.0 {
                return Err(FormulaError::InvalidRate {
                    key: key.name().to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Look up a rate by its configuration key name.
    pub fn get(&self, name: &str) -> Option<f32> {
        name.parse::<RateKey>().ok().map(|key| self.rate(key))
    }
}

impl RateProvider for RateConfig {
    fn rate(&self, key: RateKey) -> f32 {
        match key {
            RateKey::KillExperience => self.kill_experience,
            RateKey::KillExperiencePremium => self.kill_experience_premium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rates_are_neutral() {
        let cfg = RateConfig::default();
        assert_eq!(cfg.rate(RateKey::KillExperience), 1.0);
        assert_eq!(cfg.rate(RateKey::KillExperiencePremium), 1.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let cfg = RateConfig::default()
            .with_kill_rate(3.0)
            .with_premium_rate(1.5);
        assert_eq!(cfg.kill_experience, 3.0);
        assert_eq!(cfg.kill_experience_premium, 1.5);
    }

    #[test]
    fn from_json_full() {
        let cfg = RateConfig::from_json(
            r#"{ "kill-experience-rate": 2.0, "kill-experience-rate-premium": 1.5 }"#,
        )
        .unwrap();
        assert_eq!(cfg.kill_experience, 2.0);
        assert_eq!(cfg.kill_experience_premium, 1.5);
    }

    #[test]
    fn from_json_partial_uses_defaults() {
        let cfg = RateConfig::from_json(r#"{ "kill-experience-rate": 4.0 }"#).unwrap();
        assert_eq!(cfg.kill_experience, 4.0);
        assert_eq!(cfg.kill_experience_premium, 1.0);
    }

    #[test]
    fn from_json_rejects_unknown_keys() {
        let err = RateConfig::from_json(r#"{ "quest-experience-rate": 2.0 }"#).unwrap_err();
        assert!(matches!(err, FormulaError::InvalidConfig(_)));
    }

    #[test]
    fn from_json_rejects_non_positive_rate() {
        let err = RateConfig::from_json(r#"{ "kill-experience-rate": 0.0 }"#).unwrap_err();
        match err {
            FormulaError::InvalidRate { key, value } => {
                assert_eq!(key, "kill-experience-rate");
                assert_eq!(value, 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validate_rejects_nan() {
        let cfg = RateConfig::default().with_premium_rate(f32::NAN);
        assert!(matches!(
            cfg.validate(),
            Err(FormulaError::InvalidRate { .. })
        ));
    }

    #[test]
    fn from_file_missing() {
        let err = RateConfig::from_file(Path::new("/nonexistent/rates.json")).unwrap_err();
        assert!(matches!(err, FormulaError::Io(_)));
    }

    #[test]
    fn get_by_name() {
        let cfg = RateConfig::default().with_kill_rate(5.0);
        assert_eq!(cfg.get("kill-experience-rate"), Some(5.0));
        assert_eq!(cfg.get("kill-experience-rate-premium"), Some(1.0));
        assert_eq!(cfg.get("honor-rate"), None);
    }

    #[test]
    fn rate_key_round_trip_names() {
        for key in RateKey::ALL {
            assert_eq!(key.name().parse::<RateKey>().unwrap(), key);
            assert_eq!(key.to_string(), key.name());
        }
        assert!(matches!(
            "bogus".parse::<RateKey>(),
            Err(FormulaError::UnknownRateKey(_))
        ));
    }
}
