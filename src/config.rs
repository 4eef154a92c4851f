//! Configuration file support.
//!
//! Tunables for the helpers are grouped in [`HelperConfig`], which can be
//! stored as JSON and loaded back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HelperError, Result};

/// How conversions treat inputs outside their documented ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Clamp channels into range and wrap integer hue
    #[default]
    Clamp,
    /// Reject out-of-range or non-finite input with an error
    Strict,
}

impl RangePolicy {
    /// Get the display name for this policy.
    pub fn name(&self) -> &'static str {
        match self {
            RangePolicy::Clamp => "Clamp",
            RangePolicy::Strict => "Strict",
        }
    }

    /// Get all policies.
    pub fn all() -> &'static [RangePolicy] {
        &[RangePolicy::Clamp, RangePolicy::Strict]
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Helper configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperConfig {
    /// Version of the configuration file format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Range handling used by [`crate::ColorConverter::from_config`]
    #[serde(default)]
    pub range_policy: RangePolicy,

    /// Seed for [`crate::GaussianSampler::from_config`]; random when absent
    #[serde(default)]
    pub gauss_seed: Option<u32>,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HelperConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            range_policy: RangePolicy::default(),
            gauss_seed: None,
        }
    }

    /// Set the range policy.
    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    /// Set the Gaussian sampler seed.
    pub fn with_gauss_seed(mut self, seed: u32) -> Self {
        self.gauss_seed = Some(seed);
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: HelperConfig = serde_json::from_str(json)?;
        if config.version > CONFIG_VERSION {
            return Err(HelperError::UnsupportedVersion {
                found: config.version,
                expected: CONFIG_VERSION,
            });
        }
        Ok(config)
    }

    /// Serialize this configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!(
            "Loaded config from {:?} (policy: {}, seed: {:?})",
            path,
            config.range_policy.name(),
            config.gauss_seed
        );
        Ok(config)
    }

    /// Write this configuration to a file, replacing any existing one.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        log::debug!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_default_config() {
        let config = HelperConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.range_policy, RangePolicy::Clamp);
        assert_eq!(config.gauss_seed, None);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = HelperConfig::new()
            .with_range_policy(RangePolicy::Strict)
            .with_gauss_seed(42);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"strict\""));

        let parsed = HelperConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = HelperConfig::from_json("{}").unwrap();
        assert_eq!(config, HelperConfig::default());
    }

    #[test]
    fn test_newer_version_rejected() {
        let err = HelperConfig::from_json(r#"{"version": 99}"#).unwrap_err();
        assert!(matches!(
            err,
            HelperError::UnsupportedVersion {
                found: 99,
                expected: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let err = HelperConfig::from_json(r#"{"range_policy": "wrap"}"#).unwrap_err();
        assert!(matches!(err, HelperError::Json(_)));
    }

    #[test]
    fn test_save_and_load() {
        init_logging();
        let path = std::env::temp_dir().join(format!(
            "paint_helpers_config_{}.json",
            std::process::id()
        ));
        let config = HelperConfig::new().with_gauss_seed(7);

        config.save(&path).unwrap();
        let loaded = HelperConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        init_logging();
        let path = std::env::temp_dir().join("paint_helpers_does_not_exist.json");
        let err = HelperConfig::load(&path).unwrap_err();
        assert!(matches!(err, HelperError::Io(_)));
    }

    #[test]
    fn test_policy_names() {
        let names: Vec<_> = RangePolicy::all().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Clamp", "Strict"]);
    }
}
