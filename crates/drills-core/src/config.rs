use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::backoff::BackoffPlan;
use crate::prompt::AskOptions;

/// Rejection line used by the range exercise.
pub const RANGE_REJECTION: &str = "Invalid number. Please try again.";

/// Bounds for the range exercise (`[range]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Smallest accepted value (inclusive).
    pub min: i64,
    /// Largest accepted value (inclusive).
    pub max: i64,
    /// Optional attempt limit; if missing, keep asking until a valid value arrives.
    #[serde(default)]
    pub max_attempts: Option<u32>,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 10,
            max_attempts: None,
        }
    }
}

impl RangeConfig {
    pub fn ask_options(&self) -> AskOptions {
        AskOptions::default()
            .with_rejection(RANGE_REJECTION)
            .with_max_attempts(self.max_attempts)
    }
}

/// Backoff exercise parameters (`[backoff]` in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Number of attempts, each followed by a wait.
    pub max_attempts: u32,
    /// First wait in seconds (e.g. 0.25 = 250ms).
    pub initial_wait_secs: f64,
    /// Optional cap on any single wait, in seconds.
    #[serde(default)]
    pub max_wait_secs: Option<f64>,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_wait_secs: 1.0,
            max_wait_secs: None,
        }
    }
}

impl BackoffConfig {
    pub fn plan(&self) -> Result<BackoffPlan> {
        let initial = secs_to_duration("backoff.initial_wait_secs", self.initial_wait_secs)?;
        let cap = self
            .max_wait_secs
            .map(|s| secs_to_duration("backoff.max_wait_secs", s))
            .transpose()?;
        Ok(BackoffPlan::new(self.max_attempts, initial).with_max_wait(cap))
    }
}

/// Convert user-supplied seconds, rejecting negative and non-finite values.
pub fn secs_to_duration(field: &str, secs: f64) -> Result<Duration> {
    match Duration::try_from_secs_f64(secs) {
        Ok(d) => Ok(d),
        Err(_) => bail!("{field} must be a finite, non-negative number of seconds (got {secs})"),
    }
}

/// Global configuration loaded from `~/.config/drills/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrillsConfig {
    #[serde(default)]
    pub range: RangeConfig,
    #[serde(default)]
    pub backoff: BackoffConfig,
}

impl DrillsConfig {
    /// Reject settings the exercises cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.range.min > self.range.max {
            bail!(
                "range.min ({}) must not exceed range.max ({})",
                self.range.min,
                self.range.max
            );
        }
        if self.range.max_attempts == Some(0) {
            bail!("range.max_attempts must be at least 1 when set");
        }
        self.backoff.plan()?;
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("drills")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DrillsConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<DrillsConfig> {
    if !path.exists() {
        let default_cfg = DrillsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: DrillsConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = DrillsConfig::default();
        assert_eq!(cfg.range.min, 1);
        assert_eq!(cfg.range.max, 10);
        assert!(cfg.range.max_attempts.is_none());
        assert_eq!(cfg.backoff.max_attempts, 5);
        assert_eq!(cfg.backoff.initial_wait_secs, 1.0);
        assert!(cfg.backoff.max_wait_secs.is_none());
        cfg.validate().unwrap();
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DrillsConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DrillsConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            [range]
            min = -5
            max = 5
            max_attempts = 3

            [backoff]
            max_attempts = 4
            initial_wait_secs = 0.5
            max_wait_secs = 2.0
        "#;
        let cfg: DrillsConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.range.min, -5);
        assert_eq!(cfg.range.max_attempts, Some(3));
        let plan = cfg.backoff.plan().unwrap();
        assert_eq!(plan.max_attempts, 4);
        assert_eq!(plan.initial_wait, Duration::from_millis(500));
        assert_eq!(plan.max_wait, Some(Duration::from_secs(2)));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let cfg: DrillsConfig = toml::from_str("[range]\nmin = 2\nmax = 4\n").unwrap();
        assert_eq!(cfg.range.min, 2);
        assert_eq!(cfg.backoff, BackoffConfig::default());
        let empty: DrillsConfig = toml::from_str("").unwrap();
        assert_eq!(empty, DrillsConfig::default());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut cfg = DrillsConfig::default();
        cfg.range.min = 11;
        assert!(cfg.validate().is_err());

        let mut cfg = DrillsConfig::default();
        cfg.range.max_attempts = Some(0);
        assert!(cfg.validate().is_err());

        let mut cfg = DrillsConfig::default();
        cfg.backoff.initial_wait_secs = -1.0;
        assert!(cfg.validate().is_err());

        let mut cfg = DrillsConfig::default();
        cfg.backoff.max_wait_secs = Some(f64::NAN);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn range_options_carry_rejection_and_limit() {
        let cfg = RangeConfig {
            max_attempts: Some(2),
            ..RangeConfig::default()
        };
        let opts = cfg.ask_options();
        assert_eq!(opts.rejection, RANGE_REJECTION);
        assert_eq!(opts.max_attempts, Some(2));
    }

    #[test]
    fn load_or_init_writes_default_then_reads_it_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(created, loaded);
    }

    #[test]
    fn load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[range]\nmin = 10\nmax = 1\n").unwrap();
        assert!(load_or_init_at(&path).is_err());
        fs::write(&path, "range = 3\n").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
