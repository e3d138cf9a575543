//! Configuration loading and typed config structures for System 64.
//!
//! The canonical configuration lives in `system64-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads the file. Every field has a
//! default, so an empty document is a valid configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use system64_ledger::ProgressionRules;
use system64_tasks::RewardRules;

/// Environment variable that overrides [`StorageConfig::path`].
pub const STATE_PATH_ENV: &str = "SYSTEM64_STATE_PATH";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
///
/// Mirrors the structure of `system64-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Level, milestone and unique-skill thresholds.
    #[serde(default)]
    pub progression: ProgressionRules,

    /// Level scaling of rewards and penalties.
    #[serde(default)]
    pub rewards: RewardRules,

    /// Premature-completion detection.
    #[serde(default)]
    pub anti_cheat: AntiCheatConfig,

    /// Session lockout after many completions.
    #[serde(default)]
    pub cooldown: CooldownConfig,

    /// Consecutive-decline warning and penalty.
    #[serde(default)]
    pub skips: SkipConfig,

    /// Where the state file lives.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Seed for a reproducible RNG; entropy-seeded when absent.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml reads an empty document as unit, not as an empty map.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.storage.apply_env_overrides();
        Ok(config)
    }
}

/// Premature-completion detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AntiCheatConfig {
    /// Completions sooner than this after generation are rejected.
    #[serde(default = "default_min_task_time_ms")]
    pub min_task_time_ms: u64,

    /// The offense that reaches this count triggers a full reset.
    #[serde(default = "default_max_cheat_attempts")]
    pub max_cheat_attempts: u32,
}

impl Default for AntiCheatConfig {
    fn default() -> Self {
        Self {
            min_task_time_ms: default_min_task_time_ms(),
            max_cheat_attempts: default_max_cheat_attempts(),
        }
    }
}

/// Session lockout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CooldownConfig {
    /// Completions that trigger the lockout.
    #[serde(default = "default_tasks_before_cooldown")]
    pub tasks_before_cooldown: u32,

    /// Lockout length in milliseconds.
    #[serde(default = "default_cooldown_duration_ms")]
    pub duration_ms: u64,
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            tasks_before_cooldown: default_tasks_before_cooldown(),
            duration_ms: default_cooldown_duration_ms(),
        }
    }
}

/// Consecutive-decline thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SkipConfig {
    /// Decline count that shows the one-time warning.
    #[serde(default = "default_skip_warning_threshold")]
    pub warning_threshold: u32,

    /// Decline count that activates the XP penalty.
    #[serde(default = "default_skip_penalty_threshold")]
    pub penalty_threshold: u32,

    /// XP deducted per decline while the penalty is active.
    #[serde(default = "default_skip_penalty_xp")]
    pub penalty_xp: u32,
}

impl Default for SkipConfig {
    fn default() -> Self {
        Self {
            warning_threshold: default_skip_warning_threshold(),
            penalty_threshold: default_skip_penalty_threshold(),
            penalty_xp: default_skip_penalty_xp(),
        }
    }
}

/// State file location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON state file.
    #[serde(default = "default_state_path")]
    pub path: PathBuf,
}

impl StorageConfig {
    /// Override fields from environment variables if set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(STATE_PATH_ENV) {
            self.path = PathBuf::from(val);
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_min_task_time_ms() -> u64 {
    7000
}

const fn default_max_cheat_attempts() -> u32 {
    5
}

const fn default_tasks_before_cooldown() -> u32 {
    20
}

const fn default_cooldown_duration_ms() -> u64 {
    3_600_000
}

const fn default_skip_warning_threshold() -> u32 {
    25
}

const fn default_skip_penalty_threshold() -> u32 {
    35
}

const fn default_skip_penalty_xp() -> u32 {
    5
}

fn default_state_path() -> PathBuf {
    PathBuf::from("system64-state.json")
}

fn default_log_level() -> String {
    "info".to_owned()
}
