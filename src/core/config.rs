//! Round configuration.
//!
//! Provides:
//! - `RoundConfig`: retry limit, pass threshold, shuffle seed
//! - `PresentationTimings`: delays for the deferred visual effects
//!
//! Both decode from JSON with defaults for every missing field, so an
//! empty object `{}` yields the standard game.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Incorrect attempts after which a definition's answer is revealed.
pub const MAX_ATTEMPTS: u32 = 3;

/// Minimum percentage for a passing round.
pub const PASS_THRESHOLD: f64 = 70.0;

const fn default_max_attempts() -> u32 {
    MAX_ATTEMPTS
}

const fn default_pass_threshold() -> f64 {
    PASS_THRESHOLD
}

const fn default_fade_out_ms() -> u64 {
    500
}

const fn default_incorrect_flash_ms() -> u64 {
    1000
}

const fn default_completion_delay_ms() -> u64 {
    500
}

/// Delays applied to presentation effects, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationTimings {
    /// Time for a resolved term tile to fade before it is removed.
    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: u64,

    /// How long the incorrect-match highlight stays on.
    #[serde(default = "default_incorrect_flash_ms")]
    pub incorrect_flash_ms: u64,

    /// Pause between the last resolution and the completion screen.
    #[serde(default = "default_completion_delay_ms")]
    pub completion_delay_ms: u64,
}

impl Default for PresentationTimings {
    fn default() -> Self {
        Self {
            fade_out_ms: default_fade_out_ms(),
            incorrect_flash_ms: default_incorrect_flash_ms(),
            completion_delay_ms: default_completion_delay_ms(),
        }
    }
}

/// Configuration for rounds started by a controller.
///
/// ## Example
///
/// ```
/// use rust_matchgame::core::RoundConfig;
///
/// let config = RoundConfig::new().with_max_attempts(2).with_seed(7);
/// assert_eq!(config.max_attempts, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundConfig {
    /// Incorrect attempts a definition absorbs before it is revealed.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Minimum percentage (0-100) for a passing verdict.
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: f64,

    /// Seed for the term-order shuffle. `None` draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Deferred presentation effect delays.
    #[serde(default)]
    pub timings: PresentationTimings,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            pass_threshold: default_pass_threshold(),
            seed: None,
            timings: PresentationTimings::default(),
        }
    }
}

impl RoundConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the retry limit.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the pass threshold.
    #[must_use]
    pub fn with_pass_threshold(mut self, threshold: f64) -> Self {
        self.pass_threshold = threshold;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set presentation delays.
    #[must_use]
    pub fn with_timings(mut self, timings: PresentationTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig(
                "maxAttempts must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.pass_threshold) {
            return Err(Error::InvalidConfig(format!(
                "passThreshold must be within 0-100, got {}",
                self.pass_threshold
            )));
        }
        Ok(())
    }
}
