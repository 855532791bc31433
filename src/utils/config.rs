// src/utils/config.rs
// Environment-driven matcher configuration.

use anyhow::{bail, Result};
use log::info;
use std::env;

use crate::utils::constants::DEFAULT_MATCH_THRESHOLD;

#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Minimum similarity score for a candidate to count as a match.
    pub threshold: f64,
}

impl MatcherConfig {
    /// Create configuration from environment variables.
    ///
    /// `MATCH_THRESHOLD` overrides the default when it parses to a value in
    /// `[0.0, 1.0]`. Anything else is an error: a typo in the environment
    /// must never silently change matching behavior.
    pub fn from_env() -> Result<Self> {
        let threshold = match env::var("MATCH_THRESHOLD") {
            Ok(raw) => match raw.parse::<f64>() {
                Ok(value) if (0.0..=1.0).contains(&value) => value,
                Ok(value) => {
                    bail!("MATCH_THRESHOLD={} is outside [0.0, 1.0]", value)
                }
                Err(_) => bail!("MATCH_THRESHOLD={:?} is not a number", raw),
            },
            Err(_) => DEFAULT_MATCH_THRESHOLD,
        };

        Ok(Self { threshold })
    }

    /// Log the current configuration.
    pub fn log_config(&self) {
        info!("Matcher configuration: threshold={}", self.threshold);
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Process-wide env mutation: exercised in one test to avoid interference
    // between parallel test threads.
    #[test]
    fn test_from_env_threshold_handling() {
        env::remove_var("MATCH_THRESHOLD");
        assert_eq!(
            MatcherConfig::from_env().unwrap().threshold,
            DEFAULT_MATCH_THRESHOLD
        );

        env::set_var("MATCH_THRESHOLD", "0.75");
        assert_eq!(MatcherConfig::from_env().unwrap().threshold, 0.75);

        env::set_var("MATCH_THRESHOLD", "1.5");
        let err = MatcherConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("outside [0.0, 1.0]"));

        env::set_var("MATCH_THRESHOLD", "not-a-number");
        let err = MatcherConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("not a number"));

        env::remove_var("MATCH_THRESHOLD");
    }

    #[test]
    fn test_default() {
        assert_eq!(MatcherConfig::default().threshold, DEFAULT_MATCH_THRESHOLD);
    }
}
