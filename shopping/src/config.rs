//! Configuration module
//!
//! Only the split seed is configurable. The held-out fraction and the
//! neighbor count are fixed in `constants.rs`.

use std::env;

use crate::constants::ENV_SEED;
use crate::error::{AppError, AppResult};

/// Run configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Split seed. `None` draws a fresh split every run.
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`. Unset or empty keys keep the default.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup(ENV_SEED) {
            Some(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse()
                    .map_err(|e| AppError::Config(format!("{}={:?}: {}", ENV_SEED, raw, e)))?,
            ),
            _ => None,
        };
        Ok(Self { seed })
    }

    /// Override the split seed (from the command line)
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_seed_from_lookup() {
        let config = Config::from_lookup(lookup(&[(ENV_SEED, " 7 ")])).unwrap();
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_split_and_model_settings_not_configurable() {
        let config = Config::from_lookup(lookup(&[
            ("SHOPPING_TEST_SIZE", "0.9"),
            ("SHOPPING_NEIGHBORS", "5"),
        ]))
        .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_value_uses_default() {
        let config = Config::from_lookup(lookup(&[(ENV_SEED, "")])).unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_invalid_seed() {
        for value in ["-1", "abc", "1.5"] {
            assert!(
                matches!(Config::from_lookup(lookup(&[(ENV_SEED, value)])), Err(AppError::Config(_))),
                "{}={} should be rejected",
                ENV_SEED,
                value
            );
        }
    }

    #[test]
    fn test_seed_override() {
        let config = Config::default().with_seed(Some(3));
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.with_seed(None).seed, Some(3));
    }
}
