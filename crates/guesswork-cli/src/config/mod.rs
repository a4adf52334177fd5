//! Configuration loading and resolution.

use std::path::PathBuf;

use guesswork::{DEFAULT_HIGH, DEFAULT_LOW};

use crate::error::{CliError, CliResult};

pub const LOW_ENV: &str = "GUESSWORK_LOW";
pub const HIGH_ENV: &str = "GUESSWORK_HIGH";

/// Inclusive bounds of the range to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeConfig {
    pub low: i64,
    pub high: i64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }
}

impl RangeConfig {
    pub fn contains(&self, value: i64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// Resolve range bounds: explicit flag, then environment, then default.
pub fn resolve_range(low: Option<i64>, high: Option<i64>) -> CliResult<RangeConfig> {
    resolve_range_with(low, high, |key| std::env::var(key).ok())
}

/// Like [`resolve_range`] with an injectable environment lookup.
pub fn resolve_range_with<F>(low: Option<i64>, high: Option<i64>, env: F) -> CliResult<RangeConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = RangeConfig::default();
    let low = match low {
        Some(v) => v,
        None => env_bound(LOW_ENV, &env)?.unwrap_or(defaults.low),
    };
    let high = match high {
        Some(v) => v,
        None => env_bound(HIGH_ENV, &env)?.unwrap_or(defaults.high),
    };

    if low > high {
        return Err(CliError::Config(format!(
            "low bound {low} is greater than high bound {high}"
        )));
    }

    tracing::debug!(low, high, "Resolved search range");
    Ok(RangeConfig { low, high })
}

fn env_bound<F>(key: &str, env: &F) -> CliResult<Option<i64>>
where
    F: Fn(&str) -> Option<String>,
{
    match env(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| CliError::Config(format!("{key}={raw:?} is not an integer: {e}"))),
        None => Ok(None),
    }
}

/// Path of the interactive prompt history file.
pub fn resolve_history_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".guesswork_history")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let cfg = resolve_range_with(None, None, no_env).unwrap();
        assert_eq!(cfg, RangeConfig::default());
        assert_eq!((cfg.low, cfg.high), (1, 2_097_150));
    }

    #[test]
    fn test_flag_beats_env() {
        let env = |key: &str| match key {
            LOW_ENV => Some("10".to_string()),
            HIGH_ENV => Some("20".to_string()),
            _ => None,
        };
        let cfg = resolve_range_with(Some(5), None, env).unwrap();
        assert_eq!(cfg, RangeConfig { low: 5, high: 20 });
    }

    #[test]
    fn test_bad_env_value() {
        let env = |key: &str| (key == HIGH_ENV).then(|| "lots".to_string());
        let err = resolve_range_with(None, None, env).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_inverted_bounds() {
        let err = resolve_range_with(Some(9), Some(3), no_env).unwrap_err();
        assert!(err.to_string().contains("greater than"));
    }

    #[test]
    fn test_contains() {
        let cfg = RangeConfig { low: -2, high: 2 };
        assert!(cfg.contains(-2));
        assert!(cfg.contains(2));
        assert!(!cfg.contains(3));
    }
}
