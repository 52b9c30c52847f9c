//! Game configuration from environment variables.
//!
//! - `DODGE_OBSTACLES`: obstacle count (default: 20)
//! - `DODGE_SENSITIVITY`: obstacle zone half-width (default: 2)
//! - `DODGE_SPEED`: cells per move (default: 3)
//! - `DODGE_PLAYER_GLYPH`: player glyph (default: 🐭)
//! - `DODGE_SEED`: RNG seed for obstacle placement (default: system clock)
//! - `DODGE_LOG_PATH`: log file (default: `tui-dodge.log` in the temp dir)
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;
use std::str::FromStr;

use crate::types::{DEFAULT_GAME_SPEED, DEFAULT_OBSTACLE_COUNT, DEFAULT_SENSITIVITY, PLAYER_GLYPH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub obstacle_count: u16,
    pub sensitivity: i32,
    pub speed: i32,
    pub player_glyph: String,
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            sensitivity: DEFAULT_SENSITIVITY,
            speed: DEFAULT_GAME_SPEED,
            player_glyph: PLAYER_GLYPH.to_string(),
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let non_blank = |key: &str| -> Option<String> {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            obstacle_count: parse_or(&lookup, "DODGE_OBSTACLES", defaults.obstacle_count),
            sensitivity: parse_or(&lookup, "DODGE_SENSITIVITY", defaults.sensitivity),
            speed: parse_or(&lookup, "DODGE_SPEED", defaults.speed),
            player_glyph: non_blank("DODGE_PLAYER_GLYPH").unwrap_or(defaults.player_glyph),
            seed: non_blank("DODGE_SEED").and_then(|s| match s.parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    tracing::warn!(value = %s, "ignoring invalid DODGE_SEED");
                    None
                }
            }),
            log_path: non_blank("DODGE_LOG_PATH").map(PathBuf::from),
        }
    }

    /// Log file location from the environment alone.
    ///
    /// Lets logging start before the rest of the config is parsed, so parse
    /// warnings are captured.
    pub fn log_path_from_env() -> PathBuf {
        Self::from_lookup(|key: &str| match key {
            "DODGE_LOG_PATH" => std::env::var(key).ok(),
            _ => None,
        })
        .log_path()
    }

    /// Log file location, resolving the default.
    pub fn log_path(&self) -> PathBuf {
        self.log_path
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("tui-dodge.log"))
    }
}

fn parse_or<T: FromStr + Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring invalid value");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = GameConfig::from_lookup(lookup_from(&[]));
        assert_eq!(cfg, GameConfig::default());
        assert_eq!(cfg.obstacle_count, 20);
        assert_eq!(cfg.sensitivity, 2);
        assert_eq!(cfg.speed, 3);
        assert_eq!(cfg.player_glyph, PLAYER_GLYPH);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            ("DODGE_OBSTACLES", "5"),
            ("DODGE_SENSITIVITY", " 4 "),
            ("DODGE_SPEED", "1"),
            ("DODGE_PLAYER_GLYPH", "@"),
            ("DODGE_SEED", "1234"),
            ("DODGE_LOG_PATH", "/tmp/x.log"),
        ]));
        assert_eq!(cfg.obstacle_count, 5);
        assert_eq!(cfg.sensitivity, 4);
        assert_eq!(cfg.speed, 1);
        assert_eq!(cfg.player_glyph, "@");
        assert_eq!(cfg.seed, Some(1234));
        assert_eq!(cfg.log_path(), PathBuf::from("/tmp/x.log"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            ("DODGE_OBSTACLES", "-1"),
            ("DODGE_SPEED", "fast"),
            ("DODGE_SEED", "abc"),
            ("DODGE_PLAYER_GLYPH", "   "),
        ]));
        assert_eq!(cfg.obstacle_count, 20);
        assert_eq!(cfg.speed, 3);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.player_glyph, PLAYER_GLYPH);
    }

    #[test]
    fn default_log_path_is_in_temp_dir() {
        let cfg = GameConfig::default();
        assert!(cfg.log_path().starts_with(std::env::temp_dir()));
    }
}
