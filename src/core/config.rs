//! Game configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `GameConfig`: Seed and timing of the timed transitions
//! - `Settings`: A TOML document combining `GameConfig` with a pair list
//!
//! ```
//! use herbal_memory::core::Settings;
//!
//! let settings = Settings::from_toml_str(r#"
//!     [game]
//!     seed = 7
//!     mismatch_delay_ms = 250
//!
//!     [[pairs]]
//!     name = "Basil"
//!     image = "basil.jpg"
//! "#).unwrap();
//!
//! assert_eq!(settings.game.seed, Some(7));
//! assert_eq!(settings.pair_set().unwrap().len(), 1);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::{Pair, PairSet};

/// Delay before a mismatched pair flips back face-down.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// Delay before the host shows the win banner.
pub const DEFAULT_WIN_NOTICE_DELAY_MS: u64 = 500;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Layout seed. `None` draws one from the OS on construction.
    pub seed: Option<u64>,

    /// How long a mismatched pair stays face-up, in milliseconds.
    pub mismatch_delay_ms: u64,

    /// How long the host should wait before announcing a win, in milliseconds.
    ///
    /// The engine emits `Won` immediately; this is a presentation hint.
    pub win_notice_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            win_notice_delay_ms: DEFAULT_WIN_NOTICE_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default timings and no fixed seed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the layout seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the mismatch display delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay_ms = delay.as_millis().try_into().unwrap_or(u64::MAX);
        self
    }

    /// Set the win notice delay.
    #[must_use]
    pub fn with_win_notice_delay(mut self, delay: Duration) -> Self {
        self.win_notice_delay_ms = delay.as_millis().try_into().unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    #[must_use]
    pub fn win_notice_delay(&self) -> Duration {
        Duration::from_millis(self.win_notice_delay_ms)
    }
}

/// Settings file contents: a `[game]` table and a `[[pairs]]` list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameConfig,

    /// Pairs to play with. Empty means the built-in herbal set.
    pub pairs: Vec<Pair>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Validate the configured pairs.
    pub fn pair_set(&self) -> Result<PairSet, ConfigError> {
        if self.pairs.is_empty() {
            return Ok(PairSet::herbal());
        }
        PairSet::new(self.pairs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.mismatch_delay(), Duration::from_millis(1000));
        assert_eq!(config.win_notice_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_seed(9)
            .with_mismatch_delay(Duration::from_millis(20))
            .with_win_notice_delay(Duration::ZERO);

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.mismatch_delay_ms, 20);
        assert_eq!(config.win_notice_delay_ms, 0);
    }

    #[test]
    fn test_settings_partial_game_table() {
        let settings = Settings::from_toml_str("[game]\nseed = 3\n").unwrap();
        assert_eq!(settings.game.seed, Some(3));
        assert_eq!(settings.game.mismatch_delay_ms, DEFAULT_MISMATCH_DELAY_MS);
        assert!(settings.pairs.is_empty());
    }

    #[test]
    fn test_settings_empty_uses_herbal_pairs() {
        let settings = Settings::from_toml_str("").unwrap();
        let pairs = settings.pair_set().unwrap();
        assert_eq!(pairs.len(), 6);
        assert!(pairs.find("Basil").is_some());
    }

    #[test]
    fn test_settings_duplicate_names_rejected() {
        let text = r#"
            [[pairs]]
            name = "Mint"
            image = "a.jpg"

            [[pairs]]
            name = "Mint"
            image = "b.jpg"
        "#;
        let settings = Settings::from_toml_str(text).unwrap();
        assert!(matches!(settings.pair_set(), Err(ConfigError::DuplicateName(name)) if name == "Mint"));
    }

    #[test]
    fn test_settings_malformed() {
        let err = Settings::from_toml_str("[game]\nseed = \"abc\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Settings(_)));
    }
}
