//! Core engine types: RNG, configuration, errors.
//!
//! These are shared by the memory game and the page models alike.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, Settings, DEFAULT_MISMATCH_DELAY_MS, DEFAULT_WIN_NOTICE_DELAY_MS};
pub use error::{ConfigError, IdentifyError};
pub use rng::GameRng;
