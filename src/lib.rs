//! # herbal-memory
//!
//! The interactive pieces of a plant-identification page, as a library.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: Every game is a `MemoryGame` value that owns its
//!    board, turn and counters.
//!
//! 2. **Time is the host's**: The engine never sleeps. Timed transitions are
//!    tickets the host completes, guarded by a board generation.
//!
//! 3. **Fair layouts**: Boards are shuffled with Fisher–Yates from a seeded
//!    ChaCha8 stream, so a seed reproduces a layout exactly.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Pairs and the cards placed from them
//! - `board`: Shuffled card layout with generation tracking
//! - `events`: Notifications for hosts
//! - `engine`: The memory game state machine
//! - `view`: Render models for the card grid
//! - `gallery`: Seasonal sample plant gallery
//! - `identify`: Upload endpoint results and upload checks

pub mod core;
pub mod cards;
pub mod board;
pub mod events;
pub mod engine;
pub mod view;
pub mod gallery;
pub mod identify;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, IdentifyError, Settings};

pub use crate::cards::{Card, CardStatus, Pair, PairId, PairSet};

pub use crate::board::{Board, Generation};

pub use crate::events::{EventQueue, GameEvent};

pub use crate::engine::{IgnoreReason, MemoryGame, PendingReversion, SelectOutcome};

pub use crate::view::{BoardView, TileFace, TileView};

pub use crate::gallery::{GalleryView, PlantProfile, SampleCatalog, Season, SeasonalGallery};

pub use crate::identify::IdentificationResult;
