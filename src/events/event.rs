//! Game event types.
//!
//! Events describe every observable change to a game so a host can keep
//! its display in sync without reading engine internals.

use serde::{Deserialize, Serialize};

use crate::board::Generation;
use crate::cards::CardStatus;

/// Something that happened in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh board was laid out face-down.
    BoardRebuilt {
        generation: Generation,
        card_count: usize,
    },

    /// A card's status changed.
    CardChanged { position: usize, status: CardStatus },

    /// The move counter changed.
    MovesChanged { moves: u32 },

    /// Every card is matched.
    Won { moves: u32 },
}

impl GameEvent {
    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::BoardRebuilt { .. } => "board_rebuilt",
            GameEvent::CardChanged { .. } => "card_changed",
            GameEvent::MovesChanged { .. } => "moves_changed",
            GameEvent::Won { .. } => "won",
        }
    }
}
