//! Memory game engine.
//!
//! `MemoryGame` owns the board, the turn in progress and the move counter.
//! A turn is one or two selections: the first card turns face-up, the
//! second either matches it (both stay up) or locks the board until the
//! pair is flipped back after the configured delay.
//!
//! The engine never sleeps. A mismatch returns a `PendingReversion` ticket;
//! the host either completes it after the delay or feeds elapsed time to
//! `advance`. Tickets carry the board generation, so one that outlives a
//! `reset` is ignored.

pub mod game;
pub mod turn;

pub use game::{IgnoreReason, MemoryGame, SelectOutcome};
pub use turn::{PendingReversion, TurnState};
