//! Event notifications emitted by the game.
//!
//! The engine pushes a `GameEvent` for every state change; hosts drain
//! the queue after each call and update their display.

pub mod event;
pub mod queue;

pub use event::GameEvent;
pub use queue::EventQueue;
