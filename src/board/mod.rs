//! Board: the shuffled grid of cards for one game.
//!
//! ## Key Types
//!
//! - `Board`: Card layout and status tracking
//! - `Generation`: Rebuild counter guarding delayed transitions

pub mod layout;

pub use layout::{Board, Generation};
