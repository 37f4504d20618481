//! Render models: what a host draws, derived from engine state.

pub mod board_view;

pub use board_view::{win_message, BoardView, TileFace, TileView, FACE_DOWN_GLYPH};
