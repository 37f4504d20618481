//! Render model for the card grid.

use std::fmt;

use serde::Serialize;

use crate::cards::CardStatus;
use crate::engine::MemoryGame;

/// Glyph shown on a face-down tile.
pub const FACE_DOWN_GLYPH: &str = "?";

/// What a tile shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TileFace {
    Down,
    Up {
        name: String,
        image: String,
        matched: bool,
    },
}

/// One tile of the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TileView {
    pub position: usize,
    pub face: TileFace,
}

/// Snapshot of everything a host draws for the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub tiles: Vec<TileView>,
    pub moves: u32,
    pub locked: bool,
    pub won: bool,
    /// Tiles per row when drawn as text.
    pub columns: usize,
}

impl BoardView {
    /// Default row width for text output.
    pub const DEFAULT_COLUMNS: usize = 4;

    /// Capture the current game state.
    #[must_use]
    pub fn capture(game: &MemoryGame) -> Self {
        let tiles = game
            .board()
            .cards()
            .iter()
            .map(|card| {
                let face = match game.pairs().get(card.pair) {
                    Some(pair) if card.status.is_face_up() => TileFace::Up {
                        name: pair.name.clone(),
                        image: pair.image.clone(),
                        matched: card.status == CardStatus::Matched,
                    },
                    _ => TileFace::Down,
                };
                TileView {
                    position: card.position,
                    face,
                }
            })
            .collect();

        Self {
            tiles,
            moves: game.moves(),
            locked: game.is_locked(),
            won: game.is_won(),
            columns: Self::DEFAULT_COLUMNS,
        }
    }

    /// Set the text row width.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Text for the move counter display.
    #[must_use]
    pub fn moves_text(&self) -> String {
        format!("Moves: {}", self.moves)
    }

    /// Completion message, once the game is won.
    #[must_use]
    pub fn win_message(&self) -> Option<String> {
        self.won.then(|| win_message(self.moves))
    }
}

/// Message announcing a win.
#[must_use]
pub fn win_message(moves: u32) -> String {
    format!("Congratulations! You won in {moves} moves!")
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .tiles
            .iter()
            .map(|t| match &t.face {
                TileFace::Down => FACE_DOWN_GLYPH.len(),
                TileFace::Up { name, .. } => name.chars().count() + 2,
            })
            .max()
            .unwrap_or(1);

        for row in self.tiles.chunks(self.columns.max(1)) {
            for tile in row {
                let label = match &tile.face {
                    TileFace::Down => FACE_DOWN_GLYPH.to_string(),
                    TileFace::Up { name, matched: true, .. } => format!("*{name}*"),
                    TileFace::Up { name, .. } => name.clone(),
                };
                write!(f, "[{:>2} {:<width$}] ", tile.position, label)?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", self.moves_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Pair;
    use crate::core::GameConfig;
    use crate::engine::SelectOutcome;

    fn game() -> MemoryGame {
        MemoryGame::initialize(
            vec![Pair::new("Basil", "b.jpg"), Pair::new("Mint", "m.jpg")],
            GameConfig::new().with_seed(3),
        )
        .unwrap()
    }

    #[test]
    fn test_all_tiles_start_face_down() {
        let view = BoardView::capture(&game());
        assert_eq!(view.tiles.len(), 4);
        assert!(view.tiles.iter().all(|t| t.face == TileFace::Down));
        assert_eq!(view.moves_text(), "Moves: 0");
        assert_eq!(view.win_message(), None);
    }

    #[test]
    fn test_revealed_tile_shows_pair() {
        let mut game = game();
        game.select_card(2);
        let view = BoardView::capture(&game);

        let expected = game.pair_at(2).unwrap();
        match &view.tiles[2].face {
            TileFace::Up { name, image, matched } => {
                assert_eq!(name, &expected.name);
                assert_eq!(image, &expected.image);
                assert!(!matched);
            }
            TileFace::Down => panic!("tile should be face-up"),
        }
    }

    #[test]
    fn test_mismatched_tiles_up_until_reverted() {
        let mut game = game();
        let basil = game.board().positions_of(game.pairs().find("Basil").unwrap())[0];
        let mint = game.board().positions_of(game.pairs().find("Mint").unwrap())[0];

        game.select_card(basil);
        let SelectOutcome::Mismatch(ticket) = game.select_card(mint) else {
            panic!("expected mismatch");
        };
        let view = BoardView::capture(&game);
        assert!(view.locked);
        for position in [basil, mint] {
            assert!(matches!(view.tiles[position].face, TileFace::Up { matched: false, .. }));
        }

        game.complete_reversion(&ticket);
        let view = BoardView::capture(&game);
        assert!(view.tiles.iter().all(|t| t.face == TileFace::Down));
    }

    #[test]
    fn test_text_rendering() {
        let view = BoardView::capture(&game()).with_columns(2);
        let text = view.to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("[ 0 ?]"));
        assert_eq!(lines[2], "Moves: 0");
    }

    #[test]
    fn test_win_message() {
        assert_eq!(win_message(7), "Congratulations! You won in 7 moves!");
    }
}
