//! Card tiles - runtime card state.
//!
//! A `Card` is one placed copy of a `Pair`. Cards are created when a board
//! is built and dropped when it is rebuilt.

use serde::{Deserialize, Serialize};

use super::pair::PairId;

/// Visibility status of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    /// Face-down.
    #[default]
    Hidden,
    /// Face-up while its turn is unresolved.
    Revealed,
    /// Permanently face-up.
    Matched,
}

impl CardStatus {
    /// Is the card's face showing?
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        !matches!(self, CardStatus::Hidden)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Pair this card belongs to.
    pub pair: PairId,

    /// Position on the board. Stable for the board's lifetime.
    pub position: usize,

    pub status: CardStatus,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(pair: PairId, position: usize) -> Self {
        Self {
            pair,
            position,
            status: CardStatus::Hidden,
        }
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.status == CardStatus::Matched
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.status == CardStatus::Hidden
    }

    /// Does this card complete a pair with `other`?
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.position != other.position && self.pair == other.pair
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_hidden() {
        let card = Card::new(PairId::new(2), 5);
        assert!(card.is_hidden());
        assert!(!card.status.is_face_up());
        assert_eq!(card.position, 5);
    }

    #[test]
    fn test_matches() {
        let a1 = Card::new(PairId::new(0), 0);
        let a2 = Card::new(PairId::new(0), 3);
        let b1 = Card::new(PairId::new(1), 1);

        assert!(a1.matches(&a2));
        assert!(!a1.matches(&b1));
        // A card never matches itself.
        assert!(!a1.matches(&a1));
    }

    #[test]
    fn test_face_up() {
        assert!(CardStatus::Revealed.is_face_up());
        assert!(CardStatus::Matched.is_face_up());
    }
}
