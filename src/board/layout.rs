//! Board layout and per-card status tracking.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardStatus, PairId, PairSet};
use crate::core::GameRng;

/// Board rebuild counter.
///
/// Every rebuild gets a fresh generation, so work scheduled against an
/// older board can be recognised and dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// Ordered, shuffled sequence of cards.
///
/// Invariant: every pair of the set it was built from appears on exactly
/// two cards, and `cards[i].position == i`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
    generation: Generation,
}

impl Board {
    /// Lay out two face-down cards per pair in uniformly random order.
    pub fn build(pairs: &PairSet, rng: &mut GameRng, generation: Generation) -> Self {
        let mut deck: Vec<PairId> = pairs.ids().chain(pairs.ids()).collect();
        rng.shuffle(&mut deck);

        let cards = deck
            .into_iter()
            .enumerate()
            .map(|(position, pair)| Card::new(pair, position))
            .collect();

        Self { cards, generation }
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Status of the card at `position`, if it exists.
    #[must_use]
    pub fn status(&self, position: usize) -> Option<CardStatus> {
        self.cards.get(position).map(|c| c.status)
    }

    /// Set a card's status. Returns `false` if the position does not exist.
    pub fn set_status(&mut self, position: usize, status: CardStatus) -> bool {
        match self.cards.get_mut(position) {
            Some(card) => {
                card.status = status;
                true
            }
            None => false,
        }
    }

    /// Positions holding cards of `pair`.
    #[must_use]
    pub fn positions_of(&self, pair: PairId) -> Vec<usize> {
        self.cards
            .iter()
            .filter(|c| c.pair == pair)
            .map(|c| c.position)
            .collect()
    }

    #[must_use]
    pub fn count_with_status(&self, status: CardStatus) -> usize {
        self.cards.iter().filter(|c| c.status == status).count()
    }

    /// True once every card is matched.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(Card::is_matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Pair;

    fn three_pairs() -> PairSet {
        PairSet::new(vec![
            Pair::new("Basil", "b.jpg"),
            Pair::new("Mint", "m.jpg"),
            Pair::new("Rosemary", "r.jpg"),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_places_each_pair_twice() {
        let pairs = three_pairs();
        let mut rng = GameRng::new(42);
        let board = Board::build(&pairs, &mut rng, Generation::default());

        assert_eq!(board.len(), 6);
        for id in pairs.ids() {
            assert_eq!(board.positions_of(id).len(), 2);
        }
        assert_eq!(board.count_with_status(CardStatus::Hidden), 6);
    }

    #[test]
    fn test_positions_are_stable_indices() {
        let mut rng = GameRng::new(1);
        let board = Board::build(&three_pairs(), &mut rng, Generation(3));

        for (i, card) in board.cards().iter().enumerate() {
            assert_eq!(card.position, i);
        }
        assert_eq!(board.generation(), Generation(3));
    }

    #[test]
    fn test_set_status_out_of_range() {
        let mut rng = GameRng::new(1);
        let mut board = Board::build(&three_pairs(), &mut rng, Generation::default());

        assert!(!board.set_status(6, CardStatus::Matched));
        assert!(board.set_status(0, CardStatus::Revealed));
        assert_eq!(board.status(0), Some(CardStatus::Revealed));
        assert_eq!(board.status(6), None);
    }

    #[test]
    fn test_is_solved() {
        let mut rng = GameRng::new(5);
        let mut board = Board::build(&three_pairs(), &mut rng, Generation::default());
        assert!(!board.is_solved());

        for i in 0..board.len() {
            board.set_status(i, CardStatus::Matched);
        }
        assert!(board.is_solved());
    }

    #[test]
    fn test_generation_next() {
        assert_eq!(Generation(0).next(), Generation(1));
        assert_eq!(Generation(u64::MAX).next(), Generation(0));
    }
}
