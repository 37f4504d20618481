//! Memory game controller.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::turn::{PendingReversion, TurnState};
use crate::board::{Board, Generation};
use crate::cards::{CardStatus, Pair, PairId, PairSet};
use crate::core::{ConfigError, GameConfig, GameRng};
use crate::events::{EventQueue, GameEvent};

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card at that position.
    OutOfRange,
    /// A mismatched pair is still showing.
    Locked,
    /// The card is already the turn's first selection.
    AlreadyPending,
    /// The card is already matched.
    AlreadyMatched,
}

/// Result of `MemoryGame::select_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),

    /// First card of a turn turned face-up.
    FirstRevealed { position: usize, pair: PairId },

    /// Second card completed the pair. `won` is set on the final match.
    Matched { pair: PairId, won: bool },

    /// Second card did not match; the board is locked until the ticket
    /// is completed.
    Mismatch(PendingReversion),
}

impl SelectOutcome {
    /// Did this selection finish a turn?
    #[must_use]
    pub fn completes_turn(&self) -> bool {
        matches!(self, SelectOutcome::Matched { .. } | SelectOutcome::Mismatch(_))
    }
}

/// A memory-matching game over a shuffled board of paired cards.
///
/// All state lives here; hosts drive it through `select_card`, the timed
/// reversion, and `reset`, and follow along by draining events.
///
/// ## Example
///
/// ```
/// use herbal_memory::cards::{Pair, PairId};
/// use herbal_memory::core::GameConfig;
/// use herbal_memory::engine::{MemoryGame, SelectOutcome};
///
/// let pairs = vec![Pair::new("Basil", "basil.jpg")];
/// let mut game = MemoryGame::initialize(pairs, GameConfig::new().with_seed(1)).unwrap();
///
/// let [a, b] = [0, 1];
/// game.select_card(a);
/// let outcome = game.select_card(b);
///
/// assert_eq!(outcome, SelectOutcome::Matched { pair: PairId::new(0), won: true });
/// assert_eq!(game.moves(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MemoryGame {
    pairs: PairSet,
    config: GameConfig,
    rng: GameRng,
    board: Board,
    turn: TurnState,
    moves: u32,
    won: bool,
    events: EventQueue,
}

impl MemoryGame {
    /// Validate `pairs` and start a game.
    pub fn initialize(pairs: Vec<Pair>, config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(PairSet::new(pairs)?, config))
    }

    /// Start a game with an already validated pair set.
    pub fn new(pairs: PairSet, config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let board = Board::build(&pairs, &mut rng, Generation::default());

        let mut game = Self {
            pairs,
            config,
            rng,
            board,
            turn: TurnState::new(),
            moves: 0,
            won: false,
            events: EventQueue::new(),
        };
        game.announce_board();
        game
    }

    /// Discard the current game and deal a freshly shuffled board.
    ///
    /// Any reversion scheduled on the old board goes stale.
    pub fn reset(&mut self) {
        let generation = self.board.generation().next();
        self.board = Board::build(&self.pairs, &mut self.rng, generation);
        self.turn.clear();
        self.moves = 0;
        self.won = false;
        self.announce_board();
    }

    fn announce_board(&mut self) {
        info!(
            generation = %self.board.generation(),
            cards = self.board.len(),
            seed = self.rng.seed(),
            "board dealt"
        );
        self.events.push(GameEvent::BoardRebuilt {
            generation: self.board.generation(),
            card_count: self.board.len(),
        });
        self.events.push(GameEvent::MovesChanged { moves: self.moves });
    }

    /// Handle a click on the card at `position`.
    ///
    /// This is the only way cards turn face-up.
    pub fn select_card(&mut self, position: usize) -> SelectOutcome {
        let Some(card) = self.board.get(position) else {
            debug!(position, len = self.board.len(), "selection out of range");
            return SelectOutcome::Ignored(IgnoreReason::OutOfRange);
        };
        if self.turn.is_locked() {
            debug!(position, "board locked, selection ignored");
            return SelectOutcome::Ignored(IgnoreReason::Locked);
        }
        if self.turn.first() == Some(position) {
            return SelectOutcome::Ignored(IgnoreReason::AlreadyPending);
        }
        if card.is_matched() {
            return SelectOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }

        let pair = card.pair;
        self.set_status(position, CardStatus::Revealed);

        let Some(first) = self.turn.first() else {
            self.turn.begin(position);
            debug!(position, %pair, "first card revealed");
            return SelectOutcome::FirstRevealed { position, pair };
        };

        // The move counts as soon as the second card is turned.
        self.moves += 1;
        self.events.push(GameEvent::MovesChanged { moves: self.moves });

        let is_match = match (self.board.get(first), self.board.get(position)) {
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        };
        if is_match {
            self.set_status(first, CardStatus::Matched);
            self.set_status(position, CardStatus::Matched);
            self.turn.clear();
            debug!(first, second = position, %pair, moves = self.moves, "pair matched");
            let won = self.check_win();
            SelectOutcome::Matched { pair, won }
        } else {
            let reversion = PendingReversion {
                generation: self.board.generation(),
                cards: [first, position],
                delay: self.config.mismatch_delay(),
            };
            self.turn.lock(reversion);
            debug!(first, second = position, moves = self.moves, "mismatch, board locked");
            SelectOutcome::Mismatch(reversion)
        }
    }

    /// Flip a mismatched pair back face-down and unlock the board.
    ///
    /// Returns `false` and changes nothing if the ticket is not the
    /// reversion currently pending on this board.
    pub fn complete_reversion(&mut self, ticket: &PendingReversion) -> bool {
        let current = self.turn.reversion().copied();
        if current != Some(*ticket) || ticket.generation != self.board.generation() {
            debug!(
                ticket_generation = %ticket.generation,
                board_generation = %self.board.generation(),
                "stale reversion ignored"
            );
            return false;
        }

        for position in ticket.cards {
            self.set_status(position, CardStatus::Hidden);
        }
        self.turn.clear();
        debug!(cards = ?ticket.cards, "mismatch reverted");
        true
    }

    /// Let `elapsed` time pass, completing the pending reversion once due.
    ///
    /// Returns `true` if a reversion completed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        match self.turn.tick(elapsed) {
            Some(ticket) => self.complete_reversion(&ticket),
            None => false,
        }
    }

    fn check_win(&mut self) -> bool {
        if self.won || !self.board.is_solved() {
            return false;
        }
        self.won = true;
        info!(moves = self.moves, "game won");
        self.events.push(GameEvent::Won { moves: self.moves });
        true
    }

    fn set_status(&mut self, position: usize, status: CardStatus) {
        if self.board.set_status(position, status) {
            self.events.push(GameEvent::CardChanged { position, status });
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn pairs(&self) -> &PairSet {
        &self.pairs
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.board.generation()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.turn.is_locked()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// First selection of the current turn, if any.
    #[must_use]
    pub fn pending(&self) -> Option<usize> {
        self.turn.first()
    }

    #[must_use]
    pub fn pending_reversion(&self) -> Option<&PendingReversion> {
        self.turn.reversion()
    }

    /// Pair shown on the card at `position`.
    #[must_use]
    pub fn pair_at(&self, position: usize) -> Option<&Pair> {
        self.board.get(position).and_then(|c| self.pairs.get(c.pair))
    }

    /// Take every event emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

}
