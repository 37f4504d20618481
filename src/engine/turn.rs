//! Turn state: pending selections, board lock, and the timed reversion.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Generation;

/// A scheduled flip-back of a mismatched pair.
///
/// Returned to the host when a mismatch locks the board. The host hands it
/// back to `MemoryGame::complete_reversion` once `delay` has elapsed. A
/// ticket from an earlier board generation is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingReversion {
    /// Board the mismatch happened on.
    pub generation: Generation,
    /// First and second selected positions.
    pub cards: [usize; 2],
    /// How long the pair stays face-up.
    pub delay: Duration,
}

/// Selections of the turn in progress.
///
/// At most two positions are pending. While a reversion is scheduled the
/// board is locked and no further selection is accepted.
#[derive(Clone, Debug, Default)]
pub struct TurnState {
    pending: SmallVec<[usize; 2]>,
    reversion: Option<PendingReversion>,
    remaining: Duration,
}

impl TurnState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// First selection of the turn, if one is waiting for its partner.
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.pending.first().copied()
    }

    #[must_use]
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.reversion.is_some()
    }

    #[must_use]
    pub fn reversion(&self) -> Option<&PendingReversion> {
        self.reversion.as_ref()
    }

    /// Record the first selection.
    pub fn begin(&mut self, position: usize) {
        self.pending.clear();
        self.pending.push(position);
    }

    /// Record the second selection and lock until `reversion` completes.
    pub fn lock(&mut self, reversion: PendingReversion) {
        self.pending.clear();
        self.pending.extend_from_slice(&reversion.cards);
        self.remaining = reversion.delay;
        self.reversion = Some(reversion);
    }

    /// Forget all selections and unlock.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.reversion = None;
        self.remaining = Duration::ZERO;
    }

    /// Count the scheduled reversion down by `elapsed`.
    ///
    /// Returns the reversion once it is due. The state is left locked; the
    /// caller completes the reversion.
    pub fn tick(&mut self, elapsed: Duration) -> Option<PendingReversion> {
        let reversion = self.reversion?;
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.remaining.is_zero().then_some(reversion)
    }
}
