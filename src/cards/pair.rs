//! Pair definitions - static matching data.
//!
//! A `Pair` is the thing players match: a named plant with an image.
//! Each pair is placed on the board twice. Per-tile state (status,
//! position) lives separately in `Card`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Identifier of a pair within its `PairSet`.
///
/// This is the pair's index in the set, so it is only meaningful
/// alongside the set it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub u16);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Index into the owning set.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// A named entity with an image, shown on two cards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// Display name, unique within a set.
    pub name: String,

    /// Image reference (URL or path). May repeat across pairs.
    pub image: String,
}

impl Pair {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

/// Validated, immutable collection of pairs.
///
/// ## Example
///
/// ```
/// use herbal_memory::cards::{Pair, PairSet};
///
/// let set = PairSet::new(vec![
///     Pair::new("Basil", "basil.jpg"),
///     Pair::new("Mint", "mint.jpg"),
/// ]).unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.find("Mint").map(|id| id.raw()), Some(1));
///
/// assert!(PairSet::new(vec![]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PairSet {
    pairs: Vec<Pair>,
}

impl PairSet {
    /// Largest number of pairs a set may hold.
    pub const MAX_PAIRS: usize = u16::MAX as usize;

    /// Validate and build a pair set.
    ///
    /// Names are trimmed. Empty sets, blank names and duplicate names are
    /// rejected; an unsolvable board is never built. Duplicate images are fine.
    pub fn new(pairs: Vec<Pair>) -> Result<Self, ConfigError> {
        if pairs.is_empty() {
            return Err(ConfigError::EmptyPairSet);
        }
        if pairs.len() > Self::MAX_PAIRS {
            return Err(ConfigError::TooManyPairs {
                count: pairs.len(),
                max: Self::MAX_PAIRS,
            });
        }

        let mut seen = FxHashSet::default();
        let mut validated = Vec::with_capacity(pairs.len());
        for (position, pair) in pairs.into_iter().enumerate() {
            let name = pair.name.trim();
            if name.is_empty() {
                return Err(ConfigError::EmptyName(position));
            }
            if !seen.insert(name.to_string()) {
                return Err(ConfigError::DuplicateName(name.to_string()));
            }
            validated.push(Pair::new(name, pair.image));
        }

        Ok(Self { pairs: validated })
    }

    /// The herb pairs used by the page's memory game.
    #[must_use]
    pub fn herbal() -> Self {
        const BASIL: &str =
            "https://images.unsplash.com/photo-1601579537230-9a6c24d0da06?w=300&auto=format&fit=crop";
        const MINT: &str =
            "https://images.unsplash.com/photo-1587049352846-4a222e784d38?w=300&auto=format&fit=crop";
        const ROSEMARY: &str =
            "https://images.unsplash.com/photo-1513531926349-466f15ec8cc7?w=300&auto=format&fit=crop";

        Self {
            pairs: vec![
                Pair::new("Basil", BASIL),
                Pair::new("Mint", MINT),
                Pair::new("Rosemary", ROSEMARY),
                Pair::new("Thyme", BASIL),
                Pair::new("Oregano", MINT),
                Pair::new("Sage", ROSEMARY),
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Get a pair by ID.
    #[must_use]
    pub fn get(&self, id: PairId) -> Option<&Pair> {
        self.pairs.get(id.index())
    }

    /// Look up a pair ID by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PairId> {
        self.pairs
            .iter()
            .position(|p| p.name == name)
            .map(|i| PairId::new(i as u16))
    }

    /// All pair IDs in set order.
    pub fn ids(&self) -> impl Iterator<Item = PairId> + '_ {
        (0..self.pairs.len()).map(|i| PairId::new(i as u16))
    }

    /// Iterate `(id, pair)` in set order.
    pub fn iter(&self) -> impl Iterator<Item = (PairId, &Pair)> {
        self.pairs
            .iter()
            .enumerate()
            .map(|(i, p)| (PairId::new(i as u16), p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_id() {
        let id = PairId::new(4);
        assert_eq!(id.raw(), 4);
        assert_eq!(id.index(), 4);
        assert_eq!(format!("{}", id), "Pair(4)");
    }

    #[test]
    fn test_rejects_empty_set() {
        assert!(matches!(PairSet::new(vec![]), Err(ConfigError::EmptyPairSet)));
    }

    #[test]
    fn test_rejects_blank_name() {
        let result = PairSet::new(vec![Pair::new("Basil", "a"), Pair::new("   ", "b")]);
        assert!(matches!(result, Err(ConfigError::EmptyName(1))));
    }

    #[test]
    fn test_rejects_duplicate_name_after_trim() {
        let result = PairSet::new(vec![Pair::new("Sage", "a"), Pair::new(" Sage ", "b")]);
        assert!(matches!(result, Err(ConfigError::DuplicateName(name)) if name == "Sage"));
    }

    #[test]
    fn test_allows_duplicate_images() {
        let set = PairSet::new(vec![Pair::new("Thyme", "x.jpg"), Pair::new("Basil", "x.jpg")]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_names_are_trimmed() {
        let set = PairSet::new(vec![Pair::new("  Mint ", "m.jpg")]).unwrap();
        assert_eq!(set.get(PairId::new(0)).unwrap().name, "Mint");
        assert_eq!(set.find("Mint"), Some(PairId::new(0)));
    }

    #[test]
    fn test_herbal_set_is_valid() {
        let herbal = PairSet::herbal();
        let revalidated = PairSet::new(herbal.iter().map(|(_, p)| p.clone()).collect()).unwrap();
        assert_eq!(herbal, revalidated);
        assert_eq!(herbal.ids().count(), 6);
    }
}
