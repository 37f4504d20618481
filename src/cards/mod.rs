//! Card system: pairs and the cards placed from them.
//!
//! ## Key Types
//!
//! - `PairId`: Identifier of a pair within its set
//! - `Pair`: Static name + image data
//! - `PairSet`: Validated pair collection
//! - `Card`: Runtime tile state (pair, position, status)
//! - `CardStatus`: Hidden, revealed or matched

pub mod card;
pub mod pair;

pub use card::{Card, CardStatus};
pub use pair::{Pair, PairId, PairSet};
