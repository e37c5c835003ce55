//! Error types for game operations.

use thiserror::Error;

/// An argument passed to the engine was malformed.
///
/// Operations attempted in the wrong phase are not errors; they are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// A deck cannot be split into zero piles.
    #[error("cannot split a deck into zero piles")]
    ZeroPiles,
    /// A game needs a pile for the player and at least one for the opponent.
    #[error("a game needs at least two piles, got {0}")]
    TooFewPiles(usize),
    /// Pile index out of range.
    #[error("pile index {index} out of range for {available} piles")]
    PileIndex {
        /// The requested index.
        index: usize,
        /// Number of piles on offer.
        available: usize,
    },
    /// The opponent pile count does not fit the pile policy.
    #[error("invalid number of opponent piles: {0}")]
    OpponentPiles(usize),
}
