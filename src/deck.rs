//! Deck construction, shuffling, and pile allocation.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::InvalidArgument;
use crate::pile::Pile;

/// Builds the 40-card Spanish deck, suit by suit.
///
/// # Example
///
/// ```
/// use guerra::{DECK_SIZE, deck};
///
/// let cards = deck::build_deck();
/// assert_eq!(cards.len(), DECK_SIZE);
/// ```
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Shuffles cards in place with a Fisher–Yates pass driven by `rng`.
///
/// Every permutation is equally likely given an unbiased source. A seeded
/// generator replays the same order.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Splits `cards` into `piles` contiguous piles of `ceil(len / piles)` cards.
///
/// Exactly `piles` piles are returned; the trailing ones may be short or
/// empty when the deck does not divide evenly. Concatenating the piles in
/// order yields the input.
///
/// # Errors
///
/// Returns an error if `piles` is zero.
///
/// # Example
///
/// ```
/// use guerra::deck;
///
/// let piles = deck::allocate(deck::build_deck(), 5).unwrap();
/// assert!(piles.iter().all(|pile| pile.len() == 8));
/// ```
pub fn allocate(cards: Vec<Card>, piles: usize) -> Result<Vec<Pile>, InvalidArgument> {
    if piles == 0 {
        return Err(InvalidArgument::ZeroPiles);
    }

    let size = cards.len().div_ceil(piles);
    let mut cards = cards.into_iter();

    Ok((0..piles)
        .map(|_| cards.by_ref().take(size).collect())
        .collect())
}
