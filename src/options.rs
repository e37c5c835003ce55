//! Game configuration options.

use core::time::Duration;

use crate::error::InvalidArgument;

/// Who owns the piles the player did not choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum PilePolicy {
    /// The opponent takes one random pile; the rest leave play.
    ///
    /// A war needs two cards per side (one hidden, one compared). A side
    /// that cannot pay loses on the spot.
    #[default]
    SinglePile,
    /// The opponent keeps every remaining pile and draws from the first
    /// non-empty one. Ties carry forward without hidden cards.
    MultiPile,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use guerra::{GameOptions, PilePolicy};
///
/// let options = GameOptions::default()
///     .with_piles(4)
///     .with_policy(PilePolicy::MultiPile)
///     .with_war_delay(None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of piles the shuffled deck is split into.
    pub piles: usize,
    /// Ownership of the unchosen piles.
    pub policy: PilePolicy,
    /// Pause before a war is resolved.
    ///
    /// `None` leaves the war waiting for the next `play_round` call instead
    /// of scheduling a continuation.
    pub war_delay: Option<Duration>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            piles: 5,
            policy: PilePolicy::SinglePile,
            war_delay: Some(Duration::from_millis(3500)),
        }
    }
}

impl GameOptions {
    /// Sets the number of piles.
    ///
    /// # Example
    ///
    /// ```
    /// use guerra::GameOptions;
    ///
    /// let options = GameOptions::default().with_piles(4);
    /// assert_eq!(options.piles, 4);
    /// ```
    #[must_use]
    pub const fn with_piles(mut self, piles: usize) -> Self {
        self.piles = piles;
        self
    }

    /// Sets the pile ownership policy.
    ///
    /// # Example
    ///
    /// ```
    /// use guerra::{GameOptions, PilePolicy};
    ///
    /// let options = GameOptions::default().with_policy(PilePolicy::MultiPile);
    /// assert_eq!(options.policy, PilePolicy::MultiPile);
    /// ```
    #[must_use]
    pub const fn with_policy(mut self, policy: PilePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the war delay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use guerra::GameOptions;
    ///
    /// let options = GameOptions::default().with_war_delay(Some(Duration::from_secs(1)));
    /// assert_eq!(options.war_delay, Some(Duration::from_secs(1)));
    /// ```
    #[must_use]
    pub const fn with_war_delay(mut self, delay: Option<Duration>) -> Self {
        self.war_delay = delay;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two piles are requested.
    pub const fn validate(&self) -> Result<(), InvalidArgument> {
        if self.piles < 2 {
            return Err(InvalidArgument::TooFewPiles(self.piles));
        }
        Ok(())
    }
}
