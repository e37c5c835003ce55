//! Round outcomes and game results.

use core::fmt;

use crate::card::Card;

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The automated opponent.
    Opponent,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("Player"),
            Self::Opponent => f.write_str("Opponent"),
        }
    }
}

/// Winner of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player won.
    Player,
    /// The opponent won.
    Opponent,
    /// Nobody won.
    Draw,
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Self::Player,
            Side::Opponent => Self::Opponent,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("Player"),
            Self::Opponent => f.write_str("Opponent"),
            Self::Draw => f.write_str("Draw"),
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// The player ran out of cards.
    PlayerExhausted,
    /// The opponent ran out of cards.
    OpponentExhausted,
    /// Both sides ran out of cards together.
    BothExhausted,
    /// A war could not be paid for by at least one side.
    WarUnresolvable,
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameResult {
    /// Who won.
    pub winner: Winner,
    /// How the game ended.
    pub reason: EndReason,
}

/// What a single call to `play_round` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// One side had the higher card and took every card in contention.
    Won {
        /// The round winner.
        winner: Side,
        /// The player's face-up card.
        player_card: Card,
        /// The opponent's face-up card.
        opponent_card: Card,
        /// Number of cards added to the winner's pile.
        cards_won: usize,
    },
    /// The cards tied and a war began.
    War {
        /// The player's face-up card.
        player_card: Card,
        /// The opponent's face-up card.
        opponent_card: Card,
        /// Face-down cards added to the contention this round.
        hidden_cards: usize,
    },
    /// A side had nothing to draw, so the game ended without a comparison.
    Exhausted,
}

/// What happened when the player picked a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PilesChosen {
    /// Offer index of the player's pile.
    pub index: usize,
    /// Offer index of the pile the opponent drew, under the single-pile policy.
    pub opponent_pile: Option<usize>,
    /// Number of cards taken out of play.
    pub discarded: usize,
}
