//! Read-only view of a game for rendering.

use alloc::vec::Vec;

use crate::card::Card;
use crate::event::PendingWar;
use crate::game::{GamePhase, Table};
use crate::pile::Pile;
use crate::result::{GameResult, Winner};

/// Everything a presentation layer needs to redraw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current phase.
    pub phase: GamePhase,
    /// Size of each pile on offer (choosing phase only).
    pub offered_piles: Vec<usize>,
    /// Cards in the player's pile.
    pub player_cards: usize,
    /// Size of each opponent pile.
    pub opponent_piles: Vec<usize>,
    /// The player's last face-up card.
    pub player_card: Option<Card>,
    /// The opponent's last face-up card.
    pub opponent_card: Option<Card>,
    /// Cards in contention.
    pub war_cards: usize,
    /// Cards taken out of play.
    pub discarded: usize,
    /// Final result, once the game is over.
    pub result: Option<GameResult>,
    /// The war continuation waiting for its timer.
    pub pending_war: Option<PendingWar>,
}

impl Snapshot {
    pub(crate) fn capture(table: &Table, pending_war: Option<PendingWar>) -> Self {
        Self {
            phase: table.phase(),
            offered_piles: table.offered_piles(),
            player_cards: table.player_pile().len(),
            opponent_piles: table.opponent_piles().iter().map(Pile::len).collect(),
            player_card: table.player_card(),
            opponent_card: table.opponent_card(),
            war_cards: table.war_cards().len(),
            discarded: table.discarded().len(),
            result: table.result(),
            pending_war,
        }
    }

    /// Returns the number of cards the opponent holds.
    #[must_use]
    pub fn opponent_cards(&self) -> usize {
        self.opponent_piles.iter().sum()
    }

    /// Returns the winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.result.map(|result| result.winner)
    }
}
