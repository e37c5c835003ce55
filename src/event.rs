//! Events published to the presentation layer, and the interfaces a host
//! implements to receive them.

use alloc::vec::Vec;
use core::time::Duration;

use crate::card::Card;
use crate::result::{GameResult, PilesChosen, Side};
use crate::snapshot::Snapshot;

/// Identifies one scheduled war continuation.
///
/// A ticket is only honoured while it is the game's pending continuation.
/// Tickets left over from an earlier war or an earlier game are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WarTicket(u32);

impl WarTicket {
    /// Rebuilds a ticket from its numeric id (for hosts that pass it
    /// through a foreign boundary).
    #[must_use]
    pub const fn from_id(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric id of the ticket.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// A war continuation waiting for its timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingWar {
    /// Ticket to pass to `Game::resume_war` when the delay has elapsed.
    pub ticket: WarTicket,
    /// How long the host should wait.
    pub delay: Duration,
}

/// A state change in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new deck was dealt into piles.
    Dealt {
        /// Size of each pile on offer.
        piles: Vec<usize>,
    },
    /// The player picked a pile.
    PileChosen(PilesChosen),
    /// A round was decided.
    RoundWon {
        /// The round winner.
        winner: Side,
        /// The player's face-up card.
        player_card: Card,
        /// The opponent's face-up card.
        opponent_card: Card,
        /// Cards moved to the winner's pile.
        cards_won: usize,
    },
    /// A round tied.
    WarDeclared {
        /// The player's face-up card.
        player_card: Card,
        /// The opponent's face-up card.
        opponent_card: Card,
        /// Face-down cards added to the contention.
        hidden_cards: usize,
        /// The scheduled continuation, if the game continues on a timer.
        pending: Option<PendingWar>,
    },
    /// The game ended.
    GameOver(GameResult),
}

/// Receives every game event together with the state it produced.
///
/// Observers run while the game is between operations; they must not call
/// back into the game.
pub trait Observer: Send {
    /// Called after each state change.
    fn on_event(&mut self, event: &GameEvent, snapshot: &Snapshot);
}

impl<F> Observer for F
where
    F: FnMut(&GameEvent, &Snapshot) + Send,
{
    fn on_event(&mut self, event: &GameEvent, snapshot: &Snapshot) {
        self(event, snapshot);
    }
}

/// Arranges for `Game::resume_war` to run once a war delay has elapsed.
///
/// Implementations must defer the call; resuming from inside `schedule`
/// re-enters the game.
pub trait Scheduler: Send {
    /// Schedules the continuation.
    fn schedule(&mut self, war: PendingWar);
}

impl<F> Scheduler for F
where
    F: FnMut(PendingWar) + Send,
{
    fn schedule(&mut self, war: PendingWar) {
        self(war);
    }
}
