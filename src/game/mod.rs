//! Game controller and state management.

use core::sync::atomic::AtomicU32;

use alloc::boxed::Box;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::sync::Mutex;

use crate::card::Card;
use crate::error::InvalidArgument;
use crate::event::{GameEvent, Observer, PendingWar, Scheduler};
use crate::options::GameOptions;
use crate::pile::Pile;
use crate::result::{GameResult, Winner};
use crate::snapshot::Snapshot;

mod actions;
pub mod state;
pub mod table;

pub use state::GamePhase;
pub use table::Table;

/// A war game against an automated opponent.
///
/// The game owns the table, the random number generator, and the hooks into
/// the presentation layer. Every operation takes `&self`, so a host can share
/// the game with whatever fires its war timers.
///
/// Locks are taken in the order pending war, table, generator. Observers and
/// schedulers are called with none of those held.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Cards and phase of the current game.
    pub table: Mutex<Table>,
    /// War continuation waiting for its timer.
    pending_war: Mutex<Option<PendingWar>>,
    /// Next war ticket to issue.
    next_ticket: AtomicU32,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
    observer: Mutex<Option<Box<dyn Observer>>>,
    scheduler: Mutex<Option<Box<dyn Scheduler>>>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The game starts in [`GamePhase::Initial`]; call [`Game::new_game`] to
    /// deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are not playable.
    ///
    /// # Example
    ///
    /// ```
    /// use guerra::{Game, GameOptions, GamePhase};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// game.new_game().unwrap();
    /// assert_eq!(game.phase(), GamePhase::Choosing);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, InvalidArgument> {
        options.validate()?;

        Ok(Self {
            table: Mutex::new(Table::new(options.policy)),
            options,
            pending_war: Mutex::new(None),
            next_ticket: AtomicU32::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            observer: Mutex::new(None),
            scheduler: Mutex::new(None),
        })
    }

    /// Installs the observer notified after every state change.
    pub fn set_observer<O: Observer + 'static>(&self, observer: O) {
        *self.observer.lock() = Some(Box::new(observer));
    }

    /// Installs the scheduler asked to run war continuations.
    pub fn set_scheduler<S: Scheduler + 'static>(&self, scheduler: S) {
        *self.scheduler.lock() = Some(Box::new(scheduler));
    }

    /// Discards the current game and deals a fresh, shuffled deck.
    ///
    /// Any pending war continuation is abandoned.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot be split into the configured
    /// number of piles.
    pub fn new_game(&self) -> Result<(), InvalidArgument> {
        let mut pending = self.pending_war.lock();
        let table = Table::deal(self.options.policy, self.options.piles, &mut *self.rng.lock())?;
        let piles = table.offered_piles();

        *self.table.lock() = table;
        *pending = None;
        drop(pending);

        debug!(piles = ?piles, policy = ?self.options.policy, "dealt new game");
        self.emit(&GameEvent::Dealt { piles });
        Ok(())
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.table.lock().phase()
    }

    /// Returns the sizes of the piles on offer.
    pub fn offered_piles(&self) -> Vec<usize> {
        self.table.lock().offered_piles()
    }

    /// Returns the number of cards in the player's pile.
    pub fn player_pile_count(&self) -> usize {
        self.table.lock().player_pile().len()
    }

    /// Returns the size of each opponent pile.
    pub fn opponent_pile_counts(&self) -> Vec<usize> {
        self.table
            .lock()
            .opponent_piles()
            .iter()
            .map(Pile::len)
            .collect()
    }

    /// Returns the number of cards the opponent holds.
    pub fn opponent_card_count(&self) -> usize {
        self.table.lock().opponent_card_count()
    }

    /// Returns the player's last face-up card.
    pub fn current_player_card(&self) -> Option<Card> {
        self.table.lock().player_card()
    }

    /// Returns the opponent's last face-up card.
    pub fn current_opponent_card(&self) -> Option<Card> {
        self.table.lock().opponent_card()
    }

    /// Returns the cards in contention.
    pub fn war_cards(&self) -> Vec<Card> {
        self.table.lock().war_cards().to_vec()
    }

    /// Returns the number of cards taken out of play.
    pub fn discarded_count(&self) -> usize {
        self.table.lock().discarded().len()
    }

    /// Returns the winner once the game is over.
    pub fn winner(&self) -> Option<Winner> {
        self.result().map(|result| result.winner)
    }

    /// Returns the final result once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.table.lock().result()
    }

    /// Returns the war continuation waiting for its timer, if any.
    pub fn pending_war(&self) -> Option<PendingWar> {
        *self.pending_war.lock()
    }

    /// Returns a snapshot of the game.
    pub fn snapshot(&self) -> Snapshot {
        let pending = self.pending_war();
        Snapshot::capture(&self.table.lock(), pending)
    }

    /// Notifies the observer. Must not be called with the table locked.
    fn emit(&self, event: &GameEvent) {
        let mut observer = self.observer.lock();
        if let Some(observer) = observer.as_mut() {
            let snapshot = self.snapshot();
            observer.on_event(event, &snapshot);
        }
    }

    fn announce(&self, result: GameResult) {
        info!(winner = %result.winner, reason = ?result.reason, "game over");
        self.emit(&GameEvent::GameOver(result));
    }
}
