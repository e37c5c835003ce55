//! Round engine: pile ownership, card comparison, and war escalation.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::mem;

use rand::Rng;

use crate::card::Card;
use crate::deck::{allocate, build_deck, shuffle};
use crate::error::InvalidArgument;
use crate::options::PilePolicy;
use crate::pile::Pile;
use crate::result::{EndReason, GameResult, PilesChosen, RoundOutcome, Side, Winner};

use super::GamePhase;

/// Cards a side must hold to pay for a war under [`PilePolicy::SinglePile`]:
/// one face down and one to compare.
const WAR_STAKE: usize = 2;

/// The cards on the table and the phase of the game they belong to.
///
/// `Table` holds no randomness of its own; every operation that needs a
/// random choice takes the generator as an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    policy: PilePolicy,
    phase: GamePhase,
    /// Piles on offer while choosing.
    offered: Vec<Pile>,
    player: Pile,
    /// A single pile under `SinglePile`, one or more under `MultiPile`.
    opponents: Vec<Pile>,
    discarded: Vec<Card>,
    war_cards: Vec<Card>,
    player_card: Option<Card>,
    opponent_card: Option<Card>,
    result: Option<GameResult>,
}

impl Table {
    /// Creates an empty table in the [`GamePhase::Initial`] phase.
    #[must_use]
    pub const fn new(policy: PilePolicy) -> Self {
        Self {
            policy,
            phase: GamePhase::Initial,
            offered: Vec::new(),
            player: Pile::new(),
            opponents: Vec::new(),
            discarded: Vec::new(),
            war_cards: Vec::new(),
            player_card: None,
            opponent_card: None,
            result: None,
        }
    }

    /// Builds and shuffles a fresh deck, splits it into `piles` piles, and
    /// offers them to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if `piles` is zero.
    pub fn deal<R: Rng + ?Sized>(
        policy: PilePolicy,
        piles: usize,
        rng: &mut R,
    ) -> Result<Self, InvalidArgument> {
        let mut cards = build_deck();
        shuffle(&mut cards, rng);
        let offered = allocate(cards, piles)?;

        Ok(Self {
            phase: GamePhase::Choosing,
            offered,
            ..Self::new(policy)
        })
    }

    /// Creates a table already in play with the given piles.
    ///
    /// # Errors
    ///
    /// Returns an error if `SinglePile` is not given exactly one opponent
    /// pile, or `MultiPile` is given none.
    pub fn in_play(
        policy: PilePolicy,
        player: Pile,
        opponents: Vec<Pile>,
    ) -> Result<Self, InvalidArgument> {
        let valid = match policy {
            PilePolicy::SinglePile => opponents.len() == 1,
            PilePolicy::MultiPile => !opponents.is_empty(),
        };
        if !valid {
            return Err(InvalidArgument::OpponentPiles(opponents.len()));
        }

        Ok(Self {
            phase: GamePhase::Playing,
            player,
            opponents,
            ..Self::new(policy)
        })
    }

    /// Gives the pile at `index` to the player and hands the rest to the
    /// opponent according to the pile policy.
    ///
    /// Returns `Ok(None)` without touching the table outside the choosing
    /// phase.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or fewer than two piles
    /// are on offer. The table is left unchanged.
    pub fn choose_pile<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<Option<PilesChosen>, InvalidArgument> {
        if self.phase != GamePhase::Choosing {
            return Ok(None);
        }

        let available = self.offered.len();
        if index >= available {
            return Err(InvalidArgument::PileIndex { index, available });
        }
        if available < 2 {
            return Err(InvalidArgument::TooFewPiles(available));
        }

        let mut remaining = mem::take(&mut self.offered);
        self.player = remaining.remove(index);

        let opponent_pile = match self.policy {
            PilePolicy::SinglePile => {
                let pick = rng.random_range(0..remaining.len());
                self.opponents = alloc::vec![remaining.remove(pick)];
                self.discarded = remaining.into_iter().flatten().collect();
                // Offer index, counting the player's pile.
                Some(if pick >= index { pick + 1 } else { pick })
            }
            PilePolicy::MultiPile => {
                self.opponents = remaining;
                None
            }
        };

        self.phase = GamePhase::Playing;
        self.end_if_exhausted();

        Ok(Some(PilesChosen {
            index,
            opponent_pile,
            discarded: self.discarded.len(),
        }))
    }

    /// Plays one round: both sides draw, the higher card takes everything in
    /// contention, and a tie escalates to war.
    ///
    /// Returns `None` without touching the table unless the phase is
    /// [`GamePhase::Playing`] or [`GamePhase::War`].
    pub fn play_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<RoundOutcome> {
        if !self.phase.is_in_play() {
            return None;
        }

        if self.end_if_exhausted() {
            return Some(RoundOutcome::Exhausted);
        }

        // Both sides hold a card, checked above.
        let player_card = self.player.draw()?;
        let opponent_card = self.draw_opponent()?;

        self.player_card = Some(player_card);
        self.opponent_card = Some(opponent_card);
        self.war_cards.extend([player_card, opponent_card]);

        let outcome = match player_card.value().cmp(&opponent_card.value()) {
            Ordering::Greater => RoundOutcome::Won {
                winner: Side::Player,
                player_card,
                opponent_card,
                cards_won: self.award(Side::Player, rng),
            },
            Ordering::Less => RoundOutcome::Won {
                winner: Side::Opponent,
                player_card,
                opponent_card,
                cards_won: self.award(Side::Opponent, rng),
            },
            Ordering::Equal => RoundOutcome::War {
                player_card,
                opponent_card,
                hidden_cards: self.declare_war(),
            },
        };

        Some(outcome)
    }

    /// Moves every card in contention to the back of the winner's pile.
    fn award<R: Rng + ?Sized>(&mut self, side: Side, rng: &mut R) -> usize {
        let target = match side {
            Side::Player => &mut self.player,
            // `in_play` and `choose_pile` never leave the opponent without a pile.
            Side::Opponent => {
                let index = match self.policy {
                    PilePolicy::SinglePile => 0,
                    PilePolicy::MultiPile => rng.random_range(0..self.opponents.len()),
                };
                &mut self.opponents[index]
            }
        };

        let cards_won = self.war_cards.len();
        target.extend(self.war_cards.drain(..));

        self.phase = GamePhase::Playing;
        self.end_if_exhausted();
        cards_won
    }

    /// Enters the war phase. Returns the number of hidden cards added.
    fn declare_war(&mut self) -> usize {
        self.phase = GamePhase::War;

        match self.policy {
            PilePolicy::SinglePile => {
                let player_cards = self.player.len();
                let opponent_cards = self.opponent_card_count();

                if player_cards < WAR_STAKE || opponent_cards < WAR_STAKE {
                    let winner = match (player_cards >= WAR_STAKE, opponent_cards >= WAR_STAKE) {
                        (true, false) => Winner::Player,
                        (false, true) => Winner::Opponent,
                        _ => Winner::Draw,
                    };
                    self.finish(GameResult {
                        winner,
                        reason: EndReason::WarUnresolvable,
                    });
                    return 0;
                }

                let hidden = [self.player.draw(), self.draw_opponent()];
                let before = self.war_cards.len();
                self.war_cards.extend(hidden.into_iter().flatten());
                self.war_cards.len() - before
            }
            PilePolicy::MultiPile => {
                self.end_if_exhausted();
                0
            }
        }
    }

    /// Draws from the first opponent pile that has a card.
    fn draw_opponent(&mut self) -> Option<Card> {
        self.opponents
            .iter_mut()
            .find(|pile| !pile.is_empty())?
            .draw()
    }

    /// Ends the game by card count if either side is out of cards.
    fn end_if_exhausted(&mut self) -> bool {
        let player_out = self.player.is_empty();
        let opponent_out = self.opponent_card_count() == 0;

        let result = match (player_out, opponent_out) {
            (false, false) => return false,
            (true, true) => GameResult {
                winner: Winner::Draw,
                reason: EndReason::BothExhausted,
            },
            (true, false) => GameResult {
                winner: Winner::Opponent,
                reason: EndReason::PlayerExhausted,
            },
            (false, true) => GameResult {
                winner: Winner::Player,
                reason: EndReason::OpponentExhausted,
            },
        };

        self.finish(result);
        true
    }

    fn finish(&mut self, result: GameResult) {
        self.phase = GamePhase::GameOver;
        self.result = Some(result);
    }

    /// Returns the pile policy.
    #[must_use]
    pub const fn policy(&self) -> PilePolicy {
        self.policy
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the sizes of the piles on offer.
    #[must_use]
    pub fn offered_piles(&self) -> Vec<usize> {
        self.offered.iter().map(Pile::len).collect()
    }

    /// Returns the player's pile.
    #[must_use]
    pub const fn player_pile(&self) -> &Pile {
        &self.player
    }

    /// Returns the opponent's piles.
    #[must_use]
    pub fn opponent_piles(&self) -> &[Pile] {
        &self.opponents
    }

    /// Returns the number of cards the opponent holds across all piles.
    #[must_use]
    pub fn opponent_card_count(&self) -> usize {
        self.opponents.iter().map(Pile::len).sum()
    }

    /// Returns the player's last face-up card.
    #[must_use]
    pub const fn player_card(&self) -> Option<Card> {
        self.player_card
    }

    /// Returns the opponent's last face-up card.
    #[must_use]
    pub const fn opponent_card(&self) -> Option<Card> {
        self.opponent_card
    }

    /// Returns the cards in contention.
    #[must_use]
    pub fn war_cards(&self) -> &[Card] {
        &self.war_cards
    }

    /// Returns the cards taken out of play.
    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    /// Returns the final result once the game is over.
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns the number of cards on the table, wherever they are.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.offered.iter().map(Pile::len).sum::<usize>()
            + self.player.len()
            + self.opponent_card_count()
            + self.war_cards.len()
            + self.discarded.len()
    }
}
