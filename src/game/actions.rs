use core::sync::atomic::Ordering;

use tracing::{debug, trace};

use crate::error::InvalidArgument;
use crate::event::{GameEvent, PendingWar, WarTicket};
use crate::result::{GameResult, RoundOutcome};

use super::Game;

impl Game {
    /// Player action: take the pile at `index`.
    ///
    /// Outside the choosing phase this does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` does not name a pile on offer.
    pub fn choose_pile(&self, index: usize) -> Result<(), InvalidArgument> {
        let mut table = self.table.lock();
        let chosen = table.choose_pile(index, &mut *self.rng.lock())?;
        let result = table.result();
        drop(table);

        let Some(chosen) = chosen else {
            trace!(index, "choose_pile ignored outside the choosing phase");
            return Ok(());
        };

        debug!(
            index,
            opponent_pile = ?chosen.opponent_pile,
            discarded = chosen.discarded,
            "pile chosen"
        );
        self.emit(&GameEvent::PileChosen(chosen));

        if let Some(result) = result {
            self.announce(result);
        }

        Ok(())
    }

    /// Player action: play the next round.
    ///
    /// Ignored outside play and while a war continuation is pending; the
    /// continuation plays that round through [`Game::resume_war`]. The
    /// pending check and the round run under one lock, so concurrent calls
    /// cannot both get past a tie.
    pub fn play_round(&self) {
        let mut pending = self.pending_war.lock();
        if pending.is_some() {
            trace!("play_round ignored while a war continuation is pending");
            return;
        }

        let round = self.advance(&mut pending);
        drop(pending);
        self.report(round);
    }

    /// Runs the war continuation identified by `ticket`.
    ///
    /// Returns `false` without doing anything if the ticket is not the
    /// pending one.
    pub fn resume_war(&self, ticket: WarTicket) -> bool {
        let mut pending = self.pending_war.lock();
        if !pending.is_some_and(|war| war.ticket == ticket) {
            trace!(ticket = ticket.id(), "stale war ticket ignored");
            return false;
        }
        *pending = None;

        let round = self.advance(&mut pending);
        drop(pending);
        self.report(round);
        true
    }

    /// Plays one round on the table and issues a war ticket if the round
    /// tied. Called with the pending war slot locked.
    fn advance(&self, pending: &mut Option<PendingWar>) -> Option<Round> {
        let mut table = self.table.lock();
        let Some(outcome) = table.play_round(&mut *self.rng.lock()) else {
            trace!(phase = ?table.phase(), "play_round ignored outside play");
            return None;
        };
        let result = table.result();
        drop(table);

        let war = match outcome {
            RoundOutcome::War { .. } if result.is_none() => self.issue_war(pending),
            _ => None,
        };

        Some(Round {
            outcome,
            result,
            war,
        })
    }

    /// Hands a new war to the scheduler and tells the observer about the
    /// round. Must not be called with any game lock held.
    fn report(&self, round: Option<Round>) {
        let Some(Round {
            outcome,
            result,
            war,
        }) = round
        else {
            return;
        };

        if let Some(war) = war {
            if let Some(scheduler) = self.scheduler.lock().as_mut() {
                scheduler.schedule(war);
            }
        }

        match outcome {
            RoundOutcome::Won {
                winner,
                player_card,
                opponent_card,
                cards_won,
            } => {
                debug!(%winner, %player_card, %opponent_card, cards_won, "round won");
                self.emit(&GameEvent::RoundWon {
                    winner,
                    player_card,
                    opponent_card,
                    cards_won,
                });
            }
            RoundOutcome::War {
                player_card,
                opponent_card,
                hidden_cards,
            } => {
                debug!(%player_card, %opponent_card, hidden_cards, "war declared");
                self.emit(&GameEvent::WarDeclared {
                    player_card,
                    opponent_card,
                    hidden_cards,
                    pending: war,
                });
            }
            RoundOutcome::Exhausted => {}
        }

        if let Some(result) = result {
            self.announce(result);
        }
    }

    /// Issues a ticket for the war continuation, unless wars resolve on the
    /// next round.
    fn issue_war(&self, pending: &mut Option<PendingWar>) -> Option<PendingWar> {
        let delay = self.options.war_delay?;
        let ticket = WarTicket::from_id(self.next_ticket.fetch_add(1, Ordering::Relaxed));
        let war = PendingWar { ticket, delay };
        *pending = Some(war);
        Some(war)
    }
}

/// What a round did, carried out of the locks for reporting.
struct Round {
    outcome: RoundOutcome,
    result: Option<GameResult>,
    war: Option<PendingWar>,
}
