use guerra::{
    Card, EndReason, Game, GameOptions, GamePhase, GameResult, PendingWar, PilePolicy, Snapshot,
    Suit, WarTicket, Winner,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Creates a game. `multi_pile` keeps every unchosen pile with the opponent.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, multi_pile: bool) -> Result<WasmGame, JsValue> {
        let policy = if multi_pile {
            PilePolicy::MultiPile
        } else {
            PilePolicy::SinglePile
        };
        let options = GameOptions::default().with_policy(policy);
        let game = Game::new(options, seed as u64).map_err(js_err)?;
        Ok(Self { game })
    }

    pub fn new_game(&self) -> Result<(), JsValue> {
        self.game.new_game().map_err(js_err)
    }

    pub fn choose_pile(&self, index: u32) -> Result<(), JsValue> {
        self.game.choose_pile(index as usize).map_err(js_err)
    }

    pub fn play_round(&self) {
        self.game.play_round();
    }

    /// Call from `setTimeout` with the ticket found in `snapshot().pending_war`.
    pub fn resume_war(&self, ticket: u32) -> bool {
        self.game.resume_war(WarTicket::from_id(ticket))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsSnapshot::from(self.game.snapshot()))
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    phase: &'static str,
    offered_piles: Vec<u32>,
    player_cards: u32,
    opponent_piles: Vec<u32>,
    player_card: Option<JsCard>,
    opponent_card: Option<JsCard>,
    war_cards: u32,
    discarded: u32,
    result: Option<JsResult>,
    pending_war: Option<JsPendingWar>,
}

impl From<Snapshot> for JsSnapshot {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            phase: phase_to_str(snapshot.phase),
            offered_piles: snapshot.offered_piles.iter().map(|&len| len as u32).collect(),
            player_cards: snapshot.player_cards as u32,
            opponent_piles: snapshot.opponent_piles.iter().map(|&len| len as u32).collect(),
            player_card: snapshot.player_card.map(card_to_js),
            opponent_card: snapshot.opponent_card.map(card_to_js),
            war_cards: snapshot.war_cards as u32,
            discarded: snapshot.discarded as u32,
            result: snapshot.result.map(JsResult::from),
            pending_war: snapshot.pending_war.map(JsPendingWar::from),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    value: u8,
    display: String,
}

#[derive(Serialize)]
struct JsResult {
    winner: &'static str,
    reason: &'static str,
}

impl From<GameResult> for JsResult {
    fn from(result: GameResult) -> Self {
        Self {
            winner: winner_to_str(result.winner),
            reason: reason_to_str(result.reason),
        }
    }
}

#[derive(Serialize)]
struct JsPendingWar {
    ticket: u32,
    delay_ms: u32,
}

impl From<PendingWar> for JsPendingWar {
    fn from(war: PendingWar) -> Self {
        Self {
            ticket: war.ticket.id(),
            delay_ms: war.delay.as_millis() as u32,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.name(),
        value: card.value(),
        display: card.to_string(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Oros => "Oros",
        Suit::Copas => "Copas",
        Suit::Espadas => "Espadas",
        Suit::Bastos => "Bastos",
    }
}

fn phase_to_str(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Initial => "Initial",
        GamePhase::Choosing => "Choosing",
        GamePhase::Playing => "Playing",
        GamePhase::War => "War",
        GamePhase::GameOver => "GameOver",
    }
}

fn winner_to_str(winner: Winner) -> &'static str {
    match winner {
        Winner::Player => "Player",
        Winner::Opponent => "Opponent",
        Winner::Draw => "Draw",
    }
}

fn reason_to_str(reason: EndReason) -> &'static str {
    match reason {
        EndReason::PlayerExhausted => "PlayerExhausted",
        EndReason::OpponentExhausted => "OpponentExhausted",
        EndReason::BothExhausted => "BothExhausted",
        EndReason::WarUnresolvable => "WarUnresolvable",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
