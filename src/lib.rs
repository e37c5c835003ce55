//! A Spanish-deck war card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals the 40-card deck into
//! piles, lets the player choose one, and resolves rounds against an
//! automated opponent, escalating ties into wars until one side runs out of
//! cards. Rendering and timers stay with the host: it observes
//! [`GameEvent`]s and resumes wars through [`Game::resume_war`].
//!
//! # Example
//!
//! ```
//! use guerra::{Game, GameOptions, GamePhase};
//!
//! let game = Game::new(GameOptions::default().with_war_delay(None), 42).unwrap();
//! game.new_game().unwrap();
//! game.choose_pile(0).unwrap();
//!
//! for _ in 0..1_000 {
//!     if game.phase() == GamePhase::GameOver {
//!         break;
//!     }
//!     game.play_round();
//! }
//! assert_ne!(game.phase(), GamePhase::Choosing);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod pile;
pub mod result;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::InvalidArgument;
pub use event::{GameEvent, Observer, PendingWar, Scheduler, WarTicket};
pub use game::{Game, GamePhase, Table};
pub use options::{GameOptions, PilePolicy};
pub use pile::Pile;
pub use result::{EndReason, GameResult, PilesChosen, RoundOutcome, Side, Winner};
pub use snapshot::Snapshot;
