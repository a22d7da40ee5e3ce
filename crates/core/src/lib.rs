// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lotto game core types.
//!
//! A [Game] draws kegs from a [KegsBag] and offers each keg to its players.
//! Computer players strike numbers on their own, human players answer through
//! an [Oracle] and are eliminated when they answer wrong. A [Presenter] can
//! observe every move:
//!
//! ```
//! # use lotto_core::*;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut rng = StdRng::seed_from_u64(42);
//! let players = vec![
//!     Player::computer("Alice", Card::new(&mut rng)),
//!     Player::computer("Bob", Card::new(&mut rng)),
//! ];
//!
//! let mut game = Game::with_rng(players, &mut rng);
//! let mut oracle = |_: &DecisionRequest<'_>| Decision::Skip;
//! game.run(&mut oracle, &mut (), || false).unwrap();
//!
//! assert!(game.winner().is_some());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod game;
pub mod oracle;
pub mod player;

pub use game::{Game, GameStatus};
pub use oracle::{Decision, DecisionRequest, Oracle, Presenter};
pub use player::{MoveOutcome, Player, PlayerId, PlayerKind};

// Reexport cards types.
pub use lotto_cards::{Card, Cell, Error, Keg, KegsBag, Result};
