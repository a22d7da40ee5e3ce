// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lotto cards types.
//!
//! This crate defines the [Card] a player holds and the [KegsBag] the numbered
//! [Keg]s are drawn from. Randomness is always passed in by the caller so that
//! layouts and draw order can be reproduced with a seeded generator:
//!
//! ```
//! # use lotto_cards::{Card, KegsBag};
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut card = Card::new(&mut rng);
//! let mut bag = KegsBag::new_and_shuffled(&mut rng);
//!
//! while !bag.is_empty() {
//!     let keg = bag.draw().unwrap();
//!     if card.contains(keg) {
//!         card.strike_out(keg).unwrap();
//!     }
//! }
//!
//! assert!(card.is_empty());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod bag;
mod card;
mod error;

pub use bag::KegsBag;
pub use card::{Card, Cell, Keg};
pub use error::{Error, Result};
