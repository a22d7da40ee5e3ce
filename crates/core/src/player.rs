// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game player types.
use std::{fmt, sync::atomic};

use lotto_cards::{Card, Keg, Result};

use crate::oracle::{DecisionRequest, Oracle};

/// A unique player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Create a new unique player id.
    pub fn new_id() -> PlayerId {
        static LAST_ID: atomic::AtomicU32 = atomic::AtomicU32::new(1);
        PlayerId(LAST_ID.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who makes a player moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// The computer strikes every drawn number on its card.
    Computer,
    /// A person decides, wrong decisions eliminate the player.
    Human,
}

/// The result of a player move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The keg was struck out of the player card.
    pub struck: bool,
    /// The player made a wrong decision.
    pub eliminated: bool,
}

/// A game player.
///
/// Each player owns a unique id, a game tracks eliminated players by id.
#[derive(Debug)]
pub struct Player {
    /// The player id.
    pub id: PlayerId,
    /// This player nickname.
    pub nickname: String,
    /// Who makes this player moves.
    pub kind: PlayerKind,
    card: Card,
}

impl Player {
    /// Creates a new player.
    pub fn new(nickname: impl Into<String>, kind: PlayerKind, card: Card) -> Self {
        Self {
            id: PlayerId::new_id(),
            nickname: nickname.into(),
            kind,
            card,
        }
    }

    /// Creates a computer player.
    pub fn computer(nickname: impl Into<String>, card: Card) -> Self {
        Self::new(nickname, PlayerKind::Computer, card)
    }

    /// Creates a human player.
    pub fn human(nickname: impl Into<String>, card: Card) -> Self {
        Self::new(nickname, PlayerKind::Human, card)
    }

    /// This player card.
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// Checks if this is a computer player.
    pub fn is_computer(&self) -> bool {
        matches!(self.kind, PlayerKind::Computer)
    }

    /// Resolves this player move for a drawn keg.
    ///
    /// Computers strike the keg if it is on their card. Humans ask the oracle,
    /// they are eliminated if they strike a keg that is not on the card or skip
    /// one that is.
    pub fn resolve_move(
        &mut self,
        keg: Keg,
        remaining: usize,
        others: &[&Player],
        oracle: &mut dyn Oracle,
    ) -> Result<MoveOutcome> {
        let present = self.card.contains(keg);

        let strike = match self.kind {
            PlayerKind::Computer => present,
            PlayerKind::Human => {
                let request = DecisionRequest {
                    keg,
                    remaining,
                    player: self,
                    others,
                };
                oracle.decide(&request).is_strike()
            }
        };

        let eliminated = present != strike;
        let struck = strike && present;
        if struck {
            self.card.strike_out(keg)?;
        }

        Ok(MoveOutcome { struck, eliminated })
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nickname)
    }
}
