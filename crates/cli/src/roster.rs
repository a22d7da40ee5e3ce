// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players roster.
use anyhow::{Result, bail};
use rand::Rng;

use lotto_core::{Card, Player};

/// Creates the game players, humans first in the given order then computers.
///
/// Each player gets a new random card.
pub fn generate<R: Rng>(humans: &[String], computers: usize, rng: &mut R) -> Result<Vec<Player>> {
    if humans.is_empty() && computers == 0 {
        bail!("At least one player is required");
    }

    let mut players = Vec::with_capacity(humans.len() + computers);

    for nickname in humans {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            bail!("Empty nickname");
        }

        players.push(Player::human(nickname, Card::new(rng)));
    }

    for n in 1..=computers {
        players.push(Player::computer(format!("Computer {n}"), Card::new(rng)));
    }

    Ok(players)
}
