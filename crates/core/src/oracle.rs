// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Decision and presentation hooks used while a game is played.
use log::warn;
use lotto_cards::Keg;

use crate::player::{MoveOutcome, Player};

/// A human player decision for a drawn keg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Decision {
    /// Leave the card as it is.
    #[default]
    Skip,
    /// Strike the keg out of the card.
    Strike,
}

/// The menu answer for no.
pub const NO_ANSWER: u8 = 1;
/// The menu answer for yes.
pub const YES_ANSWER: u8 = 2;

/// Parses a yes/no menu answer.
///
/// The answer is read as a number, anything that is not [YES_ANSWER] or
/// [NO_ANSWER] is logged and counts as no.
pub fn parse_yes_no(answer: &str) -> bool {
    match answer.trim().parse::<u8>() {
        Ok(YES_ANSWER) => true,
        Ok(NO_ANSWER) => false,
        _ => {
            warn!("Unexpected answer {:?}, assuming no", answer.trim());
            false
        }
    }
}

impl Decision {
    /// Parses a strike menu answer, anything that is not yes is a skip.
    pub fn from_answer(answer: &str) -> Self {
        Self::from(parse_yes_no(answer))
    }

    /// Checks if this is a strike decision.
    pub fn is_strike(&self) -> bool {
        matches!(self, Decision::Strike)
    }
}

impl From<bool> for Decision {
    fn from(strike: bool) -> Self {
        if strike {
            Decision::Strike
        } else {
            Decision::Skip
        }
    }
}

/// The state shown to a human player before deciding.
#[derive(Debug)]
pub struct DecisionRequest<'a> {
    /// The drawn keg.
    pub keg: Keg,
    /// Kegs left in the bag.
    pub remaining: usize,
    /// The deciding player.
    pub player: &'a Player,
    /// The other players still in the game, their cards can be inspected
    /// before deciding.
    pub others: &'a [&'a Player],
}

/// A source of human players decisions.
pub trait Oracle {
    /// Decides whether to strike the requested keg.
    fn decide(&mut self, request: &DecisionRequest<'_>) -> Decision;
}

impl<F> Oracle for F
where
    F: FnMut(&DecisionRequest<'_>) -> Decision,
{
    fn decide(&mut self, request: &DecisionRequest<'_>) -> Decision {
        self(request)
    }
}

/// Observes the game as it is played.
pub trait Presenter {
    /// A keg has been drawn and it is the given player turn.
    fn keg_drawn(&mut self, _keg: Keg, _remaining: usize, _player: &Player) {}

    /// A player has completed its move.
    fn move_resolved(&mut self, _player: &Player, _outcome: MoveOutcome) {}
}

/// A presenter that shows nothing.
impl Presenter for () {}
