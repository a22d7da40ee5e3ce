// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The kegs bag.
use rand::prelude::*;

use crate::{Error, Keg, Result, card::check_kegs};

/// A bag of kegs drawn one at a time without replacement.
#[derive(Debug, Clone)]
pub struct KegsBag {
    // Kegs in reverse draw order, the next keg is the last one.
    kegs: Vec<Keg>,
}

impl KegsBag {
    /// The number of kegs in a full bag.
    pub const SIZE: usize = 90;

    /// Creates a new shuffled bag.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut bag = Self::default();
        bag.kegs.shuffle(rng);
        bag
    }

    /// Creates a bag that draws the given kegs in order.
    pub fn from_kegs(kegs: &[Keg]) -> Result<Self> {
        check_kegs(kegs)?;

        let kegs = kegs.iter().rev().copied().collect();
        Ok(Self { kegs })
    }

    /// Draws the next keg from the bag.
    pub fn draw(&mut self) -> Result<Keg> {
        self.kegs.pop().ok_or(Error::Exhausted)
    }

    /// Number of kegs left in the bag.
    pub fn len(&self) -> usize {
        self.kegs.len()
    }

    /// Checks if the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.kegs.is_empty()
    }
}

impl Default for KegsBag {
    fn default() -> Self {
        let kegs = (Keg::MIN.value()..=Keg::MAX.value()).rev().map(Keg::new).collect();
        Self { kegs }
    }
}
