// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lotto card definitions.
use ahash::AHashSet;
use rand::{Rng, seq::index};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Error, KegsBag, Result};

/// A numbered keg drawn from the bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Keg(u8);

impl Keg {
    /// The smallest keg number.
    pub const MIN: Keg = Keg(1);
    /// The largest keg number.
    pub const MAX: Keg = Keg(KegsBag::SIZE as u8);

    /// Creates a keg with the given number.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The keg number.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Checks if the keg number is in the bag range.
    pub fn is_valid(&self) -> bool {
        Self::MIN <= *self && *self <= Self::MAX
    }
}

impl fmt::Display for Keg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward to u8 so width and alignment flags apply.
        fmt::Display::fmt(&self.0, f)
    }
}

/// A card grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// An empty cell.
    #[default]
    Blank,
    /// A number that has not been struck out.
    Number(Keg),
    /// A number that has been struck out.
    Struck(Keg),
}

impl Cell {
    /// The keg in this cell if any.
    pub fn keg(&self) -> Option<Keg> {
        match self {
            Cell::Blank => None,
            Cell::Number(keg) | Cell::Struck(keg) => Some(*keg),
        }
    }
}

/// A lotto card.
///
/// A card holds up to [Card::SIZE] unique numbers laid out on a grid of
/// [Card::ROWS] rows and [Card::COLS] columns. Each row holds
/// [Card::NUMBERS_PER_ROW] numbers sorted left to right, with blank cells
/// randomly placed between them:
///
/// ```text
/// --------------------------
///  3    21    45 52    77
///     14 29 38       66 81
///  8       33    57 60    90
/// --------------------------
/// ```
///
/// Numbers are removed from the card with [Card::strike_out], the grid keeps
/// the struck numbers so they can still be displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    numbers: Vec<Keg>,
    grid: [[Cell; Card::COLS]; Card::ROWS],
}

impl Card {
    /// Number of rows in the grid.
    pub const ROWS: usize = 3;
    /// Number of columns in the grid.
    pub const COLS: usize = 9;
    /// Number of numbers in each row.
    pub const NUMBERS_PER_ROW: usize = 5;
    /// Number of numbers on a card.
    pub const SIZE: usize = Self::ROWS * Self::NUMBERS_PER_ROW;

    /// Creates a card with numbers sampled from the bag range.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let numbers = index::sample(rng, KegsBag::SIZE, Self::SIZE)
            .into_iter()
            .map(|idx| Keg(idx as u8 + 1))
            .collect();
        Self::with_layout(numbers, rng)
    }

    /// Creates a card with the given numbers.
    ///
    /// The numbers are split into rows in the given order, a list shorter than
    /// [Card::SIZE] leaves the trailing rows blank.
    pub fn from_numbers<R: Rng>(numbers: &[Keg], rng: &mut R) -> Result<Self> {
        if numbers.len() > Self::SIZE {
            return Err(Error::TooManyNumbers(numbers.len()));
        }

        check_kegs(numbers)?;

        Ok(Self::with_layout(numbers.to_vec(), rng))
    }

    fn with_layout<R: Rng>(numbers: Vec<Keg>, rng: &mut R) -> Self {
        let mut grid = [[Cell::Blank; Self::COLS]; Self::ROWS];

        for (row, chunk) in grid.iter_mut().zip(numbers.chunks(Self::NUMBERS_PER_ROW)) {
            let mut sorted = chunk.to_vec();
            sorted.sort_unstable();
            fill_row(row, &sorted, rng);
        }

        Self { numbers, grid }
    }

    /// Checks if a number has not been struck out yet.
    pub fn contains(&self, keg: Keg) -> bool {
        self.numbers.contains(&keg)
    }

    /// Number of numbers left on the card.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Checks if all numbers have been struck out.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// The numbers left on the card.
    pub fn numbers(&self) -> &[Keg] {
        &self.numbers
    }

    /// Returns an iterator over the grid rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; Card::COLS]> {
        self.grid.iter()
    }

    /// Strikes out a number from the card.
    ///
    /// Fails with [Error::NotFound] if the number is not on the card, in which
    /// case the card is left unchanged.
    pub fn strike_out(&mut self, keg: Keg) -> Result<()> {
        let pos = self
            .numbers
            .iter()
            .position(|n| *n == keg)
            .ok_or(Error::NotFound(keg))?;
        self.numbers.remove(pos);

        for cell in self.grid.iter_mut().flatten() {
            if *cell == Cell::Number(keg) {
                *cell = Cell::Struck(keg);
            }
        }

        Ok(())
    }

    /// Checks if every number left on this card is also on the other card.
    ///
    /// This is not symmetric, a card is contained in any card that has more
    /// numbers than it does.
    pub fn is_contained_in(&self, other: &Card) -> bool {
        self.numbers.iter().all(|n| other.contains(*n))
    }

    /// Compares cards by the number of numbers left on them.
    pub fn cmp_remaining(&self, other: &Card) -> Ordering {
        self.len().cmp(&other.len())
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_contained_in(other)
    }
}

impl Eq for Card {}

/// Places sorted numbers on a row left to right.
///
/// At each column the next number is placed with probability
/// `numbers_left / columns_left`, so all numbers fit by the last column.
fn fill_row<R: Rng>(row: &mut [Cell; Card::COLS], numbers: &[Keg], rng: &mut R) {
    let mut next = 0;

    for (col, cell) in row.iter_mut().enumerate() {
        if next == numbers.len() {
            break;
        }

        let cols_left = (Card::COLS - col) as f64;
        let numbers_left = (Card::NUMBERS_PER_ROW - next) as f64;
        if rng.random::<f64>() < numbers_left / cols_left {
            *cell = Cell::Number(numbers[next]);
            next += 1;
        }
    }
}

/// Checks kegs are in the bag range and unique.
pub(crate) fn check_kegs(kegs: &[Keg]) -> Result<()> {
    let mut seen = AHashSet::with_capacity(kegs.len());

    for keg in kegs {
        if !keg.is_valid() {
            return Err(Error::OutOfRange(*keg));
        }

        if !seen.insert(*keg) {
            return Err(Error::Duplicate(*keg));
        }
    }

    Ok(())
}
