// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and bag errors.
use thiserror::Error;

use crate::Keg;

/// Errors from card and bag operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A strike out was requested for a number that is not on the card.
    #[error("Number {0} is not on the card")]
    NotFound(Keg),
    /// A draw was requested from an empty bag.
    #[error("The kegs bag is empty")]
    Exhausted,
    /// A keg number outside the bag range.
    #[error("Keg {0} is out of range")]
    OutOfRange(Keg),
    /// A keg number that appears more than once.
    #[error("Keg {0} appears more than once")]
    Duplicate(Keg),
    /// More numbers than fit on a card.
    #[error("A card cannot hold {0} numbers")]
    TooManyNumbers(usize),
}

/// Result type for cards and bag operations.
pub type Result<T> = std::result::Result<T, Error>;
