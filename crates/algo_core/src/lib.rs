//! Core algorithm implementations for the workbench.
//!
//! Every module in this crate is a pure, synchronous computation over
//! caller-owned inputs. Nothing is retained between calls and no module
//! depends on another beyond the shared bit helpers. The crate is `no_std`
//! so the same code runs inside the host runner and in constrained test
//! harnesses alike.

#![no_std]

extern crate alloc;

use core::fmt;

/// Bit manipulation: bit flip counting, maximal-AND runs and packed bit words.
///
/// Provides `BitPack` helpers over `u64` word arrays together with the
/// single-pass bit problems. The packed helpers back the character sets used
/// by the text module.
pub mod bits;

/// Minimum time difference between clock readings.
///
/// Converts `HH:MM` readings into minutes since midnight and finds the
/// smallest circular gap using a one-day minute bitmap instead of sorting.
pub mod clock;

/// Greedy damage-order optimizer.
///
/// Chooses the order in which enemies are eliminated so that the total
/// damage absorbed is minimal. The ranking uses an exchange-argument key
/// compared by cross-multiplication, so no floating point is involved.
pub mod damage;

/// Hash based lookups: complement search and duplicate detection.
pub mod lookup;

/// Shortest palindrome construction via the prefix (border) function.
///
/// Also exposes the border table itself, which is the building block of
/// linear-time string matching.
pub mod palindrome;

/// Prefix accumulations answering range sum and range XOR queries in O(1).
pub mod prefix;

/// Word and character scanning over sentences and short strings.
pub mod text;

/// Failure modes of the algorithms in this crate.
///
/// The algorithms are total over their documented domain. These errors are
/// returned when a caller steps outside it, instead of panicking or
/// producing an unspecified value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgoError {
    /// Two sequences that must be aligned have different lengths.
    LengthMismatch { left: usize, right: usize },

    /// A divisor or chunk size is zero.
    ///
    /// Raised for an attacker with no power (hit counts would be undefined)
    /// and for a zero chunk width in string hashing.
    ZeroDivisor,

    /// An index lies past the end of the queried sequence.
    IndexOutOfBounds { index: usize, len: usize },

    /// An index that must appear at most once was repeated.
    DuplicateIndex(usize),

    /// A range whose left end lies after its right end.
    InvalidRange { left: usize, right: usize },

    /// A character outside the alphabet an algorithm is defined over.
    InvalidCharacter(char),

    /// An hour or minute outside the 24-hour clock.
    InvalidTime { hours: u16, minutes: u16 },

    /// An operation that needs at least one element received none.
    EmptyInput,

    /// An intermediate or final result does not fit the result type.
    Overflow,
}

impl fmt::Display for AlgoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AlgoError::LengthMismatch { left, right } => {
                write!(f, "sequence lengths differ: {} vs {}", left, right)
            }
            AlgoError::ZeroDivisor => f.write_str("divisor must be non-zero"),
            AlgoError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            AlgoError::DuplicateIndex(index) => write!(f, "index {} appears more than once", index),
            AlgoError::InvalidRange { left, right } => {
                write!(f, "range start {} is after range end {}", left, right)
            }
            AlgoError::InvalidCharacter(c) => write!(f, "character {:?} is not allowed", c),
            AlgoError::InvalidTime { hours, minutes } => {
                write!(f, "{:02}:{:02} is not a valid time of day", hours, minutes)
            }
            AlgoError::EmptyInput => f.write_str("input must not be empty"),
            AlgoError::Overflow => f.write_str("arithmetic overflow"),
        }
    }
}

impl core::error::Error for AlgoError {}
