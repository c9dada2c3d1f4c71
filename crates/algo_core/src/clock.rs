//! Minimum difference between readings of a 24-hour clock.
//!
//! A day only has 1440 distinct minutes, so instead of sorting the readings
//! they are dropped into a one-day bitmap. Scanning the set bits in order
//! visits the readings sorted, and more than 1440 readings must contain a
//! repeat.

use crate::AlgoError;
use algo_common::limits::{HOURS_PER_DAY, MINUTES_PER_DAY, MINUTES_PER_HOUR};
use bitvec::prelude::*;
use core::fmt;

/// A clock reading, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a reading from its hour and minute parts.
    ///
    /// # Arguments
    ///
    /// * `hours` - Hour of the day, `0..24`
    /// * `minutes` - Minute of the hour, `0..60`
    ///
    /// # Returns
    ///
    /// The reading, or [`AlgoError::InvalidTime`] if either part is out of range.
    pub fn new(hours: u16, minutes: u16) -> Result<Self, AlgoError> {
        if hours >= HOURS_PER_DAY || minutes >= MINUTES_PER_HOUR {
            return Err(AlgoError::InvalidTime { hours, minutes });
        }
        Ok(Self(hours * MINUTES_PER_HOUR + minutes))
    }

    /// Minutes elapsed since midnight, in `0..1440`.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hours_part(self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minutes_part(self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours_part(), self.minutes_part())
    }
}

/// Smallest gap in minutes between any two readings, wrapping past midnight.
///
/// A single reading is a full day away from itself, so the answer is 1440.
/// Repeated readings give 0.
///
/// # Arguments
///
/// * `points` - Clock readings in any order
///
/// # Returns
///
/// The gap in minutes, or [`AlgoError::EmptyInput`] when there are no readings.
pub fn minimum_time_difference(points: &[TimeOfDay]) -> Result<u16, AlgoError> {
    if points.is_empty() {
        return Err(AlgoError::EmptyInput);
    }
    if points.len() > MINUTES_PER_DAY {
        return Ok(0);
    }

    let mut seen: BitArr!(for MINUTES_PER_DAY, in u64, Lsb0) = BitArray::ZERO;
    for point in points {
        if seen.replace(usize::from(point.minutes()), true) {
            return Ok(0);
        }
    }

    let mut ones = seen.iter_ones();
    // Non-empty input guarantees at least one set bit.
    let Some(first) = ones.next() else {
        return Err(AlgoError::EmptyInput);
    };

    let mut best = MINUTES_PER_DAY;
    let mut prev = first;
    for minute in ones {
        best = best.min(minute - prev);
        prev = minute;
    }
    best = best.min(first + MINUTES_PER_DAY - prev);

    Ok(best as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn t(h: u16, m: u16) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    #[test]
    fn time_of_day_validation() {
        assert_eq!(t(23, 59).minutes(), 1439);
        assert_eq!(t(0, 0).minutes(), 0);
        assert_eq!(
            TimeOfDay::new(24, 0),
            Err(AlgoError::InvalidTime {
                hours: 24,
                minutes: 0
            })
        );
        assert!(TimeOfDay::new(12, 60).is_err());
        assert_eq!(alloc::format!("{}", t(7, 5)), "07:05");
    }

    #[test]
    fn examples() {
        assert_eq!(minimum_time_difference(&[t(23, 59), t(0, 0)]), Ok(1));
        assert_eq!(
            minimum_time_difference(&[t(0, 0), t(23, 59), t(0, 0)]),
            Ok(0)
        );
        assert_eq!(minimum_time_difference(&[t(12, 0), t(0, 0)]), Ok(720));
        assert_eq!(
            minimum_time_difference(&[t(1, 0), t(5, 30), t(5, 0)]),
            Ok(30)
        );
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(minimum_time_difference(&[]), Err(AlgoError::EmptyInput));
        assert_eq!(minimum_time_difference(&[t(8, 15)]), Ok(1440));
    }

    #[test]
    fn matches_pairwise_reference() {
        let mut rng = StdRng::seed_from_u64(539);
        for _ in 0..200 {
            let n = rng.gen_range(2..20);
            let points: Vec<TimeOfDay> = (0..n)
                .map(|_| t(rng.gen_range(0..24), rng.gen_range(0..60)))
                .collect();

            let mut best = u16::MAX;
            for i in 0..points.len() {
                for j in i + 1..points.len() {
                    let d = points[i].minutes().abs_diff(points[j].minutes());
                    best = best.min(d.min(1440 - d));
                }
            }
            assert_eq!(minimum_time_difference(&points), Ok(best));
        }
    }
}
