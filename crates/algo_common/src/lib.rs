//! Common definitions shared across the algorithm workbench.
//!
//! This crate provides the numeric limits that several algorithms depend on
//! and the catalog of problems understood by the case-file parser, the
//! solver dispatch and the command line runner.

#![no_std]

// Numeric limits used by the clock and text algorithms.
//
// Kept here so the parser that validates `HH:MM` literals and the algorithm
// that consumes them agree on the same ranges.
pub mod limits {
    /// Number of hours on a 24-hour clock face.
    pub const HOURS_PER_DAY: u16 = 24;

    /// Number of minutes in one hour.
    pub const MINUTES_PER_HOUR: u16 = 60;

    /// Number of minutes in a full day.
    ///
    /// Time points are stored as minutes since midnight, so every valid value
    /// lies in `0..MINUTES_PER_DAY`. Differences wrap around this value.
    pub const MINUTES_PER_DAY: usize = (HOURS_PER_DAY * MINUTES_PER_HOUR) as usize;

    /// Size of the lowercase Latin alphabet used by string hashing.
    pub const ALPHABET_LEN: u32 = 26;
}

/// Catalog of the algorithms shipped by the workbench.
///
/// Every problem has a stable kebab-case keyword. Case files start each line
/// with that keyword, and the runner dispatches on the parsed variant.
pub mod catalog {
    /// Rough difficulty grading of a problem.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Difficulty {
        Easy,
        Medium,
        Hard,
    }

    impl Difficulty {
        pub fn label(self) -> &'static str {
            match self {
                Difficulty::Easy => "easy",
                Difficulty::Medium => "medium",
                Difficulty::Hard => "hard",
            }
        }
    }

    /// Identifier of a single algorithm.
    ///
    /// The numeric discriminants are arbitrary but stable, so a problem can
    /// be packed into a byte when cases are grouped for reporting.
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Problem {
        /// Indices of two numbers that add up to a target.
        TwoSum = 0x01,

        /// Whether any value appears at least twice.
        ContainsDuplicate = 0x02,

        /// Inclusive range sums over an immutable array.
        RangeSum = 0x03,

        /// Words that occur exactly once across two sentences.
        UncommonWords = 0x04,

        /// Words made only of characters from an allowed set.
        ConsistentStrings = 0x05,

        /// Number of bit positions in which two numbers differ.
        MinBitFlips = 0x06,

        /// Smallest circular gap between `HH:MM` time points.
        MinTimeDifference = 0x10,

        /// Longest run of elements whose bitwise AND is maximal.
        LongestMaxAnd = 0x11,

        /// Chunked alphabet hash of a lowercase string.
        HashDividedString = 0x12,

        /// XOR of inclusive subarray ranges.
        XorQueries = 0x13,

        /// Shortest palindrome formed by prepending characters.
        ShortestPalindrome = 0x20,

        /// Least damage absorbed while killing every enemy.
        MinimumDamage = 0x21,
    }

    impl Problem {
        /// Every problem, in catalog order.
        pub const ALL: [Problem; 12] = [
            Problem::TwoSum,
            Problem::ContainsDuplicate,
            Problem::RangeSum,
            Problem::UncommonWords,
            Problem::ConsistentStrings,
            Problem::MinBitFlips,
            Problem::MinTimeDifference,
            Problem::LongestMaxAnd,
            Problem::HashDividedString,
            Problem::XorQueries,
            Problem::ShortestPalindrome,
            Problem::MinimumDamage,
        ];

        /// Keyword used for this problem in case files and on the command line.
        pub fn name(self) -> &'static str {
            match self {
                Problem::TwoSum => "two-sum",
                Problem::ContainsDuplicate => "contains-duplicate",
                Problem::RangeSum => "range-sum",
                Problem::UncommonWords => "uncommon-words",
                Problem::ConsistentStrings => "consistent-strings",
                Problem::MinBitFlips => "min-bit-flips",
                Problem::MinTimeDifference => "min-time-difference",
                Problem::LongestMaxAnd => "longest-max-and",
                Problem::HashDividedString => "hash-divided-string",
                Problem::XorQueries => "xor-queries",
                Problem::ShortestPalindrome => "shortest-palindrome",
                Problem::MinimumDamage => "minimum-damage",
            }
        }

        /// Looks a problem up by its keyword.
        pub fn from_name(name: &str) -> Option<Problem> {
            Self::ALL.into_iter().find(|p| p.name() == name)
        }

        pub fn difficulty(self) -> Difficulty {
            match self {
                Problem::TwoSum
                | Problem::ContainsDuplicate
                | Problem::RangeSum
                | Problem::UncommonWords
                | Problem::ConsistentStrings
                | Problem::MinBitFlips => Difficulty::Easy,
                Problem::MinTimeDifference
                | Problem::LongestMaxAnd
                | Problem::HashDividedString
                | Problem::XorQueries => Difficulty::Medium,
                Problem::ShortestPalindrome | Problem::MinimumDamage => Difficulty::Hard,
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn names_round_trip_through_lookup() {
            for problem in Problem::ALL {
                assert_eq!(Problem::from_name(problem.name()), Some(problem));
            }
            assert_eq!(Problem::from_name("three-sum"), None);
        }

        #[test]
        fn hard_problems_are_the_two_showcase_algorithms() {
            let hard: usize = Problem::ALL
                .iter()
                .filter(|p| p.difficulty() == Difficulty::Hard)
                .count();
            assert_eq!(hard, 2);
            assert_eq!(Problem::MinimumDamage.difficulty().label(), "hard");
        }
    }
}
