//! Shortest palindrome by prepending characters.
//!
//! The shortest palindrome ending in `s` is `reverse(s[k..]) + s`, where `k`
//! is the length of the longest palindromic prefix of `s`. That prefix is
//! found with the border (prefix) function of `s + separator + reverse(s)`:
//! a border of the probe is a prefix of `s` that reappears, reversed, at the
//! end of `s`, i.e. a palindromic prefix. The separator keeps borders from
//! spanning both halves.

use alloc::string::String;
use alloc::vec::Vec;
use core::iter;

/// Border table of `seq`.
///
/// `table[i]` is the length of the longest proper prefix of `seq[..=i]` that
/// is also a suffix of it. Runs in linear time: each mismatch falls back
/// through previously computed borders, and the total fall-back is bounded
/// by the number of extensions.
pub fn prefix_function<T: PartialEq>(seq: &[T]) -> Vec<usize> {
    let mut table = alloc::vec![0; seq.len()];
    for i in 1..seq.len() {
        let mut j = table[i - 1];
        while j > 0 && seq[i] != seq[j] {
            j = table[j - 1];
        }
        if seq[i] == seq[j] {
            j += 1;
        }
        table[i] = j;
    }
    table
}

/// Length of the longest prefix of `s` that is a palindrome.
///
/// The separator is `None` in an `Option` probe, so it differs from every
/// element whatever the alphabet.
pub fn longest_palindromic_prefix<T: PartialEq>(s: &[T]) -> usize {
    let probe: Vec<Option<&T>> = s
        .iter()
        .map(Some)
        .chain(iter::once(None))
        .chain(s.iter().rev().map(Some))
        .collect();

    prefix_function(&probe).last().copied().unwrap_or(0)
}

/// Shortest palindrome of the form `prefix + s`.
///
/// # Arguments
///
/// * `s` - Sequence to extend on the left
///
/// # Returns
///
/// The reversed tail of `s` that follows its longest palindromic prefix,
/// followed by `s` itself. A palindrome comes back unchanged.
pub fn shortest_palindrome<T: PartialEq + Clone>(s: &[T]) -> Vec<T> {
    let keep = longest_palindromic_prefix(s);
    s[keep..].iter().rev().chain(s).cloned().collect()
}

/// Character-wise [`shortest_palindrome`] for string slices.
pub fn shortest_palindrome_str(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    shortest_palindrome(&chars).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn is_palindrome<T: PartialEq>(s: &[T]) -> bool {
        s.iter().eq(s.iter().rev())
    }

    /// Quadratic reference: try every prefix length from the longest down.
    fn naive_shortest(s: &[u8]) -> Vec<u8> {
        let keep = (0..=s.len())
            .rev()
            .find(|&k| is_palindrome(&s[..k]))
            .unwrap_or(0);
        s[keep..].iter().rev().chain(s).copied().collect()
    }

    #[test]
    fn prefix_function_known_table() {
        assert_eq!(prefix_function(b"abcabcd"), vec![0, 0, 0, 1, 2, 3, 0]);
        assert_eq!(prefix_function(b"aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
        assert!(prefix_function::<u8>(&[]).is_empty());
    }

    #[test]
    fn worked_examples() {
        assert_eq!(shortest_palindrome_str("aacecaaa"), "aaacecaaa");
        assert_eq!(shortest_palindrome_str("abcd"), "dcbabcd");
    }

    #[test]
    fn trivial_inputs_are_unchanged() {
        assert_eq!(shortest_palindrome_str(""), "");
        assert_eq!(shortest_palindrome_str("z"), "z");
        assert_eq!(shortest_palindrome_str("racecar"), "racecar");
        assert_eq!(shortest_palindrome_str("abba"), "abba");
    }

    #[test]
    fn separator_never_matches_input() {
        // A '#' inside the input must not be confused with the separator.
        let out = shortest_palindrome_str("#a#b");
        assert_eq!(out, "b#a#b");
        assert_eq!(longest_palindromic_prefix(b"#a#b"), 3);
    }

    #[test]
    fn non_ascii_characters() {
        assert_eq!(shortest_palindrome_str("éa"), "aéa");
    }

    #[test]
    fn matches_quadratic_reference() {
        let mut rng = StdRng::seed_from_u64(214);
        for _ in 0..500 {
            let len = rng.gen_range(0..16);
            let s: Vec<u8> = (0..len).map(|_| b'a' + rng.gen_range(0..3)).collect();
            let fast = shortest_palindrome(&s);

            assert!(is_palindrome(&fast));
            assert!(fast.ends_with(&s));
            assert_eq!(fast, naive_shortest(&s));
            assert_eq!(shortest_palindrome(&fast), fast);
        }
    }
}
