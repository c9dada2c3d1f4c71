//! Word and character scanning.

use crate::AlgoError;
use crate::bits::BitPack;
use algo_common::limits::ALPHABET_LEN;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;

const ASCII_WORDS: usize = BitPack::words_for(128);

/// Set of characters: a packed bitmap for ASCII, an ordered set for the rest.
#[derive(Debug, Clone, Default)]
pub struct CharSet {
    ascii: [u64; ASCII_WORDS],
    other: BTreeSet<char>,
}

impl CharSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `c`. Inserting a member again has no effect.
    pub fn insert(&mut self, c: char) {
        if c.is_ascii() {
            BitPack::set(&mut self.ascii, c as usize, true);
        } else {
            self.other.insert(c);
        }
    }

    /// Whether `c` has been inserted.
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            BitPack::get(&self.ascii, c as usize)
        } else {
            self.other.contains(&c)
        }
    }

    /// Number of distinct characters in the set.
    pub fn len(&self) -> usize {
        BitPack::count_ones(&self.ascii) + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = CharSet::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

/// Words that occur exactly once across both sentences.
///
/// Sentences are split on whitespace. The result is sorted, so equal inputs
/// always produce the same output.
pub fn uncommon_words<'a>(first: &'a str, second: &'a str) -> Vec<&'a str> {
    let mut vocabulary: BTreeMap<&'a str, usize> = BTreeMap::new();
    for word in first.split_whitespace().chain(second.split_whitespace()) {
        *vocabulary.entry(word).or_insert(0) += 1;
    }
    vocabulary
        .into_iter()
        .filter_map(|(word, count)| (count == 1).then_some(word))
        .collect()
}

/// Number of `words` made only of characters found in `allowed`.
///
/// # Arguments
///
/// * `allowed` - Characters a word may use; repeats are harmless
/// * `words` - Candidate words
///
/// # Returns
///
/// How many words pass. An empty word always passes.
pub fn count_consistent_strings<S: AsRef<str>>(allowed: &str, words: &[S]) -> usize {
    let allow: CharSet = allowed.chars().collect();
    words
        .iter()
        .filter(|w| w.as_ref().chars().all(|c| allow.contains(c)))
        .count()
}

/// Hashes `s` chunk by chunk into a shorter lowercase string.
///
/// Each run of `k` characters maps to the letter whose index is the sum of
/// the run's letter indices modulo 26. A trailing run shorter than `k` is
/// ignored without being inspected.
///
/// # Arguments
///
/// * `s` - Input text; every hashed character must be in `a..=z`
/// * `k` - Chunk width; must be non-zero
///
/// # Returns
///
/// One letter per full chunk, or the first out-of-alphabet character found.
pub fn hash_divided_string(s: &str, k: usize) -> Result<String, AlgoError> {
    if k == 0 {
        return Err(AlgoError::ZeroDivisor);
    }

    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(chars.len() / k);
    for chunk in chars.chunks_exact(k) {
        let mut sum: u32 = 0;
        for &c in chunk {
            if !c.is_ascii_lowercase() {
                return Err(AlgoError::InvalidCharacter(c));
            }
            sum = (sum + (c as u32 - 'a' as u32)) % ALPHABET_LEN;
        }
        // `sum < 26`, so the cast cannot leave `a..=z`.
        out.push(char::from(b'a' + sum as u8));
    }
    Ok(out)
}
