//! Bit manipulation utilities and the bit-level problems.
//!
//! `BitPack` treats a slice of `u64` words as a flat bit array. The free
//! functions solve the problems whose answers fall out of popcounts and
//! bitwise identities.

pub struct BitPack;

impl BitPack {
    /// Number of `u64` words needed to hold `bits` bits.
    #[inline(always)]
    pub const fn words_for(bits: usize) -> usize {
        bits.div_ceil(64)
    }

    #[inline(always)]
    pub fn get(storage: &[u64], index: usize) -> bool {
        let word = storage[index / 64];
        let bit = index % 64;
        (word >> bit) & 1 == 1
    }

    #[inline(always)]
    pub fn toggle(storage: &mut [u64], index: usize) {
        let word_idx = index / 64;
        let bit_idx = index % 64;
        storage[word_idx] ^= 1 << bit_idx;
    }

    #[inline(always)]
    pub fn set(storage: &mut [u64], index: usize, val: bool) {
        let word_idx = index / 64;
        let bit_idx = index % 64;
        if val {
            storage[word_idx] |= 1 << bit_idx;
        } else {
            storage[word_idx] &= !(1 << bit_idx);
        }
    }

    /// Total number of set bits across all words.
    #[inline(always)]
    pub fn count_ones(storage: &[u64]) -> usize {
        storage.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// Minimum number of single-bit flips turning `start` into `goal`.
///
/// Every differing bit must be flipped exactly once, so the answer is the
/// Hamming distance: the popcount of `start ^ goal`.
#[inline]
pub fn min_bit_flips(start: u32, goal: u32) -> u32 {
    (start ^ goal).count_ones()
}

/// Length of the longest subarray whose bitwise AND is as large as possible.
///
/// AND never sets a bit that is clear in either operand, so no subarray can
/// beat the maximum element, and a subarray reaches it only if every element
/// equals the maximum. The answer is therefore the longest run of the
/// maximum value. Returns 0 for an empty slice.
pub fn longest_max_and_subarray(nums: &[u32]) -> usize {
    let Some(&max) = nums.iter().max() else {
        return 0;
    };

    let mut run = 0;
    let mut best = 0;
    for &n in nums {
        if n == max {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}
