//! Prefix accumulations for O(1) range queries.
//!
//! Both structures store one extra leading identity element, so the answer
//! for `[left, right]` is always `acc[right + 1] op⁻¹ acc[left]` with no
//! special case for `left == 0`.

use crate::AlgoError;
use alloc::vec::Vec;

fn check_range(left: usize, right: usize, len: usize) -> Result<(), AlgoError> {
    if left > right {
        return Err(AlgoError::InvalidRange { left, right });
    }
    if right >= len {
        return Err(AlgoError::IndexOutOfBounds { index: right, len });
    }
    Ok(())
}

/// Inclusive range sums over an immutable array.
///
/// Prefixes are kept in `i128`, so building the table never overflows and a
/// query fails only when its own answer leaves the `i64` range.
#[derive(Debug, Clone)]
pub struct RangeSum {
    prefix: Vec<i128>,
}

impl RangeSum {
    /// Builds the prefix table in one pass over `nums`.
    pub fn new(nums: &[i64]) -> Self {
        let mut prefix = Vec::with_capacity(nums.len() + 1);
        let mut sum = 0i128;
        prefix.push(sum);
        for &n in nums {
            sum += i128::from(n);
            prefix.push(sum);
        }
        Self { prefix }
    }

    /// Number of elements in the underlying array.
    pub fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of `nums[left..=right]`.
    ///
    /// # Arguments
    ///
    /// * `left` - First index of the range
    /// * `right` - Last index of the range, inclusive
    ///
    /// # Returns
    ///
    /// The sum, or [`AlgoError::Overflow`] if it does not fit in `i64`.
    pub fn sum_range(&self, left: usize, right: usize) -> Result<i64, AlgoError> {
        check_range(left, right, self.len())?;
        i64::try_from(self.prefix[right + 1] - self.prefix[left]).map_err(|_| AlgoError::Overflow)
    }
}

/// Inclusive range XORs over an immutable array.
///
/// XOR is its own inverse, so `x[l] ^ .. ^ x[r] = p[r + 1] ^ p[l]`.
#[derive(Debug, Clone)]
pub struct XorPrefix {
    prefix: Vec<u32>,
}

impl XorPrefix {
    /// Builds the prefix table in one pass over `arr`.
    pub fn new(arr: &[u32]) -> Self {
        let mut prefix = Vec::with_capacity(arr.len() + 1);
        prefix.push(0);
        let mut acc = 0u32;
        for &x in arr {
            acc ^= x;
            prefix.push(acc);
        }
        Self { prefix }
    }

    pub fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// XOR of `arr[left..=right]`.
    pub fn query(&self, left: usize, right: usize) -> Result<u32, AlgoError> {
        check_range(left, right, self.len())?;
        Ok(self.prefix[right + 1] ^ self.prefix[left])
    }
}

/// Answers every `(left, right)` query against `arr`, in order.
///
/// Fails on the first malformed query.
pub fn xor_queries(arr: &[u32], queries: &[(usize, usize)]) -> Result<Vec<u32>, AlgoError> {
    let table = XorPrefix::new(arr);
    queries
        .iter()
        .map(|&(left, right)| table.query(left, right))
        .collect()
}
