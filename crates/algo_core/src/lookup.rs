//! Single-pass lookups backed by ordered maps and sets.

use alloc::collections::{BTreeMap, BTreeSet};

/// Indices `(i, j)` with `i < j` and `nums[i] + nums[j] == target`.
///
/// Scans once, remembering the latest index of every value seen so far, and
/// returns the first pair completed during the scan. Complements that do not
/// fit in an `i64` cannot be present and are skipped.
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: BTreeMap<i64, usize> = BTreeMap::new();
    for (j, &n) in nums.iter().enumerate() {
        if let Some(&i) = target.checked_sub(n).and_then(|c| seen.get(&c)) {
            return Some((i, j));
        }
        seen.insert(n, j);
    }
    None
}

/// Whether any value occurs more than once.
pub fn contains_duplicate<T: Ord>(items: &[T]) -> bool {
    let mut seen = BTreeSet::new();
    items.iter().any(|item| !seen.insert(item))
}
