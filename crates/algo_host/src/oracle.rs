//! Brute-force reference answers used to label generated cases.
//!
//! These are deliberately the obvious exponential or quadratic algorithms,
//! independent of the core implementations they are checked against.

/// Smallest total damage over every kill order. Exponential in the roster
/// size; callers keep rosters small.
pub fn minimum_damage(power: u32, damage: &[u32], health: &[u32]) -> u64 {
    let hits: Vec<u64> = health
        .iter()
        .map(|&h| u64::from(h).div_ceil(u64::from(power)))
        .collect();

    let mut order: Vec<usize> = (0..damage.len()).collect();
    let mut best = cost(&order, damage, &hits);
    while next_permutation(&mut order) {
        best = best.min(cost(&order, damage, &hits));
    }
    best
}

fn cost(order: &[usize], damage: &[u32], hits: &[u64]) -> u64 {
    let mut elapsed = 0;
    let mut total = 0;
    for &enemy in order {
        elapsed += hits[enemy];
        total += elapsed * u64::from(damage[enemy]);
    }
    total
}

/// Advances `items` to the next lexicographic permutation. Returns false
/// once the last permutation has been passed.
fn next_permutation(items: &mut [usize]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(swap) = items.iter().rposition(|&x| x > items[pivot]) else {
        return false;
    };
    items.swap(pivot, swap);
    items[pivot + 1..].reverse();
    true
}

/// Shortest palindrome ending in `s`, by trying every prefix length.
pub fn shortest_palindrome(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let is_palindrome = |t: &[char]| t.iter().eq(t.iter().rev());

    let keep = (0..=chars.len())
        .rev()
        .find(|&k| is_palindrome(&chars[..k]))
        .unwrap_or(0);

    chars[keep..].iter().rev().chain(&chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutations_are_exhaustive() {
        let mut items = vec![0, 1, 2, 3];
        let mut count = 1;
        while next_permutation(&mut items) {
            count += 1;
        }
        assert_eq!(count, 24);
        assert_eq!(items, vec![3, 2, 1, 0]);
        assert!(!next_permutation(&mut []));
    }

    #[test]
    fn damage_reference_examples() {
        assert_eq!(minimum_damage(4, &[1, 2, 3, 4], &[4, 5, 6, 8]), 39);
        assert_eq!(minimum_damage(1, &[1, 1, 1, 1], &[1, 2, 3, 4]), 20);
        assert_eq!(minimum_damage(8, &[40], &[59]), 320);
    }

    #[test]
    fn palindrome_reference_examples() {
        assert_eq!(shortest_palindrome("aacecaaa"), "aaacecaaa");
        assert_eq!(shortest_palindrome("abcd"), "dcbabcd");
        assert_eq!(shortest_palindrome(""), "");
    }
}
