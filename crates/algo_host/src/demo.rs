//! Worked examples printed by `algo demo`.

use algo_core::{damage, lookup, palindrome};
use anyhow::Result;

/// Prints the two-sum, damage-order and palindrome examples to stdout.
pub fn run() -> Result<()> {
    let nums = [2, 7, 11, 15];
    let target = 9;
    print!("two-sum {:?} {} ->", nums, target);
    if let Some((i, j)) = lookup::two_sum(&nums, target) {
        print!(" {} {}", i, j);
    }
    println!();

    let (power, dmg, health) = (4, [1, 2, 3, 4], [4, 5, 6, 8]);
    let plan = damage::plan_kills(power, &dmg, &health)?;
    println!(
        "minimum-damage power={} damage={:?} health={:?} -> {} (kill order {:?})",
        power, dmg, health, plan.total_damage, plan.order
    );

    for s in ["aacecaaa", "abcd"] {
        println!(
            "shortest-palindrome {:?} -> {:?}",
            s,
            palindrome::shortest_palindrome_str(s)
        );
    }
    Ok(())
}
