//! Greedy damage-order optimizer.
//!
//! An attacker deals `power` damage per hit and may strike one enemy at a
//! time. Every enemy still alive deals its damage rate on each hit. The goal
//! is the kill order that minimizes the total damage absorbed.
//!
//! Killing enemy `i` takes `hits[i] = ceil(health[i] / power)` hits, during
//! which every living enemy keeps attacking. Swapping two adjacent kills `a`
//! then `b` changes the total by `damage[b] * hits[a] - damage[a] * hits[b]`,
//! so `a` belongs first exactly when `damage[a] * hits[b] > damage[b] * hits[a]`.
//! Sorting by that key yields an optimal order. Equal keys leave the total
//! unchanged, so ties may be broken arbitrarily.

use crate::AlgoError;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// The chosen elimination order and the damage it costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillPlan {
    /// Enemy indices in the order they are killed. Always a permutation of
    /// `0..n`.
    pub order: Vec<usize>,

    /// Total damage absorbed when following `order`.
    pub total_damage: u64,
}

/// Number of hits needed to bring `health` down to zero.
#[inline]
pub fn hits_required(health: u32, power: u32) -> u64 {
    u64::from(health).div_ceil(u64::from(power))
}

/// Orders `a` before `b` when `a` deals more damage per hit it takes to kill.
#[inline]
fn kill_first(damage_a: u64, hits_a: u64, damage_b: u64, hits_b: u64) -> Ordering {
    (damage_b * hits_a).cmp(&(damage_a * hits_b))
}

/// Adds the damage taken while `hits` strikes land on one enemy.
#[inline]
fn absorb(total: u64, remaining_dps: u64, hits: u64) -> Result<u64, AlgoError> {
    remaining_dps
        .checked_mul(hits)
        .and_then(|taken| total.checked_add(taken))
        .ok_or(AlgoError::Overflow)
}

/// Computes the optimal kill order.
///
/// # Arguments
///
/// * `power` - Damage dealt per hit; must be non-zero
/// * `damage` - Damage rate of each enemy
/// * `health` - Health pool of each enemy, aligned with `damage`
///
/// # Returns
///
/// The plan with the smallest achievable total damage. An empty roster costs
/// nothing. Fails with [`AlgoError::Overflow`] when the total exceeds `u64`.
pub fn plan_kills(power: u32, damage: &[u32], health: &[u32]) -> Result<KillPlan, AlgoError> {
    if damage.len() != health.len() {
        return Err(AlgoError::LengthMismatch {
            left: damage.len(),
            right: health.len(),
        });
    }
    if power == 0 {
        return Err(AlgoError::ZeroDivisor);
    }

    let hits: Vec<u64> = health.iter().map(|&h| hits_required(h, power)).collect();

    let mut order: Vec<usize> = (0..damage.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        kill_first(
            u64::from(damage[a]),
            hits[a],
            u64::from(damage[b]),
            hits[b],
        )
    });

    let mut remaining_dps: u64 = damage.iter().map(|&d| u64::from(d)).sum();
    let mut total_damage: u64 = 0;
    for &enemy in &order {
        total_damage = absorb(total_damage, remaining_dps, hits[enemy])?;
        remaining_dps -= u64::from(damage[enemy]);
    }

    Ok(KillPlan {
        order,
        total_damage,
    })
}

/// Minimum total damage absorbed before every enemy is eliminated.
///
/// See [`plan_kills`] for the argument contract.
pub fn minimum_damage(power: u32, damage: &[u32], health: &[u32]) -> Result<u64, AlgoError> {
    plan_kills(power, damage, health).map(|plan| plan.total_damage)
}

/// Damage absorbed when enemies are killed in exactly `order`.
///
/// Used to audit a plan or to evaluate a hand-picked order. `order` must
/// name every enemy exactly once.
pub fn damage_for_order(
    power: u32,
    damage: &[u32],
    health: &[u32],
    order: &[usize],
) -> Result<u64, AlgoError> {
    if damage.len() != health.len() {
        return Err(AlgoError::LengthMismatch {
            left: damage.len(),
            right: health.len(),
        });
    }
    if order.len() != damage.len() {
        return Err(AlgoError::LengthMismatch {
            left: order.len(),
            right: damage.len(),
        });
    }
    if power == 0 {
        return Err(AlgoError::ZeroDivisor);
    }

    let mut killed = alloc::vec![false; damage.len()];
    let mut remaining_dps: u64 = damage.iter().map(|&d| u64::from(d)).sum();
    let mut total = 0;
    for &enemy in order {
        if enemy >= damage.len() {
            return Err(AlgoError::IndexOutOfBounds {
                index: enemy,
                len: damage.len(),
            });
        }
        if core::mem::replace(&mut killed[enemy], true) {
            return Err(AlgoError::DuplicateIndex(enemy));
        }
        total = absorb(total, remaining_dps, hits_required(health[enemy], power))?;
        remaining_dps -= u64::from(damage[enemy]);
    }
    Ok(total)
}
