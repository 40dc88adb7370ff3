//! Order-independent comparison over duplicate-preserving part lists.
//!
//! Part lists keep authoring order and duplicates, but inheritance
//! comparison must ignore order. These helpers treat a list as a multiset:
//! every distinct value (the null sentinel included, as its own bucket)
//! counts by occurrence.

use std::collections::HashMap;
use std::hash::Hash;

use crate::part::PartRef;

/// Returns true iff `a` and `b` contain the same values with the same
/// multiplicities, ignoring order.
///
/// Total over any input, including empty lists.
#[must_use]
pub fn multiset_eq<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut counts: HashMap<&T, isize> = HashMap::with_capacity(a.len());
    for value in a {
        *counts.entry(value).or_insert(0) += 1;
    }
    for value in b {
        match counts.get_mut(value) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

/// Order-independent hash over a part list, collision-consistent with
/// [`multiset_eq`]: equal multisets hash identically.
///
/// Each occurrence contributes a stable blake3-derived term; terms combine
/// by wrapping addition, so permutation cannot change the result. The null
/// sentinel contributes its own fixed, distinct term. Stable across
/// processes and platforms, unlike std's randomized hasher.
#[must_use]
pub fn multiset_hash(parts: &[Option<PartRef>]) -> u64 {
    parts
        .iter()
        .map(|part| part_term(part.as_ref()))
        .fold(0u64, u64::wrapping_add)
}

fn part_term(part: Option<&PartRef>) -> u64 {
    let mut hasher = blake3::Hasher::new();
    match part {
        Some(part) => {
            hasher.update(b"part:");
            hasher.update(part.as_str().as_bytes());
        }
        None => {
            hasher.update(b"null");
        }
    }
    let digest = hasher.finalize();
    u64::from_le_bytes(digest.as_bytes()[..8].try_into().expect("8-byte prefix"))
}

/// Returns true iff every value occurring in `needles` occurs somewhere in
/// `haystack`. A containment test: duplicate counts do not matter.
#[must_use]
pub fn contains_all<T: Eq + Hash>(haystack: &[T], needles: &[T]) -> bool {
    let present: std::collections::HashSet<&T> = haystack.iter().collect();
    needles.iter().all(|needle| present.contains(needle))
}

/// Multiset difference `own − base`: each element of `own` beyond the
/// count accounted for by `base`, preserving the relative order of the
/// survivors.
#[must_use]
pub fn multiset_diff<T: Eq + Hash + Clone>(own: &[T], base: &[T]) -> Vec<T> {
    let mut budget: HashMap<&T, usize> = HashMap::with_capacity(base.len());
    for value in base {
        *budget.entry(value).or_insert(0) += 1;
    }

    let mut extra = Vec::new();
    for value in own {
        match budget.get_mut(value) {
            Some(count) if *count > 0 => *count -= 1,
            _ => extra.push(value.clone()),
        }
    }
    extra
}
