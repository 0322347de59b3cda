//! Order-independent multiset enumeration used to break permutation symmetry
//! when the layer builder searches over gate-mode and connection-mask
//! assignments.

/// All order-independent selections of `positions` elements drawn from
/// `types` kinds, each inner vector listed in non-decreasing order.
///
/// With `allow_duplicates = true` this is combinations-with-replacement
/// (`C(types + positions - 1, positions)` results). With `allow_duplicates =
/// false` it is strict subsets (`C(types, positions)` results, empty once
/// `types < positions`).
///
/// The outer ordering groups lists sharing a common suffix contiguously:
/// generation partitions by whether the largest type (`types - 1`) is used
/// at all, emitting the "absent" half before the "present" half.
pub fn unique_combinations_oi(positions: usize, types: usize, allow_duplicates: bool) -> Vec<Vec<u64>> {
    if positions == 0 {
        return vec![Vec::new()];
    }
    if types == 0 {
        return Vec::new();
    }

    let max_type = (types - 1) as u64;

    // Absent case: the top type never appears, so we recurse with one fewer type.
    let mut out = unique_combinations_oi(positions, types - 1, allow_duplicates);

    // Present case: at least one position takes the top type. With duplicates
    // allowed the remaining positions may still reach as high as `max_type`;
    // without duplicates they're confined to strictly smaller types.
    let remaining_types = if allow_duplicates { types } else { types - 1 };
    if positions >= 1 {
        let rest = unique_combinations_oi(positions - 1, remaining_types, allow_duplicates);
        for mut combo in rest {
            combo.push(max_type);
            out.push(combo);
        }
    }

    out
}

/// Cartesian product of two sequence lists: every `a ++ b` for `a` in `lhs`
/// and `b` in `rhs`, ordered `lhs`-major then `rhs`-minor.
pub fn cartesian_product<T: Clone>(lhs: &[Vec<T>], rhs: &[Vec<T>]) -> Vec<Vec<T>> {
    let mut out = Vec::with_capacity(lhs.len() * rhs.len());
    for a in lhs {
        for b in rhs {
            let mut combo = Vec::with_capacity(a.len() + b.len());
            combo.extend_from_slice(a);
            combo.extend_from_slice(b);
            out.push(combo);
        }
    }
    out
}

/// Cartesian product across an arbitrary number of sequence lists, folded
/// left to right so the first list varies slowest.
pub fn cartesian_product_many<T: Clone>(lists: &[Vec<Vec<T>>]) -> Vec<Vec<T>> {
    let mut acc = vec![Vec::new()];
    for list in lists {
        acc = cartesian_product(&acc, list);
    }
    acc
}
