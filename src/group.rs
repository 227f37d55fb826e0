//! group: bucket elements into sets keyed by a key function.

use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::{HashMap, HashSet};
use tracing::trace;

/// Result of [`group`]: each key maps to the set of elements that produced it.
pub type Groups<R, T, S = DefaultHashBuilder> = HashMap<R, HashSet<T, S>, S>;

/// Groups `items` by `key`. Equal elements collapse into one set member.
///
/// Every key in the result was produced by `key` for some element, and the
/// union of all sets is the set of distinct elements of `items`.
pub fn group<R, T, F>(items: &[T], key: F) -> Groups<R, T>
where
    R: Eq + Hash,
    T: Eq + Hash + Clone,
    F: FnMut(&T) -> R,
{
    group_with_hasher(items, key, DefaultHashBuilder::default())
}

/// Like [`group`], building the map and each bucket with clones of `hasher`.
pub fn group_with_hasher<R, T, S, F>(items: &[T], mut key: F, hasher: S) -> Groups<R, T, S>
where
    R: Eq + Hash,
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    F: FnMut(&T) -> R,
{
    let mut groups = HashMap::with_hasher(hasher.clone());
    for item in items {
        insert_grouped(&mut groups, key(item), item, &hasher);
    }
    trace!(input = items.len(), buckets = groups.len(), "group");
    groups
}

/// Like [`group`], with a fallible key function. The first error is
/// returned as-is and nothing built so far escapes.
pub fn try_group<R, T, E, F>(items: &[T], mut key: F) -> Result<Groups<R, T>, E>
where
    R: Eq + Hash,
    T: Eq + Hash + Clone,
    F: FnMut(&T) -> Result<R, E>,
{
    let hasher = DefaultHashBuilder::default();
    let mut groups = HashMap::with_hasher(hasher.clone());
    for item in items {
        insert_grouped(&mut groups, key(item)?, item, &hasher);
    }
    trace!(input = items.len(), buckets = groups.len(), "try_group");
    Ok(groups)
}

// Get-or-create the bucket for `k`, then insert.
fn insert_grouped<R, T, S>(groups: &mut Groups<R, T, S>, k: R, item: &T, hasher: &S)
where
    R: Eq + Hash,
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    groups
        .entry(k)
        .or_insert_with(|| HashSet::with_hasher(hasher.clone()))
        .insert(item.clone());
}

#[cfg(test)]
mod tests {
    use super::{group, group_with_hasher, try_group};
    use hashbrown::HashSet;
    use std::collections::hash_map::RandomState;

    fn parity(x: &i32) -> &'static str {
        if x % 2 == 0 {
            "even"
        } else {
            "odd"
        }
    }

    fn set<T: Eq + std::hash::Hash>(xs: impl IntoIterator<Item = T>) -> HashSet<T> {
        xs.into_iter().collect()
    }

    #[test]
    fn groups_by_parity() {
        let g = group(&[1, 2, 3, 4, 5], parity);
        assert_eq!(g.len(), 2);
        assert_eq!(g["odd"], set([1, 3, 5]));
        assert_eq!(g["even"], set([2, 4]));
    }

    #[test]
    fn duplicates_collapse() {
        let g = group(&[1, 1, 2, 1], |_| ());
        assert_eq!(g.len(), 1);
        assert_eq!(g[&()], set([1, 2]));
    }

    #[test]
    fn empty_input_has_no_buckets() {
        let g = group(&[] as &[i32], parity);
        assert!(g.is_empty());
    }

    #[test]
    fn one_bucket_per_distinct_key() {
        let words = ["apple", "avocado", "banana", "cherry", "cranberry"];
        let g = group(&words, |w| w.chars().next());
        assert_eq!(g.len(), 3);
        assert_eq!(g[&Some('a')], set(["apple", "avocado"]));
        assert_eq!(g[&Some('b')], set(["banana"]));
        assert_eq!(g[&Some('c')], set(["cherry", "cranberry"]));
    }

    #[test]
    fn custom_hasher_is_used() {
        let g = group_with_hasher(&[1, 2, 3], |x| x % 3, RandomState::new());
        assert_eq!(g.len(), 3);
        assert!(g[&0].contains(&3));
        assert!(g[&1].contains(&1));
    }

    #[test]
    fn try_group_propagates_key_error() {
        let res: Result<_, String> = try_group(&[1, 2, 0, 3], |x| {
            if *x == 0 {
                Err("zero".to_string())
            } else {
                Ok(parity(x))
            }
        });
        assert_eq!(res.unwrap_err(), "zero");
    }

    #[test]
    fn try_group_ok_matches_group() {
        let xs = [4, 5, 6, 7];
        let res: Result<_, ()> = try_group(&xs, |x| Ok(parity(x)));
        assert_eq!(res.unwrap(), group(&xs, parity));
    }
}
