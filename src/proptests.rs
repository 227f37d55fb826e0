#![cfg(test)]

// Property tests for all four operations, kept inside the crate next to the
// modules they exercise.

use crate::{dup, fill, group, opt_filter, try_dup, try_fill};
use hashbrown::{HashMap, HashSet};
use proptest::prelude::*;
use std::cell::Cell;

fn arb_sparse() -> impl Strategy<Value = HashMap<u8, Option<i32>>> {
    proptest::collection::vec((any::<u8>(), proptest::option::of(any::<i32>())), 0..40)
        .prop_map(|pairs| pairs.into_iter().collect())
}

// Property: dup doubles the length and interleaves originals with transforms.
// - out[2i] == s[i], out[2i+1] == f(s[i]).
// - Input is left untouched; a second run gives the same output.
proptest! {
    #[test]
    fn prop_dup_interleaves(s in proptest::collection::vec(any::<i32>(), 0..64), k in any::<i32>()) {
        let before = s.clone();
        let f = |x: &i32| x.wrapping_mul(k);
        let out = dup(&s, f);

        prop_assert_eq!(out.len(), 2 * s.len());
        for (i, x) in s.iter().enumerate() {
            prop_assert_eq!(out[2 * i], *x);
            prop_assert_eq!(out[2 * i + 1], f(x));
        }
        prop_assert_eq!(&s, &before);
        prop_assert_eq!(dup(&s, f), out);
    }
}

// Property: a try_dup failure at position j consumes exactly j + 1 callbacks
// and never yields a partial vector.
proptest! {
    #[test]
    fn prop_try_dup_fails_at_first_error(s in proptest::collection::vec(0u8..10, 1..32)) {
        let calls = Cell::new(0usize);
        let res: Result<Vec<u8>, usize> = try_dup(&s, |x| {
            let i = calls.get();
            calls.set(i + 1);
            if *x == 0 { Err(i) } else { Ok(x + 1) }
        });
        match s.iter().position(|x| *x == 0) {
            Some(j) => {
                prop_assert_eq!(res, Err(j));
                prop_assert_eq!(calls.get(), j + 1);
            }
            None => {
                prop_assert_eq!(res.map(|v| v.len()), Ok(2 * s.len()));
            }
        }
    }
}

// Property: opt_filter preserves length and order; out[i] is Some(s[i])
// exactly when the predicate accepts s[i].
proptest! {
    #[test]
    fn prop_opt_filter_positions(s in proptest::collection::vec(any::<i16>(), 0..64), m in 1i16..8) {
        let before = s.clone();
        let pred = |x: &i16| x.rem_euclid(m) == 0;
        let out = opt_filter(&s, pred);

        prop_assert_eq!(out.len(), s.len());
        for (x, o) in s.iter().zip(&out) {
            if pred(x) {
                prop_assert_eq!(*o, Some(*x));
            } else {
                prop_assert_eq!(*o, None);
            }
        }
        prop_assert_eq!(&s, &before);
        prop_assert_eq!(opt_filter(&s, pred), out);
    }
}

// Property: group membership, key provenance, and union.
// - Each e lies in the set at key(e).
// - Every result key equals key(e) for some e.
// - Union of all buckets equals the distinct elements of s.
// - Buckets are disjoint since key is a function.
proptest! {
    #[test]
    fn prop_group_membership(s in proptest::collection::vec(0u16..200, 0..80), m in 1u16..10) {
        let before = s.clone();
        let key = |x: &u16| x % m;
        let g = group(&s, key);

        for x in &s {
            prop_assert!(g[&key(x)].contains(x));
        }
        let produced: HashSet<u16> = s.iter().map(key).collect();
        let keys: HashSet<u16> = g.keys().copied().collect();
        prop_assert_eq!(keys, produced);

        let distinct: HashSet<u16> = s.iter().copied().collect();
        let total: usize = g.values().map(|b| b.len()).sum();
        let union: HashSet<u16> = g.values().flatten().copied().collect();
        prop_assert_eq!(total, distinct.len());
        prop_assert_eq!(union, distinct);

        prop_assert_eq!(&s, &before);
        prop_assert_eq!(group(&s, key), g);
    }
}

// Property: fill keeps the key set, passes present values through, and calls
// the supplier exactly once per absent entry.
proptest! {
    #[test]
    fn prop_fill_counts_supplier_calls(m in arb_sparse()) {
        let before = m.clone();
        let calls = Cell::new(0usize);
        let out = fill(&m, || {
            calls.set(calls.get() + 1);
            i32::MIN
        });

        let absent = m.values().filter(|v| v.is_none()).count();
        prop_assert_eq!(calls.get(), absent);
        prop_assert_eq!(out.len(), m.len());
        for (k, v) in &m {
            match v {
                Some(x) => {
                    prop_assert_eq!(out.get(k), Some(x));
                }
                None => {
                    prop_assert_eq!(out.get(k), Some(&i32::MIN));
                }
            }
        }
        prop_assert_eq!(&m, &before);
        prop_assert_eq!(fill(&m, || i32::MIN), out);
    }
}

// Property: try_fill with an always-failing supplier errors iff some entry is
// absent, and never touches the supplier for present entries.
proptest! {
    #[test]
    fn prop_try_fill_errors_only_on_gaps(m in arb_sparse()) {
        let calls = Cell::new(0usize);
        let res: Result<HashMap<u8, i32>, ()> = try_fill(&m, || {
            calls.set(calls.get() + 1);
            Err(())
        });
        let any_absent = m.values().any(|v| v.is_none());
        prop_assert_eq!(res.is_err(), any_absent);
        prop_assert_eq!(calls.get(), usize::from(any_absent));
    }
}
