//! fill: replace absent map values with supplied defaults.
//!
//! The supplier is lazy: it runs once per `None` entry and never for a
//! present one, so side effects in it (counters, RNG draws) happen exactly
//! as many times as there are gaps. Results are not memoized; two absent
//! keys may receive different values.

use core::hash::{BuildHasher, Hash};
use hashbrown::HashMap;
use tracing::trace;

/// Returns a map with the same keys as `map` where present values are
/// cloned through and each absent value is replaced by `supplier()`.
///
/// The output uses a clone of the input map's hasher.
pub fn fill<K, V, S, F>(map: &HashMap<K, Option<V>, S>, supplier: F) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    F: FnMut() -> V,
{
    fill_with_hasher(map, supplier, map.hasher().clone())
}

/// Like [`fill`], building the output with `hasher`.
pub fn fill_with_hasher<K, V, S, H, F>(
    map: &HashMap<K, Option<V>, S>,
    mut supplier: F,
    hasher: H,
) -> HashMap<K, V, H>
where
    K: Eq + Hash + Clone,
    V: Clone,
    H: BuildHasher,
    F: FnMut() -> V,
{
    let mut out = HashMap::with_capacity_and_hasher(map.len(), hasher);
    let mut supplied = 0usize;
    for (k, v) in map {
        let value = match v {
            Some(present) => present.clone(),
            None => {
                supplied += 1;
                supplier()
            }
        };
        out.insert(k.clone(), value);
    }
    trace!(entries = out.len(), supplied, "fill");
    out
}

/// Like [`fill`], with a fallible supplier. The first supplier error is
/// returned as-is; the supplier is still never called for present entries.
pub fn try_fill<K, V, S, E, F>(
    map: &HashMap<K, Option<V>, S>,
    mut supplier: F,
) -> Result<HashMap<K, V, S>, E>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    F: FnMut() -> Result<V, E>,
{
    let mut out = HashMap::with_capacity_and_hasher(map.len(), map.hasher().clone());
    let mut supplied = 0usize;
    for (k, v) in map {
        let value = match v {
            Some(present) => present.clone(),
            None => {
                supplied += 1;
                supplier()?
            }
        };
        out.insert(k.clone(), value);
    }
    trace!(entries = out.len(), supplied, "try_fill");
    Ok(out)
}
