//! dup: interleave each element with a transformed copy.

use tracing::trace;

/// Returns a new vector holding, for each element `e` of `items`, `e`
/// followed by `f(&e)`.
///
/// The result has exactly `2 * items.len()` elements: `out[2i] == items[i]`
/// and `out[2i + 1] == f(&items[i])`.
pub fn dup<T, F>(items: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    let mut out = Vec::with_capacity(items.len() * 2);
    for item in items {
        out.push(item.clone());
        out.push(f(item));
    }
    trace!(input = items.len(), output = out.len(), "dup");
    out
}

/// Like [`dup`], but the transform may fail. The first error is returned
/// unchanged and the partial buffer is discarded.
pub fn try_dup<T, E, F>(items: &[T], mut f: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T) -> Result<T, E>,
{
    let mut out = Vec::with_capacity(items.len() * 2);
    for item in items {
        let transformed = f(item)?;
        out.push(item.clone());
        out.push(transformed);
    }
    trace!(input = items.len(), output = out.len(), "try_dup");
    Ok(out)
}
