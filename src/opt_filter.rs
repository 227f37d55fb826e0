//! opt_filter: tag each element present or absent by a predicate.

use tracing::trace;

/// Maps each element to `Some(e)` when `pred(&e)` holds and `None`
/// otherwise. Length and order match `items`.
pub fn opt_filter<T, P>(items: &[T], mut pred: P) -> Vec<Option<T>>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let out: Vec<Option<T>> = items
        .iter()
        .map(|item| pred(item).then(|| item.clone()))
        .collect();
    trace!(
        input = items.len(),
        present = out.iter().filter(|o| o.is_some()).count(),
        "opt_filter"
    );
    out
}

/// Like [`opt_filter`], with a fallible predicate. Returns the first
/// predicate error as-is.
pub fn try_opt_filter<T, E, P>(items: &[T], mut pred: P) -> Result<Vec<Option<T>>, E>
where
    T: Clone,
    P: FnMut(&T) -> Result<bool, E>,
{
    let out = items
        .iter()
        .map(|item| -> Result<Option<T>, E> { Ok(pred(item)?.then(|| item.clone())) })
        .collect::<Result<Vec<_>, E>>()?;
    trace!(input = items.len(), "try_opt_filter");
    Ok(out)
}
