//! `for_each` variants with access to an index value.
//!
//! Use these instead of raw indexed loops wherever possible.
//!
//! The count bounded variants (`*_n`) hand the partially consumed iterator
//! back to the caller, positioned one past the last visited element.
//! If the sequence ends before `n` elements were visited, the unchecked
//! variants simply stop, while the `try_*` variants report
//! [`SequenceError::Exhausted`].

use crate::{
    debug_log::{log_entry, log_exhausted, log_index_overflow},
    error::SequenceError,
    idx_enumerate::IdxEnumerate,
    Idx,
};

/// Visits up to `n` elements, returning the remaining iterator and the
/// number of elements visited.
fn visit_n<S, I, F>(seq: S, n: usize, mut f: F) -> (S::IntoIter, usize)
where
    S: IntoIterator,
    I: Idx,
    F: FnMut(S::Item, I),
{
    let mut iter = seq.into_iter();
    let mut enumerated = IdxEnumerate::new(I::ZERO, iter.by_ref().take(n));
    for (i, v) in enumerated.by_ref() {
        f(v, i);
    }
    let visited = enumerated.pos_usize();
    (iter, visited)
}

/// For `n` iterations, invoke `f` with the current element and an
/// index counting up from zero.
///
/// Returns the iterator advanced past the last visited element.
///
/// ### Example
/// ```
/// # use sequtil_core::for_each::for_each_n;
/// let mut visited = Vec::new();
/// let mut rest = for_each_n(["a", "b", "c", "d"], 3u32, |s, i| visited.push((i, s)));
/// assert_eq!(visited, [(0, "a"), (1, "b"), (2, "c")]);
/// assert_eq!(rest.next(), Some("d"));
/// ```
pub fn for_each_n<S, I, F>(seq: S, n: I, f: F) -> S::IntoIter
where
    S: IntoIterator,
    I: Idx,
    F: FnMut(S::Item, I),
{
    log_entry!("for_each_n", n.into_usize());
    visit_n::<S, I, F>(seq, n.into_usize(), f).0
}

/// Checked [`for_each_n`]. `f` is still invoked for every available
/// element before the error is reported.
pub fn try_for_each_n<S, I, F>(
    seq: S,
    n: I,
    f: F,
) -> Result<S::IntoIter, SequenceError>
where
    S: IntoIterator,
    I: Idx,
    F: FnMut(S::Item, I),
{
    let requested = n.into_usize();
    log_entry!("try_for_each_n", requested);
    let (iter, visited) = visit_n::<S, I, F>(seq, requested, f);
    if visited < requested {
        log_exhausted!("try_for_each_n", requested, visited);
        return Err(SequenceError::exhausted(requested, visited));
    }
    Ok(iter)
}

/// For each element, invoke `f` with the element and an index
/// counting up from zero.
///
/// Returns the number of iterations performed.
///
/// ### Example
/// ```
/// # use sequtil_core::for_each::indexed_for;
/// let mut sum = 0;
/// let count = indexed_for([10usize, 20, 30], |v, i| sum += v * i);
/// assert_eq!(count, 3);
/// assert_eq!(sum, 20 + 60);
/// ```
pub fn indexed_for<S, F>(seq: S, f: F) -> usize
where
    S: IntoIterator,
    F: FnMut(S::Item, usize),
{
    indexed_for_idx(seq, f)
}

/// [`indexed_for`] with a typed index. The count is returned as that type.
///
/// # Panics
/// If the sequence has more than `I::MAX` elements, since the count would
/// not fit into `I`. Use [`try_indexed_for_idx`] to get an error instead.
pub fn indexed_for_idx<S, I, F>(seq: S, mut f: F) -> I
where
    S: IntoIterator,
    I: Idx,
    F: FnMut(S::Item, I),
{
    log_entry!("indexed_for");
    let mut enumerated = IdxEnumerate::new(I::ZERO, seq);
    for (i, v) in enumerated.by_ref() {
        f(v, i);
    }
    enumerated.pos()
}

/// Checked [`indexed_for_idx`].
///
/// `f` is never invoked with an index past `I::MAX`. Sequences longer than
/// `I::MAX` elements report [`SequenceError::IndexOverflow`], after `f` was
/// invoked for every element with a representable index.
pub fn try_indexed_for_idx<S, I, F>(
    seq: S,
    mut f: F,
) -> Result<I, SequenceError>
where
    S: IntoIterator,
    I: Idx,
    F: FnMut(S::Item, I),
{
    log_entry!("try_indexed_for_idx");
    let mut enumerated = IdxEnumerate::<I, _>::new(I::ZERO, seq);
    // the count must be representable too, so `I::MAX + 1` elements
    // are already an overflow
    while let Some(i) = enumerated.checked_pos() {
        let Some((_, v)) = enumerated.next() else {
            return Ok(i);
        };
        f(v, i);
    }
    let max = I::MAX.into_usize();
    log_index_overflow!("try_indexed_for_idx", max);
    Err(SequenceError::index_overflow(max))
}

/// For `n` iterations, invoke `f` with the current element.
///
/// Unlike [`for_each_n`], `f` only receives the element.
/// Returns the iterator advanced past the last visited element.
pub fn indexed_for_n<S, I, F>(seq: S, n: I, mut f: F) -> S::IntoIter
where
    S: IntoIterator,
    I: Idx,
    F: FnMut(S::Item),
{
    log_entry!("indexed_for_n", n.into_usize());
    visit_n::<S, I, _>(seq, n.into_usize(), |v, _| f(v)).0
}

/// Checked [`indexed_for_n`].
pub fn try_indexed_for_n<S, I, F>(
    seq: S,
    n: I,
    mut f: F,
) -> Result<S::IntoIter, SequenceError>
where
    S: IntoIterator,
    I: Idx,
    F: FnMut(S::Item),
{
    let requested = n.into_usize();
    log_entry!("try_indexed_for_n", requested);
    let (iter, visited) = visit_n::<S, I, _>(seq, requested, |v, _| f(v));
    if visited < requested {
        log_exhausted!("try_indexed_for_n", requested, visited);
        return Err(SequenceError::exhausted(requested, visited));
    }
    Ok(iter)
}
