//! Prefix/suffix matching and trimming over ordered sequences.
//!
//! Every function here takes the host sequence as `&[T]` and compares
//! elements with `PartialEq`, position by position. A pattern longer than
//! the host never matches and is never an error.

use crate::error::{Result, SliceError};
use std::borrow::Borrow;

/// Returns `true` if `sequence` begins with `slice`.
///
/// An empty `slice` always matches.
///
/// # Example
/// ```
/// use foodshare_slice::starts_with;
///
/// assert!(starts_with(&[1, 2, 3, 4], &[1, 2]));
/// assert!(!starts_with(&[1, 2], &[1, 2, 3]));
/// ```
#[inline]
pub fn starts_with<T: PartialEq>(sequence: &[T], slice: &[T]) -> bool {
    sequence.starts_with(slice)
}

/// Returns `true` if `sequence` ends with `slice`.
///
/// An empty `slice` always matches.
#[inline]
pub fn ends_with<T: PartialEq>(sequence: &[T], slice: &[T]) -> bool {
    sequence.ends_with(slice)
}

/// Returns `true` if `sequence` begins with the elements yielded by `slice`.
///
/// Stops at the first mismatch, or as soon as `slice` yields more elements
/// than `sequence` holds. The iterator is never collected.
pub fn starts_with_iter<T, I>(sequence: &[T], slice: I) -> bool
where
    T: PartialEq,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    let mut elements = sequence.iter();
    slice.into_iter().all(|expected| match elements.next() {
        Some(actual) => actual == Borrow::<T>::borrow(&expected),
        None => false,
    })
}

/// Returns `true` if `sequence` ends with the elements yielded by `slice`.
///
/// The tail can only be located once the pattern length is known, so the
/// iterator is buffered first, reading at most one element more than
/// `sequence` holds.
pub fn ends_with_iter<T, I>(sequence: &[T], slice: I) -> bool
where
    T: PartialEq,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    strip_suffix_iter(sequence, slice).is_some()
}

/// Borrows all but the first `n` elements. Never panics.
#[inline]
pub fn strip_first<T>(sequence: &[T], n: usize) -> &[T] {
    &sequence[n.min(sequence.len())..]
}

/// Borrows all but the last `n` elements. Never panics.
#[inline]
pub fn strip_last<T>(sequence: &[T], n: usize) -> &[T] {
    &sequence[..sequence.len().saturating_sub(n)]
}

/// Borrows `sequence` without `prefix`, or `None` if it does not start with it.
#[inline]
pub fn strip_prefix<'a, T: PartialEq>(sequence: &'a [T], prefix: &[T]) -> Option<&'a [T]> {
    sequence.strip_prefix(prefix)
}

/// Borrows `sequence` without `suffix`, or `None` if it does not end with it.
#[inline]
pub fn strip_suffix<'a, T: PartialEq>(sequence: &'a [T], suffix: &[T]) -> Option<&'a [T]> {
    sequence.strip_suffix(suffix)
}

/// Iterator-pattern form of [`strip_prefix`].
pub fn strip_prefix_iter<T, I>(sequence: &[T], prefix: I) -> Option<&[T]>
where
    T: PartialEq,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    let mut matched = 0;
    for expected in prefix {
        match sequence.get(matched) {
            Some(actual) if actual == Borrow::<T>::borrow(&expected) => matched += 1,
            _ => return None,
        }
    }
    Some(&sequence[matched..])
}

/// Iterator-pattern form of [`strip_suffix`].
pub fn strip_suffix_iter<T, I>(sequence: &[T], suffix: I) -> Option<&[T]>
where
    T: PartialEq,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    // One element past the host length is enough to rule out a match.
    let suffix: Vec<I::Item> = suffix.into_iter().take(sequence.len() + 1).collect();
    let start = sequence.len().checked_sub(suffix.len())?;
    let tail = &sequence[start..];

    tail.iter()
        .zip(&suffix)
        .all(|(actual, expected)| actual == Borrow::<T>::borrow(expected))
        .then(|| &sequence[..start])
}

/// Returns a copy of `sequence` without its first `n` elements.
///
/// # Errors
/// [`SliceError::InvalidArgument`] if `n` is negative. A count at or past
/// the length yields an empty vector.
///
/// # Example
/// ```
/// use foodshare_slice::drop_first;
///
/// assert_eq!(drop_first(&[1, 2, 3], 1).unwrap(), vec![2, 3]);
/// assert!(drop_first(&[1, 2, 3], 5).unwrap().is_empty());
/// assert!(drop_first(&[1, 2, 3], -1).is_err());
/// ```
pub fn drop_first<T: Clone>(sequence: &[T], n: i64) -> Result<Vec<T>> {
    let n = checked_count("n", n)?;
    Ok(strip_first(sequence, n).to_vec())
}

/// Returns a copy of `sequence` without its last `n` elements.
///
/// # Errors
/// [`SliceError::InvalidArgument`] if `n` is negative.
pub fn drop_last<T: Clone>(sequence: &[T], n: i64) -> Result<Vec<T>> {
    let n = checked_count("n", n)?;
    Ok(strip_last(sequence, n).to_vec())
}

/// Returns a copy of `sequence` with `prefix` removed once, if present.
///
/// Without a match the copy is unchanged. A repeated prefix needs one call
/// per repetition.
///
/// # Example
/// ```
/// use foodshare_slice::drop_prefix;
///
/// assert_eq!(drop_prefix(&[1, 2, 3], &[1, 2]), vec![3]);
/// assert_eq!(drop_prefix(&[1, 2, 3], &[9]), vec![1, 2, 3]);
/// ```
pub fn drop_prefix<T: Clone + PartialEq>(sequence: &[T], prefix: &[T]) -> Vec<T> {
    strip_prefix(sequence, prefix).unwrap_or(sequence).to_vec()
}

/// Returns a copy of `sequence` with `suffix` removed once, if present.
pub fn drop_suffix<T: Clone + PartialEq>(sequence: &[T], suffix: &[T]) -> Vec<T> {
    strip_suffix(sequence, suffix).unwrap_or(sequence).to_vec()
}

fn checked_count(name: &'static str, n: i64) -> Result<usize> {
    if n < 0 {
        return Err(SliceError::InvalidArgument { name, value: n });
    }
    // Counts beyond usize::MAX only occur on 32-bit targets and drop everything.
    Ok(usize::try_from(n).unwrap_or(usize::MAX))
}
