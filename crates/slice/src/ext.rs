//! Method-call ergonomics over slices and optional slices.
//!
//! [`SequenceExt`] lets callers write `items.drop_prefix(["a", "b"])` on
//! slices, vectors and arrays. The pattern can be anything that views as a
//! slice, a single element (`*_item`), or an iterator (`*_iter`); all of them
//! go through the functions in [`crate::slice`], so they agree on every input.

use crate::error::Result;
use crate::slice;
use std::borrow::Borrow;

/// Prefix/suffix matching, trimming and emptiness helpers for `[T]`.
pub trait SequenceExt<T> {
    /// Returns `true` if this sequence begins with `pattern`.
    fn has_prefix<S: AsRef<[T]>>(&self, pattern: S) -> bool
    where
        T: PartialEq;

    /// Returns `true` if this sequence ends with `pattern`.
    fn has_suffix<S: AsRef<[T]>>(&self, pattern: S) -> bool
    where
        T: PartialEq;

    /// Returns `true` if the first element equals `item`.
    fn has_prefix_item(&self, item: &T) -> bool
    where
        T: PartialEq;

    /// Returns `true` if the last element equals `item`.
    fn has_suffix_item(&self, item: &T) -> bool
    where
        T: PartialEq;

    /// Returns `true` if this sequence begins with the yielded elements.
    fn has_prefix_iter<I>(&self, pattern: I) -> bool
    where
        T: PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>;

    /// Returns `true` if this sequence ends with the yielded elements.
    fn has_suffix_iter<I>(&self, pattern: I) -> bool
    where
        T: PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>;

    /// Copy without the first `n` elements. Fails if `n` is negative.
    fn drop_first(&self, n: i64) -> Result<Vec<T>>
    where
        T: Clone;

    /// Copy without the last `n` elements. Fails if `n` is negative.
    fn drop_last(&self, n: i64) -> Result<Vec<T>>
    where
        T: Clone;

    /// Copy without the first element.
    fn without_first(&self) -> Vec<T>
    where
        T: Clone;

    /// Copy without the last element.
    fn without_last(&self) -> Vec<T>
    where
        T: Clone;

    /// Copy with `prefix` removed once, if present.
    fn drop_prefix<S: AsRef<[T]>>(&self, prefix: S) -> Vec<T>
    where
        T: Clone + PartialEq;

    /// Copy with `suffix` removed once, if present.
    fn drop_suffix<S: AsRef<[T]>>(&self, suffix: S) -> Vec<T>
    where
        T: Clone + PartialEq;

    /// Copy with a leading `item` removed once, if present.
    fn drop_prefix_item(&self, item: &T) -> Vec<T>
    where
        T: Clone + PartialEq;

    /// Copy with a trailing `item` removed once, if present.
    fn drop_suffix_item(&self, item: &T) -> Vec<T>
    where
        T: Clone + PartialEq;

    /// Copy with the yielded prefix removed once, if present.
    fn drop_prefix_iter<I>(&self, prefix: I) -> Vec<T>
    where
        T: Clone + PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>;

    /// Copy with the yielded suffix removed once, if present.
    fn drop_suffix_iter<I>(&self, suffix: I) -> Vec<T>
    where
        T: Clone + PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>;

    /// Returns `true` if at least one element matches `predicate`.
    fn has<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool;

    /// Calls `action` when this sequence is not empty.
    fn on_not_empty<F: FnOnce(&Self)>(&self, action: F) -> &Self;

    /// Calls `action` when this sequence is empty.
    fn on_empty<F: FnOnce(&Self)>(&self, action: F) -> &Self;

    /// Returns itself if not empty, otherwise `None`.
    fn take_if_not_empty(&self) -> Option<&Self>;

    /// Returns itself if empty, otherwise `None`.
    fn take_if_empty(&self) -> Option<&Self>;
}

impl<T> SequenceExt<T> for [T] {
    fn has_prefix<S: AsRef<[T]>>(&self, pattern: S) -> bool
    where
        T: PartialEq,
    {
        slice::starts_with(self, pattern.as_ref())
    }

    fn has_suffix<S: AsRef<[T]>>(&self, pattern: S) -> bool
    where
        T: PartialEq,
    {
        slice::ends_with(self, pattern.as_ref())
    }

    fn has_prefix_item(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        slice::starts_with(self, std::slice::from_ref(item))
    }

    fn has_suffix_item(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        slice::ends_with(self, std::slice::from_ref(item))
    }

    fn has_prefix_iter<I>(&self, pattern: I) -> bool
    where
        T: PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        slice::starts_with_iter(self, pattern)
    }

    fn has_suffix_iter<I>(&self, pattern: I) -> bool
    where
        T: PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        slice::ends_with_iter(self, pattern)
    }

    fn drop_first(&self, n: i64) -> Result<Vec<T>>
    where
        T: Clone,
    {
        slice::drop_first(self, n)
    }

    fn drop_last(&self, n: i64) -> Result<Vec<T>>
    where
        T: Clone,
    {
        slice::drop_last(self, n)
    }

    fn without_first(&self) -> Vec<T>
    where
        T: Clone,
    {
        slice::strip_first(self, 1).to_vec()
    }

    fn without_last(&self) -> Vec<T>
    where
        T: Clone,
    {
        slice::strip_last(self, 1).to_vec()
    }

    fn drop_prefix<S: AsRef<[T]>>(&self, prefix: S) -> Vec<T>
    where
        T: Clone + PartialEq,
    {
        slice::drop_prefix(self, prefix.as_ref())
    }

    fn drop_suffix<S: AsRef<[T]>>(&self, suffix: S) -> Vec<T>
    where
        T: Clone + PartialEq,
    {
        slice::drop_suffix(self, suffix.as_ref())
    }

    fn drop_prefix_item(&self, item: &T) -> Vec<T>
    where
        T: Clone + PartialEq,
    {
        slice::drop_prefix(self, std::slice::from_ref(item))
    }

    fn drop_suffix_item(&self, item: &T) -> Vec<T>
    where
        T: Clone + PartialEq,
    {
        slice::drop_suffix(self, std::slice::from_ref(item))
    }

    fn drop_prefix_iter<I>(&self, prefix: I) -> Vec<T>
    where
        T: Clone + PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        slice::strip_prefix_iter(self, prefix).unwrap_or(self).to_vec()
    }

    fn drop_suffix_iter<I>(&self, suffix: I) -> Vec<T>
    where
        T: Clone + PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        slice::strip_suffix_iter(self, suffix).unwrap_or(self).to_vec()
    }

    fn has<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool {
        self.iter().any(predicate)
    }

    fn on_not_empty<F: FnOnce(&Self)>(&self, action: F) -> &Self {
        if !self.is_empty() {
            action(self);
        }
        self
    }

    fn on_empty<F: FnOnce(&Self)>(&self, action: F) -> &Self {
        if self.is_empty() {
            action(self);
        }
        self
    }

    fn take_if_not_empty(&self) -> Option<&Self> {
        (!self.is_empty()).then_some(self)
    }

    fn take_if_empty(&self) -> Option<&Self> {
        self.is_empty().then_some(self)
    }
}

/// Helpers for a sequence that may be absent.
pub trait OptionSequenceExt<'a, T: 'a> {
    /// Returns `true` if present and not empty.
    fn is_some_not_empty(&self) -> bool;

    /// Calls `action` when present and not empty.
    fn on_some_not_empty<F: FnOnce(&'a [T])>(self, action: F) -> Self;

    /// Calls `action` when absent or empty.
    fn on_none_or_empty<F: FnOnce(Option<&'a [T]>)>(self, action: F) -> Self;

    /// Keeps the sequence only if it is present and not empty.
    fn filter_not_empty(self) -> Option<&'a [T]>;
}

impl<'a, T> OptionSequenceExt<'a, T> for Option<&'a [T]> {
    fn is_some_not_empty(&self) -> bool {
        self.is_some_and(|sequence| !sequence.is_empty())
    }

    fn on_some_not_empty<F: FnOnce(&'a [T])>(self, action: F) -> Self {
        if let Some(sequence) = self.filter_not_empty() {
            action(sequence);
        }
        self
    }

    fn on_none_or_empty<F: FnOnce(Option<&'a [T]>)>(self, action: F) -> Self {
        if !self.is_some_not_empty() {
            action(self);
        }
        self
    }

    fn filter_not_empty(self) -> Option<&'a [T]> {
        self.filter(|sequence| !sequence.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overloads_agree() {
        let items = vec!["a", "b", "c"];

        assert!(items.has_prefix(["a", "b"]));
        assert!(items.has_prefix(vec!["a"]));
        assert!(items.has_prefix(&items[..2]));
        assert!(items.has_prefix_item(&"a"));
        assert!(items.has_prefix_iter(["a", "b"].iter()));

        assert!(items.has_suffix(["b", "c"]));
        assert!(items.has_suffix_item(&"c"));
        assert!(items.has_suffix_iter(vec!["c"]));

        assert!(!items.has_prefix(["b"]));
        assert!(!items.has_prefix_item(&"b"));
        assert!(!items.has_prefix_iter(["b"]));
    }

    #[test]
    fn test_drop_overloads_agree() {
        let items = [1_i32, 2, 3, 1];

        assert_eq!(items.drop_prefix([1]), vec![2, 3, 1]);
        assert_eq!(items.drop_prefix_item(&1), vec![2, 3, 1]);
        assert_eq!(items.drop_prefix_iter(vec![1]), vec![2, 3, 1]);

        assert_eq!(items.drop_suffix([3, 1]), vec![1, 2]);
        assert_eq!(items.drop_suffix_item(&1), vec![1, 2, 3]);
        assert_eq!(items.drop_suffix_iter([3, 1].iter()), vec![1, 2]);

        assert_eq!(items.drop_prefix([9]), items.to_vec());
        assert_eq!(items.drop_suffix_iter([9]), items.to_vec());
    }

    #[test]
    fn test_drop_counts() {
        let items = vec![1, 2, 3];
        assert_eq!(items.without_first(), vec![2, 3]);
        assert_eq!(items.without_last(), vec![1, 2]);
        assert_eq!(items.drop_first(2).unwrap(), vec![3]);
        assert_eq!(items.drop_last(2).unwrap(), vec![1]);
        assert!(items.drop_first(-1).is_err());

        let empty: Vec<i32> = Vec::new();
        assert!(empty.without_first().is_empty());
        assert!(empty.without_last().is_empty());
    }

    #[test]
    fn test_has_predicate() {
        let items = [1, 2, 3];
        assert!(items.has(|n| *n > 2));
        assert!(!items.has(|n| *n > 3));
    }

    #[test]
    fn test_emptiness_callbacks() {
        let items = [1, 2];
        let empty: [i32; 0] = [];

        let mut calls = 0;
        items[..].on_not_empty(|_| calls += 1).on_empty(|_| calls += 10);
        empty[..].on_not_empty(|_| calls += 100).on_empty(|_| calls += 1000);
        assert_eq!(calls, 1001);

        assert_eq!(items.take_if_not_empty(), Some(&items[..]));
        assert_eq!(items.take_if_empty(), None);
        assert_eq!(empty.take_if_empty(), Some(&empty[..]));
    }

    #[test]
    fn test_option_helpers() {
        let items = [1, 2];
        let present: Option<&[i32]> = Some(&items);
        let blank: Option<&[i32]> = Some(&[]);
        let absent: Option<&[i32]> = None;

        assert!(present.is_some_not_empty());
        assert!(!blank.is_some_not_empty());
        assert!(!absent.is_some_not_empty());

        assert_eq!(blank.filter_not_empty(), None);
        assert_eq!(present.filter_not_empty(), Some(&items[..]));

        let mut seen = Vec::new();
        present.on_some_not_empty(|s| seen.push(s.len()));
        blank.on_some_not_empty(|s| seen.push(s.len()));
        assert_eq!(seen, vec![2]);

        let mut misses = 0;
        absent.on_none_or_empty(|_| misses += 1);
        blank.on_none_or_empty(|_| misses += 1);
        present.on_none_or_empty(|_| misses += 1);
        assert_eq!(misses, 2);
    }

    #[test]
    fn test_option_helpers_on_borrowed_elements() {
        let owned = vec!["a".to_string(), "b".to_string()];
        let names: Vec<&str> = owned.iter().map(String::as_str).collect();
        let present: Option<&[&str]> = Some(&names);

        let mut first = None;
        present.on_some_not_empty(|s| first = s.first().copied());
        assert_eq!(first, Some("a"));
        assert_eq!(present.filter_not_empty().map(<[&str]>::len), Some(2));
    }
}
