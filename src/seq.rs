//! Sequence access helpers.

use crate::error::{Error, Result};

/// Return the first element of a sequence, or `None` if it is empty.
///
/// Accepts anything iterable. Pass a borrow to leave the sequence intact and
/// get a reference back.
///
/// # Examples
///
/// ```
/// use strhelp::first_element;
///
/// let values = vec![1, 2, 3];
/// assert_eq!(first_element(&values), Some(&1));
/// assert_eq!(values.len(), 3);
///
/// assert_eq!(first_element(Vec::<i32>::new()), None);
/// ```
pub fn first_element<I: IntoIterator>(sequence: I) -> Option<I::Item> {
    sequence.into_iter().next()
}

/// Like [`first_element`], but an empty sequence is an error.
pub fn try_first_element<I: IntoIterator>(sequence: I) -> Result<I::Item> {
    first_element(sequence).ok_or(Error::EmptySequence)
}
