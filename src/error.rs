use core::fmt;

/// The direction a [`Cursor`](crate::Cursor) was asked to move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
  /// Towards the back of the list, see [`Cursor::next`](crate::Cursor::next).
  Forward,
  /// Towards the front of the list, see [`Cursor::previous`](crate::Cursor::previous).
  Backward,
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Forward => f.write_str("next"),
      Self::Backward => f.write_str("previous"),
    }
  }
}

/// Errors reported by [`GenericRotableVec`](crate::GenericRotableVec) and [`Cursor`](crate::Cursor).
///
/// A failed call never leaves the list half-modified: the elements, the
/// rotation and the modification version are exactly what they were before
/// the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
  /// A logical index fell outside the bound accepted by the operation.
  ///
  /// Access and removal accept `0..len`, insertion accepts `0..=len`.
  #[error("index {index} is out of range for a list of length {len}")]
  OutOfRange {
    /// The offending index.
    index: usize,
    /// The length of the list when the index was checked.
    len: usize,
  },
  /// The backing store is full and cannot take more elements.
  #[error("the list is at full capacity ({capacity})")]
  CapacityExceeded {
    /// The fixed capacity of the backing store.
    capacity: usize,
  },
  /// The cursor has no element in the requested direction.
  #[error("no {0} element")]
  NoSuchElement(Direction),
  /// The cursor has not returned an element since it was created or since
  /// its last [`remove`](crate::Cursor::remove) or [`add`](crate::Cursor::add).
  #[error("no element has been returned since the last structural change through this cursor")]
  IllegalState,
  /// The list was structurally modified by something other than the cursor.
  #[error("the list was modified behind the cursor (expected version {expected}, found {actual})")]
  ConcurrentModification {
    /// The version the cursor last observed.
    expected: usize,
    /// The version the list reported.
    actual: usize,
  },
  /// The cursor was handed a list other than the one that created it.
  #[error("the cursor belongs to a different list")]
  ForeignCursor,
}

impl Error {
  #[inline]
  pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
    Self::OutOfRange { index, len }
  }
}

/// A value that an operation refused to take, together with the reason.
///
/// Operations that consume an element hand it back on failure instead of
/// dropping it.
///
/// ## Examples
///
/// ```
/// use rotable_vec::{Error, RotableVec};
///
/// let mut list = RotableVec::from(vec![1, 2]);
/// let rejected = list.insert(5, 3).unwrap_err();
/// assert_eq!(rejected.error(), Error::OutOfRange { index: 5, len: 2 });
/// assert_eq!(rejected.into_value(), 3);
/// ```
pub struct Rejected<T> {
  value: T,
  error: Error,
}

impl<T> Rejected<T> {
  #[inline]
  pub(crate) const fn new(value: T, error: Error) -> Self {
    Self { value, error }
  }

  /// Returns the reason the value was rejected.
  #[inline]
  pub const fn error(&self) -> Error {
    self.error
  }

  /// Returns a reference to the rejected value.
  #[inline]
  pub const fn value(&self) -> &T {
    &self.value
  }

  /// Takes the rejected value back.
  #[inline]
  pub fn into_value(self) -> T {
    self.value
  }

  /// Splits into the rejected value and the reason.
  #[inline]
  pub fn into_parts(self) -> (T, Error) {
    (self.value, self.error)
  }
}

impl<T> From<Rejected<T>> for Error {
  fn from(rejected: Rejected<T>) -> Self {
    rejected.error
  }
}

impl<T> fmt::Debug for Rejected<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Rejected")
      .field("error", &self.error)
      .finish_non_exhaustive()
  }
}

impl<T> fmt::Display for Rejected<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.error, f)
  }
}

impl<T> core::error::Error for Rejected<T> {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    Some(&self.error)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::string::ToString;

  #[test]
  fn messages_name_the_offending_values() {
    assert_eq!(
      Error::out_of_range(7, 3).to_string(),
      "index 7 is out of range for a list of length 3"
    );
    assert_eq!(
      Error::NoSuchElement(Direction::Backward).to_string(),
      "no previous element"
    );
    assert_eq!(
      Error::ConcurrentModification {
        expected: 1,
        actual: 4
      }
      .to_string(),
      "the list was modified behind the cursor (expected version 1, found 4)"
    );
  }

  #[test]
  fn rejected_hands_the_value_back() {
    let rejected = Rejected::new("payload", Error::CapacityExceeded { capacity: 2 });
    assert_eq!(rejected.to_string(), "the list is at full capacity (2)");
    assert_eq!(*rejected.value(), "payload");
    let (value, error) = rejected.into_parts();
    assert_eq!(value, "payload");
    assert_eq!(error, Error::CapacityExceeded { capacity: 2 });
  }
}
