use core::{fmt, iter::FusedIterator};

/// An iterator over the elements of a [`GenericRotableVec`](crate::GenericRotableVec)
/// in logical order.
///
/// This `struct` is created by the [`iter`](crate::GenericRotableVec::iter)
/// method. `head` is the physical run from the finger to the end of the
/// storage and `tail` the run that wrapped around to its start; both shrink
/// from the outside as elements are yielded.
#[derive(Clone)]
pub struct Iter<'a, T> {
  head: &'a [T],
  tail: &'a [T],
}

impl<'a, T> Iter<'a, T> {
  pub(super) const fn new(head: &'a [T], tail: &'a [T]) -> Self {
    Self { head, tail }
  }

  /// Views the elements not yet yielded as a pair of slices, in logical order.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..5).collect();
  /// list.rotate(2);
  ///
  /// let mut iter = list.iter();
  /// iter.next();
  /// iter.next_back();
  /// assert_eq!(iter.as_slices(), (&[4][..], &[0, 1][..]));
  /// ```
  pub const fn as_slices(&self) -> (&'a [T], &'a [T]) {
    (self.head, self.tail)
  }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list()
      .entries(self.head.iter().chain(self.tail))
      .finish()
  }
}

impl<T> Default for Iter<'_, T> {
  fn default() -> Self {
    Self::new(&[], &[])
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<&'a T> {
    let run = if self.head.is_empty() {
      &mut self.tail
    } else {
      &mut self.head
    };
    let slice: &'a [T] = *run;
    let (first, rest) = slice.split_first()?;
    *run = rest;
    Some(first)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.len();
    (len, Some(len))
  }

  fn nth(&mut self, n: usize) -> Option<&'a T> {
    if n < self.head.len() {
      self.head = &self.head[n..];
    } else {
      let skip = (n - self.head.len()).min(self.tail.len());
      self.head = &[];
      self.tail = &self.tail[skip..];
    }
    self.next()
  }

  #[inline]
  fn last(mut self) -> Option<&'a T> {
    self.next_back()
  }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
  #[inline]
  fn next_back(&mut self) -> Option<&'a T> {
    let run = if self.tail.is_empty() {
      &mut self.head
    } else {
      &mut self.tail
    };
    let slice: &'a [T] = *run;
    let (last, rest) = slice.split_last()?;
    *run = rest;
    Some(last)
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
  #[inline]
  fn len(&self) -> usize {
    self.head.len() + self.tail.len()
  }
}

impl<T> FusedIterator for Iter<'_, T> {}
