use core::{fmt, iter::FusedIterator, mem};

/// A mutable iterator over the elements of a
/// [`GenericRotableVec`](crate::GenericRotableVec) in logical order.
///
/// This `struct` is created by the [`iter_mut`](crate::GenericRotableVec::iter_mut)
/// method. Editing elements through it is not a structural change, so open
/// [`Cursor`](crate::Cursor)s stay valid.
pub struct IterMut<'a, T> {
  head: &'a mut [T],
  tail: &'a mut [T],
}

impl<'a, T> IterMut<'a, T> {
  pub(super) fn new(head: &'a mut [T], tail: &'a mut [T]) -> Self {
    Self { head, tail }
  }

  /// Consumes the iterator into the pair of slices not yet yielded, in
  /// logical order.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..4).collect();
  /// list.rotate(1);
  ///
  /// let mut iter = list.iter_mut();
  /// iter.next();
  /// let (head, tail) = iter.into_slices();
  /// assert!(head.is_empty());
  /// tail[0] = 10;
  /// assert_eq!(list, [3, 10, 1, 2]);
  /// ```
  pub fn into_slices(self) -> (&'a mut [T], &'a mut [T]) {
    (self.head, self.tail)
  }

  /// Views the elements not yet yielded as a pair of slices, in logical order.
  pub fn as_slices(&self) -> (&[T], &[T]) {
    (self.head, self.tail)
  }

  /// Takes the run `next` reads from: `head` until it is used up.
  fn front_run(&mut self) -> &'a mut [T] {
    if self.head.is_empty() {
      mem::take(&mut self.tail)
    } else {
      mem::take(&mut self.head)
    }
  }

  /// Takes the run `next_back` reads from: `tail` until it is used up.
  fn back_run(&mut self) -> &'a mut [T] {
    if self.tail.is_empty() {
      mem::take(&mut self.head)
    } else {
      mem::take(&mut self.tail)
    }
  }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list()
      .entries(self.head.iter().chain(self.tail.iter()))
      .finish()
  }
}

impl<T> Default for IterMut<'_, T> {
  fn default() -> Self {
    Self::new(&mut [], &mut [])
  }
}

impl<'a, T> Iterator for IterMut<'a, T> {
  type Item = &'a mut T;

  #[inline]
  fn next(&mut self) -> Option<&'a mut T> {
    let from_head = !self.head.is_empty();
    let (first, rest) = self.front_run().split_first_mut()?;
    if from_head {
      self.head = rest;
    } else {
      self.tail = rest;
    }
    Some(first)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.len();
    (len, Some(len))
  }

  #[inline]
  fn last(mut self) -> Option<&'a mut T> {
    self.next_back()
  }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
  #[inline]
  fn next_back(&mut self) -> Option<&'a mut T> {
    let from_tail = !self.tail.is_empty();
    let (last, rest) = self.back_run().split_last_mut()?;
    if from_tail {
      self.tail = rest;
    } else {
      self.head = rest;
    }
    Some(last)
  }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
  #[inline]
  fn len(&self) -> usize {
    self.head.len() + self.tail.len()
  }
}

impl<T> FusedIterator for IterMut<'_, T> {}

#[cfg(all(test, feature = "alloc"))]
mod tests {
  use crate::RotableVec;
  use std::format;

  #[test]
  fn edits_follow_the_rotated_order() {
    let mut list: RotableVec<i32> = (0..5).collect();
    list.rotate(2);

    let mut iter = list.iter_mut();
    *iter.next().unwrap() += 10;
    *iter.next_back().unwrap() += 20;
    assert_eq!(iter.len(), 3);
    assert_eq!(format!("{iter:?}"), "[4, 0, 1]");
    for (step, elem) in iter.enumerate() {
      *elem = 100 + step as i32;
    }
    assert_eq!(list, [13, 100, 101, 102, 22]);
  }

  #[test]
  fn back_half_only() {
    let mut list: RotableVec<i32> = (0..4).collect();
    list.rotate(-1);
    let mut iter = list.iter_mut();
    while let Some(elem) = iter.next_back() {
      *elem *= 2;
    }
    assert!(iter.next().is_none());
    assert_eq!(list, [2, 4, 6, 0]);
  }
}
