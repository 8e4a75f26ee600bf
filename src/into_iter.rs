use core::{fmt, iter::FusedIterator, marker::PhantomData};

use super::Storage;

/// An owning iterator over the elements of a
/// [`GenericRotableVec`](crate::GenericRotableVec) in logical order.
///
/// This `struct` is created by the `into_iter` method on
/// [`GenericRotableVec`](crate::GenericRotableVec) (provided by the
/// [`IntoIterator`] trait).
///
/// The elements sit on two stacks: `front` holds the leading ones back to
/// front and `back` the trailing ones in order, so either end is a pop. When
/// one side runs dry half of the other side moves over, which keeps both
/// ends amortized O(1).
pub struct IntoIter<T, S> {
  front: S,
  back: S,
  _marker: PhantomData<T>,
}

impl<T, S: Storage<T> + Default> IntoIter<T, S> {
  /// `reversed` must hold the elements in reverse logical order.
  pub(super) fn new(reversed: S) -> Self {
    Self {
      front: reversed,
      back: S::default(),
      _marker: PhantomData,
    }
  }
}

/// Moves the bottom part of `src` onto the empty `dst`, keeping the top half
/// of `src` in place.
///
/// `src` and `dst` face opposite ends of the same run, so the moved elements
/// land in the order `dst` pops them.
fn rebalance<T, S: Storage<T> + Default>(src: &mut S, dst: &mut S) {
  let keep = src.len() / 2;
  let mut parked = S::default();
  for _ in 0..keep {
    shift(src, &mut parked);
  }
  while !src.is_empty() {
    shift(src, dst);
  }
  while !parked.is_empty() {
    shift(&mut parked, src);
  }
}

#[cfg_attr(not(tarpaulin), inline(always))]
fn shift<T, S: Storage<T>>(from: &mut S, to: &mut S) {
  if let Some(value) = from.pop() {
    if to.push(value).is_some() {
      unreachable!("a storage holding the elements of one list rejected one of them");
    }
  }
}

impl<T, S: Clone> Clone for IntoIter<T, S> {
  fn clone(&self) -> Self {
    Self {
      front: self.front.clone(),
      back: self.back.clone(),
      _marker: PhantomData,
    }
  }
}

impl<T: fmt::Debug, S: Storage<T>> fmt::Debug for IntoIter<T, S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("IntoIter")
      .field(&Remaining {
        front: self.front.as_slice(),
        back: self.back.as_slice(),
      })
      .finish()
  }
}

/// Lists the elements left, front first.
struct Remaining<'a, T> {
  front: &'a [T],
  back: &'a [T],
}

impl<T: fmt::Debug> fmt::Debug for Remaining<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list()
      .entries(self.front.iter().rev().chain(self.back))
      .finish()
  }
}

impl<T, S: Storage<T> + Default> Iterator for IntoIter<T, S> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<T> {
    if self.front.is_empty() {
      rebalance(&mut self.back, &mut self.front);
    }
    self.front.pop()
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.len();
    (len, Some(len))
  }

  #[inline]
  fn count(self) -> usize {
    self.len()
  }
}

impl<T, S: Storage<T> + Default> DoubleEndedIterator for IntoIter<T, S> {
  #[inline]
  fn next_back(&mut self) -> Option<T> {
    if self.back.is_empty() {
      rebalance(&mut self.front, &mut self.back);
    }
    self.back.pop()
  }
}

impl<T, S: Storage<T> + Default> ExactSizeIterator for IntoIter<T, S> {
  #[inline]
  fn len(&self) -> usize {
    self.front.len() + self.back.len()
  }
}

impl<T, S: Storage<T> + Default> FusedIterator for IntoIter<T, S> {}
