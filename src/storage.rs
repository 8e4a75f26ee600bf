/// The physical backing store of a [`GenericRotableVec`](crate::GenericRotableVec).
///
/// A storage is a contiguous run of initialized slots addressed by *physical*
/// index `0..len()`. It knows nothing about rotation: the list translates
/// every logical index before it reaches the storage.
///
/// Fixed-capacity stores reject new elements by handing them back, the same
/// way [`ArrayStorage`](crate::ArrayStorage) does.
pub trait Storage<T> {
  /// Returns the number of initialized slots.
  fn len(&self) -> usize;

  /// Returns `true` if there are no initialized slots.
  #[inline]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns how many more elements fit, or `None` if the store grows on demand.
  fn remaining_capacity(&self) -> Option<usize>;

  /// Appends `value` at the physical end.
  ///
  /// Returns the value back if the store is full.
  fn push(&mut self, value: T) -> Option<T>;

  /// Removes the element at the physical end.
  fn pop(&mut self) -> Option<T>;

  /// Inserts `value` at physical `index`, shifting later slots up by one.
  ///
  /// Returns the value back if the store is full.
  ///
  /// ## Panics
  ///
  /// Panics if `index > len()`.
  fn insert(&mut self, index: usize, value: T) -> Option<T>;

  /// Removes and returns the element at physical `index`, shifting later
  /// slots down by one.
  ///
  /// ## Panics
  ///
  /// Panics if `index >= len()`.
  fn remove(&mut self, index: usize) -> T;

  /// Drops every element.
  fn clear(&mut self);

  /// Views the initialized slots in physical order.
  fn as_slice(&self) -> &[T];

  /// Mutably views the initialized slots in physical order.
  fn as_mut_slice(&mut self) -> &mut [T];
}

#[cfg(feature = "alloc")]
const _: () = {
  use std::vec::Vec;

  impl<T> Storage<T> for Vec<T> {
    #[cfg_attr(not(tarpaulin), inline(always))]
    fn len(&self) -> usize {
      Vec::len(self)
    }

    #[cfg_attr(not(tarpaulin), inline(always))]
    fn remaining_capacity(&self) -> Option<usize> {
      None
    }

    #[cfg_attr(not(tarpaulin), inline(always))]
    fn push(&mut self, value: T) -> Option<T> {
      Vec::push(self, value);
      None
    }

    #[cfg_attr(not(tarpaulin), inline(always))]
    fn pop(&mut self) -> Option<T> {
      Vec::pop(self)
    }

    #[cfg_attr(not(tarpaulin), inline(always))]
    fn insert(&mut self, index: usize, value: T) -> Option<T> {
      Vec::insert(self, index, value);
      None
    }

    #[cfg_attr(not(tarpaulin), inline(always))]
    fn remove(&mut self, index: usize) -> T {
      Vec::remove(self, index)
    }

    #[cfg_attr(not(tarpaulin), inline(always))]
    fn clear(&mut self) {
      Vec::clear(self)
    }

    #[cfg_attr(not(tarpaulin), inline(always))]
    fn as_slice(&self) -> &[T] {
      self
    }

    #[cfg_attr(not(tarpaulin), inline(always))]
    fn as_mut_slice(&mut self) -> &mut [T] {
      self
    }
  }
};
