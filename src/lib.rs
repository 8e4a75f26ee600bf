#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]

#[cfg(all(not(any(feature = "std", test)), feature = "alloc"))]
extern crate alloc as std;

#[cfg(any(feature = "std", test))]
extern crate std;

use core::{
  cmp::Ordering,
  fmt,
  hash::{Hash, Hasher},
  marker::PhantomData,
  mem,
  ops::{Index, IndexMut},
  sync::atomic::{self, AtomicUsize},
};
use macros::*;

pub use array::ArrayStorage;
pub use cursor::Cursor;
pub use error::{Direction, Error, Rejected};
pub use generic_array::{typenum, ArrayLength, ConstArrayLength};
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;
pub use membership::Membership;
pub use storage::Storage;

mod array;
mod cursor;
mod error;
mod into_iter;
mod iter;
mod iter_mut;
mod macros;
mod membership;
mod storage;


/// A [`GenericRotableVec`] backed by a growable [`Vec`].
///
/// [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub type RotableVec<T> = GenericRotableVec<T, std::vec::Vec<T>>;

/// A [`GenericRotableVec`] with a fixed capacity of `N`, stored inline in an [`ArrayStorage`].
pub type ArrayRotableVec<T, N> = GenericRotableVec<T, ArrayStorage<T, N>>;

/// [`ArrayRotableVec`] with a const-generic `usize` capacity, using the
/// [`ConstArrayLength`] type alias for `N`.
///
/// Note that not all `N` values are valid due to limitations inherent to
/// `typenum` and Rust.
pub type ConstArrayRotableVec<T, const N: usize> = ArrayRotableVec<T, ConstArrayLength<N>>;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

#[cfg(target_has_atomic = "ptr")]
#[inline]
fn next_id() -> usize {
  NEXT_ID.fetch_add(1, atomic::Ordering::Relaxed)
}

/// Targets without atomic read-modify-write (`thumbv6m` and similar) only get
/// a load followed by a store, so two lists created concurrently from an
/// interrupt and the main thread can share an id there. A cursor of one then
/// passes the owner check of the other.
#[cfg(not(target_has_atomic = "ptr"))]
#[inline]
fn next_id() -> usize {
  let id = NEXT_ID.load(atomic::Ordering::Relaxed);
  NEXT_ID.store(id.wrapping_add(1), atomic::Ordering::Relaxed);
  id
}

/// An array list whose logical order can be rotated in O(1).
///
/// The elements live in a contiguous [`Storage`]. The list remembers the
/// *finger*, the physical slot that is logical index `0`; logical index `i`
/// lives in physical slot `(i + finger) % len`. [`rotate`](Self::rotate)
/// only moves the finger, so no element is copied.
///
/// Every operation takes logical indices and fails with
/// [`Error::OutOfRange`] instead of panicking when an index is out of
/// bounds. Inserting or removing shifts the physical slots between the
/// affected position and the physical end, like a `Vec`, and moves the finger
/// when the shifted slots include it, so the logical order of the other
/// elements never changes.
///
/// [`sort`](Self::sort_by) works on the physical storage directly and
/// discards the rotation.
///
/// ## Examples
///
/// ```rust
/// use rotable_vec::RotableVec;
///
/// let mut list = RotableVec::new();
/// for value in 0..5 {
///   list.push_back(value).unwrap();
/// }
///
/// list.rotate(2);
/// assert_eq!(list, [3, 4, 0, 1, 2]);
///
/// list.remove_at(0).unwrap();
/// assert_eq!(list, [4, 0, 1, 2]);
///
/// list.insert(1, 9).unwrap();
/// assert_eq!(list.to_string(), "[4, 9, 0, 1, 2]");
/// ```
///
/// With a fixed capacity and no allocation:
///
/// ```rust
/// use rotable_vec::{ArrayRotableVec, Error, typenum::U3};
///
/// let mut list = ArrayRotableVec::<u8, U3>::new();
/// list.append_all([1, 2, 3]).unwrap();
/// list.rotate(-1);
/// assert_eq!(list, [2, 3, 1]);
///
/// let rejected = list.push_back(4).unwrap_err();
/// assert_eq!(rejected.error(), Error::CapacityExceeded { capacity: 3 });
/// ```
pub struct GenericRotableVec<T, S> {
  storage: S,
  finger: usize,
  version: usize,
  id: usize,
  _marker: PhantomData<T>,
}

impl<T, S> GenericRotableVec<T, S>
where
  S: Storage<T>,
{
  /// Creates an empty list.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::{ArrayRotableVec, RotableVec, typenum::U8};
  ///
  /// let list: RotableVec<u32> = RotableVec::new();
  /// let array: ArrayRotableVec<u32, U8> = ArrayRotableVec::new();
  /// assert!(list.is_empty() && array.is_empty());
  /// ```
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn new() -> Self
  where
    S: Default,
  {
    Self::from_storage(S::default())
  }

  /// Wraps an existing storage. Its physical order becomes the logical order.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn from_storage(storage: S) -> Self {
    Self {
      storage,
      finger: 0,
      version: 0,
      id: next_id(),
      _marker: PhantomData,
    }
  }

  /// Unwraps the storage, laid out in logical order.
  pub fn into_storage(mut self) -> S {
    self.make_contiguous();
    self.storage
  }

  /// Returns the number of elements.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn len(&self) -> usize {
    self.storage.len()
  }

  /// Returns `true` if the list holds no elements.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn is_empty(&self) -> bool {
    self.storage.is_empty()
  }

  /// Returns how many more elements fit, or `None` if the storage grows on demand.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn remaining_capacity(&self) -> Option<usize> {
    self.storage.remaining_capacity()
  }

  /// Returns `true` if the storage cannot take another element.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn is_full(&self) -> bool {
    self.storage.remaining_capacity() == Some(0)
  }

  #[cfg_attr(not(tarpaulin), inline(always))]
  pub(crate) fn version(&self) -> usize {
    self.version
  }

  #[cfg_attr(not(tarpaulin), inline(always))]
  pub(crate) fn id(&self) -> usize {
    self.id
  }

  /// Returns a reference to the element at logical `index`.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::{Error, RotableVec};
  ///
  /// let mut list: RotableVec<i32> = (0..5).collect();
  /// list.rotate(2);
  /// assert_eq!(list.get(0), Ok(&3));
  /// assert_eq!(list.get(5), Err(Error::OutOfRange { index: 5, len: 5 }));
  /// ```
  #[inline]
  pub fn get(&self, index: usize) -> Result<&T, Error> {
    let len = self.len();
    if index >= len {
      return Err(Error::out_of_range(index, len));
    }
    let idx = self.to_physical_idx(index);
    Ok(&self.storage.as_slice()[idx])
  }

  /// Returns a mutable reference to the element at logical `index`.
  #[inline]
  pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
    let len = self.len();
    if index >= len {
      return Err(Error::out_of_range(index, len));
    }
    let idx = self.to_physical_idx(index);
    Ok(&mut self.storage.as_mut_slice()[idx])
  }

  /// Replaces the element at logical `index`, returning the old one.
  ///
  /// This is not a structural change: open [`Cursor`]s stay valid.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..4).collect();
  /// assert_eq!(list.set(0, 3).ok(), Some(0));
  /// assert_eq!(list.set(3, 0).ok(), Some(3));
  /// assert_eq!(list, [3, 1, 2, 0]);
  /// assert_eq!(list.set(4, 9).unwrap_err().into_value(), 9);
  /// ```
  pub fn set(&mut self, index: usize, value: T) -> Result<T, Rejected<T>> {
    match self.get_mut(index) {
      Ok(slot) => Ok(mem::replace(slot, value)),
      Err(error) => Err(Rejected::new(value, error)),
    }
  }

  /// Returns the first element, or `None` if the list is empty.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn front(&self) -> Option<&T> {
    self.get(0).ok()
  }

  /// Returns the last element, or `None` if the list is empty.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn back(&self) -> Option<&T> {
    self.len().checked_sub(1).and_then(|idx| self.get(idx).ok())
  }

  /// Swaps the elements at logical indices `i` and `j`.
  ///
  /// ## Panics
  ///
  /// Panics if either index is out of bounds.
  pub fn swap(&mut self, i: usize, j: usize) {
    assert!(i < self.len());
    assert!(j < self.len());
    let ri = self.to_physical_idx(i);
    let rj = self.to_physical_idx(j);
    self.storage.as_mut_slice().swap(ri, rj);
  }

  /// Inserts `value` so that it ends up at logical `index`.
  ///
  /// Valid indices are `0..=len`. On failure the value is handed back inside
  /// the [`Rejected`].
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..2).collect();
  /// list.insert(1, 10).unwrap();
  /// list.insert(0, 11).unwrap();
  /// list.insert(4, 12).unwrap();
  /// assert_eq!(list, [11, 0, 10, 1, 12]);
  /// ```
  pub fn insert(&mut self, index: usize, value: T) -> Result<(), Rejected<T>> {
    let len = self.len();
    if index > len {
      return Err(Rejected::new(value, Error::out_of_range(index, len)));
    }

    let (idx, wrapped) = self.insertion_point(index);
    if let Some(value) = self.storage.insert(idx, value) {
      return Err(Rejected::new(value, Error::CapacityExceeded { capacity: len }));
    }

    self.grew(1, wrapped);
    Ok(())
  }

  /// Appends `value` at the logical back.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn push_back(&mut self, value: T) -> Result<(), Rejected<T>> {
    self.insert(self.len(), value)
  }

  /// Prepends `value` at the logical front.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn push_front(&mut self, value: T) -> Result<(), Rejected<T>> {
    self.insert(0, value)
  }

  /// Inserts every item of `items`, in order, starting at logical `index`.
  ///
  /// Returns `Ok(false)` without touching the list if `items` is empty.
  /// A fixed-capacity list checks the item count up front and fails with
  /// [`Error::CapacityExceeded`] without inserting anything.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..5).collect();
  /// list.rotate(2);
  /// assert_eq!(list.insert_all(3, [10, 11]), Ok(true));
  /// assert_eq!(list, [3, 4, 0, 10, 11, 1, 2]);
  /// assert_eq!(list.insert_all(1, []), Ok(false));
  /// ```
  pub fn insert_all<I>(&mut self, index: usize, items: I) -> Result<bool, Error>
  where
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
  {
    let len = self.len();
    if index > len {
      return Err(Error::out_of_range(index, len));
    }

    let items = items.into_iter();
    let count = items.len();
    if count == 0 {
      return Ok(false);
    }
    if let Some(remaining) = self.storage.remaining_capacity() {
      if count > remaining {
        return Err(Error::CapacityExceeded {
          capacity: len + remaining,
        });
      }
    }

    let (idx, wrapped) = self.insertion_point(index);
    let inserted = self.splice(idx, items)?;
    if inserted == 0 {
      return Ok(false);
    }

    self.grew(inserted, wrapped);
    trace!("inserted {inserted} elements at {index}");
    Ok(true)
  }

  /// Appends every item of `items`, in order, at the logical back.
  ///
  /// Same as [`insert_all`](Self::insert_all) at `len()`.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..4).collect();
  /// list.rotate(-2);
  /// assert_eq!(list.append_all([4, 5, 6]), Ok(true));
  /// assert_eq!(list, [2, 3, 0, 1, 4, 5, 6]);
  /// ```
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn append_all<I>(&mut self, items: I) -> Result<bool, Error>
  where
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
  {
    self.insert_all(self.len(), items)
  }

  /// Removes and returns the element at logical `index`.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::{Error, RotableVec};
  ///
  /// let mut list: RotableVec<i32> = (0..5).collect();
  /// list.rotate(2);
  /// assert_eq!(list.remove_at(0), Ok(3));
  /// assert_eq!(list, [4, 0, 1, 2]);
  /// assert_eq!(list.remove_at(4), Err(Error::OutOfRange { index: 4, len: 4 }));
  /// ```
  pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
    let len = self.len();
    if index >= len {
      return Err(Error::out_of_range(index, len));
    }

    let idx = self.to_physical_idx(index);
    let value = self.storage.remove(idx);
    if idx < self.finger {
      self.finger -= 1;
    }
    let len = len - 1;
    if self.finger >= len {
      // Either the list is now empty or the finger sat on the removed last slot.
      self.finger = 0;
    }
    self.bump();
    Ok(value)
  }

  /// Removes the first element and returns it, or `None` if the list is empty.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn pop_front(&mut self) -> Option<T> {
    self.remove_at(0).ok()
  }

  /// Removes the last element and returns it, or `None` if the list is empty.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn pop_back(&mut self) -> Option<T> {
    let last = self.len().checked_sub(1)?;
    self.remove_at(last).ok()
  }

  /// Removes the first element equal to `value`, in logical order.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..5).collect();
  /// list.rotate(-1);
  /// assert_eq!(list.remove_item(&3), Some(3));
  /// assert_eq!(list, [1, 2, 4, 0]);
  /// assert_eq!(list.remove_item(&3), None);
  /// ```
  pub fn remove_item(&mut self, value: &T) -> Option<T>
  where
    T: PartialEq,
  {
    let index = self.index_of(value)?;
    self.remove_at(index).ok()
  }

  /// Returns the logical index of the first element equal to `value`.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..10).collect();
  /// list.rotate(-3);
  /// assert_eq!(list.index_of(&4), Some(1));
  /// assert_eq!(list.last_index_of(&1), Some(8));
  /// assert_eq!(list.index_of(&10), None);
  /// ```
  pub fn index_of(&self, value: &T) -> Option<usize>
  where
    T: PartialEq,
  {
    self.iter().position(|elem| elem == value)
  }

  /// Returns the logical index of the last element equal to `value`.
  pub fn last_index_of(&self, value: &T) -> Option<usize>
  where
    T: PartialEq,
  {
    self.iter().rposition(|elem| elem == value)
  }

  /// Returns `true` if the list contains an element equal to `x`.
  pub fn contains(&self, x: &T) -> bool
  where
    T: PartialEq,
  {
    let (a, b) = self.as_slices();
    a.contains(x) || b.contains(x)
  }

  /// Removes every element that is a member of `items`.
  ///
  /// Returns `false` without scanning if `items` is empty, otherwise whether
  /// anything was removed.
  ///
  /// ## Examples
  ///
  /// ```
  /// use std::collections::HashSet;
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..10).collect();
  /// list.rotate(3);
  /// let set: HashSet<i32> = [0, 2, 3, 6, 9].into_iter().collect();
  /// assert!(list.remove_all(&set));
  /// assert_eq!(list, [7, 8, 1, 4, 5]);
  /// ```
  pub fn remove_all<M>(&mut self, items: &M) -> bool
  where
    M: Membership<T> + ?Sized,
  {
    self.filter_members(items, true)
  }

  /// Removes every element that is not a member of `items`.
  ///
  /// Returns `false` without scanning if `items` is empty, otherwise whether
  /// anything was removed.
  ///
  /// ## Examples
  ///
  /// ```
  /// use std::collections::BTreeSet;
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..5).collect();
  /// list.rotate(3);
  /// let set: BTreeSet<i32> = [2, 3, 1].into_iter().collect();
  /// assert!(list.retain_all(&set));
  /// assert_eq!(list, [2, 3, 1]);
  /// ```
  pub fn retain_all<M>(&mut self, items: &M) -> bool
  where
    M: Membership<T> + ?Sized,
  {
    self.filter_members(items, false)
  }

  fn filter_members<M>(&mut self, items: &M, remove_members: bool) -> bool
  where
    M: Membership<T> + ?Sized,
  {
    if items.is_empty() {
      return false;
    }

    let mut cursor = self.cursor();
    let mut removed = false;
    while let Ok(value) = cursor.next(&*self) {
      if items.contains(value) == remove_members {
        match cursor.remove(&mut *self) {
          Ok(_) => removed = true,
          Err(err) => unreachable!("removing the element the cursor just returned failed: {err}"),
        }
      }
    }
    removed
  }

  /// Retains only the elements specified by the predicate.
  ///
  /// Visits each element exactly once in logical order and keeps the
  /// retained elements in order.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (1..7).collect();
  /// list.rotate(1);
  /// list.retain(|&x| x % 2 == 0);
  /// assert_eq!(list, [6, 2, 4]);
  /// ```
  pub fn retain<F>(&mut self, mut f: F)
  where
    F: FnMut(&T) -> bool,
  {
    self.retain_mut(|elem| f(elem));
  }

  /// Retains only the elements specified by the predicate, which may also
  /// edit them.
  pub fn retain_mut<F>(&mut self, mut f: F)
  where
    F: FnMut(&mut T) -> bool,
  {
    let len = self.len();
    let mut idx = 0;
    let mut cur = 0;

    // Stage 1: All values are retained.
    while cur < len {
      let physical = self.to_physical_idx(cur);
      if !f(&mut self.storage.as_mut_slice()[physical]) {
        cur += 1;
        break;
      }
      cur += 1;
      idx += 1;
    }
    // Stage 2: Swap retained value into current idx.
    while cur < len {
      let physical = self.to_physical_idx(cur);
      if !f(&mut self.storage.as_mut_slice()[physical]) {
        cur += 1;
        continue;
      }

      self.swap(idx, cur);
      cur += 1;
      idx += 1;
    }
    // Stage 3: Truncate all values after idx.
    if cur != idx {
      self.truncate(idx);
    }
  }

  /// Shortens the list to its first `len` elements, dropping the rest.
  ///
  /// Has no effect if `len` is not smaller than the current length.
  pub fn truncate(&mut self, len: usize) {
    if len >= self.len() {
      return;
    }

    self.make_contiguous();
    while self.storage.len() > len {
      self.storage.pop();
    }
    self.bump();
  }

  /// Removes every element and resets the rotation.
  pub fn clear(&mut self) {
    self.storage.clear();
    self.finger = 0;
    self.bump();
    trace!("cleared");
  }

  /// Sorts the physical storage with `compare` and resets the rotation.
  ///
  /// The rotation is discarded, not preserved: afterwards logical order and
  /// physical order coincide. The sort is stable.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list = RotableVec::from(vec![5, 2, 1, 4]);
  /// list.rotate(-1);
  /// list.sort_by(|a, b| a.cmp(b));
  /// assert_eq!(list, [1, 2, 4, 5]);
  /// ```
  #[cfg(feature = "alloc")]
  #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
  pub fn sort_by<F>(&mut self, compare: F)
  where
    F: FnMut(&T, &T) -> Ordering,
  {
    self.storage.as_mut_slice().sort_by(compare);
    self.sorted();
  }

  /// Sorts in ascending order and resets the rotation. See [`sort_by`](Self::sort_by).
  #[cfg(feature = "alloc")]
  #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
  pub fn sort(&mut self)
  where
    T: Ord,
  {
    self.sort_by(T::cmp);
  }

  /// Sorts by the extracted key and resets the rotation. See [`sort_by`](Self::sort_by).
  #[cfg(feature = "alloc")]
  #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
  pub fn sort_by_key<K, F>(&mut self, f: F)
  where
    K: Ord,
    F: FnMut(&T) -> K,
  {
    self.storage.as_mut_slice().sort_by_key(f);
    self.sorted();
  }

  /// Sorts without preserving the order of equal elements and resets the
  /// rotation. Available without `alloc`.
  pub fn sort_unstable_by<F>(&mut self, compare: F)
  where
    F: FnMut(&T, &T) -> Ordering,
  {
    self.storage.as_mut_slice().sort_unstable_by(compare);
    self.sorted();
  }

  /// Rotates the logical order by `offset` places in O(1).
  ///
  /// A positive `offset` rotates right: the element at logical index `0`
  /// moves to logical index `offset`. A negative `offset` rotates left.
  /// Offsets are taken modulo the length, and rotating an empty list does
  /// nothing. No element is moved in the storage.
  ///
  /// Rotation is not a structural change: an open [`Cursor`] keeps its
  /// logical position and walks the rotated order from there.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..5).collect();
  /// list.rotate(2);
  /// assert_eq!(list, [3, 4, 0, 1, 2]);
  /// list.rotate(-4);
  /// assert_eq!(list, [2, 3, 4, 0, 1]);
  /// list.rotate(-8);
  /// assert_eq!(list, [0, 1, 2, 3, 4]);
  /// ```
  #[inline]
  pub fn rotate(&mut self, offset: isize) {
    let n = offset.unsigned_abs();
    if offset >= 0 {
      self.rotate_right(n);
    } else {
      self.rotate_left(n);
    }
  }

  /// Rotates `n` places to the right in O(1): the first element moves to
  /// logical index `n % len`.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..10).collect();
  /// list.rotate_right(3);
  /// assert_eq!(list, [7, 8, 9, 0, 1, 2, 3, 4, 5, 6]);
  /// ```
  pub fn rotate_right(&mut self, n: usize) {
    let len = self.len();
    if len == 0 || n % len == 0 {
      return;
    }
    self.finger = wrap_sub(self.finger, n % len, len);
    trace!("rotated right by {n}, finger at {}", self.finger);
  }

  /// Rotates `n` places to the left in O(1): the element at logical index
  /// `n % len` becomes the first.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..10).collect();
  /// list.rotate_left(3);
  /// assert_eq!(list, [3, 4, 5, 6, 7, 8, 9, 0, 1, 2]);
  /// ```
  pub fn rotate_left(&mut self, n: usize) {
    let len = self.len();
    if len == 0 || n % len == 0 {
      return;
    }
    self.finger = wrap_add(self.finger, n % len, len);
    trace!("rotated left by {n}, finger at {}", self.finger);
  }

  /// Returns a pair of slices which contain, in order, the contents of the list.
  ///
  /// The first slice runs from the finger to the physical end, the second
  /// holds the elements that wrapped around to the physical start.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..5).collect();
  /// list.rotate(2);
  /// assert_eq!(list.as_slices(), (&[3, 4][..], &[0, 1, 2][..]));
  /// ```
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn as_slices(&self) -> (&[T], &[T]) {
    let (wrapped, front) = self.storage.as_slice().split_at(self.finger);
    (front, wrapped)
  }

  /// Mutable version of [`as_slices`](Self::as_slices).
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
    let (wrapped, front) = self.storage.as_mut_slice().split_at_mut(self.finger);
    (front, wrapped)
  }

  /// Rearranges the storage so that physical order is logical order, and
  /// returns it as one slice.
  ///
  /// The logical order is unchanged, so this is not a structural change.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..5).collect();
  /// list.rotate(2);
  /// assert_eq!(list.make_contiguous(), &[3, 4, 0, 1, 2]);
  /// assert_eq!(list.as_slices(), (&[3, 4, 0, 1, 2][..], &[][..]));
  /// ```
  pub fn make_contiguous(&mut self) -> &mut [T] {
    let finger = mem::take(&mut self.finger);
    if finger != 0 {
      trace!("made contiguous from finger {finger}");
    }
    let slice = self.storage.as_mut_slice();
    slice.rotate_left(finger);
    slice
  }

  /// Returns a front-to-back iterator in logical order.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn iter(&self) -> Iter<'_, T> {
    let (a, b) = self.as_slices();
    Iter::new(a, b)
  }

  /// Returns a front-to-back iterator in logical order that returns mutable
  /// references.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn iter_mut(&mut self) -> IterMut<'_, T> {
    let (a, b) = self.as_mut_slices();
    IterMut::new(a, b)
  }

  /// Returns a [`Cursor`] before the first element.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn cursor(&self) -> Cursor {
    Cursor::new(0, self.version, self.id)
  }

  /// Returns a [`Cursor`] before the element at logical `index`.
  ///
  /// Valid indices are `0..=len`; `len` places the cursor after the last element.
  pub fn cursor_at(&self, index: usize) -> Result<Cursor, Error> {
    let len = self.len();
    if index > len {
      return Err(Error::out_of_range(index, len));
    }
    Ok(Cursor::new(index, self.version, self.id))
  }

  /// Copies the elements into a new `Vec` in logical order.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..5).collect();
  /// list.rotate(3);
  /// assert_eq!(list.to_vec(), vec![2, 3, 4, 0, 1]);
  /// ```
  #[cfg(feature = "alloc")]
  #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
  pub fn to_vec(&self) -> std::vec::Vec<T>
  where
    T: Clone,
  {
    self.iter().cloned().collect()
  }

  /// Copies the elements into `buf` in logical order.
  ///
  /// `buf` is extended with `None` first if it is shorter than the list. If it
  /// is longer, the slot right after the last copied element is set to
  /// `None` to mark the end; later slots are left alone.
  ///
  /// ## Examples
  ///
  /// ```
  /// use rotable_vec::RotableVec;
  ///
  /// let mut list: RotableVec<i32> = (0..3).collect();
  /// list.rotate(1);
  ///
  /// let mut buf = vec![Some(7); 5];
  /// list.copy_into(&mut buf);
  /// assert_eq!(buf, [Some(2), Some(0), Some(1), None, Some(7)]);
  ///
  /// let mut short = Vec::new();
  /// list.copy_into(&mut short);
  /// assert_eq!(short, [Some(2), Some(0), Some(1)]);
  /// ```
  #[cfg(feature = "alloc")]
  #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
  pub fn copy_into(&self, buf: &mut std::vec::Vec<Option<T>>)
  where
    T: Clone,
  {
    let len = self.len();
    if buf.len() < len {
      buf.resize_with(len, || None);
    }
    for (slot, value) in buf.iter_mut().zip(self.iter()) {
      *slot = Some(value.clone());
    }
    if let Some(end) = buf.get_mut(len) {
      *end = None;
    }
  }
}

impl<T, S> GenericRotableVec<T, S>
where
  S: Storage<T>,
{
  /// Translates a logical index below `len` to its physical slot.
  #[inline]
  fn to_physical_idx(&self, index: usize) -> usize {
    wrap_add(self.finger, index, self.storage.len())
  }

  /// Picks the physical slot for an insertion at logical `index` (`0..=len`).
  ///
  /// Positions up to the physical end go after the finger and leave it in
  /// place. Positions that wrapped around go before the finger, which then
  /// has to move up by the number of inserted elements.
  #[inline]
  fn insertion_point(&self, index: usize) -> (usize, bool) {
    let to_end = self.storage.len() - self.finger;
    if index <= to_end {
      (self.finger + index, false)
    } else {
      (index - to_end, true)
    }
  }

  /// Pushes `items` onto the physical end, then rotates them down so they
  /// start at physical `idx`. Returns how many were inserted.
  ///
  /// If the storage rejects an item, everything pushed so far is popped
  /// again and the storage is left as it was.
  fn splice<I>(&mut self, idx: usize, items: I) -> Result<usize, Error>
  where
    I: Iterator<Item = T>,
  {
    let start = self.storage.len();
    for item in items {
      if self.storage.push(item).is_some() {
        let capacity = self.storage.len();
        while self.storage.len() > start {
          self.storage.pop();
        }
        return Err(Error::CapacityExceeded { capacity });
      }
    }

    let inserted = self.storage.len() - start;
    self.storage.as_mut_slice()[idx..].rotate_right(inserted);
    Ok(inserted)
  }

  #[inline]
  fn grew(&mut self, inserted: usize, wrapped: bool) {
    if wrapped {
      self.finger += inserted;
    }
    self.bump();
  }

  #[inline]
  fn sorted(&mut self) {
    self.finger = 0;
    self.bump();
    trace!("sorted {} elements, rotation reset", self.storage.len());
  }

  #[inline]
  fn bump(&mut self) {
    self.version = self.version.wrapping_add(1);
  }
}

#[cfg(feature = "alloc")]
const _: () = {
  use std::vec::Vec;

  impl<T> GenericRotableVec<T, Vec<T>> {
    /// Creates an empty list with room for at least `capacity` elements.
    ///
    /// ## Examples
    ///
    /// ```
    /// use rotable_vec::RotableVec;
    ///
    /// let list: RotableVec<u8> = RotableVec::with_capacity(16);
    /// assert!(list.capacity() >= 16);
    /// ```
    #[cfg_attr(not(tarpaulin), inline(always))]
    pub fn with_capacity(capacity: usize) -> Self {
      Self::from_storage(Vec::with_capacity(capacity))
    }

    /// Returns the number of elements the list can hold without reallocating.
    #[cfg_attr(not(tarpaulin), inline(always))]
    pub fn capacity(&self) -> usize {
      self.storage.capacity()
    }
  }

  impl<T> From<Vec<T>> for GenericRotableVec<T, Vec<T>> {
    #[cfg_attr(not(tarpaulin), inline(always))]
    fn from(vec: Vec<T>) -> Self {
      Self::from_storage(vec)
    }
  }

  impl<T> From<GenericRotableVec<T, Vec<T>>> for Vec<T> {
    /// Returns the elements in logical order, reusing the allocation.
    #[cfg_attr(not(tarpaulin), inline(always))]
    fn from(list: GenericRotableVec<T, Vec<T>>) -> Self {
      list.into_storage()
    }
  }

  impl<T> FromIterator<T> for GenericRotableVec<T, Vec<T>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
      Self::from(iter.into_iter().collect::<Vec<T>>())
    }
  }

  impl<T> Extend<T> for GenericRotableVec<T, Vec<T>> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
      let (idx, wrapped) = self.insertion_point(self.len());
      // A `Vec` never rejects a push.
      if let Ok(inserted) = self.splice(idx, iter.into_iter()) {
        if inserted != 0 {
          self.grew(inserted, wrapped);
        }
      }
    }
  }
};

impl<T, N> GenericRotableVec<T, ArrayStorage<T, N>>
where
  N: ArrayLength,
{
  /// Returns the fixed capacity.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub const fn capacity(&self) -> usize {
    N::USIZE
  }
}

impl<T, S> Clone for GenericRotableVec<T, S>
where
  S: Clone,
{
  /// The clone is a new list: cursors of the source list do not apply to it.
  fn clone(&self) -> Self {
    Self {
      storage: self.storage.clone(),
      finger: self.finger,
      version: 0,
      id: next_id(),
      _marker: PhantomData,
    }
  }
}

impl<T, S> Default for GenericRotableVec<T, S>
where
  S: Storage<T> + Default,
{
  #[cfg_attr(not(tarpaulin), inline(always))]
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Debug, S: Storage<T>> fmt::Debug for GenericRotableVec<T, S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

/// Renders the logical order as `[e0, e1, ..., en-1]`.
impl<T: fmt::Display, S: Storage<T>> fmt::Display for GenericRotableVec<T, S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (idx, elem) in self.iter().enumerate() {
      if idx > 0 {
        f.write_str(", ")?;
      }
      fmt::Display::fmt(elem, f)?;
    }
    f.write_str("]")
  }
}

impl<T, U, S1, S2> PartialEq<GenericRotableVec<U, S2>> for GenericRotableVec<T, S1>
where
  T: PartialEq<U>,
  S1: Storage<T>,
  S2: Storage<U>,
{
  fn eq(&self, other: &GenericRotableVec<U, S2>) -> bool {
    if self.len() != other.len() {
      return false;
    }
    let (sa, sb) = self.as_slices();
    let (oa, ob) = other.as_slices();
    if sa.len() == oa.len() {
      sa == oa && sb == ob
    } else if sa.len() < oa.len() {
      // Always divisible in three sections, for example:
      // self:  [a b c|d e f]
      // other: [0 1 2 3|4 5]
      // front = 3, mid = 1,
      // [a b c] == [0 1 2] && [d] == [3] && [e f] == [4 5]
      let front = sa.len();
      let mid = oa.len() - front;

      let (oa_front, oa_mid) = oa.split_at(front);
      let (sb_mid, sb_back) = sb.split_at(mid);
      sa == oa_front && sb_mid == oa_mid && sb_back == ob
    } else {
      let front = oa.len();
      let mid = sa.len() - front;

      let (sa_front, sa_mid) = sa.split_at(front);
      let (ob_mid, ob_back) = ob.split_at(mid);
      sa_front == oa && sa_mid == ob_mid && sb == ob_back
    }
  }
}

impl<T: Eq, S: Storage<T>> Eq for GenericRotableVec<T, S> {}

macro_rules! __impl_slice_eq1 {
  ([$($vars:tt)*] $rhs:ty) => {
    impl<T, U, S, $($vars)*> PartialEq<$rhs> for GenericRotableVec<T, S>
    where
      T: PartialEq<U>,
      S: Storage<T>,
    {
      fn eq(&self, other: &$rhs) -> bool {
        if self.len() != other.len() {
          return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other[..].split_at(sa.len());
        sa == oa && sb == ob
      }
    }
  };
}

#[cfg(feature = "alloc")]
__impl_slice_eq1! { [] std::vec::Vec<U> }
__impl_slice_eq1! { [] &[U] }
__impl_slice_eq1! { [] &mut [U] }
__impl_slice_eq1! { [const M: usize] [U; M] }
__impl_slice_eq1! { [const M: usize] &[U; M] }

impl<T: PartialOrd, S: Storage<T>> PartialOrd for GenericRotableVec<T, S> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.iter().partial_cmp(other.iter())
  }
}

impl<T: Ord, S: Storage<T>> Ord for GenericRotableVec<T, S> {
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.iter().cmp(other.iter())
  }
}

impl<T: Hash, S: Storage<T>> Hash for GenericRotableVec<T, S> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_usize(self.len());
    // Hash element by element: the split returned by `as_slices` depends on
    // the rotation, not on the logical contents.
    self.iter().for_each(|elem| elem.hash(state));
  }
}

impl<T, S: Storage<T>> Index<usize> for GenericRotableVec<T, S> {
  type Output = T;

  #[inline]
  fn index(&self, index: usize) -> &T {
    match self.get(index) {
      Ok(value) => value,
      Err(err) => panic!("{err}"),
    }
  }
}

impl<T, S: Storage<T>> IndexMut<usize> for GenericRotableVec<T, S> {
  #[inline]
  fn index_mut(&mut self, index: usize) -> &mut T {
    match self.get_mut(index) {
      Ok(value) => value,
      Err(err) => panic!("{err}"),
    }
  }
}

impl<T, S: Storage<T> + Default> IntoIterator for GenericRotableVec<T, S> {
  type Item = T;
  type IntoIter = IntoIter<T, S>;

  /// Consumes the list into a front-to-back iterator yielding elements by
  /// value.
  fn into_iter(mut self) -> IntoIter<T, S> {
    self.make_contiguous().reverse();
    IntoIter::new(self.storage)
  }
}

impl<'a, T, S: Storage<T>> IntoIterator for &'a GenericRotableVec<T, S> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

impl<'a, T, S: Storage<T>> IntoIterator for &'a mut GenericRotableVec<T, S> {
  type Item = &'a mut T;
  type IntoIter = IterMut<'a, T>;

  fn into_iter(self) -> IterMut<'a, T> {
    self.iter_mut()
  }
}

/// Returns `(base + offset) % len` for `base, offset < len`.
#[inline]
const fn wrap_add(base: usize, offset: usize, len: usize) -> usize {
  debug_assert!(base < len || (base == 0 && len == 0));
  // Do the calculation like this to avoid overflowing if base + offset > usize::MAX
  if offset >= len - base {
    offset - (len - base)
  } else {
    base + offset
  }
}

/// Returns `(base - offset) mod len` for `base, offset < len`.
#[inline]
const fn wrap_sub(base: usize, offset: usize, len: usize) -> usize {
  debug_assert!(base < len && offset < len);
  if base >= offset {
    base - offset
  } else {
    base + (len - offset)
  }
}
