use core::{fmt, mem::MaybeUninit, ptr, slice};

use generic_array::{ArrayLength, GenericArray};

use super::Storage;

/// A fixed-capacity, stack-allocated backing store built on [`GenericArray`].
///
/// Slots `0..len` are initialized; the rest of the array is spare capacity.
/// Elements are shifted in place on insertion and removal, and pushing into a
/// full store hands the element back instead of reallocating.
///
/// This is the storage behind [`ArrayRotableVec`](crate::ArrayRotableVec) and
/// works without `alloc`.
///
/// ## Examples
///
/// ```
/// use rotable_vec::{ArrayStorage, Storage, typenum::U2};
///
/// let mut storage = ArrayStorage::<u32, U2>::new();
/// assert!(storage.push(1).is_none());
/// assert!(storage.insert(0, 0).is_none());
/// assert_eq!(storage.push(2), Some(2));
/// assert_eq!(storage.as_slice(), &[0, 1]);
/// ```
///
/// [`GenericArray`]: https://docs.rs/generic-array/latest/generic_array/struct.GenericArray.html
pub struct ArrayStorage<T, N>
where
  N: ArrayLength,
{
  array: GenericArray<MaybeUninit<T>, N>,
  len: usize,
}

impl<T, N> ArrayStorage<T, N>
where
  N: ArrayLength,
{
  /// Creates an empty store.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub const fn new() -> Self {
    Self {
      array: GenericArray::uninit(),
      len: 0,
    }
  }

  /// Returns the fixed number of slots.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub const fn capacity(&self) -> usize {
    N::USIZE
  }

  /// Returns `true` if no more elements fit.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub const fn is_full(&self) -> bool {
    self.len == N::USIZE
  }

  /// Marginally more convenient
  #[inline]
  const fn ptr(&self) -> *const MaybeUninit<T> {
    self.array.as_slice().as_ptr()
  }

  /// Marginally more convenient
  #[inline]
  #[rustversion::attr(since(1.83), const)]
  fn ptr_mut(&mut self) -> *mut MaybeUninit<T> {
    self.array.as_mut_slice().as_mut_ptr()
  }

  /// Moves `len` slots from `src` to `dst`. The ranges may overlap.
  ///
  /// # Safety
  ///
  /// Both ranges must lie inside `0..capacity()`.
  #[inline]
  unsafe fn copy(&mut self, src: usize, dst: usize, len: usize) {
    check_copy_bounds(dst, src, len, N::USIZE);

    unsafe {
      let base_ptr = self.ptr_mut();
      let src_ptr = base_ptr.add(src) as *const MaybeUninit<T>;
      let dst_ptr = base_ptr.add(dst);
      ptr::copy(src_ptr, dst_ptr, len);
    }
  }

  /// Reads the element at `off` out of the buffer.
  ///
  /// # Safety
  ///
  /// The slot must be initialized and is logically uninitialized afterwards.
  #[inline]
  unsafe fn buffer_read(&self, off: usize) -> T {
    unsafe { (&*self.ptr().add(off)).assume_init_read() }
  }

  /// Writes an element into the buffer.
  ///
  /// # Safety
  ///
  /// May only be called if `off < capacity()`; whatever was in the slot is
  /// overwritten without being dropped.
  #[inline]
  unsafe fn buffer_write(&mut self, off: usize, value: T) {
    unsafe {
      (&mut *self.ptr_mut().add(off)).write(value);
    }
  }
}

impl<T, N> Storage<T> for ArrayStorage<T, N>
where
  N: ArrayLength,
{
  #[cfg_attr(not(tarpaulin), inline(always))]
  fn len(&self) -> usize {
    self.len
  }

  #[cfg_attr(not(tarpaulin), inline(always))]
  fn remaining_capacity(&self) -> Option<usize> {
    Some(N::USIZE - self.len)
  }

  fn push(&mut self, value: T) -> Option<T> {
    if self.is_full() {
      return Some(value);
    }

    // SAFETY: `len < capacity`, so the slot is in-bounds and uninitialized.
    unsafe { self.buffer_write(self.len, value) };
    self.len += 1;
    None
  }

  fn pop(&mut self) -> Option<T> {
    if self.len == 0 {
      return None;
    }

    self.len -= 1;
    // SAFETY: the slot at the old `len - 1` was initialized and is now outside `0..len`.
    unsafe { Some(self.buffer_read(self.len)) }
  }

  fn insert(&mut self, index: usize, value: T) -> Option<T> {
    assert!(
      index <= self.len,
      "insertion index (is {index}) should be <= len (is {})",
      self.len
    );

    if self.is_full() {
      return Some(value);
    }

    // SAFETY: `len < capacity`, so shifting `index..len` up by one stays in-bounds,
    // and the vacated slot at `index` is then written before `len` grows.
    unsafe {
      self.copy(index, index + 1, self.len - index);
      self.buffer_write(index, value);
    }
    self.len += 1;
    None
  }

  fn remove(&mut self, index: usize) -> T {
    assert!(
      index < self.len,
      "removal index (is {index}) should be < len (is {})",
      self.len
    );

    // SAFETY: `index < len`, so the slot is initialized; the tail is shifted
    // down over it before `len` shrinks.
    unsafe {
      let value = self.buffer_read(index);
      self.copy(index + 1, index, self.len - index - 1);
      self.len -= 1;
      value
    }
  }

  fn clear(&mut self) {
    let len = self.len;
    // Set `len` first so a panicking destructor cannot cause a double drop.
    self.len = 0;
    // SAFETY: the first `len` slots were initialized.
    unsafe {
      ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
        self.ptr_mut() as *mut T,
        len,
      ));
    }
  }

  #[cfg_attr(not(tarpaulin), inline(always))]
  fn as_slice(&self) -> &[T] {
    // SAFETY: the first `len` slots are initialized.
    unsafe { slice::from_raw_parts(self.ptr() as *const T, self.len) }
  }

  #[cfg_attr(not(tarpaulin), inline(always))]
  fn as_mut_slice(&mut self) -> &mut [T] {
    // SAFETY: the first `len` slots are initialized.
    unsafe { slice::from_raw_parts_mut(self.ptr_mut() as *mut T, self.len) }
  }
}

impl<T, N> Drop for ArrayStorage<T, N>
where
  N: ArrayLength,
{
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T, N> Default for ArrayStorage<T, N>
where
  N: ArrayLength,
{
  #[cfg_attr(not(tarpaulin), inline(always))]
  fn default() -> Self {
    Self::new()
  }
}

impl<T, N> Clone for ArrayStorage<T, N>
where
  T: Clone,
  N: ArrayLength,
{
  fn clone(&self) -> Self {
    let mut storage = Self::new();
    for value in self.as_slice() {
      // Same capacity, so this never rejects.
      let _ = storage.push(value.clone());
    }
    storage
  }
}

impl<T: fmt::Debug, N: ArrayLength> fmt::Debug for ArrayStorage<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.as_slice()).finish()
  }
}

#[rustversion::since(1.83)]
const fn check_copy_bounds(dst: usize, src: usize, len: usize, cap: usize) {
  debug_assert!(dst + len <= cap);
  debug_assert!(src + len <= cap);
}

#[rustversion::before(1.83)]
fn check_copy_bounds(dst: usize, src: usize, len: usize, cap: usize) {
  debug_assert!(
    dst + len <= cap,
    "cpy dst={} src={} len={} cap={}",
    dst,
    src,
    len,
    cap
  );
  debug_assert!(
    src + len <= cap,
    "cpy dst={} src={} len={} cap={}",
    dst,
    src,
    len,
    cap
  );
}
