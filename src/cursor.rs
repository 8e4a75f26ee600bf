use super::{macros::debug, Direction, Error, GenericRotableVec, Rejected, Storage};

/// A bidirectional position in a [`GenericRotableVec`], able to edit the list
/// around itself.
///
/// A cursor sits in a *gap*: index `0` is before the first element and
/// `len` is after the last one. It does not borrow the list; instead the list
/// is passed to every call. This lets the list be changed between calls, and
/// the cursor notices: every structural change made other than through this
/// cursor makes its next checked call fail with
/// [`Error::ConcurrentModification`].
///
/// A cursor is bound to the list that created it. Passing any other list
/// fails with [`Error::ForeignCursor`].
///
/// ## Examples
///
/// ```
/// use rotable_vec::{Error, RotableVec};
///
/// let mut list: RotableVec<i32> = (0..5).collect();
/// let mut cursor = list.cursor_at(2).unwrap();
///
/// assert_eq!(cursor.next(&list), Ok(&2));
/// assert_eq!(cursor.next(&list), Ok(&3));
/// assert_eq!(cursor.remove(&mut list), Ok(3));
/// cursor.add(&mut list, 30).unwrap();
/// assert_eq!(list, [0, 1, 2, 30, 4]);
///
/// // Rotating keeps the cursor at logical index 4 of the new order.
/// list.rotate(1);
/// assert_eq!(cursor.next(&list), Ok(&30));
///
/// // A structural change that did not go through the cursor.
/// list.push_back(5).unwrap();
/// assert!(matches!(
///   cursor.previous(&list),
///   Err(Error::ConcurrentModification { .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
  index: usize,
  last: Option<usize>,
  forward: bool,
  expected: usize,
  owner: usize,
}

impl Cursor {
  #[inline]
  pub(super) const fn new(index: usize, version: usize, owner: usize) -> Self {
    Self {
      index,
      last: None,
      forward: true,
      expected: version,
      owner,
    }
  }

  /// Returns `true` if there is an element after the cursor.
  #[inline]
  pub fn has_next<T, S: Storage<T>>(&self, list: &GenericRotableVec<T, S>) -> bool {
    self.index < list.len()
  }

  /// Returns `true` if there is an element before the cursor.
  #[inline]
  pub const fn has_previous(&self) -> bool {
    self.index > 0
  }

  /// Returns the logical index of the element [`next`](Self::next) would return.
  #[inline]
  pub const fn next_index(&self) -> usize {
    self.index
  }

  /// Returns the logical index of the element [`previous`](Self::previous) would
  /// return, or `None` at the front.
  #[inline]
  pub const fn previous_index(&self) -> Option<usize> {
    self.index.checked_sub(1)
  }

  /// Returns the element after the cursor and moves past it.
  ///
  /// Fails with [`Error::NoSuchElement`] at the back of the list; the cursor
  /// stays usable and can still move backwards.
  pub fn next<'a, T, S: Storage<T>>(
    &mut self,
    list: &'a GenericRotableVec<T, S>,
  ) -> Result<&'a T, Error> {
    self.check(list)?;
    let value = list
      .get(self.index)
      .map_err(|_| Error::NoSuchElement(Direction::Forward))?;
    self.last = Some(self.index);
    self.forward = true;
    self.index += 1;
    Ok(value)
  }

  /// Moves before the element preceding the cursor and returns it.
  ///
  /// Fails with [`Error::NoSuchElement`] at the front of the list; the
  /// cursor stays usable and can still move forwards.
  pub fn previous<'a, T, S: Storage<T>>(
    &mut self,
    list: &'a GenericRotableVec<T, S>,
  ) -> Result<&'a T, Error> {
    self.check(list)?;
    let index = self
      .index
      .checked_sub(1)
      .ok_or(Error::NoSuchElement(Direction::Backward))?;
    let value = list.get(index)?;
    self.index = index;
    self.last = Some(index);
    self.forward = false;
    Ok(value)
  }

  /// Removes the element last returned by [`next`](Self::next) or
  /// [`previous`](Self::previous).
  ///
  /// Fails with [`Error::IllegalState`] if no element has been returned since
  /// the cursor was created or since its last `remove`/`add`.
  pub fn remove<T, S: Storage<T>>(&mut self, list: &mut GenericRotableVec<T, S>) -> Result<T, Error> {
    let last = self.last.ok_or(Error::IllegalState)?;
    self.check(list)?;
    let value = list.remove_at(last)?;
    if self.forward {
      self.index -= 1;
    }
    self.last = None;
    self.expected = list.version();
    Ok(value)
  }

  /// Replaces the element last returned by [`next`](Self::next) or
  /// [`previous`](Self::previous), returning the old one.
  ///
  /// Fails with [`Error::IllegalState`] under the same condition as
  /// [`remove`](Self::remove). The cursor may `set` the same element again.
  pub fn set<T, S: Storage<T>>(
    &mut self,
    list: &mut GenericRotableVec<T, S>,
    value: T,
  ) -> Result<T, Rejected<T>> {
    let Some(last) = self.last else {
      return Err(Rejected::new(value, Error::IllegalState));
    };
    if let Err(error) = self.check(list) {
      return Err(Rejected::new(value, error));
    }
    list.set(last, value)
  }

  /// Inserts `value` at the cursor; the cursor ends up after it.
  ///
  /// The added element does not count as returned, so a following
  /// [`remove`](Self::remove) or [`set`](Self::set) fails with
  /// [`Error::IllegalState`].
  pub fn add<T, S: Storage<T>>(
    &mut self,
    list: &mut GenericRotableVec<T, S>,
    value: T,
  ) -> Result<(), Rejected<T>> {
    if let Err(error) = self.check(list) {
      return Err(Rejected::new(value, error));
    }
    list.insert(self.index, value)?;
    self.index += 1;
    self.last = None;
    self.expected = list.version();
    Ok(())
  }

  fn check<T, S: Storage<T>>(&self, list: &GenericRotableVec<T, S>) -> Result<(), Error> {
    if self.owner != list.id() {
      debug!(
        "cursor of list {} used with list {}",
        self.owner,
        list.id()
      );
      return Err(Error::ForeignCursor);
    }

    let actual = list.version();
    if actual != self.expected {
      debug!(
        "list modified behind a cursor: expected version {}, found {actual}",
        self.expected
      );
      return Err(Error::ConcurrentModification {
        expected: self.expected,
        actual,
      });
    }

    Ok(())
  }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
  use crate::{Direction, Error, RotableVec};

  fn load(n: i32) -> RotableVec<i32> {
    (0..n).collect()
  }

  #[test]
  fn next_walks_to_the_back() {
    let list = load(5);
    let mut cursor = list.cursor_at(2).unwrap();

    assert!(cursor.has_next(&list));
    assert_eq!(cursor.next(&list), Ok(&2));
    assert_eq!(cursor.next(&list), Ok(&3));
    assert_eq!(cursor.next(&list), Ok(&4));
    assert!(!cursor.has_next(&list));
    assert!(cursor.has_previous());
    assert_eq!(
      cursor.next(&list),
      Err(Error::NoSuchElement(Direction::Forward))
    );
    assert_eq!(cursor.previous(&list), Ok(&4));
  }

  #[test]
  fn previous_walks_to_the_front() {
    let list = load(5);
    let mut cursor = list.cursor_at(2).unwrap();

    assert_eq!(cursor.previous(&list), Ok(&1));
    assert_eq!(cursor.previous(&list), Ok(&0));
    assert!(cursor.has_next(&list));
    assert!(!cursor.has_previous());
    assert_eq!(cursor.previous_index(), None);
    assert_eq!(
      cursor.previous(&list),
      Err(Error::NoSuchElement(Direction::Backward))
    );
    assert_eq!(cursor.next(&list), Ok(&0));
  }

  #[test]
  fn cursor_follows_the_rotated_view() {
    let mut list = load(5);
    list.rotate(2);
    let mut cursor = list.cursor();
    let mut seen = std::vec::Vec::new();
    while let Ok(value) = cursor.next(&list) {
      seen.push(*value);
    }
    assert_eq!(seen, [3, 4, 0, 1, 2]);
  }

  #[test]
  fn remove_and_set_need_a_returned_element() {
    let mut list = load(5);
    let mut cursor = list.cursor_at(2).unwrap();

    assert_eq!(cursor.remove(&mut list), Err(Error::IllegalState));
    assert_eq!(
      cursor.set(&mut list, 10).unwrap_err().error(),
      Error::IllegalState
    );

    assert_eq!(cursor.previous(&list), Ok(&1));
    assert_eq!(cursor.set(&mut list, 10).ok(), Some(1));
    assert_eq!(list, [0, 10, 2, 3, 4]);

    assert_eq!(cursor.next(&list), Ok(&10));
    assert_eq!(cursor.remove(&mut list), Ok(10));
    assert_eq!(cursor.remove(&mut list), Err(Error::IllegalState));
    assert_eq!(list, [0, 2, 3, 4]);
  }

  #[test]
  fn remove_tracks_direction() {
    let mut list = load(5);
    let mut cursor = list.cursor_at(2).unwrap();

    cursor.next(&list).unwrap();
    cursor.remove(&mut list).unwrap();
    assert_eq!(list, [0, 1, 3, 4]);
    assert_eq!(cursor.next_index(), 2);

    cursor.next(&list).unwrap();
    cursor.remove(&mut list).unwrap();
    assert_eq!(list, [0, 1, 4]);

    assert_eq!(cursor.previous(&list), Ok(&1));
    cursor.remove(&mut list).unwrap();
    assert_eq!(list, [0, 4]);
    assert_eq!(cursor.next_index(), 1);
    assert_eq!(cursor.next(&list), Ok(&4));
  }

  #[test]
  fn add_inserts_before_the_cursor() {
    let mut list = load(5);
    let mut cursor = list.cursor();

    cursor.add(&mut list, 10).unwrap();
    cursor.add(&mut list, 11).unwrap();
    assert_eq!(list, [10, 11, 0, 1, 2, 3, 4]);
    assert_eq!(cursor.remove(&mut list), Err(Error::IllegalState));
    assert_eq!(cursor.next(&list), Ok(&0));
  }

  #[test]
  fn add_on_a_rotated_list() {
    let mut list = load(5);
    list.rotate(2);
    let mut cursor = list.cursor_at(3).unwrap();
    cursor.add(&mut list, 9).unwrap();
    assert_eq!(list, [3, 4, 0, 9, 1, 2]);
    assert_eq!(cursor.next(&list), Ok(&1));
  }

  #[test]
  fn external_changes_fail_fast() {
    let mut list = load(3);
    let mut cursor = list.cursor();
    cursor.next(&list).unwrap();

    list.push_back(3).unwrap();
    let Err(Error::ConcurrentModification { expected, actual }) = cursor.next(&list) else {
      panic!("expected a concurrent modification");
    };
    assert_ne!(expected, actual);
    assert!(matches!(
      cursor.remove(&mut list),
      Err(Error::ConcurrentModification { .. })
    ));
    assert!(matches!(
      cursor.add(&mut list, 7).map_err(|r| r.error()),
      Err(Error::ConcurrentModification { .. })
    ));
    assert_eq!(list, [0, 1, 2, 3]);
  }

  #[test]
  fn set_through_the_list_is_not_structural() {
    let mut list = load(3);
    let mut cursor = list.cursor();
    list.set(0, 5).unwrap();
    assert_eq!(cursor.next(&list), Ok(&5));
  }

  #[test]
  fn rotation_keeps_the_logical_position() {
    let mut list = load(5);
    let mut cursor = list.cursor();
    assert_eq!(cursor.next(&list), Ok(&0));

    list.rotate(1);
    assert_eq!(list, [4, 0, 1, 2, 3]);
    assert_eq!(cursor.next(&list), Ok(&0));
    assert_eq!(cursor.next_index(), 2);

    list.rotate(-3);
    assert_eq!(list, [2, 3, 4, 0, 1]);
    assert_eq!(cursor.previous(&list), Ok(&3));
    assert_eq!(cursor.remove(&mut list), Ok(3));
    assert_eq!(list, [2, 4, 0, 1]);
  }

  #[test]
  fn own_changes_keep_the_cursor_valid() {
    let mut list = load(4);
    let mut cursor = list.cursor();
    while cursor.next(&list).is_ok() {
      cursor.remove(&mut list).unwrap();
    }
    assert!(list.is_empty());
    assert!(!cursor.has_previous());
  }

  #[test]
  fn foreign_lists_are_refused() {
    let list = load(3);
    let other = list.clone();
    let mut cursor = list.cursor();
    assert_eq!(cursor.next(&other), Err(Error::ForeignCursor));
    assert_eq!(cursor.next(&list), Ok(&0));
  }
}
