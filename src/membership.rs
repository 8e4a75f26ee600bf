/// A set-like collection that can answer "is this value a member?".
///
/// [`remove_all`](crate::GenericRotableVec::remove_all) and
/// [`retain_all`](crate::GenericRotableVec::retain_all) take one of these
/// and query it once per element, so implementations should answer in
/// (expected) constant or logarithmic time.
///
/// ## Examples
///
/// ```
/// use std::collections::HashSet;
/// use rotable_vec::{Membership, RotableVec};
///
/// let odd: HashSet<i32> = [1, 3, 5].into_iter().collect();
/// assert!(odd.contains(&3));
///
/// let mut list: RotableVec<i32> = (0..6).collect();
/// assert!(list.remove_all(&odd));
/// assert_eq!(list, [0, 2, 4]);
/// ```
pub trait Membership<T: ?Sized> {
  /// Returns `true` if `value` is a member.
  fn contains(&self, value: &T) -> bool;

  /// Returns `true` if nothing is a member.
  fn is_empty(&self) -> bool;
}

impl<T: ?Sized, M: Membership<T> + ?Sized> Membership<T> for &M {
  #[cfg_attr(not(tarpaulin), inline(always))]
  fn contains(&self, value: &T) -> bool {
    M::contains(*self, value)
  }

  #[cfg_attr(not(tarpaulin), inline(always))]
  fn is_empty(&self) -> bool {
    M::is_empty(*self)
  }
}

#[cfg(feature = "std")]
impl<T, H> Membership<T> for std::collections::HashSet<T, H>
where
  T: Eq + core::hash::Hash,
  H: core::hash::BuildHasher,
{
  #[cfg_attr(not(tarpaulin), inline(always))]
  fn contains(&self, value: &T) -> bool {
    std::collections::HashSet::contains(self, value)
  }

  #[cfg_attr(not(tarpaulin), inline(always))]
  fn is_empty(&self) -> bool {
    std::collections::HashSet::is_empty(self)
  }
}

#[cfg(feature = "alloc")]
impl<T: Ord> Membership<T> for std::collections::BTreeSet<T> {
  #[cfg_attr(not(tarpaulin), inline(always))]
  fn contains(&self, value: &T) -> bool {
    std::collections::BTreeSet::contains(self, value)
  }

  #[cfg_attr(not(tarpaulin), inline(always))]
  fn is_empty(&self) -> bool {
    std::collections::BTreeSet::is_empty(self)
  }
}
