#![cfg(feature = "alloc")]

use proptest::prelude::*;
use rotable_vec::{typenum::U16, ArrayRotableVec, Error, RotableVec};

const ARRAY_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
enum Op {
  Insert(usize, i32),
  InsertAll(usize, Vec<i32>),
  Remove(usize),
  Set(usize, i32),
  Rotate(isize),
  RemoveItem(i32),
  Retain(i32),
  Sort,
  MakeContiguous,
  Clear,
}

fn op() -> impl Strategy<Value = Op> {
  prop_oneof![
    4 => (any::<usize>(), -20i32..20).prop_map(|(i, v)| Op::Insert(i, v)),
    2 => (any::<usize>(), prop::collection::vec(-20i32..20, 0..5))
      .prop_map(|(i, v)| Op::InsertAll(i, v)),
    3 => any::<usize>().prop_map(Op::Remove),
    1 => (any::<usize>(), -20i32..20).prop_map(|(i, v)| Op::Set(i, v)),
    4 => (-40isize..40).prop_map(Op::Rotate),
    1 => (-20i32..20).prop_map(Op::RemoveItem),
    1 => (2i32..5).prop_map(Op::Retain),
    1 => Just(Op::Sort),
    1 => Just(Op::MakeContiguous),
    1 => Just(Op::Clear),
  ]
}

/// Picks an index that is usually valid and sometimes one past the end.
fn pick(raw: usize, len: usize) -> usize {
  raw % (len + 2)
}

fn rotate_model(model: &mut [i32], offset: isize) {
  if !model.is_empty() {
    let k = offset.rem_euclid(model.len() as isize) as usize;
    model.rotate_right(k);
  }
}

/// Applies `op` to both the list and a plain `Vec` model.
fn apply(list: &mut RotableVec<i32>, model: &mut Vec<i32>, op: Op) -> Result<(), TestCaseError> {
  let len = model.len();
  match op {
    Op::Insert(raw, value) => {
      let index = pick(raw, len);
      let result = list.insert(index, value).map_err(|r| r.error());
      if index <= len {
        prop_assert_eq!(result, Ok(()));
        model.insert(index, value);
      } else {
        prop_assert_eq!(result, Err(Error::OutOfRange { index, len }));
      }
    }
    Op::InsertAll(raw, values) => {
      let index = pick(raw, len);
      let result = list.insert_all(index, values.clone());
      if index > len {
        prop_assert_eq!(result, Err(Error::OutOfRange { index, len }));
      } else {
        prop_assert_eq!(result, Ok(!values.is_empty()));
        model.splice(index..index, values);
      }
    }
    Op::Remove(raw) => {
      let index = pick(raw, len);
      let result = list.remove_at(index);
      if index < len {
        prop_assert_eq!(result, Ok(model.remove(index)));
      } else {
        prop_assert_eq!(result, Err(Error::OutOfRange { index, len }));
      }
    }
    Op::Set(raw, value) => {
      let index = pick(raw, len);
      let result = list.set(index, value).map_err(|r| r.error());
      if index < len {
        prop_assert_eq!(result, Ok(std::mem::replace(&mut model[index], value)));
      } else {
        prop_assert_eq!(result, Err(Error::OutOfRange { index, len }));
      }
    }
    Op::Rotate(offset) => {
      list.rotate(offset);
      rotate_model(model, offset);
    }
    Op::RemoveItem(value) => {
      let expected = model
        .iter()
        .position(|&x| x == value)
        .map(|idx| model.remove(idx));
      prop_assert_eq!(list.remove_item(&value), expected);
    }
    Op::Retain(divisor) => {
      list.retain(|x| x % divisor != 0);
      model.retain(|x| x % divisor != 0);
    }
    Op::Sort => {
      list.sort();
      model.sort();
      prop_assert!(list.as_slices().1.is_empty());
    }
    Op::MakeContiguous => {
      prop_assert_eq!(list.make_contiguous(), model.as_slice());
    }
    Op::Clear => {
      list.clear();
      model.clear();
    }
  }
  Ok(())
}

fn assert_matches(list: &RotableVec<i32>, model: &[i32]) -> Result<(), TestCaseError> {
  prop_assert_eq!(list.len(), model.len());
  for (i, expected) in model.iter().enumerate() {
    prop_assert_eq!(list.get(i), Ok(expected));
  }
  let (front, wrapped) = list.as_slices();
  prop_assert_eq!([front, wrapped].concat(), model);
  prop_assert!(list.iter().rev().eq(model.iter().rev()));
  Ok(())
}

proptest! {
  /// Property: any sequence of operations reads the same as the plain `Vec` model
  #[test]
  fn matches_vec_model(
    initial in prop::collection::vec(-20i32..20, 0..12),
    ops in prop::collection::vec(op(), 0..64),
  ) {
    let mut list: RotableVec<i32> = initial.iter().copied().collect();
    let mut model = initial;
    for op in ops {
      apply(&mut list, &mut model, op)?;
      assert_matches(&list, &model)?;
    }
  }

  /// Property: rotating by `k` then by `-k` restores the sequence
  #[test]
  fn rotation_round_trip(
    values in prop::collection::vec(any::<i32>(), 0..32),
    k in -1000isize..1000,
  ) {
    let mut list = RotableVec::from(values.clone());
    list.rotate(k);
    list.rotate(-k);
    prop_assert_eq!(list, values);
  }

  /// Property: rotate(a) then rotate(b) equals rotate(a + b)
  #[test]
  fn rotation_composes(
    values in prop::collection::vec(any::<i32>(), 0..32),
    a in -1000isize..1000,
    b in -1000isize..1000,
  ) {
    let mut stepwise = RotableVec::from(values.clone());
    stepwise.rotate(a);
    stepwise.rotate(b);

    let mut at_once = RotableVec::from(values);
    at_once.rotate(a + b);
    prop_assert_eq!(stepwise, at_once);
  }

  /// Property: rotation never moves an element in the storage
  #[test]
  fn rotation_keeps_storage(
    values in prop::collection::vec(any::<i32>(), 1..32),
    k in any::<isize>(),
  ) {
    let mut list = RotableVec::from(values.clone());
    list.rotate(k);
    let (front, wrapped) = list.as_slices();
    prop_assert_eq!([wrapped, front].concat(), values);
  }

  /// Property: sorting twice gives the same physical order as sorting once
  #[test]
  fn sort_is_idempotent(
    values in prop::collection::vec(any::<i32>(), 0..32),
    k in -40isize..40,
  ) {
    let mut list = RotableVec::from(values);
    list.rotate(k);
    list.sort_by(|a, b| b.cmp(a));
    let once = list.clone().into_storage();
    prop_assert!(list.as_slices().1.is_empty());

    list.sort_by(|a, b| b.cmp(a));
    prop_assert!(list.as_slices().1.is_empty());
    prop_assert_eq!(list.into_storage(), once);
  }

  /// Property: a full fixed-capacity list rejects inserts and stays unchanged
  #[test]
  fn array_capacity_is_enforced(
    values in prop::collection::vec(any::<i32>(), ARRAY_CAPACITY..ARRAY_CAPACITY + 1),
    k in -40isize..40,
    index in 0..=ARRAY_CAPACITY,
    extra in any::<i32>(),
  ) {
    let mut list = ArrayRotableVec::<i32, U16>::new();
    prop_assert_eq!(list.append_all(values.iter().copied()), Ok(true));
    list.rotate(k);
    let before: Vec<i32> = list.iter().copied().collect();

    let rejected = list.insert(index, extra).unwrap_err();
    prop_assert_eq!(rejected.error(), Error::CapacityExceeded { capacity: ARRAY_CAPACITY });
    prop_assert_eq!(rejected.into_value(), extra);
    prop_assert_eq!(
      list.insert_all(index, [extra]),
      Err(Error::CapacityExceeded { capacity: ARRAY_CAPACITY })
    );
    prop_assert_eq!(list, before);
  }
}
