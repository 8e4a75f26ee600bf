#![cfg(feature = "std")]

use rotable_vec::{typenum::U8, ArrayRotableVec};
use std::{cell::RefCell, rc::Rc};

#[derive(Debug)]
struct DropTracker {
  id: String,
  payload: String,
  log: Rc<RefCell<Vec<i32>>>,
}

impl DropTracker {
  fn new(log: &Rc<RefCell<Vec<i32>>>, id: i32) -> Self {
    Self {
      id: id.to_string(),
      payload: format!("payload-{id}"),
      log: Rc::clone(log),
    }
  }
}

impl Drop for DropTracker {
  fn drop(&mut self) {
    self
      .log
      .borrow_mut()
      .push(self.id.parse().unwrap_or_default());
  }
}

fn sorted(log: &Rc<RefCell<Vec<i32>>>) -> Vec<i32> {
  let mut dropped = log.borrow().clone();
  dropped.sort();
  dropped
}

#[test]
fn every_element_is_dropped_once() {
  let drops = Rc::new(RefCell::new(Vec::new()));

  {
    let mut list = ArrayRotableVec::<DropTracker, U8>::new();

    for id in 0..4 {
      list.push_back(DropTracker::new(&drops, id)).unwrap();
    }
    for id in 4..8 {
      list.push_front(DropTracker::new(&drops, id)).unwrap();
    }

    let rejected = list.push_back(DropTracker::new(&drops, 8)).unwrap_err();
    drop(rejected);
    assert_eq!(sorted(&drops), [8]);

    list.rotate(3);

    for (idx, elem) in list.iter_mut().skip(2).take(4).enumerate() {
      elem.payload.push_str(&format!("-range-{idx}"));
    }

    list.retain(|elem| elem.payload.contains("-range-"));
    assert_eq!(list.len(), 4);
    assert_eq!(sorted(&drops).len(), 5);

    let removed = list.remove_at(0).unwrap();
    drop(removed);

    let slice = list.make_contiguous();
    slice
      .iter_mut()
      .for_each(|elem| elem.payload.push_str("-contig"));
    assert!(list.as_slices().1.is_empty());
  }

  assert_eq!(sorted(&drops), (0..9).collect::<Vec<_>>());
}

#[test]
fn truncate_and_clear_drop_the_tail() {
  let drops = Rc::new(RefCell::new(Vec::new()));
  let mut list = ArrayRotableVec::<DropTracker, U8>::new();
  list
    .append_all((0..6).map(|id| DropTracker::new(&drops, id)))
    .unwrap();
  list.rotate(2);

  list.truncate(4);
  assert_eq!(sorted(&drops), [2, 3]);

  list.clear();
  assert_eq!(sorted(&drops), (0..6).collect::<Vec<_>>());
  assert!(list.is_empty());
}

#[test]
fn into_iter_drops_what_it_does_not_yield() {
  let drops = Rc::new(RefCell::new(Vec::new()));
  let mut list = ArrayRotableVec::<DropTracker, U8>::new();
  list
    .append_all((0..5).map(|id| DropTracker::new(&drops, id)))
    .unwrap();
  list.rotate(-1);

  let mut iter = list.into_iter();
  let first = iter.next().unwrap();
  assert_eq!(first.id, "1");
  let last = iter.next_back().unwrap();
  assert_eq!(last.id, "0");
  drop(iter);
  assert_eq!(sorted(&drops), [2, 3, 4]);

  drop((first, last));
  assert_eq!(sorted(&drops), (0..5).collect::<Vec<_>>());
}
