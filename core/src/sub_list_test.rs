//! Tests for SubList

use alloc::vec;

use pretty_assertions::assert_eq;

use crate::{
    Collection, List, ListError, MutableCollection, MutableList, Vector,
    test_utils::init_test_logging,
};

fn letters() -> Vector<char> {
    Vector::from(['a', 'b', 'c', 'd', 'e', 'f'])
}

#[test]
fn test_reads_are_translated() {
    let v = letters();
    let view = v.sub_list(2, 5).unwrap();
    assert_eq!(view.offset(), 2);
    assert_eq!(view.size(), Ok(3));
    assert_eq!(view.get(0), Ok('c'));
    assert_eq!(view.get(2), Ok('e'));
    assert_eq!(view.get(3), Err(ListError::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(view.index_of(&'d'), Ok(Some(1)));
    assert_eq!(view.index_of(&'a'), Ok(None));
    assert_eq!(view.contains(&'f'), Ok(false));
    assert_eq!(view.to_vec(), Ok(vec!['c', 'd', 'e']));
}

#[test]
fn test_set_writes_through_both_ways() {
    let mut v = letters();
    let mut view = v.sub_list(1, 3).unwrap();

    assert_eq!(view.set(0, 'X'), Ok('b'));
    assert_eq!(v.get(1), Ok('X'));

    v.set(2, 'Y').unwrap();
    assert_eq!(view.get(1), Ok('Y'));
}

#[test]
fn test_structural_changes_through_view_stay_valid() {
    let mut v = letters();
    let mut view = v.sub_list(1, 3).unwrap();

    view.insert_at(1, 'z').unwrap();
    assert_eq!(view.size(), Ok(3));
    assert_eq!(view.add('w'), Ok(true));
    assert_eq!(view.to_vec(), Ok(vec!['b', 'z', 'c', 'w']));
    assert_eq!(v.to_vec(), Ok(vec!['a', 'b', 'z', 'c', 'w', 'd', 'e', 'f']));

    assert_eq!(view.remove_at(0), Ok('b'));
    assert_eq!(view.remove(&'w'), Ok(true));
    assert_eq!(view.remove(&'a'), Ok(false));
    assert_eq!(view.to_vec(), Ok(vec!['z', 'c']));
    assert_eq!(v.to_vec(), Ok(vec!['a', 'z', 'c', 'd', 'e', 'f']));
}

#[test]
fn test_clear_through_view_removes_range() {
    let mut v = letters();
    let mut view = v.sub_list(1, 4).unwrap();
    view.clear().unwrap();
    assert_eq!(view.size(), Ok(0));
    assert_eq!(v.to_vec(), Ok(vec!['a', 'e', 'f']));

    // Still usable: adding lands where the range used to be.
    view.add('q').unwrap();
    assert_eq!(v.to_vec(), Ok(vec!['a', 'q', 'e', 'f']));
}

#[test]
fn test_bulk_operations_through_view() {
    let mut v = Vector::from([1, 2, 3, 4, 5, 6]);
    let mut view = v.sub_list(1, 5).unwrap();

    assert_eq!(view.remove_all(&[2, 5, 6]), Ok(true));
    assert_eq!(view.to_vec(), Ok(vec![3, 4]));
    assert_eq!(view.add_all(&[7, 8]), Ok(true));
    assert_eq!(view.retain_all(&[3, 7, 1]), Ok(true));
    assert_eq!(view.to_vec(), Ok(vec![3, 7]));
    assert_eq!(v.to_vec(), Ok(vec![1, 3, 7, 6]));
}

#[test]
fn test_external_change_invalidates_view() {
    init_test_logging();

    let mut v = Vector::from([0, 1, 2, 3, 4, 5]);
    let mut view = v.sub_list(0, 2).unwrap();
    v.insert_at(5, 99).unwrap();

    assert_eq!(view.size(), Err(ListError::ConcurrentModification));
    assert_eq!(view.get(0), Err(ListError::ConcurrentModification));
    assert_eq!(view.set(0, 1), Err(ListError::ConcurrentModification));
    assert_eq!(view.add(1), Err(ListError::ConcurrentModification));
    // Out-of-range index still reports the stale view first.
    assert_eq!(view.get(100), Err(ListError::ConcurrentModification));
    // Permanent.
    assert_eq!(view.to_vec(), Err(ListError::ConcurrentModification));
    assert_eq!(v.to_vec(), Ok(vec![0, 1, 2, 3, 4, 99, 5]));
}

#[test]
fn test_non_structural_change_keeps_view_valid() {
    let mut v = Vector::from([0, 1, 2]);
    let view = v.sub_list(0, 2).unwrap();
    v.set(2, 20).unwrap();
    v.reserve(64);
    assert_eq!(view.to_vec(), Ok(vec![0, 1]));
}

#[test]
fn test_sibling_view_is_invalidated() {
    let v = Vector::from([1, 2, 3, 4]);
    let mut first = v.sub_list(0, 2).unwrap();
    let second = v.sub_list(2, 4).unwrap();

    first.add(9).unwrap();
    assert_eq!(first.to_vec(), Ok(vec![1, 2, 9]));
    assert_eq!(second.get(0), Err(ListError::ConcurrentModification));
}

#[test]
fn test_panicking_retain_invalidates_views() {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    let v = Vector::from([1, 2, 3, 4, 5]);
    let mut view = v.sub_list(1, 4).unwrap();
    let other = v.sub_list(0, 1).unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| {
        view.retain(|x| {
            assert!(*x != 3, "boom");
            *x != 2
        })
    }));
    assert!(result.is_err());

    // 2 was dropped before the panic, the rest is untouched.
    assert_eq!(v.to_vec(), Ok(vec![1, 3, 4, 5]));
    assert_eq!(view.size(), Err(ListError::ConcurrentModification));
    assert_eq!(other.get(0), Err(ListError::ConcurrentModification));
}

#[test]
fn test_nested_views_update_ancestors() {
    let v = Vector::from([0, 1, 2, 3, 4, 5, 6, 7]);
    let mut outer = v.sub_list(1, 7).unwrap();
    let mut inner = outer.sub_list(2, 4).unwrap();
    assert_eq!(inner.offset(), 3);
    assert_eq!(inner.to_vec(), Ok(vec![3, 4]));

    inner.insert_at(0, 30).unwrap();
    assert_eq!(inner.to_vec(), Ok(vec![30, 3, 4]));
    assert_eq!(outer.size(), Ok(7));
    assert_eq!(outer.to_vec(), Ok(vec![1, 2, 30, 3, 4, 5, 6]));
    assert_eq!(v.to_vec(), Ok(vec![0, 1, 2, 30, 3, 4, 5, 6, 7]));

    inner.remove_at(2).unwrap();
    assert_eq!(outer.size(), Ok(6));

    // A change through the outer view goes around the inner one.
    outer.remove_at(0).unwrap();
    assert_eq!(outer.to_vec(), Ok(vec![2, 30, 3, 5, 6]));
    assert_eq!(inner.size(), Err(ListError::ConcurrentModification));
}

#[test]
fn test_root_change_invalidates_nested_chain() {
    let mut v = Vector::from([0, 1, 2, 3]);
    let outer = v.sub_list(0, 4).unwrap();
    let inner = outer.sub_list(1, 2).unwrap();
    v.add(4).unwrap();
    assert_eq!(outer.size(), Err(ListError::ConcurrentModification));
    assert_eq!(inner.size(), Err(ListError::ConcurrentModification));
}

#[test]
fn test_full_range_view_reads_like_root() {
    let v = letters();
    let view = v.sub_list(0, v.len()).unwrap();
    assert_eq!(view.size(), v.size());
    for i in 0..v.len() {
        assert_eq!(view.get(i), v.get(i));
    }
    assert_eq!(view.equals(&v), Ok(true));
    assert_eq!(v.equals(&view), Ok(true));
    assert_eq!(view.last_index_of(&'f'), v.last_index_of(&'f'));
}

#[test]
fn test_empty_view_rejects_positional_access() {
    let v = letters();
    let mut view = v.sub_list(3, 3).unwrap();
    assert_eq!(Collection::is_empty(&view), Ok(true));
    assert_eq!(view.get(0), Err(ListError::IndexOutOfRange { index: 0, len: 0 }));
    assert_eq!(view.set(0, 'x'), Err(ListError::IndexOutOfRange { index: 0, len: 0 }));
    assert_eq!(view.remove_at(0), Err(ListError::IndexOutOfRange { index: 0, len: 0 }));
    assert_eq!(view.insert_at(1, 'x'), Err(ListError::IndexOutOfRange { index: 1, len: 0 }));

    // Insertion at 0 is allowed and lands at the view's offset.
    view.insert_at(0, 'x').unwrap();
    assert_eq!(v.get(3), Ok('x'));
}

#[test]
fn test_invalid_ranges() {
    let v = letters();
    assert_eq!(
        v.sub_list(4, 2).unwrap_err(),
        ListError::IllegalArgument { from: 4, to: 2 }
    );
    assert_eq!(
        v.sub_list(0, 7).unwrap_err(),
        ListError::IndexOutOfRange { index: 7, len: 6 }
    );
    let view = v.sub_list(1, 3).unwrap();
    assert_eq!(
        view.sub_list(0, 3).unwrap_err(),
        ListError::IndexOutOfRange { index: 3, len: 2 }
    );
}

#[test]
fn test_add_all_from_own_view() {
    let mut v = Vector::from([1, 2, 3]);
    let view = v.sub_list(0, 2).unwrap();
    assert_eq!(v.add_all(&view), Ok(true));
    assert_eq!(v.to_vec(), Ok(vec![1, 2, 3, 1, 2]));
}

#[test]
fn test_view_after_vector_dropped() {
    let v = Vector::from([1, 2, 3]);
    let view = v.sub_list(0, 1).unwrap();
    drop(v);
    assert_eq!(view.size(), Err(ListError::Detached));
}

#[test]
fn test_mutating_view_during_with_slice_fails() {
    let v = Vector::from([1, 2, 3]);
    let mut view = v.sub_list(0, 1).unwrap();
    let result = v.with_slice(|_| view.add(4));
    assert_eq!(result, Err(ListError::ConcurrentModification));
    // Nothing changed, so the view is still in sync afterwards.
    assert_eq!(view.add(4), Ok(true));
    assert_eq!(v.to_vec(), Ok(vec![1, 4, 2, 3]));
}
