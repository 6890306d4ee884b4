//! Views over a contiguous range of a [`Vector`](crate::Vector).
//!
//! A view owns no elements. It is a coordinate transform into the root
//! vector's storage:
//!
//! ```text
//!   root:    [ a | b | c | d | e | f ]
//!   view:            └─ offset=2, size=3 ─┘   view[i] == root[offset + i]
//! ```
//!
//! Each view remembers the root's modification count from the last time it
//! was in sync. Structural changes made through a view (or through a view
//! derived from it) advance that snapshot for the whole chain of ancestors.
//! Any other structural change leaves the snapshot behind, and from then on
//! every operation on the view fails with
//! [`ListError::ConcurrentModification`].

use alloc::{
    rc::{Rc, Weak},
    vec::Vec,
};
use core::{
    cell::{Cell, RefCell},
    fmt,
    ops::Range,
};

use crate::{
    Collection, List, ListError, MutableCollection, MutableList, Result,
    error::{check_index, check_position, check_range},
    store::Store,
};

/// One link in a chain of nested views.
#[derive(Debug)]
struct Window {
    parent: Option<Rc<Window>>,
    /// Absolute position in the root, not relative to `parent`.
    offset: usize,
    size: Cell<usize>,
    expected_mod_count: Cell<u64>,
}

impl Window {
    #[inline]
    fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.size.get()
    }

    /// Folds a change of the root length from `before` to `after` into this
    /// window and all of its ancestors.
    fn record(&self, before: usize, after: usize, mod_count: u64) {
        let mut window = Some(self);
        while let Some(current) = window {
            current.size.set(current.size.get() + after - before);
            current.expected_mod_count.set(mod_count);
            window = current.parent.as_deref();
        }
    }
}

/// A live view of `[from, to)` of a [`Vector`](crate::Vector) or of another view.
///
/// Created by [`List::sub_list`]. Reads and `set` go straight to the root's
/// storage. Inserts and removals go to the root too and resize this view and
/// the views it was derived from.
///
/// # Example
///
/// ```
/// use seqview_core::{Collection, List, ListError, MutableList, Vector};
///
/// let mut v = Vector::from(['a', 'b', 'c', 'd']);
/// let mut view = v.sub_list(1, 3)?;
/// view.set(0, 'B')?;
/// view.insert_at(2, 'x')?;
/// assert_eq!(v.to_vec()?, ['a', 'B', 'c', 'x', 'd']);
///
/// v.remove_at(0)?;
/// assert_eq!(view.size(), Err(ListError::ConcurrentModification));
/// # Ok::<(), ListError>(())
/// ```
pub struct SubList<T> {
    root: Weak<RefCell<Store<T>>>,
    window: Rc<Window>,
}

impl<T> SubList<T> {
    pub(crate) fn new(
        root: Weak<RefCell<Store<T>>>,
        offset: usize,
        size: usize,
        mod_count: u64,
    ) -> Self {
        Self {
            root,
            window: Rc::new(Window {
                parent: None,
                offset,
                size: Cell::new(size),
                expected_mod_count: Cell::new(mod_count),
            }),
        }
    }

    /// Position of the first element of this view in the root vector.
    pub fn offset(&self) -> usize {
        self.window.offset
    }

    fn upgrade(&self) -> Result<Rc<RefCell<Store<T>>>> {
        self.root.upgrade().ok_or(ListError::Detached)
    }

    fn check(&self, store: &Store<T>) -> Result<()> {
        let expected = self.window.expected_mod_count.get();
        let actual = store.mod_count();
        if expected != actual {
            tracing::debug!(expected, actual, "sub-list invalidated by an outside modification");
            return Err(ListError::ConcurrentModification);
        }
        Ok(())
    }

    /// Runs `f` over the elements of the view.
    fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> Result<R> {
        let root = self.upgrade()?;
        let store = root
            .try_borrow()
            .map_err(|_| ListError::ConcurrentModification)?;
        self.check(&store)?;
        Ok(f(store.slice(self.window.range())))
    }

    /// Runs `f` against the root with this view's absolute range, then
    /// records any change in length through the chain of windows.
    ///
    /// `f` must only change the root inside the given range.
    fn modify<R>(
        &mut self,
        f: impl FnOnce(&mut Store<T>, Range<usize>) -> Result<R>,
    ) -> Result<R> {
        let root = self.upgrade()?;
        let mut store = root
            .try_borrow_mut()
            .map_err(|_| ListError::ConcurrentModification)?;
        self.check(&store)?;

        let before = store.len();
        let result = f(&mut *store, self.window.range())?;
        self.window.record(before, store.len(), store.mod_count());
        Ok(result)
    }
}

impl<T> fmt::Debug for SubList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubList")
            .field("offset", &self.window.offset)
            .field("size", &self.window.size.get())
            .field("expected_mod_count", &self.window.expected_mod_count.get())
            .finish()
    }
}

// --- Collection ---

impl<T> Collection<T> for SubList<T> {
    fn size(&self) -> Result<usize> {
        self.read(<[T]>::len)
    }

    fn contains(&self, item: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        self.read(|items| items.contains(item))
    }

    fn to_vec(&self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        self.read(<[T]>::to_vec)
    }
}

impl<T> MutableCollection<T> for SubList<T> {
    fn add(&mut self, item: T) -> Result<bool> {
        self.modify(|store, range| {
            store.insert(range.end, item);
            Ok(true)
        })
    }

    fn remove(&mut self, item: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        self.modify(|store, range| {
            let start = range.start;
            let found = store.slice(range).iter().position(|x| x == item);
            match found {
                Some(index) => {
                    store.remove(start + index);
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }

    fn add_all<C>(&mut self, other: &C) -> Result<bool>
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        let items = other.to_vec()?;
        self.modify(|store, range| Ok(store.insert_all(range.end, items)))
    }

    fn retain<F>(&mut self, keep: F) -> Result<bool>
    where
        F: FnMut(&T) -> bool,
    {
        self.modify(|store, range| Ok(store.retain_range(range, keep)))
    }

    fn clear(&mut self) -> Result<()> {
        self.modify(|store, range| {
            store.remove_range(range);
            Ok(())
        })
    }
}

// --- List ---

impl<T> List<T> for SubList<T> {
    type View = SubList<T>;

    fn get(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        self.read(|items| {
            check_index(index, items.len())?;
            Ok(items[index].clone())
        })?
    }

    fn set(&mut self, index: usize, item: T) -> Result<T> {
        self.modify(|store, range| {
            check_index(index, range.len())?;
            Ok(store.replace(range.start + index, item))
        })
    }

    fn index_of(&self, item: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        self.read(|items| items.iter().position(|x| x == item))
    }

    fn last_index_of(&self, item: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        self.read(|items| items.iter().rposition(|x| x == item))
    }

    fn sub_list(&self, from: usize, to: usize) -> Result<SubList<T>> {
        let size = self.size()?;
        check_range(from, to, size)?;
        tracing::trace!(from, to, parent_offset = self.window.offset, "nested sub-list created");
        Ok(SubList {
            root: self.root.clone(),
            window: Rc::new(Window {
                parent: Some(self.window.clone()),
                offset: self.window.offset + from,
                size: Cell::new(to - from),
                expected_mod_count: Cell::new(self.window.expected_mod_count.get()),
            }),
        })
    }
}

impl<T> MutableList<T> for SubList<T> {
    fn insert_at(&mut self, index: usize, item: T) -> Result<()> {
        self.modify(|store, range| {
            check_position(index, range.len())?;
            store.insert(range.start + index, item);
            Ok(())
        })
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        self.modify(|store, range| {
            check_index(index, range.len())?;
            Ok(store.remove(range.start + index))
        })
    }
}

#[cfg(test)]
#[path = "sub_list_test.rs"]
mod sub_list_test;
