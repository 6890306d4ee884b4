//! A growable list that owns its storage.
//!
//! # Example
//!
//! ```
//! use seqview_core::{Collection, List, MutableCollection, MutableList, Vector};
//!
//! let mut v = Vector::from([1, 2, 4]);
//! v.insert_at(2, 3)?;
//! v.add(5)?;
//! assert_eq!(v.to_vec()?, [1, 2, 3, 4, 5]);
//! assert_eq!(v.remove_at(0)?, 1);
//! assert_eq!(v.index_of(&4)?, Some(2));
//! # Ok::<(), seqview_core::ListError>(())
//! ```

use alloc::{rc::Rc, vec::Vec};
use core::fmt;

use seqview_raw_buffer::Buffer;

use crate::{
    Collection, List, MutableCollection, MutableList, Result, SubList,
    error::{check_index, check_position, check_range},
    store::{SharedStore, Store},
};

/// Growable list backed by a contiguous buffer.
///
/// The vector is the only strong owner of its storage. Views created by
/// [`List::sub_list`] hold a weak reference plus a snapshot of the
/// modification count, so they never keep the storage alive and notice when
/// it changes under them.
pub struct Vector<T> {
    store: SharedStore<T>,
}

impl<T> Vector<T> {
    pub fn new() -> Self {
        Self::from_buffer(Buffer::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_buffer(Buffer::with_capacity(capacity))
    }

    fn from_buffer(buffer: Buffer<T>) -> Self {
        Self {
            store: Store::shared(buffer),
        }
    }

    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.store.borrow().buffer().capacity()
    }

    /// Makes room for at least `additional` more elements. Not a structural
    /// change: outstanding views stay valid.
    pub fn reserve(&mut self, additional: usize) {
        self.store.borrow_mut().buffer_mut().reserve(additional);
    }

    /// Releases unused capacity. Not a structural change.
    pub fn shrink_to_fit(&mut self) {
        self.store.borrow_mut().buffer_mut().shrink_to_fit();
    }

    /// Appends `item`. Infallible form of [`MutableCollection::add`].
    pub fn push(&mut self, item: T) {
        self.store.borrow_mut().push(item);
    }

    /// Runs `f` over the elements without copying them.
    ///
    /// Views of this vector can still be read inside `f`, but mutating one
    /// fails with [`ListError::ConcurrentModification`](crate::ListError::ConcurrentModification).
    pub fn with_slice<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(self.store.borrow().buffer().as_slice())
    }

    #[cfg(test)]
    pub(crate) fn mod_count(&self) -> u64 {
        self.store.borrow().mod_count()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy with a fresh modification count; views of `self` do not follow.
impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self::from_buffer(self.store.borrow().buffer().clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_slice(|items| f.debug_list().entries(items).finish())
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.with_slice(|a| other.with_slice(|b| a == b))
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_buffer(Buffer::from(items))
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for Vector<T> {
    /// Appends everything as one structural change.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let items: Vec<T> = iter.into_iter().collect();
        let mut store = self.store.borrow_mut();
        let end = store.len();
        store.insert_all(end, items);
    }
}

// --- Collection ---

impl<T> Collection<T> for Vector<T> {
    fn size(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn contains(&self, item: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(self.with_slice(|items| items.contains(item)))
    }

    fn to_vec(&self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        Ok(self.with_slice(<[T]>::to_vec))
    }
}

impl<T> MutableCollection<T> for Vector<T> {
    fn add(&mut self, item: T) -> Result<bool> {
        self.push(item);
        Ok(true)
    }

    fn remove(&mut self, item: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        let mut store = self.store.borrow_mut();
        let Some(index) = store.buffer().as_slice().iter().position(|x| x == item) else {
            return Ok(false);
        };
        store.remove(index);
        Ok(true)
    }

    fn add_all<C>(&mut self, other: &C) -> Result<bool>
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        let items = other.to_vec()?;
        let mut store = self.store.borrow_mut();
        let end = store.len();
        Ok(store.insert_all(end, items))
    }

    fn retain<F>(&mut self, keep: F) -> Result<bool>
    where
        F: FnMut(&T) -> bool,
    {
        let mut store = self.store.borrow_mut();
        let len = store.len();
        Ok(store.retain_range(0..len, keep))
    }

    fn clear(&mut self) -> Result<()> {
        let mut store = self.store.borrow_mut();
        let len = store.len();
        store.remove_range(0..len);
        Ok(())
    }
}

// --- List ---

impl<T> List<T> for Vector<T> {
    type View = SubList<T>;

    fn get(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        self.with_slice(|items| {
            check_index(index, items.len())?;
            Ok(items[index].clone())
        })
    }

    fn set(&mut self, index: usize, item: T) -> Result<T> {
        let mut store = self.store.borrow_mut();
        check_index(index, store.len())?;
        Ok(store.replace(index, item))
    }

    fn index_of(&self, item: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        Ok(self.with_slice(|items| items.iter().position(|x| x == item)))
    }

    fn last_index_of(&self, item: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        Ok(self.with_slice(|items| items.iter().rposition(|x| x == item)))
    }

    fn sub_list(&self, from: usize, to: usize) -> Result<SubList<T>> {
        let store = self.store.borrow();
        check_range(from, to, store.len())?;
        tracing::trace!(from, to, "sub-list created");
        Ok(SubList::new(
            Rc::downgrade(&self.store),
            from,
            to - from,
            store.mod_count(),
        ))
    }
}

impl<T> MutableList<T> for Vector<T> {
    fn insert_at(&mut self, index: usize, item: T) -> Result<()> {
        let mut store = self.store.borrow_mut();
        check_position(index, store.len())?;
        store.insert(index, item);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        let mut store = self.store.borrow_mut();
        check_index(index, store.len())?;
        Ok(store.remove(index))
    }
}

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;
