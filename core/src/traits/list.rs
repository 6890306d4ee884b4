use crate::Result;

use super::{Collection, MutableCollection};

/// Positional access to an ordered collection.
///
/// Includes `set`, which replaces a value without changing the number or
/// order of elements, so fixed-size lists can implement it too.
pub trait List<T>: Collection<T> {
    /// The view type returned by [`List::sub_list`].
    type View: MutableList<T>;

    /// Returns a copy of the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`](crate::ListError::IndexOutOfRange) if
    /// `index >= size`.
    fn get(&self, index: usize) -> Result<T>
    where
        T: Clone;

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`](crate::ListError::IndexOutOfRange) if
    /// `index >= size`.
    fn set(&mut self, index: usize, item: T) -> Result<T>;

    /// Position of the first element equal to `item`.
    fn index_of(&self, item: &T) -> Result<Option<usize>>
    where
        T: PartialEq;

    /// Position of the last element equal to `item`.
    fn last_index_of(&self, item: &T) -> Result<Option<usize>>
    where
        T: PartialEq;

    /// A view of `[from, to)` backed by this list.
    ///
    /// Changes made through the view show up in this list and the other way
    /// around. A structural change made to the backing list by any other path
    /// makes the view fail with
    /// [`ListError::ConcurrentModification`](crate::ListError::ConcurrentModification).
    ///
    /// # Errors
    ///
    /// [`ListError::IllegalArgument`](crate::ListError::IllegalArgument) if
    /// `from > to`, [`ListError::IndexOutOfRange`](crate::ListError::IndexOutOfRange)
    /// if `to > size`.
    fn sub_list(&self, from: usize, to: usize) -> Result<Self::View>;
}

/// A list whose length can change.
pub trait MutableList<T>: List<T> + MutableCollection<T> {
    /// Inserts `item` at `index`, moving later elements one position up.
    /// `index == size` appends.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`](crate::ListError::IndexOutOfRange) if
    /// `index > size`.
    fn insert_at(&mut self, index: usize, item: T) -> Result<()>;

    /// Removes and returns the element at `index`, moving later elements one
    /// position down.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`](crate::ListError::IndexOutOfRange) if
    /// `index >= size`.
    fn remove_at(&mut self, index: usize) -> Result<T>;
}
