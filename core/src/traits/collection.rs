use alloc::vec::Vec;

use crate::Result;

/// Read side of the collection contract.
///
/// Every method is fallible because views can go stale; owning collections
/// never fail here.
pub trait Collection<T> {
    /// Number of elements.
    fn size(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.size()? == 0)
    }

    fn contains(&self, item: &T) -> Result<bool>
    where
        T: PartialEq;

    /// Copies the elements into a fresh `Vec` that shares nothing with `self`.
    fn to_vec(&self) -> Result<Vec<T>>
    where
        T: Clone;

    /// Returns `true` if every element of `other` is present in `self`.
    fn contains_all<C>(&self, other: &C) -> Result<bool>
    where
        C: Collection<T> + ?Sized,
        T: Clone + PartialEq,
    {
        for item in other.to_vec()? {
            if !self.contains(&item)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Same length and pairwise-equal elements in iteration order.
    fn equals<C>(&self, other: &C) -> Result<bool>
    where
        C: Collection<T> + ?Sized,
        T: Clone + PartialEq,
    {
        if self.size()? != other.size()? {
            return Ok(false);
        }
        Ok(self.to_vec()? == other.to_vec()?)
    }
}

/// Structural mutation of a collection.
pub trait MutableCollection<T>: Collection<T> {
    /// Appends `item`. Duplicates are allowed, so this always returns `true`
    /// on success.
    fn add(&mut self, item: T) -> Result<bool>;

    /// Removes the first element equal to `item`.
    fn remove(&mut self, item: &T) -> Result<bool>
    where
        T: PartialEq;

    /// Appends every element of `other`, in order.
    ///
    /// `other` is copied before `self` changes, so it may be a view of `self`.
    fn add_all<C>(&mut self, other: &C) -> Result<bool>
    where
        C: Collection<T> + ?Sized,
        T: Clone;

    /// Keeps only the elements for which `keep` returns `true`.
    fn retain<F>(&mut self, keep: F) -> Result<bool>
    where
        F: FnMut(&T) -> bool;

    /// Removes every element that also appears in `other`.
    fn remove_all<C>(&mut self, other: &C) -> Result<bool>
    where
        C: Collection<T> + ?Sized,
        T: Clone + PartialEq,
    {
        let doomed = other.to_vec()?;
        self.retain(|item| !doomed.as_slice().contains(item))
    }

    /// Removes every element that does not appear in `other`.
    fn retain_all<C>(&mut self, other: &C) -> Result<bool>
    where
        C: Collection<T> + ?Sized,
        T: Clone + PartialEq,
    {
        let kept = other.to_vec()?;
        self.retain(|item| kept.as_slice().contains(item))
    }

    fn clear(&mut self) -> Result<()>;
}

// --- Plain slices as read-only collections ---

impl<T> Collection<T> for [T] {
    fn size(&self) -> Result<usize> {
        Ok(<[T]>::len(self))
    }

    fn contains(&self, item: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(<[T]>::contains(self, item))
    }

    fn to_vec(&self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        Ok(<[T]>::to_vec(self))
    }
}

impl<T, const N: usize> Collection<T> for [T; N] {
    fn size(&self) -> Result<usize> {
        Ok(N)
    }

    fn contains(&self, item: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(self.as_slice().contains(item))
    }

    fn to_vec(&self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        Ok(self.as_slice().to_vec())
    }
}

impl<T> Collection<T> for Vec<T> {
    fn size(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn contains(&self, item: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(self.as_slice().contains(item))
    }

    fn to_vec(&self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        Ok(self.clone())
    }
}
