//! Storage shared between a [`Vector`](crate::Vector) and its views.
//!
//! Operations take absolute positions in the buffer. Every structural change
//! bumps `mod_count` exactly once, which is what views compare against.

use alloc::{rc::Rc, vec::Vec};
use core::{cell::RefCell, ops::Range};

use seqview_raw_buffer::Buffer;

pub(crate) type SharedStore<T> = Rc<RefCell<Store<T>>>;

pub(crate) struct Store<T> {
    buffer: Buffer<T>,
    mod_count: u64,
}

impl<T> Store<T> {
    pub(crate) fn new(buffer: Buffer<T>) -> Self {
        Self {
            buffer,
            mod_count: 0,
        }
    }

    pub(crate) fn shared(buffer: Buffer<T>) -> SharedStore<T> {
        Rc::new(RefCell::new(Self::new(buffer)))
    }

    #[inline]
    pub(crate) fn mod_count(&self) -> u64 {
        self.mod_count
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn buffer(&self) -> &Buffer<T> {
        &self.buffer
    }

    /// Capacity changes are not structural.
    pub(crate) fn buffer_mut(&mut self) -> &mut Buffer<T> {
        &mut self.buffer
    }

    #[inline]
    pub(crate) fn slice(&self, range: Range<usize>) -> &[T] {
        &self.buffer.as_slice()[range]
    }

    pub(crate) fn replace(&mut self, index: usize, item: T) -> T {
        self.buffer.replace(index, item)
    }

    pub(crate) fn push(&mut self, item: T) {
        self.buffer.push(item);
        self.mod_count += 1;
    }

    pub(crate) fn insert(&mut self, index: usize, item: T) {
        self.buffer.insert(index, item);
        self.mod_count += 1;
    }

    /// Returns `false` without touching the count when `items` is empty.
    pub(crate) fn insert_all(&mut self, index: usize, items: Vec<T>) -> bool {
        if items.is_empty() {
            return false;
        }
        self.buffer.insert_all(index, items);
        self.mod_count += 1;
        true
    }

    pub(crate) fn remove(&mut self, index: usize) -> T {
        let item = self.buffer.remove(index);
        self.mod_count += 1;
        item
    }

    pub(crate) fn remove_range(&mut self, range: Range<usize>) {
        self.buffer.remove_range(range);
        self.mod_count += 1;
    }

    /// Returns `true` if anything was removed.
    pub(crate) fn retain_range<F>(&mut self, range: Range<usize>, keep: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        // Bumped up front so views go stale even if `keep` panics halfway.
        let before = self.mod_count;
        self.mod_count += 1;
        let removed = self.buffer.retain_range(range, keep);
        if removed == 0 {
            self.mod_count = before;
        }
        removed > 0
    }
}
