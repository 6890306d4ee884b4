#![allow(unsafe_code)]

//! Buffer: the raw storage underneath `seqview` lists.
//!
//! `Buffer<T>` is a contiguous, growable region of element slots with a logical
//! length. It only knows how to grow, shrink on request, and move runs of
//! elements to open or close gaps. Index validation and list semantics live in
//! `seqview-core`; methods here assert their preconditions and panic on misuse.
//!
//! ```text
//! Buffer<T>:  ptr ──▶ [ T | T | T | ... | uninit | uninit ]
//!                     └──── len ────────┘
//!                     └────────────── cap ───────────────┘
//! ```
//!
//! Growth policy: when `len` would exceed `cap`, the new capacity is
//! `max(required, 2 * cap, 4)`. A run of N pushes therefore copies O(N)
//! elements in total.
//!
//! # Example
//!
//! ```
//! use seqview_raw_buffer::Buffer;
//!
//! let mut buf = Buffer::new();
//! buf.push(1);
//! buf.push(3);
//! buf.insert(1, 2);
//! assert_eq!(buf.as_slice(), &[1, 2, 3]);
//! assert_eq!(buf.remove(0), 1);
//! assert_eq!(buf.capacity(), 4);
//! ```

#![no_std]

extern crate alloc;

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use alloc::vec::Vec;
use core::{
    fmt,
    marker::PhantomData,
    mem,
    ops::Range,
    ptr::{self, NonNull},
    slice,
};

/// Smallest capacity allocated once a buffer stops being empty.
pub const MIN_NON_ZERO_CAP: usize = 4;

/// Owned, contiguous, growable storage.
///
/// Slots `[0, len)` hold initialized values; `[len, cap)` are never read.
pub struct Buffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

static_assertions::assert_eq_size!(Buffer<u8>, [usize; 3]);
static_assertions::assert_eq_size!(Buffer<u64>, [usize; 3]);

// SAFETY: Buffer owns its elements like Vec<T> does.
unsafe impl<T: Send> Send for Buffer<T> {}
unsafe impl<T: Sync> Sync for Buffer<T> {}

#[cold]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T> Buffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: if Self::IS_ZST { usize::MAX } else { 0 },
            len: 0,
            _marker: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Self::new();
        if capacity > buf.cap {
            buf.reallocate(capacity);
        }
        buf
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Guarantees `capacity() >= required`, growing geometrically.
    pub fn ensure_capacity(&mut self, required: usize) {
        if required <= self.cap {
            return;
        }
        let new_cap = required
            .max(self.cap.saturating_mul(2))
            .max(MIN_NON_ZERO_CAP);
        self.reallocate(new_cap);
    }

    /// Makes room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        let Some(required) = self.len.checked_add(additional) else {
            capacity_overflow()
        };
        self.ensure_capacity(required);
    }

    /// Releases unused capacity. This is the only way a buffer shrinks.
    pub fn shrink_to_fit(&mut self) {
        if Self::IS_ZST || self.cap == self.len {
            return;
        }
        if self.len == 0 {
            // SAFETY: cap > 0 here, so ptr came from `alloc` with this layout.
            unsafe { dealloc(self.ptr.as_ptr().cast(), Self::layout(self.cap)) };
            tracing::trace!(old_capacity = self.cap, new_capacity = 0, "buffer released");
            self.ptr = NonNull::dangling();
            self.cap = 0;
            return;
        }
        self.reallocate(self.len);
    }

    #[cold]
    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(!Self::IS_ZST);
        debug_assert!(new_cap >= self.len);
        let new_layout = Self::layout(new_cap);

        // Allocate, copy, and free old allocation
        let new_ptr = unsafe {
            let raw = alloc(new_layout).cast::<T>();
            let Some(new_ptr) = NonNull::new(raw) else {
                handle_alloc_error(new_layout)
            };
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            if self.cap > 0 {
                dealloc(self.ptr.as_ptr().cast(), Self::layout(self.cap));
            }
            new_ptr
        };

        tracing::trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            "buffer reallocated"
        );
        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    fn layout(cap: usize) -> Layout {
        match Layout::array::<T>(cap) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is initialized; ptr is non-null and aligned even when dangling.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and &mut self guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Stores `value` at `index`, returning what was there.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn replace(&mut self, index: usize, value: T) -> T {
        mem::replace(&mut self.as_mut_slice()[index], value)
    }

    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.reserve(1);
        }
        // SAFETY: len < cap after the reserve above.
        unsafe { ptr::write(self.ptr.as_ptr().add(self.len), value) };
        self.len += 1;
    }

    /// Inserts `value` at `index`, moving `[index, len)` one slot right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(index <= self.len, "insertion index out of bounds");
        self.reserve(1);
        unsafe {
            self.shift_right(index, 1);
            ptr::write(self.ptr.as_ptr().add(index), value);
        }
        self.len += 1;
    }

    /// Moves every element of `values` into the buffer starting at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert_all(&mut self, index: usize, mut values: Vec<T>) {
        assert!(index <= self.len, "insertion index out of bounds");
        let count = values.len();
        if count == 0 {
            return;
        }
        self.reserve(count);
        unsafe {
            self.shift_right(index, count);
            ptr::copy_nonoverlapping(values.as_ptr(), self.ptr.as_ptr().add(index), count);
            // Ownership moved into the buffer; `values` only frees its allocation.
            values.set_len(0);
        }
        self.len += count;
    }

    /// Removes and returns the element at `index`, moving `(index, len)` one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "removal index out of bounds");
        unsafe {
            let value = ptr::read(self.ptr.as_ptr().add(index));
            self.shift_left(index + 1, 1);
            self.len -= 1;
            value
        }
    }

    /// Drops the elements in `range` and closes the gap.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not within `[0, len]`.
    #[track_caller]
    pub fn remove_range(&mut self, range: Range<usize>) {
        let Range { start, end } = range;
        assert!(start <= end && end <= self.len, "range out of bounds");
        let tail = self.len - end;
        unsafe {
            // A panicking destructor leaks the tail instead of double-dropping it.
            self.len = start;
            let base = self.ptr.as_ptr();
            ptr::drop_in_place(slice::from_raw_parts_mut(base.add(start), end - start));
            ptr::copy(base.add(end), base.add(start), tail);
        }
        self.len = start + tail;
    }

    /// Keeps only the elements of `range` for which `keep` returns `true`.
    ///
    /// Elements outside `range` keep their relative order and are never passed
    /// to `keep`. Returns how many elements were removed.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not within `[0, len]`. If `keep` panics, the
    /// elements not yet visited stay in the buffer.
    #[track_caller]
    pub fn retain_range<F>(&mut self, range: Range<usize>, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let Range { start, end } = range;
        assert!(start <= end && end <= self.len, "range out of bounds");

        struct BackshiftOnDrop<'a, T> {
            buf: &'a mut Buffer<T>,
            processed: usize,
            deleted: usize,
            original_len: usize,
        }

        impl<T> Drop for BackshiftOnDrop<'_, T> {
            fn drop(&mut self) {
                if self.deleted > 0 {
                    // SAFETY: [processed, original_len) is still initialized and the
                    // `deleted` slots just before it were dropped or moved out.
                    unsafe {
                        let base = self.buf.ptr.as_ptr();
                        ptr::copy(
                            base.add(self.processed),
                            base.add(self.processed - self.deleted),
                            self.original_len - self.processed,
                        );
                    }
                }
                self.buf.len = self.original_len - self.deleted;
            }
        }

        let original_len = self.len;
        // Hide the region being compacted until the guard restores it.
        self.len = start;
        let mut guard = BackshiftOnDrop {
            buf: self,
            processed: start,
            deleted: 0,
            original_len,
        };

        while guard.processed < end {
            let base = guard.buf.ptr.as_ptr();
            // SAFETY: processed < end <= original_len, so the slot is initialized.
            let current = unsafe { base.add(guard.processed) };
            if !keep(unsafe { &*current }) {
                guard.processed += 1;
                guard.deleted += 1;
                unsafe { ptr::drop_in_place(current) };
                continue;
            }
            if guard.deleted > 0 {
                unsafe {
                    ptr::copy_nonoverlapping(current, base.add(guard.processed - guard.deleted), 1);
                }
            }
            guard.processed += 1;
        }

        guard.deleted
    }

    pub fn clear(&mut self) {
        let len = self.len;
        self.remove_range(0..len);
    }

    /// Moves `[from, len)` to `[from + count, len + count)`.
    ///
    /// # Safety
    ///
    /// `cap >= len + count`. The gap `[from, from + count)` holds stale bits
    /// and must be written before `len` is updated.
    unsafe fn shift_right(&mut self, from: usize, count: usize) {
        debug_assert!(self.len + count <= self.cap);
        unsafe {
            let base = self.ptr.as_ptr();
            ptr::copy(base.add(from), base.add(from + count), self.len - from);
        }
    }

    /// Moves `[from, len)` to `[from - count, len - count)`.
    ///
    /// # Safety
    ///
    /// The `count` slots before `from` must already be moved out or dropped.
    /// The caller updates `len`.
    unsafe fn shift_left(&mut self, from: usize, count: usize) {
        debug_assert!(count <= from && from <= self.len);
        unsafe {
            let base = self.ptr.as_ptr();
            ptr::copy(base.add(from), base.add(from - count), self.len - from);
        }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.cap);
        for value in self.as_slice() {
            out.push(value.clone());
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> From<Vec<T>> for Buffer<T> {
    fn from(values: Vec<T>) -> Self {
        let mut buf = Self::with_capacity(values.len());
        buf.insert_all(0, values);
        buf
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.as_mut_slice());
            if !Self::IS_ZST && self.cap > 0 {
                dealloc(self.ptr.as_ptr().cast(), Self::layout(self.cap));
            }
        }
    }
}
