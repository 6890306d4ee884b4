//! Errors returned by list operations.

use thiserror::Error;

/// Failure of a [`Collection`](crate::Collection) or [`List`](crate::List) operation.
///
/// Every failure is reported synchronously; nothing is clamped or retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A position outside the bounds allowed by the operation.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A malformed range, such as `from > to` for a sub-list.
    #[error("illegal range: from {from} is greater than to {to}")]
    IllegalArgument { from: usize, to: usize },

    /// The backing list was structurally modified by something other than
    /// this view. The view stays unusable from then on.
    #[error("backing list was structurally modified outside this view")]
    ConcurrentModification,

    /// The owning vector has been dropped.
    #[error("backing list no longer exists")]
    Detached,
}

/// Result alias used throughout the crate.
pub type Result<T, E = ListError> = core::result::Result<T, E>;

/// Checks `index < len`, the precondition of positional reads, writes and removals.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(ListError::IndexOutOfRange { index, len })
    }
}

/// Checks `index <= len`, the precondition of insertion.
#[inline]
pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(ListError::IndexOutOfRange { index, len })
    }
}

/// Checks `from <= to <= len`, the precondition of `sub_list`.
pub(crate) fn check_range(from: usize, to: usize, len: usize) -> Result<()> {
    if from > to {
        return Err(ListError::IllegalArgument { from, to });
    }
    check_position(to, len)
}
