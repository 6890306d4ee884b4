#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Ordered, growable lists with live sub-list views.
//!
//! [`Vector`] owns a contiguous buffer. [`SubList`] is a window into a vector
//! (or into another window) that reads and writes the vector's storage
//! directly and notices when the vector was changed behind its back.
//!
//! The contract is split by capability: [`Collection`] and [`List`] cover
//! reading and in-place replacement, [`MutableCollection`] and
//! [`MutableList`] add the operations that change the length.

// This works on std and no_std and is harmless.
extern crate alloc;

mod error;
mod store;
pub mod sub_list;
pub mod traits;
pub mod vector;

pub use error::{ListError, Result};
pub use sub_list::SubList;
pub use traits::{Collection, List, MutableCollection, MutableList};
pub use vector::Vector;
