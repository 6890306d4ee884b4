//! seqview - Ordered lists with live sub-list views
//!
//! # Overview
//!
//! `seqview` provides a growable, contiguous [`Vector`] and [`SubList`] views
//! that alias a range of it. Writes through a view land in the vector and
//! writes to the vector are visible through the view. When the vector is
//! structurally changed by any path other than the view, the view reports
//! [`ListError::ConcurrentModification`] instead of silently reading shifted
//! data.
//!
//! # Quick Start
//!
//! ```
//! use seqview::{Collection, List, ListError, MutableCollection, MutableList, Vector};
//!
//! let mut v: Vector<i32> = (0..6).collect();
//!
//! // Views translate indices into the vector's index space.
//! let mut middle = v.sub_list(2, 4)?;
//! assert_eq!(middle.get(0)?, 2);
//!
//! // Structural changes through the view resize it and keep it valid.
//! middle.add(42)?;
//! assert_eq!(v.to_vec()?, [0, 1, 2, 3, 42, 4, 5]);
//! assert_eq!(middle.size()?, 3);
//!
//! // A change made directly to the vector invalidates the view for good.
//! v.remove_at(0)?;
//! assert_eq!(middle.get(0), Err(ListError::ConcurrentModification));
//! # Ok::<(), ListError>(())
//! ```
//!
//! # Capabilities
//!
//! The contract is split across four traits so that read-only collections
//! cannot be asked to grow:
//!
//! 1. [`Collection`]: size, membership, copying out, equality
//! 2. [`MutableCollection`]: add, remove, bulk add/remove/retain, clear
//! 3. [`List`]: positional get/set, search, sub-lists
//! 4. [`MutableList`]: positional insert and remove
//!
//! Slices, arrays and `Vec` implement [`Collection`], so they can be passed to
//! bulk operations and compared with [`Collection::equals`].

pub use seqview_core::{
    Collection, List, ListError, MutableCollection, MutableList, Result, SubList, Vector,
};
pub use seqview_core::{sub_list, traits, vector};
