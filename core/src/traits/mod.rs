mod collection;
mod list;

pub use collection::{Collection, MutableCollection};
pub use list::{List, MutableList};
