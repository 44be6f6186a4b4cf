//! Hash and inline-vector aliases used across the model.

pub use rustc_hash::{FxHashMap, FxHashSet};

/// Inline storage for the names pulled in by one `from ... import` statement.
pub type SmallVec4<T> = smallvec::SmallVec<[T; 4]>;
