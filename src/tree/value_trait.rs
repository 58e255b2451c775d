use std::fmt::Debug;

/// Trait for types that can serve as the payload of a tree node.
///
/// This trait is automatically implemented for any type satisfying the
/// required bounds (`char`, `u8`, `&str`, etc.).
///
/// - `Debug`: debug printing of nodes and trees
///
/// Payloads are not required to be `Copy`: a node owns its value and drops it
/// after both of its subtrees have been released.
pub trait NodeValue: Debug {}

impl<T: Debug> NodeValue for T {}
