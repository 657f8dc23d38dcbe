//! Radix tree (compressed prefix tree) over `str` keys.
//!
//! The tree owns its root node, and every node owns its children directly in
//! a small vector sorted by first `char`. Branch selection is a binary search
//! over at most one entry per distinct first char.

pub mod iter;
pub mod node;
pub mod prefix;
pub mod snapshot;
pub mod tree;

pub use iter::Iter;
pub use node::Node;
pub use prefix::{common_prefix, common_prefix_len};
pub use snapshot::NodeSnapshot;
pub use tree::RadixTree;
