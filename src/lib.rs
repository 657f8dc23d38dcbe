//! # `radix-index` - In-Memory Prefix Index
//!
//! A compressed prefix tree (radix tree) for storing a set of strings and
//! retrieving every stored string that starts with a given prefix. Suitable
//! for autocomplete, symbol tables, or any dictionary looked up by prefix.
//!
//! ## Structure
//!
//! - **Edge compression**: runs of single-child nodes are collapsed into one
//!   edge carrying a multi-char label.
//! - **One child per first char**: each node's children are keyed by the
//!   first `char` of their label, so descending picks exactly one branch.
//! - **Owned tree**: the root owns its children transitively; splitting an
//!   edge moves the existing child under a new intermediate node.
//!
//! ## Concurrency
//!
//! All operations are synchronous. Insertion takes `&mut self`; searches take
//! `&self` and keep their result buffers local to the call, so concurrent
//! searches on a shared tree are sound.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for edge splits and searches.
//! - `cli`: build the `radix_demo` binary.
//!
//! ## Example
//!
//! ```rust
//! use radix_index::RadixTree;
//!
//! let tree: RadixTree = ["rubens", "ruber", "rubicon", "rubicundus"]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(tree.search("rubi"), ["rubicon", "rubicundus"]);
//! assert_eq!(tree.search("").len(), 4);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod trie;

pub use error::{Result, TrieError};
pub use trie::{common_prefix, Iter, Node, NodeSnapshot, RadixTree};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // A root-only tree is just an empty string, an empty vec, a flag and a counter.
    assert!(
        mem::size_of::<RadixTree>()
            <= mem::size_of::<String>() + mem::size_of::<Vec<(char, Node)>>() + 2 * mem::size_of::<usize>()
    );
};
