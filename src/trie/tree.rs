//! The public [`RadixTree`] set type.

use core::fmt;
use std::string::String;
use std::vec::Vec;

use super::iter::Iter;
use super::node::Node;
use super::snapshot::NodeSnapshot;
use crate::error::{Result, TrieError};

/// A compressed prefix tree holding a set of strings.
///
/// Chains of single-child nodes are merged into one edge with a multi-char
/// label, and every node keeps at most one child per distinct first char.
///
/// The tree is a plain owned value: mutation needs `&mut self`, and searches
/// keep their match buffers on the caller's stack, so shared `&self` searches
/// can run from several threads at once.
///
/// Insertion, search, iteration, [`print`](Self::print),
/// [`check_invariants`](Self::check_invariants) and drop walk the tree with a
/// cursor or a heap stack, so their depth is bounded only by memory. The
/// derived `Clone`, `PartialEq` and `Debug` impls and [`snapshot`](Self::snapshot)
/// recurse once per level and are meant for trees of ordinary depth.
///
/// # Example
///
/// ```rust
/// use radix_index::RadixTree;
///
/// let mut tree = RadixTree::new();
/// for word in ["romane", "romanus", "romulus", "rubens"] {
///     tree.insert(word).unwrap();
/// }
///
/// assert_eq!(tree.search("rom"), ["romane", "romanus", "romulus"]);
/// assert!(tree.search("xyz").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixTree {
    /// Root node; its edge label is always empty and it is never a word.
    root: Node,
    /// Number of distinct words.
    len: usize,
}

impl RadixTree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            len: 0,
        }
    }

    /// Returns the number of distinct words in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        self.root = Node::new();
        self.len = 0;
    }

    /// The root node, for read-only inspection of the structure.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Inserts a word.
    ///
    /// Returns `Ok(true)` if the word is new and `Ok(false)` if it was
    /// already present, in which case the tree is unchanged.
    ///
    /// # Errors
    /// Returns [`TrieError::InvalidInput`] if `word` is empty.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        if word.is_empty() {
            return Err(TrieError::InvalidInput {
                reason: "cannot insert an empty word",
            });
        }
        let inserted = self.root.insert(word);
        if inserted {
            self.len += 1;
        }
        Ok(inserted)
    }

    /// Returns `true` if `word` was inserted.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.root.contains(word)
    }

    /// Returns `true` if at least one word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        !self.is_empty() && self.root.locate(prefix).is_some()
    }

    /// Returns every word that starts with `prefix`.
    ///
    /// The empty prefix matches every word. Results currently come back in
    /// ascending char order, but callers should not rely on any ordering.
    pub fn search(&self, prefix: &str) -> Vec<String> {
        let mut matches = Vec::new();
        self.for_each_with_prefix(prefix, |word| matches.push(word.to_owned()));
        #[cfg(feature = "tracing")]
        tracing::debug!(prefix, matches = matches.len(), "search");
        matches
    }

    /// Calls `f` for every word that starts with `prefix`.
    ///
    /// A single key buffer is reused across the walk, so no allocation
    /// happens per word.
    pub fn for_each_with_prefix<F>(&self, prefix: &str, mut f: F)
    where
        F: FnMut(&str),
    {
        if let Some((node, mut spelled)) = self.root.locate(prefix) {
            node.for_each_word(&mut spelled, &mut f);
        }
    }

    /// Iterates over every word in ascending char order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root, self.len)
    }

    /// Renders the tree for debugging: one line per node, indented by depth,
    /// with `*` after labels that end a word. The format is not stable.
    pub fn print(&self) -> String {
        self.to_string()
    }

    /// Takes a serializable copy of the tree's structure.
    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot::from(&self.root)
    }

    /// The structural snapshot as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        // Serializing plain strings, bools and vecs into a `Value` cannot fail.
        serde_json::to_value(self.snapshot()).unwrap_or(serde_json::Value::Null)
    }

    /// Total number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Verifies the structural invariants of the whole tree.
    ///
    /// Checks that each child key equals the first char of the child's label,
    /// that siblings are strictly ordered (so no two share a first char),
    /// that no edge below the root is empty, that every non-word node below
    /// the root branches, and that the number of word nodes equals `len()`.
    ///
    /// # Errors
    /// Returns a description of the first violation found.
    pub fn check_invariants(&self) -> core::result::Result<(), String> {
        if !self.root.label().is_empty() {
            return Err("root has a non-empty label".to_owned());
        }
        if self.root.is_word() {
            return Err("root is marked as a word".to_owned());
        }
        let words = self.root.check()?;
        if words != self.len {
            return Err(format!("found {words} words, expected {}", self.len));
        }
        Ok(())
    }
}

impl Default for RadixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RadixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "(root)")?;
        // Pre-order: children are pushed in reverse so the smallest pops first.
        let mut stack: Vec<(&Node, usize)> =
            self.root.children().rev().map(|(_, n)| (n, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            write!(f, "{:indent$}{}", "", node.label(), indent = depth * 2)?;
            if node.is_word() {
                f.write_str(" *")?;
            }
            writeln!(f)?;
            stack.extend(node.children().rev().map(|(_, n)| (n, depth + 1)));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RadixTree {
    type Item = String;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> Extend<S> for RadixTree {
    /// Inserts every non-empty word; empty strings are skipped.
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            match self.insert(word.as_ref()) {
                Ok(_) | Err(TrieError::InvalidInput { .. }) => {}
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for RadixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: [&str; 7] = [
        "romane",
        "romanus",
        "romulus",
        "rubens",
        "ruber",
        "rubicon",
        "rubicundus",
    ];

    #[test]
    fn test_radix_tree_basic() {
        let mut tree = RadixTree::new();
        assert!(tree.is_empty());

        assert_eq!(tree.insert("hello"), Ok(true));
        assert_eq!(tree.insert("helium"), Ok(true));
        assert_eq!(tree.insert("world"), Ok(true));
        assert_eq!(tree.len(), 3);

        assert!(tree.contains("hello"));
        assert!(tree.contains("helium"));
        assert!(!tree.contains("hel"));
        assert!(tree.starts_with("hel"));
        assert!(!tree.starts_with("hex"));

        assert_eq!(tree.insert("hello"), Ok(false));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_radix_tree_rejects_empty() {
        let mut tree = RadixTree::new();
        assert_eq!(
            tree.insert(""),
            Err(TrieError::InvalidInput {
                reason: "cannot insert an empty word"
            })
        );
        assert!(tree.is_empty());
        assert!(!tree.contains(""));
    }

    #[test]
    fn test_radix_tree_print() {
        let tree: RadixTree = ["romane", "romulus", "rom"].into_iter().collect();
        assert_eq!(tree.print(), "(root)\n  rom *\n    ane *\n    ulus *\n");
    }

    #[test]
    fn test_radix_tree_iter_order() {
        let tree: RadixTree = CORPUS.iter().rev().collect();
        let words: Vec<String> = tree.iter().collect();
        assert_eq!(words, CORPUS);
        assert_eq!(tree.iter().len(), 7);
    }

    #[test]
    fn test_radix_tree_for_each_reuses_buffer() {
        let tree: RadixTree = CORPUS.into_iter().collect();
        let mut total = 0;
        tree.for_each_with_prefix("rubic", |w| {
            assert!(w.starts_with("rubic"));
            total += 1;
        });
        assert_eq!(total, 2);
    }

    #[test]
    fn test_radix_tree_extend_skips_empty() {
        let mut tree = RadixTree::new();
        tree.extend(["", "ab", "", "ac", "ab"]);
        assert_eq!(tree.len(), 2);
        assert!(!tree.contains(""));
        assert_eq!(tree.search(""), ["ab", "ac"]);
        assert_eq!(tree.check_invariants(), Ok(()));

        let collected: RadixTree = [""].into_iter().collect();
        assert!(collected.is_empty());
        assert_eq!(collected, RadixTree::default());
    }

    #[test]
    fn test_radix_tree_clear() {
        let mut tree: RadixTree = CORPUS.into_iter().collect();
        assert_eq!(tree.len(), 7);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 1);
        assert!(tree.search("").is_empty());
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn test_radix_tree_invariants_hold() {
        let tree: RadixTree = CORPUS.into_iter().collect();
        assert_eq!(tree.check_invariants(), Ok(()));
        // root, r, om, an, e, us, ulus, ub, e, ns, r, ic, on, undus
        assert_eq!(tree.node_count(), 14);
    }
}
