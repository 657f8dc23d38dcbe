//! Tree nodes and the insert/search walks over them.
//!
//! Every walk here uses a cursor or an explicit stack, so chains of nested
//! words (`"a"`, `"aa"`, `"aaa"`, ...) of any depth stay off the call stack.

use std::string::String;
use std::vec::Vec;

use super::prefix::common_prefix_len;

/// A node in the radix tree.
///
/// Each node contains:
/// - The edge label consumed on the way from its parent (empty for the root).
/// - A terminal flag, set when the path spelled down to this node is a word.
/// - A list of children, sorted by the first `char` of each child's label.
///
/// Children are owned directly, so replacing a child during a split is a move.
///
/// Nodes are only built by [`RadixTree`](super::RadixTree):
///
/// ```compile_fail
/// let node = radix_index::Node::new();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Edge label relative to the parent.
    label: String,
    /// Whether the spelled path ending here was inserted.
    terminal: bool,
    /// Children nodes, sorted by the first char of their edge label.
    /// Maps `first_char` -> `node`.
    children: Vec<(char, Node)>,
}

impl Node {
    /// Creates the empty, non-terminal root.
    pub(crate) fn new() -> Self {
        Self::branch(String::new())
    }

    /// Creates a terminal leaf for the given (non-empty) label.
    fn leaf(label: &str) -> Self {
        debug_assert!(!label.is_empty(), "leaf labels are never empty");
        Self {
            label: label.to_owned(),
            terminal: true,
            children: Vec::new(),
        }
    }

    /// Creates a non-terminal intermediate node carrying `label`.
    fn branch(label: String) -> Self {
        Self {
            label,
            terminal: false,
            children: Vec::new(),
        }
    }

    /// The edge label consumed to reach this node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` if the spelled path ending at this node is a word.
    pub fn is_word(&self) -> bool {
        self.terminal
    }

    /// Iterates over `(first_char, child)` pairs in ascending char order.
    pub fn children(
        &self,
    ) -> impl DoubleEndedIterator<Item = (char, &Node)> + ExactSizeIterator + '_ {
        self.children.iter().map(|(c, n)| (*c, n))
    }

    /// Finds the child whose edge starts with `c`.
    pub fn get_child(&self, c: char) -> Option<&Node> {
        self.children
            .binary_search_by_key(&c, |&(k, _)| k)
            .ok()
            .map(|pos| &self.children[pos].1)
    }

    /// Returns the `index`-th child in char order.
    pub(crate) fn child_at(&self, index: usize) -> Option<&Node> {
        self.children.get(index).map(|(_, n)| n)
    }

    /// Adds a child under its first char, keeping the children sorted.
    fn add_child(&mut self, child: Node) {
        debug_assert!(!child.label.is_empty(), "child labels are never empty");
        if let Some(c) = child.label.chars().next() {
            match self.children.binary_search_by_key(&c, |&(k, _)| k) {
                Ok(pos) => self.children[pos] = (c, child),
                Err(pos) => self.children.insert(pos, (c, child)),
            }
        }
    }

    /// Places `word` below this node, where `word` is whatever is left of the
    /// word after the labels from the root down to (and including) this node.
    ///
    /// Returns `true` if the word was not present before.
    pub(crate) fn insert(&mut self, word: &str) -> bool {
        let mut node = self;
        let mut rest = word;
        loop {
            // The word ends exactly here.
            let Some(c) = rest.chars().next() else {
                #[cfg(feature = "tracing")]
                tracing::trace!(label = %node.label, fresh = !node.terminal, "mark terminal");
                return !core::mem::replace(&mut node.terminal, true);
            };

            let pos = match node.children.binary_search_by_key(&c, |&(k, _)| k) {
                Ok(pos) => pos,
                Err(pos) => {
                    // No overlap with any edge: attach the whole remainder as a leaf.
                    #[cfg(feature = "tracing")]
                    tracing::trace!(leaf = rest, "attach leaf");
                    node.children.insert(pos, (c, Node::leaf(rest)));
                    return true;
                }
            };

            let common = common_prefix_len(&node.children[pos].1.label, rest);
            rest = &rest[common..];
            if common == node.children[pos].1.label.len() {
                node = &mut node.children[pos].1;
                continue;
            }

            // The word diverges partway through the child's edge: split it.
            let slot = &mut node.children[pos].1;
            let mut old = core::mem::replace(slot, Node::new());
            let tail = old.label.split_off(common);
            let head = core::mem::replace(&mut old.label, tail);
            #[cfg(feature = "tracing")]
            tracing::trace!(head = %head, tail = %old.label, "split edge");

            let mut mid = Node::branch(head);
            mid.add_child(old);
            if rest.is_empty() {
                mid.terminal = true;
            } else {
                mid.add_child(Node::leaf(rest));
            }
            *slot = mid;
            return true;
        }
    }

    /// Returns `true` if `rest` spells a word below this node.
    pub(crate) fn contains(&self, rest: &str) -> bool {
        let mut node = self;
        let mut rest = rest;
        loop {
            let Some(c) = rest.chars().next() else {
                return node.terminal;
            };
            match node.get_child(c) {
                Some(child) if rest.starts_with(child.label.as_str()) => {
                    rest = &rest[child.label.len()..];
                    node = child;
                }
                _ => return false,
            }
        }
    }

    /// Finds the node whose subtree holds every word starting with `query`,
    /// together with the full string spelled down to that node.
    ///
    /// `query` may end partway through the returned node's edge.
    pub(crate) fn locate<'a>(&'a self, query: &str) -> Option<(&'a Node, String)> {
        let mut node = self;
        let mut spelled = String::with_capacity(query.len());
        let mut rest = query;
        loop {
            let Some(c) = rest.chars().next() else {
                return Some((node, spelled));
            };
            let child = node.get_child(c)?;
            let common = common_prefix_len(&child.label, rest);
            if common < child.label.len() && common < rest.len() {
                // The query diverges mid-edge.
                return None;
            }
            spelled.push_str(&child.label);
            rest = &rest[common..];
            node = child;
        }
    }

    /// Visits every word in this subtree. `buf` holds the string spelled down
    /// to, and including, this node and is restored before returning.
    pub(crate) fn for_each_word<F>(&self, buf: &mut String, f: &mut F)
    where
        F: FnMut(&str),
    {
        // Same (node, action) scheme as `Iter`: 0 visits the node itself,
        // n > 0 descends into child n - 1.
        let mut stack: Vec<(&Node, usize)> = vec![(self, 0)];
        while let Some(last) = stack.len().checked_sub(1) {
            let (node, action) = stack[last];
            stack[last].1 += 1;

            if action == 0 {
                if node.terminal {
                    f(buf);
                }
            } else if let Some(child) = node.child_at(action - 1) {
                buf.push_str(&child.label);
                stack.push((child, 0));
            } else {
                stack.pop();
                if !stack.is_empty() {
                    buf.truncate(buf.len() - node.label.len());
                }
            }
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub(crate) fn count_nodes(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter().map(|(_, n)| n));
        }
        count
    }

    /// Checks the structural invariants of this subtree, treating `self` as
    /// the root, and returns the number of terminal nodes found.
    pub(crate) fn check(&self) -> Result<usize, String> {
        let mut words = 0;
        let mut path = String::new();
        let mut stack: Vec<(&Node, usize)> = vec![(self, 0)];
        while let Some(last) = stack.len().checked_sub(1) {
            let (node, action) = stack[last];
            stack[last].1 += 1;

            if action == 0 {
                if last > 0 {
                    if node.label.is_empty() {
                        return Err(format!("empty edge label below {path:?}"));
                    }
                    if !node.terminal && node.children.len() < 2 {
                        return Err(format!(
                            "non-word node {path:?} has {} child(ren)",
                            node.children.len()
                        ));
                    }
                }
                words += usize::from(node.terminal);

                for (key, child) in &node.children {
                    if child.label.chars().next() != Some(*key) {
                        return Err(format!(
                            "child key {key:?} under {path:?} does not match label {:?}",
                            child.label
                        ));
                    }
                }
                if node.children.windows(2).any(|w| w[0].0 >= w[1].0) {
                    return Err(format!("children of {path:?} are not strictly ordered"));
                }
            } else if let Some(child) = node.child_at(action - 1) {
                path.push_str(&child.label);
                stack.push((child, 0));
            } else {
                stack.pop();
                if !stack.is_empty() {
                    path.truncate(path.len() - node.label.len());
                }
            }
        }
        Ok(words)
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Unlink descendants onto a heap stack so each one drops childless.
        let mut stack: Vec<Node> = self.children.drain(..).map(|(_, n)| n).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain(..).map(|(_, n)| n));
        }
    }
}
