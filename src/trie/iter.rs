//! Depth-first word iterator.

use std::string::String;
use std::vec::Vec;

use super::node::Node;

/// Iterator over the words of a [`RadixTree`](super::RadixTree).
///
/// Yields owned `String`s in ascending `char` order. The walk is depth-first
/// over an explicit stack, so deep trees do not recurse.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    // Stack of (node, action): action 0 means "yield the word here",
    // action n > 0 means "descend into child n - 1 next".
    stack: Vec<(&'a Node, usize)>,
    // Current spelled string
    key_buf: String,
    remaining: usize,
}

impl<'a> Iter<'a> {
    /// Starts a walk at `root`, which holds `len` words.
    pub(crate) fn new(root: &'a Node, len: usize) -> Self {
        Self {
            stack: vec![(root, 0)],
            key_buf: String::from(root.label()),
            remaining: len,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let last = self.stack.len().checked_sub(1)?;
            let (node, action) = self.stack[last];

            if action == 0 {
                self.stack[last].1 += 1;
                if node.is_word() {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(self.key_buf.clone());
                }
                continue;
            }

            if let Some(child) = node.child_at(action - 1) {
                self.stack[last].1 += 1;
                self.key_buf.push_str(child.label());
                self.stack.push((child, 0));
            } else {
                // Done with this node.
                self.stack.pop();
                if !self.stack.is_empty() {
                    let new_len = self.key_buf.len() - node.label().len();
                    self.key_buf.truncate(new_len);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl core::iter::FusedIterator for Iter<'_> {}
