//! Serializable view of the tree's shape, for inspection and debugging.
//!
//! Snapshots are one-way: they are meant to be printed or diffed, not loaded
//! back into a tree.

use serde::Serialize;

use super::node::Node;

/// A detached copy of one node and its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    /// Edge label from the parent.
    pub label: String,
    /// Whether the path ending here is a word.
    pub is_word: bool,
    /// Children in ascending char order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl From<&Node> for NodeSnapshot {
    fn from(node: &Node) -> Self {
        Self {
            label: node.label().to_owned(),
            is_word: node.is_word(),
            children: node.children().map(|(_, child)| Self::from(child)).collect(),
        }
    }
}

impl NodeSnapshot {
    /// Nesting depth of the deepest node, counting the snapshot root as 0.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RadixTree;
    use serde_json::json;

    #[test]
    fn test_snapshot_shape() {
        let tree: RadixTree = ["rubens", "ruber", "rub"].into_iter().collect();
        let snap = tree.snapshot();

        assert_eq!(snap.label, "");
        assert!(!snap.is_word);
        assert_eq!(snap.depth(), 3);

        let rub = &snap.children[0];
        assert_eq!(rub.label, "rub");
        assert!(rub.is_word);
        assert_eq!(rub.children[0].label, "e");
        assert_eq!(rub.children[0].children.len(), 2);
    }

    #[test]
    fn test_snapshot_json_skips_empty_children() {
        let tree: RadixTree = ["ab", "ac"].into_iter().collect();
        assert_eq!(
            tree.to_json(),
            json!({
                "label": "",
                "is_word": false,
                "children": [{
                    "label": "a",
                    "is_word": false,
                    "children": [
                        { "label": "b", "is_word": true },
                        { "label": "c", "is_word": true }
                    ]
                }]
            })
        );
    }
}
