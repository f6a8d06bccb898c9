use std::collections::HashSet;

use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeContent {
    pub description: String,
    pub key_points: Vec<String>,
    pub quote: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TreeNode {
    pub id: String,
    pub label: String,
    pub content: NodeContent,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Read-only content tree the galaxy is drawn from.
///
/// Identifiers are expected to be unique across the whole tree. That is not
/// enforced: [`ContentTree::duplicate_ids`] reports violations and lookups
/// keep returning the first pre-order match.
#[derive(Clone, Debug)]
pub struct ContentTree {
    root: TreeNode,
}

impl ContentTree {
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn node_count(&self) -> usize {
        self.pre_order().len()
    }

    pub fn max_depth(&self) -> usize {
        self.pre_order()
            .into_iter()
            .map(|(depth, _)| depth)
            .max()
            .unwrap_or(0)
    }

    /// Nodes in pre-order together with their depth, siblings in content order.
    pub fn pre_order(&self) -> Vec<(usize, &TreeNode)> {
        let mut ordered = Vec::new();
        let mut stack = vec![(0usize, &self.root)];

        while let Some((depth, node)) = stack.pop() {
            ordered.push((depth, node));
            for child in node.children.iter().rev() {
                stack.push((depth + 1, child));
            }
        }

        ordered
    }

    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {
            if node.id == id {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }

        None
    }

    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();

        for (_depth, node) in self.pre_order() {
            if !seen.insert(node.id.as_str()) && !duplicates.contains(&node.id.as_str()) {
                duplicates.push(node.id.as_str());
            }
        }

        duplicates
    }
}
