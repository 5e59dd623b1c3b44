use crate::classifiers::id3::nodes::TreeNode;
use crate::core::LabelDistribution;
use std::collections::HashMap;

/// Outgoing edge of a [`TreeNode`], labelled with one distinct value of the
/// node's split attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEdge {
    value: String,
    subtree: Subtree,
}

/// What hangs below an edge, or stands as the whole tree: a resolved leaf
/// carrying its label distribution, or a further split.
#[derive(Debug, Clone, PartialEq)]
pub enum Subtree {
    Leaf(LabelDistribution),
    Split(TreeNode),
}

impl TreeEdge {
    /// Edge that terminates in a leaf holding `distribution`.
    pub fn leaf<V: Into<String>>(value: V, distribution: LabelDistribution) -> Self {
        Self {
            value: value.into(),
            subtree: Subtree::Leaf(distribution),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn subtree(&self) -> &Subtree {
        &self.subtree
    }

    /// Replaces the leaf with a constructed child node. Called at most once
    /// per edge, during tree construction.
    pub(crate) fn attach(&mut self, child: TreeNode) {
        self.subtree = Subtree::Split(child);
    }
}

impl Subtree {
    /// Merged label counts of every leaf reachable from here. For any subtree
    /// the total equals the number of records it was built from.
    pub fn leaf_label_totals(&self) -> LabelDistribution {
        match self {
            Subtree::Leaf(distribution) => distribution.clone(),
            Subtree::Split(node) => {
                let mut totals = LabelDistribution::new();
                for edge in node.edges() {
                    totals.merge(&edge.subtree().leaf_label_totals());
                }
                totals
            }
        }
    }

    /// Follows the record's attribute values down to a leaf. `None` when a
    /// node's attribute is missing from the record or carries a value never
    /// seen during construction.
    pub fn leaf_for(&self, record: &HashMap<String, String>) -> Option<&LabelDistribution> {
        match self {
            Subtree::Leaf(distribution) => Some(distribution),
            Subtree::Split(node) => {
                let value = record.get(node.attribute())?;
                let edge = node
                    .edges()
                    .iter()
                    .find(|edge| edge.value() == value.as_str())?;
                edge.subtree().leaf_for(record)
            }
        }
    }

    /// Majority label(s) of the leaf the record lands on.
    pub fn classify(&self, record: &HashMap<String, String>) -> Option<Vec<&str>> {
        self.leaf_for(record).map(LabelDistribution::majority_labels)
    }
}
