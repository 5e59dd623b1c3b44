mod tree_edge;
mod tree_node;

pub use tree_edge::{Subtree, TreeEdge};
pub use tree_node::TreeNode;
