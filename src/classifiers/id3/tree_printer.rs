use crate::classifiers::id3::nodes::{Subtree, TreeNode};

/// Renders the tree as tab-indented text, depth-first in construction order.
///
/// One tab per depth level, printed before the line's content. A node prints
/// its split attribute's name, then one `" | attribute = value --> "` line
/// per edge at the node's own depth; a leaf prints one level deeper as its
/// majority label, tied labels `/`-joined in distribution-encounter order.
pub fn render_tree(tree: &Subtree) -> String {
    let mut out = String::new();
    render_subtree(&mut out, 0, tree);
    out
}

/// Writes [`render_tree`]'s output to standard output.
pub fn print_tree(tree: &Subtree) {
    print!("{}", render_tree(tree));
}

fn render_subtree(out: &mut String, depth: usize, tree: &Subtree) {
    match tree {
        Subtree::Leaf(distribution) => {
            indent(out, depth);
            out.push_str(&distribution.majority_labels().join("/"));
            out.push('\n');
        }
        Subtree::Split(node) => render_node(out, depth, node),
    }
}

fn render_node(out: &mut String, depth: usize, node: &TreeNode) {
    indent(out, depth);
    out.push_str(node.attribute());
    out.push('\n');

    for edge in node.edges() {
        indent(out, depth);
        out.push_str(&format!(" | {} = {} --> \n", node.attribute(), edge.value()));
        render_subtree(out, depth + 1, edge.subtree());
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::id3::tree_builder::learn_tree;
    use crate::testing::tables::{pure_split_table, table_of, tied_leaf_table, two_level_table};

    #[test]
    fn flat_tree_renders_without_nesting() {
        let expected = concat!(
            "price\n",
            " | price = low --> \n",
            "\tacc\n",
            " | price = high --> \n",
            "\tunacc\n",
        );
        assert_eq!(render_tree(&learn_tree(&pure_split_table())), expected);
    }

    #[test]
    fn nested_tree_indents_one_tab_per_level() {
        let expected = concat!(
            "safety\n",
            " | safety = low --> \n",
            "\tunacc\n",
            " | safety = high --> \n",
            "\tprice\n",
            "\t | price = low --> \n",
            "\t\tacc\n",
            "\t | price = high --> \n",
            "\t\tunacc\n",
        );
        assert_eq!(render_tree(&learn_tree(&two_level_table())), expected);
    }

    #[test]
    fn root_leaf_prints_every_tied_majority_label() {
        let rendered = render_tree(&learn_tree(&tied_leaf_table()));
        assert_eq!(rendered, "acc/unacc\n");
    }

    #[test]
    fn tied_edge_leaf_joins_labels_in_encounter_order() {
        let table = table_of(
            vec![("safety", vec!["low", "low", "high", "high"])],
            vec!["unacc", "unacc", "acc", "unacc"],
        );
        let expected = concat!(
            "safety\n",
            " | safety = low --> \n",
            "\tunacc\n",
            " | safety = high --> \n",
            "\tacc/unacc\n",
        );
        assert_eq!(render_tree(&learn_tree(&table)), expected);
    }
}
