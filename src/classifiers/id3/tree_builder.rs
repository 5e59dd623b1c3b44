use crate::classifiers::id3::nodes::{Subtree, TreeNode};
use crate::classifiers::id3::split_selector::choose_best_split;
use crate::core::table::ColumnTable;

/// Learns the whole tree for a table: a root split when some attribute gains,
/// otherwise a single root-level leaf over the full label distribution.
pub fn learn_tree(table: &ColumnTable) -> Subtree {
    match choose_best_split(table) {
        Some(skeleton) => Subtree::Split(construct(skeleton, table)),
        None => Subtree::Leaf(table.label_distribution()),
    }
}

/// Recursively expands a node skeleton over its table subset.
///
/// For each edge the records carrying that value are carved out with the
/// split attribute's column removed, so an attribute is used at most once
/// along any path and the recursion depth is bounded by the attribute count.
/// Edges whose sub-table yields no further gain keep their leaf.
pub fn construct(mut node: TreeNode, table: &ColumnTable) -> TreeNode {
    if table.row_count() == 0 || !table.has_attributes() {
        return node;
    }

    let attribute = node.attribute().to_string();
    for edge in node.edges_mut() {
        let subset = table.partition(&attribute, edge.value());
        if let Some(skeleton) = choose_best_split(&subset) {
            edge.attach(construct(skeleton, &subset));
        }
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::{AttributeColumn, ColumnTable};
    use crate::readers::SyntheticCarGenerator;
    use crate::testing::tables::{
        constant_attributes_table, pure_split_table, redundant_attribute_table, two_level_table,
    };
    use std::collections::HashMap;

    #[test]
    fn perfect_split_builds_two_leaves() {
        let tree = learn_tree(&pure_split_table());
        let Subtree::Split(root) = &tree else {
            panic!("expected a root split");
        };
        assert_eq!(root.attribute(), "price");
        assert_eq!(root.edges().len(), 2);
        assert!(
            root.edges()
                .iter()
                .all(|edge| matches!(edge.subtree(), Subtree::Leaf(_)))
        );
    }

    #[test]
    fn no_gain_at_the_root_resolves_to_a_single_leaf() {
        let tree = learn_tree(&constant_attributes_table());
        let Subtree::Leaf(distribution) = &tree else {
            panic!("expected a root leaf");
        };
        assert_eq!(distribution.count("acc"), 2);
        assert_eq!(distribution.count("unacc"), 2);
    }

    #[test]
    fn nested_split_consumes_one_attribute_per_level() {
        let tree = learn_tree(&two_level_table());
        let Subtree::Split(root) = &tree else {
            panic!("expected a root split");
        };
        assert_eq!(root.attribute(), "safety");

        let high = root.edges().iter().find(|edge| edge.value() == "high").unwrap();
        let Subtree::Split(child) = high.subtree() else {
            panic!("safety = high splits again on price");
        };
        assert_eq!(child.attribute(), "price");
        assert!(
            child
                .edges()
                .iter()
                .all(|edge| matches!(edge.subtree(), Subtree::Leaf(_)))
        );

        let low = root.edges().iter().find(|edge| edge.value() == "low").unwrap();
        assert!(matches!(low.subtree(), Subtree::Leaf(_)));
    }

    #[test]
    fn useless_attribute_does_not_extend_the_tree() {
        let tree = learn_tree(&redundant_attribute_table());
        let Subtree::Split(root) = &tree else {
            panic!("expected a root split");
        };
        assert_eq!(root.attribute(), "safety");
        assert!(
            root.edges()
                .iter()
                .all(|edge| matches!(edge.subtree(), Subtree::Leaf(_)))
        );
    }

    #[test]
    fn leaf_totals_hold_at_every_node() {
        let tree = learn_tree(&two_level_table());
        assert_eq!(tree.leaf_label_totals().total(), 4);

        let Subtree::Split(root) = &tree else {
            panic!("expected a root split");
        };
        for edge in root.edges() {
            assert_eq!(edge.subtree().leaf_label_totals().total(), 2);
        }
    }

    #[test]
    fn leaf_totals_match_row_counts_on_generated_tables() {
        let table = SyntheticCarGenerator::new(200, 7).generate();
        let tree = learn_tree(&table);
        assert_eq!(tree.leaf_label_totals().total(), table.row_count() as u64);
    }

    #[test]
    fn classify_follows_edges_to_the_majority_label() {
        let tree = learn_tree(&two_level_table());

        let record: HashMap<String, String> = [
            ("safety".to_string(), "high".to_string()),
            ("price".to_string(), "low".to_string()),
        ]
        .into();
        assert_eq!(tree.classify(&record), Some(vec!["acc"]));

        let unseen: HashMap<String, String> =
            [("safety".to_string(), "medium".to_string())].into();
        assert_eq!(tree.classify(&unseen), None);
    }

    #[test]
    fn construct_leaves_the_node_untouched_without_attributes() {
        let skeleton = choose_best_split(&pure_split_table()).unwrap();
        let bare = ColumnTable::new(
            Vec::new(),
            AttributeColumn::new("label", vec!["acc".to_string()]),
        )
        .unwrap();

        let untouched = construct(skeleton.clone(), &bare);
        assert_eq!(untouched, skeleton);
    }
}
