use crate::classifiers::id3::entropy::compute_entropy;
use crate::classifiers::id3::nodes::{TreeEdge, TreeNode};
use crate::core::LabelDistribution;
use crate::core::table::{AttributeColumn, ColumnTable};

/// Picks the attribute with the strictly greatest information gain and builds
/// the node skeleton for it: one edge per distinct value of the winner, each
/// holding the label distribution of its matching records and no subtree yet.
///
/// Candidates are evaluated in table column order, and an equal gain never
/// replaces an earlier winner, so ties resolve to the first attribute in
/// canonical order. Returns `None` when no attribute yields positive gain,
/// including when no attribute column remains.
pub fn choose_best_split(table: &ColumnTable) -> Option<TreeNode> {
    let base_entropy = compute_entropy(&table.label_distribution());

    let mut best: Option<(f64, usize)> = None;
    for (index, column) in table.attributes().iter().enumerate() {
        let gain = base_entropy - post_split_entropy(column, table.labels());
        if gain > best.map_or(0.0, |(best_gain, _)| best_gain) {
            best = Some((gain, index));
        }
    }

    let (_, index) = best?;
    let column = &table.attributes()[index];
    let edges = group_labels_by_value(column, table.labels())
        .into_iter()
        .map(|(value, distribution)| TreeEdge::leaf(value, distribution))
        .collect();
    Some(TreeNode::new(column.name(), edges))
}

/// Information gain of splitting the table on `attribute`, or `None` if no
/// such attribute column exists.
pub fn information_gain(table: &ColumnTable, attribute: &str) -> Option<f64> {
    let column = table.attribute(attribute)?;
    let base_entropy = compute_entropy(&table.label_distribution());
    Some(base_entropy - post_split_entropy(column, table.labels()))
}

/// Entropy remaining after the split: each distinct value's label entropy
/// weighted by the fraction of records carrying that value.
fn post_split_entropy(column: &AttributeColumn, labels: &AttributeColumn) -> f64 {
    let total = column.len() as f64;
    group_labels_by_value(column, labels)
        .iter()
        .map(|(_, distribution)| {
            distribution.total() as f64 / total * compute_entropy(distribution)
        })
        .sum()
}

/// Label distribution per distinct value of `column`, groups in
/// first-encounter order of the values.
fn group_labels_by_value(
    column: &AttributeColumn,
    labels: &AttributeColumn,
) -> Vec<(String, LabelDistribution)> {
    let mut groups: Vec<(String, LabelDistribution)> = Vec::new();
    for (value, label) in column.values().iter().zip(labels.values()) {
        match groups.iter_mut().find(|(known, _)| known == value) {
            Some((_, distribution)) => distribution.observe(label),
            None => {
                let mut distribution = LabelDistribution::new();
                distribution.observe(label);
                groups.push((value.clone(), distribution));
            }
        }
    }
    groups
}
