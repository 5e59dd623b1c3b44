use crate::core::table::{AttributeColumn, ColumnTable};

/// Builds a table from literal columns; the label column is always `label`.
pub fn table_of(columns: Vec<(&str, Vec<&str>)>, labels: Vec<&str>) -> ColumnTable {
    let attributes = columns
        .into_iter()
        .map(|(name, values)| {
            AttributeColumn::new(name, values.into_iter().map(str::to_string).collect())
        })
        .collect();
    let label_column =
        AttributeColumn::new("label", labels.into_iter().map(str::to_string).collect());
    ColumnTable::new(attributes, label_column).expect("columns are aligned")
}

/// One attribute splitting the labels perfectly.
pub fn pure_split_table() -> ColumnTable {
    table_of(
        vec![("price", vec!["low", "low", "high", "high"])],
        vec!["acc", "acc", "unacc", "unacc"],
    )
}

/// Every attribute constant while the labels differ: nothing gains.
pub fn constant_attributes_table() -> ColumnTable {
    table_of(
        vec![
            ("price", vec!["low", "low", "low", "low"]),
            ("safety", vec!["high", "high", "high", "high"]),
        ],
        vec!["acc", "unacc", "acc", "unacc"],
    )
}

/// Single constant attribute over evenly divided labels: resolves to one
/// leaf with a tied majority.
pub fn tied_leaf_table() -> ColumnTable {
    table_of(
        vec![("price", vec!["low", "low", "low", "low"])],
        vec!["acc", "unacc", "acc", "unacc"],
    )
}

/// `safety` and `price` tie on gain at the root; under `safety = high` the
/// `price` column still separates the labels, so the tree nests one level.
pub fn two_level_table() -> ColumnTable {
    table_of(
        vec![
            ("safety", vec!["low", "low", "high", "high"]),
            ("price", vec!["low", "high", "low", "high"]),
        ],
        vec!["unacc", "unacc", "acc", "unacc"],
    )
}

/// `safety` separates the labels perfectly while `doors` never helps: the
/// tree must stop at depth one even though `doors` stays available.
pub fn redundant_attribute_table() -> ColumnTable {
    table_of(
        vec![
            ("safety", vec!["low", "low", "high", "high"]),
            ("doors", vec!["2", "4", "2", "4"]),
        ],
        vec!["unacc", "unacc", "acc", "acc"],
    )
}
