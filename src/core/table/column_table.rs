use crate::core::LabelDistribution;
use crate::core::table::AttributeColumn;
use std::io::{Error, ErrorKind};

/// Column-oriented table of categorical records: attribute columns in a fixed
/// canonical order plus one designated label column, all row-aligned.
///
/// Built once by a loader and never mutated afterwards; partitioning produces
/// fresh tables. The attribute order doubles as the canonical order in which
/// split candidates are evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTable {
    attributes: Vec<AttributeColumn>,
    labels: AttributeColumn,
}

impl ColumnTable {
    /// Validates that every column carries exactly one value per record.
    pub fn new(attributes: Vec<AttributeColumn>, labels: AttributeColumn) -> Result<Self, Error> {
        let rows = labels.len();
        for column in &attributes {
            if column.len() != rows {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!(
                        "attribute '{}' has {} values, label column has {}",
                        column.name(),
                        column.len(),
                        rows
                    ),
                ));
            }
        }
        Ok(Self { attributes, labels })
    }

    /// Constructor for callers that guarantee alignment themselves, such as
    /// `partition` and the record loaders.
    pub(crate) fn from_aligned(attributes: Vec<AttributeColumn>, labels: AttributeColumn) -> Self {
        debug_assert!(attributes.iter().all(|column| column.len() == labels.len()));
        Self { attributes, labels }
    }

    pub fn row_count(&self) -> usize {
        self.labels.len()
    }

    pub fn attributes(&self) -> &[AttributeColumn] {
        &self.attributes
    }

    pub fn labels(&self) -> &AttributeColumn {
        &self.labels
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeColumn> {
        self.attributes.iter().find(|column| column.name() == name)
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Label counts over every record, in encounter order.
    pub fn label_distribution(&self) -> LabelDistribution {
        LabelDistribution::from_labels(self.labels.values())
    }

    /// Sub-table of the records where `attribute` equals `value`, with that
    /// attribute's column removed from the schema.
    pub fn partition(&self, attribute: &str, value: &str) -> ColumnTable {
        let matching: Vec<usize> = self
            .attribute(attribute)
            .map(|column| {
                column
                    .values()
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| v.as_str() == value)
                    .map(|(index, _)| index)
                    .collect()
            })
            .unwrap_or_default();

        let attributes = self
            .attributes
            .iter()
            .filter(|column| column.name() != attribute)
            .map(|column| AttributeColumn::new(column.name(), select(column.values(), &matching)))
            .collect();
        let labels = AttributeColumn::new(self.labels.name(), select(self.labels.values(), &matching));
        ColumnTable::from_aligned(attributes, labels)
    }
}

fn select(values: &[String], indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&index| values[index].clone()).collect()
}
