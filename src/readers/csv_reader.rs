use crate::core::table::{AttributeColumn, ColumnTable};
use crate::readers::ReaderError;
use crate::utils::file_parsing::split_record_line;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Attribute order of the car evaluation record format; the label is the
/// trailing seventh field.
pub const CAR_ATTRIBUTE_NAMES: [&str; 6] =
    ["price", "maint", "doors", "persons", "lug_boot", "safety"];

pub const LABEL_COLUMN_NAME: &str = "label";

/// Loads headerless comma-delimited record files into a [`ColumnTable`].
///
/// Fields come in a fixed order, the last one being the class label. Every
/// record must carry exactly one field per column; a mismatch aborts the load
/// with the offending line number rather than truncating the table. Blank
/// lines are skipped.
pub struct CsvTableReader {
    path: PathBuf,
    attribute_names: Vec<String>,
}

impl CsvTableReader {
    pub fn new<P: AsRef<Path>>(path: P, attribute_names: Vec<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            attribute_names,
        }
    }

    /// Reader for the car evaluation format:
    /// `price,maint,doors,persons,lug_boot,safety,label`.
    pub fn car_evaluation<P: AsRef<Path>>(path: P) -> Self {
        Self::new(
            path,
            CAR_ATTRIBUTE_NAMES.iter().map(|name| name.to_string()).collect(),
        )
    }

    pub fn read(&self) -> Result<ColumnTable, ReaderError> {
        let file = File::open(&self.path)?;
        let expected = self.attribute_names.len() + 1;

        let mut columns: Vec<Vec<String>> = vec![Vec::new(); self.attribute_names.len()];
        let mut labels: Vec<String> = Vec::new();

        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let fields = split_record_line(&line);
            if fields.len() != expected {
                return Err(ReaderError::MalformedRecord {
                    path: self.path.clone(),
                    line: number + 1,
                    expected,
                    found: fields.len(),
                });
            }
            if let Some((label, attribute_values)) = fields.split_last() {
                for (column, value) in columns.iter_mut().zip(attribute_values) {
                    column.push(value.clone());
                }
                labels.push(label.clone());
            }
        }

        if labels.is_empty() {
            return Err(ReaderError::EmptyTable {
                path: self.path.clone(),
            });
        }

        let attributes = self
            .attribute_names
            .iter()
            .zip(columns)
            .map(|(name, values)| AttributeColumn::new(name.clone(), values))
            .collect();
        Ok(ColumnTable::from_aligned(
            attributes,
            AttributeColumn::new(LABEL_COLUMN_NAME, labels),
        ))
    }
}
