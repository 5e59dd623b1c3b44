use crate::core::table::ColumnTable;
use crate::readers::{CsvTableReader, ReaderError, SyntheticCarGenerator};
use crate::ui::types::config::{RunConfig, SourceConfig};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Reader(#[from] ReaderError),
}

/// Materializes the configured record source into a column table.
pub fn build_table(config: &RunConfig) -> Result<ColumnTable, BuildError> {
    match &config.source {
        SourceConfig::CsvFile(params) => {
            Ok(CsvTableReader::car_evaluation(&params.path).read()?)
        }
        SourceConfig::Synthetic(params) => {
            if params.rows == 0 {
                return Err(BuildError::InvalidParameter("rows must be > 0".into()));
            }
            Ok(SyntheticCarGenerator::new(params.rows as usize, params.seed).generate())
        }
    }
}
