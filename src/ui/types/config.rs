use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum_macros::{Display, EnumIter, EnumMessage, IntoStaticStr};

/// Full description of one run: where the records come from.
///
/// Serializes to a small JSON document so a run can be replayed from a file
/// instead of the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub source: SourceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
pub enum SourceConfig {
    CsvFile(CsvParameters),
    Synthetic(SyntheticParameters),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvParameters {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticParameters {
    pub rows: u64,
    pub seed: u64,
}

/// Wizard menu entries for the available record sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumMessage, IntoStaticStr)]
pub enum SourceKind {
    #[strum(
        message = "CSV file",
        detailed_message = "Read comma separated car records from disk."
    )]
    CsvFile,
    #[strum(
        message = "Synthetic",
        detailed_message = "Generate a seeded synthetic car evaluation table."
    )]
    Synthetic,
}
