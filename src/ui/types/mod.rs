mod build;
mod config;

pub use build::{BuildError, build_table};
pub use config::{CsvParameters, RunConfig, SourceConfig, SourceKind, SyntheticParameters};
