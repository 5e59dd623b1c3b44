use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{}: line {line}: expected {expected} fields, found {found}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{}: no records", .path.display())]
    EmptyTable { path: PathBuf },
}
