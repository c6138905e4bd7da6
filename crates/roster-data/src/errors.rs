use std::path::PathBuf;

use thiserror::Error;

/// Failures while synthesizing record fields.
///
/// None of these occur with the standard vocabulary and the default year
/// ranges; they guard custom configurations.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid input: cannot pick from an empty vocabulary")]
    EmptyVocabulary,

    #[error("Invalid input: year range {start}..={end} is empty")]
    InvalidYearRange { start: i32, end: i32 },

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] time::error::ComponentRange),
}

/// Failures while writing a roster to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot create output file {}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}
