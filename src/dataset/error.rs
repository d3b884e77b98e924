use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("File is empty.")]
    Empty,

    #[error("File must include a header row and at least one data row.")]
    MissingRows,

    #[error("Provide at least two columns with headers.")]
    TooFewColumns,

    #[error(
        "Upload limit exceeded: Only {max} row(s) are supported per file. Split the dataset before re-uploading."
    )]
    TooManyRows { max: usize },

    #[error("{0}")]
    NoNumericRows(String),

    #[error("Unable to build a feature matrix from the selected variables.")]
    NoFeatures,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
