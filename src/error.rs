use thiserror::Error;

/// Fatal errors for the read -> parse -> aggregate -> write pipeline.
/// Any of these aborts the run; nothing is partially emitted.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("data error: {0}")]
    Data(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Row-local failure while deriving a grouping key. Never propagated:
/// the row is logged and falls into the undefined key bucket.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("grouping field `{field}` is not a column of the table")]
pub struct RowKeyError {
    pub field: String,
}
