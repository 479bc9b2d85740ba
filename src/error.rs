use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Data file not found: {0}")]
    SourceNotFound(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Unknown conceptual field: {0}")]
    UnknownConcept(String),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
