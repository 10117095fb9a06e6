use thiserror::Error;

/// Failure talking to the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("store answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed document: {0}")]
    Decode(String),
}

/// The one error kind the loader records. Kept as plain data so it can live
/// in a cloneable state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {message}")]
pub struct FetchFailure {
    pub operation: &'static str,
    pub message: String,
}

impl FetchFailure {
    pub fn new(operation: &'static str, err: &StoreError) -> Self {
        Self {
            operation,
            message: err.to_string(),
        }
    }
}
