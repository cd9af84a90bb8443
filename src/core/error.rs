use thiserror::Error;

/// Failures surfaced by storage backends and the expense store.
///
/// Looking up an unknown id is not an error; those operations return `false`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed expense data: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("expense {id} has a non-finite amount")]
    NonFiniteAmount { id: String },
    #[error("failed to serialize expenses: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored value is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("storage backend error: {0}")]
    Backend(#[from] fjall::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
