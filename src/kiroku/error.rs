use thiserror::Error;

/// Failure taxonomy for the persistence subsystem.
///
/// `Validation` is the caller's fault and is never retried here; the other
/// variants are server-side faults surfaced verbatim to the request layer.
/// Retry policy, if any, belongs to the caller.
#[derive(Error, Debug)]
pub enum KirokuError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Backup failed: {0}")]
    Backup(#[source] std::io::Error),

    #[error("Store write failed: {0}")]
    Write(#[source] std::io::Error),

    #[error("Store read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KirokuError>;
