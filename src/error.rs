use thiserror::Error;

#[derive(Debug, Error)]
pub enum MdfError {
    #[error("Invalid {kind} handle: the record reference is null")]
    InvalidHandle {
        kind: &'static str,
    },

    #[error("Invalid file handling")]
    IOError(#[from] std::io::Error),

    #[error("Snapshot serialization error: {0}")]
    SerializationError(String),
}
