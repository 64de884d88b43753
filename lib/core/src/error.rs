use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown record kind: {0}")]
    UnknownRecordKind(String),

    #[error("Unknown relationship: {0}")]
    UnknownRelationship(String),

    #[error("Field '{field}' has no weight configured for {kind}")]
    UnweightedField { kind: String, field: String },

    #[error("Search query cannot be empty")]
    EmptyQuery,

    #[error("Dataset unavailable: {0}")]
    DatasetUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
