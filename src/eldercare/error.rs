use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareError {
    #[error("No record with ID {0} found.")]
    RecordNotFound(u32),

    #[error("No record IDs left to issue.")]
    IdsExhausted,

    #[error("Empty query.")]
    EmptyQuery,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CareError>;
