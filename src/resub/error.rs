use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResubError {
    #[error("Pattern not found: {0}")]
    PatternNotFound(String),

    #[error("Replacer not found: {0}")]
    ReplacerNotFound(String),

    #[error("Link not found: {0}")]
    LinkNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ResubError>;
