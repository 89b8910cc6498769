use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown staff role: {0}")]
    UnknownRole(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
